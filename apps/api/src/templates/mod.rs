// Template catalog, per-template defaults, and the style resolver.
// Registry lookups are pure; the resolver is the only writer of
// `ResolvedSettings`.

pub mod handlers;
pub mod registry;
pub mod resolver;

pub use registry::{LayoutVariant, TemplateId};
pub use resolver::{resolve, resolve_for};
