// Saved-styles persistence: a KvStore capability, the StyleStore collection
// logic on top of it, and the HTTP handlers.

pub mod handlers;
pub mod kv;
pub mod store;

pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use store::StyleStore;
