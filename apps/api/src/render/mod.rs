// Document rendering: resolved settings + resume content → PageTree.
// Pure data transformation; PDF painting is a downstream concern.

pub mod handlers;
pub mod page_tree;

pub use page_tree::{render_page, PageTree};
