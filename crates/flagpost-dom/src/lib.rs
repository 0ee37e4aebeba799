pub mod document;
pub mod node;
pub mod style;

pub use document::{ClickEvent, Document};
pub use markup5ever_rcdom::Handle;
