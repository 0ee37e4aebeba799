pub mod container;
pub mod title;

pub use container::locate_container;
pub use title::locate_title;
