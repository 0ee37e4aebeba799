pub mod widget;

pub use widget::{Widget, WidgetConfig};
