mod types;

pub use types::{EventTag, WidgetEvent};
