//! Click events and per-element dispatch.

mod click;
mod dispatch;

pub use click::ClickEvent;
pub use dispatch::{ClickHandler, EventDispatcher};
