//! SVG rendering for calendar widgets.
//!
//! Implements the widget layouts selectable by the `type` parameter:
//! - Calendar faces (month/day/weekday, year, month + year)
//! - Countdown to a date
//! - Percentage and number badges
//! - Week-of-year badge

pub mod clock;
pub mod layout;
pub mod template;
pub mod widgets;

pub use clock::{Clock, FixedClock, SystemClock};
pub use widgets::{render, render_with, WidgetContext};
