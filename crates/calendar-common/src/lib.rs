//! Common types shared by the calendar widget renderer and the HTTP service.

pub mod color;
pub mod locale;
pub mod request;
pub mod time;

pub use color::{ColorKey, ColorScheme, UnknownColor};
pub use locale::{Chinese, DateInfo, English, Locale, LocaleNames};
pub use request::{RenderRequest, WidgetType};
pub use time::{days_between, parse_date, week_of_year, CalendarDate, DateParseError, OrNaN};
