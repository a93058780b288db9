//! Widget layout generators and type dispatch.

mod badge;
mod calendar;
mod countdown;
mod week;

use chrono::NaiveDateTime;

use calendar_common::{
    CalendarDate, ColorKey, ColorScheme, Locale, LocaleNames, RenderRequest, WidgetType,
};

use crate::clock::{Clock, SystemClock};

pub use badge::{compact_number, number, percentage};
pub use calendar::{month_year, year, year_bottom, year_top};
pub use countdown::{countdown, CountdownState};
pub use week::week_of_year;

/// Everything a generator needs, resolved once per render.
#[derive(Debug, Clone, Copy)]
pub struct WidgetContext<'a> {
    pub scheme: ColorScheme,
    pub date: CalendarDate,
    pub now: NaiveDateTime,
    pub locale: Locale,
    pub content: &'a str,
}

impl<'a> WidgetContext<'a> {
    pub fn new(request: &'a RenderRequest, clock: &dyn Clock) -> Self {
        if request.color.parse::<ColorKey>().is_err() {
            tracing::debug!(color = %request.color, "Unknown color, using red");
        }

        let now = clock.now();
        Self {
            scheme: request.color_scheme(),
            date: CalendarDate::resolve(request.date.as_deref(), now),
            now,
            locale: request.locale,
            content: &request.content,
        }
    }

    pub fn names(&self) -> &'static dyn LocaleNames {
        self.locale.names()
    }
}

/// Render a request against the system clock.
pub fn render(request: &RenderRequest) -> String {
    render_with(request, &SystemClock)
}

/// Render a request with an explicit source of "now".
pub fn render_with(request: &RenderRequest, clock: &dyn Clock) -> String {
    let ctx = WidgetContext::new(request, clock);

    match request.widget {
        WidgetType::YearTop => year_top(&ctx),
        WidgetType::YearBottom => year_bottom(&ctx),
        WidgetType::MonthYear => month_year(&ctx),
        WidgetType::Year => year(&ctx),
        WidgetType::Countdown => countdown(&ctx),
        WidgetType::Percentage => percentage(&ctx),
        WidgetType::Number => number(&ctx),
        WidgetType::CompactNumber => compact_number(&ctx),
        WidgetType::WeekOfYear => week_of_year(&ctx),
    }
}
