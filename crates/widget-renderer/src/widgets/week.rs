//! Week-of-year face (type 10).

use calendar_common::OrNaN;

use super::WidgetContext;
use crate::template::{calendar_frame, decorator_dots, document, Canvas, FONT_STACK, TEXT_COLOR};

/// Type 10: year in the header, week number with a locale suffix below.
pub fn week_of_year(ctx: &WidgetContext<'_>) -> String {
    let mut body = calendar_frame(&ctx.scheme);
    body.push_str(&decorator_dots(&ctx.scheme));
    body.push_str(&format!(
        r##"    <text id="month" x="32" y="150" fill="#fff" font-family="{font}" font-size="122px" style="text-anchor: left">{year}</text>
    <text id="day" x="256" y="400" fill="{color}" font-family="{font}" font-size="184px" style="text-anchor: middle">{week}{suffix}</text>
"##,
        font = FONT_STACK,
        color = TEXT_COLOR,
        year = OrNaN(ctx.date.year()),
        week = OrNaN(ctx.date.week_of_year()),
        suffix = ctx.names().week_suffix(),
    ));
    document(Canvas::Calendar, &body)
}
