//! Calendar page faces (types 1, 3, 4 and 5).
//!
//! All four share the 512×512 page with a header band and decorator dots;
//! they differ only in which date fields fill the header and body lines.

use calendar_common::{DateInfo, OrNaN};

use super::WidgetContext;
use crate::template::{
    calendar_frame, decorator_dots, document, Canvas, FONT_STACK, HEADER_FONT_STACK, TEXT_COLOR,
};

/// Text lines of a calendar page.
struct PageText<'a> {
    font_stack: &'a str,
    header: String,
    header_y: u32,
    header_size: u32,
    body: String,
    body_size: u32,
    footer: String,
}

fn page(ctx: &WidgetContext<'_>, text: PageText<'_>) -> String {
    let mut body = calendar_frame(&ctx.scheme);
    body.push_str(&decorator_dots(&ctx.scheme));
    body.push_str(&format!(
        r##"    <text id="month" x="32" y="{header_y}" fill="#fff" font-family="{font}" font-size="{header_size}px" style="text-anchor: left">{header}</text>
    <text id="day" x="256" y="400" fill="{color}" font-family="{font}" font-size="{body_size}px" style="text-anchor: middle">{body}</text>
    <text id="weekday" x="256" y="480" fill="{color}" font-family="{font}" font-size="64px" style="text-anchor: middle">{footer}</text>
"##,
        header_y = text.header_y,
        header_size = text.header_size,
        header = text.header,
        body_size = text.body_size,
        body = text.body,
        footer = text.footer,
        color = TEXT_COLOR,
        font = text.font_stack,
    ));
    document(Canvas::Calendar, &body)
}

/// Type 1: month in the header, day number and weekday below.
pub fn year_top(ctx: &WidgetContext<'_>) -> String {
    let info = DateInfo::new(&ctx.date, ctx.locale);
    page(
        ctx,
        PageText {
            font_stack: HEADER_FONT_STACK,
            header: info.month.to_string(),
            header_y: 142,
            header_size: 100,
            body: info.day.to_string(),
            body_size: 256,
            footer: info.weekday.to_string(),
        },
    )
}

/// Type 3: month in the header, day number with the year underneath.
pub fn year_bottom(ctx: &WidgetContext<'_>) -> String {
    let info = DateInfo::new(&ctx.date, ctx.locale);
    page(
        ctx,
        PageText {
            font_stack: FONT_STACK,
            header: info.month.to_string(),
            header_y: 142,
            header_size: 100,
            body: info.day.to_string(),
            body_size: 256,
            footer: OrNaN(ctx.date.year()).to_string(),
        },
    )
}

/// Type 4: year in the header, month name in the body.
pub fn month_year(ctx: &WidgetContext<'_>) -> String {
    let info = DateInfo::new(&ctx.date, ctx.locale);
    page(
        ctx,
        PageText {
            font_stack: FONT_STACK,
            header: OrNaN(ctx.date.year()).to_string(),
            header_y: 150,
            header_size: 120,
            body: info.month.to_string(),
            body_size: 180,
            footer: String::new(),
        },
    )
}

/// Type 5: the year alone in the body.
pub fn year(ctx: &WidgetContext<'_>) -> String {
    page(
        ctx,
        PageText {
            font_stack: FONT_STACK,
            header: String::new(),
            header_y: 150,
            header_size: 122,
            body: OrNaN(ctx.date.year()).to_string(),
            body_size: 200,
            footer: String::new(),
        },
    )
}
