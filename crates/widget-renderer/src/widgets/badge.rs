//! Free-text badges (types 7, 8 and 9).
//!
//! `content` is written into the text node as given.

use super::WidgetContext;
use crate::layout::{
    text_len, TextLayout, COMPACT_NUMBER_LAYOUT, NUMBER_LAYOUT, PERCENTAGE_FONT_SIZE,
    PERCENTAGE_TEXT_Y,
};
use crate::template::{badge_frame, document, Canvas, FONT_STACK, MONO_FONT_STACK};

fn badge(
    ctx: &WidgetContext<'_>,
    canvas: Canvas,
    font: &str,
    weight: &str,
    layout: TextLayout,
    text: &str,
) -> String {
    let text_node = format!(
        r##"            <text fill-rule="nonzero" font-family="{font}" font-size="{size}" font-weight="{weight}" x="256" y="{y}" line-spacing="237.714286" fill="#66757F" style="text-anchor: middle">
            {text}
            </text>
"##,
        font = font,
        size = layout.font_size,
        weight = weight,
        y = layout.y,
        text = text,
    );
    document(canvas, &badge_frame(&ctx.scheme, &text_node))
}

/// Type 7: content followed by `%`.
///
/// Drawn with the badge artwork but on the square 512×512 canvas.
pub fn percentage(ctx: &WidgetContext<'_>) -> String {
    let font_size = PERCENTAGE_FONT_SIZE.lookup(text_len(ctx.content));
    let text = if ctx.content.is_empty() {
        String::new()
    } else {
        format!("{}%", ctx.content)
    };
    badge(
        ctx,
        Canvas::Calendar,
        MONO_FONT_STACK,
        "400",
        TextLayout::new(font_size, PERCENTAGE_TEXT_Y),
        &text,
    )
}

/// Type 8: content as a large monospace number.
pub fn number(ctx: &WidgetContext<'_>) -> String {
    let layout = NUMBER_LAYOUT.lookup(text_len(ctx.content));
    badge(ctx, Canvas::Badge, MONO_FONT_STACK, "400", layout, ctx.content)
}

/// Type 9: content in the compact proportional style.
pub fn compact_number(ctx: &WidgetContext<'_>) -> String {
    let layout = COMPACT_NUMBER_LAYOUT.lookup(text_len(ctx.content));
    badge(ctx, Canvas::Badge, FONT_STACK, "206.857143", layout, ctx.content)
}
