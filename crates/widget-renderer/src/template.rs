//! Shared SVG fragments for widget templates.

use calendar_common::ColorScheme;

/// Default sans-serif stack covering Latin and CJK text.
pub const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Noto Sans', 'Noto Sans CJK SC', 'Microsoft YaHei', sans-serif, 'Segoe UI', Roboto, 'Helvetica Neue', Arial";

/// Shorter stack used for header text on the countdown face.
pub const HEADER_FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, 'Noto Sans', 'Noto Sans CJK SC', 'Microsoft YaHei'";

/// Monospace-first stack for digits on badges.
pub const MONO_FONT_STACK: &str = "SFMono-Regular, Consolas, 'Liberation Mono', Menlo, monospace, -apple-system, BlinkMacSystemFont, 'Noto Sans', 'Noto Sans CJK SC', 'Microsoft YaHei', sans-serif, 'Segoe UI', Roboto, 'Helvetica Neue', Arial";

/// Body text color.
pub const TEXT_COLOR: &str = "#66757f";

/// Body (page) fill behind the text.
pub const PAGE_COLOR: &str = "#efefef";

/// Canvas family of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canvas {
    /// 512×512 square: calendar pages and the percentage badge
    Calendar,
    /// 508×506 number badges
    Badge,
}

impl Canvas {
    pub fn size(&self) -> (u32, u32) {
        match self {
            Canvas::Calendar => (512, 512),
            Canvas::Badge => (508, 506),
        }
    }

    pub fn view_box(&self) -> String {
        let (w, h) = self.size();
        format!("0 0 {} {}", w, h)
    }
}

/// Wrap widget markup in the root `<svg>` element for its canvas.
pub fn document(canvas: Canvas, body: &str) -> String {
    match canvas {
        Canvas::Calendar => format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" aria-label="Calendar" role="img" viewBox="{}" width="100%" height="100%">
{}</svg>
"#,
            canvas.view_box(),
            body
        ),
        Canvas::Badge => format!(
            r#"<svg width="100%" height="100%" viewBox="{}" version="1.1" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
{}</svg>
"#,
            canvas.view_box(),
            body
        ),
    }
}

/// Rounded page with the header band used by the calendar faces.
pub fn calendar_frame(scheme: &ColorScheme) -> String {
    format!(
        r#"    <path d="m512,455c0,32 -25,57 -57,57l-398,0c-32,0 -57,-25 -57,-57l0,-327c0,-31 25,-57 57,-57l398,0c32,0 57,26 57,57l0,327z" fill="{page}"/>
    <path d="m484,0l-47,0l-409,0c-15,0 -28,13 -28,28l0,157l512,0l0,-157c0,-15 -13,-28 -28,-28z" fill="{primary}"/>
"#,
        page = PAGE_COLOR,
        primary = scheme.primary
    )
}

/// Two rows of three binding dots on the right of the header band.
pub fn decorator_dots(scheme: &ColorScheme) -> String {
    let mut out = format!("    <g fill=\"{}\">\n", scheme.secondary);
    for cx in [462, 419, 376] {
        for cy in [136, 94] {
            out.push_str(&format!(
                "        <circle cx=\"{}\" cy=\"{}\" r=\"14\"/>\n",
                cx, cy
            ));
        }
    }
    out.push_str("    </g>\n");
    out
}

/// A pair of binding rings centred on the header band.
pub fn binding_rings(scheme: &ColorScheme, cy: f64, r: f64) -> String {
    format!(
        r#"    <g fill="{fill}">
        <circle cx="128" cy="{cy}" r="{r}"/>
        <circle cx="384" cy="{cy}" r="{r}"/>
    </g>
"#,
        fill = scheme.secondary,
        cy = cy,
        r = r
    )
}

/// Badge page, body text and header band.
///
/// `text` is the already-formatted `<text>` element.
pub fn badge_frame(scheme: &ColorScheme, text: &str) -> String {
    format!(
        r#"    <g stroke="none" stroke-width="1" fill="none" fill-rule="evenodd">
        <g transform="translate(0.000000, 2.000000)">
            <path d="M504,448.085714 C504,479.47619 479.390625,504 447.890625,504 L56.109375,504 C24.609375,504 0,479.47619 0,448.085714 L0,127.314286 C0,107.04127 0,87.9365079 0,70 L504,70 C504,87.9365079 504,107.04127 504,127.314286 L504,448.085714 Z" fill="{page}" fill-rule="nonzero"></path>
{text}            <path d="M476.4375,0 L430.171875,0 L27.5625,0 C12.796875,0 0,11.8976351 0,25.6256757 L0,75 L504,75 L504,25.6256757 C504,11.8976351 491.203125,0 476.4375,0 Z" fill="{primary}" fill-rule="nonzero"></path>
{rings}        </g>
    </g>
"#,
        page = PAGE_COLOR,
        text = text,
        primary = scheme.primary,
        rings = binding_rings(scheme, 37.5, 14.0)
    )
}
