//! Calendar widget request handler.
//!
//! Every request, whatever its method or path, is answered with an SVG
//! document. Malformed parameters degrade to defaults instead of errors.

use axum::{
    extract::{Extension, Query},
    http::header,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

use calendar_common::RenderRequest;
use widget_renderer::render_with;

use crate::state::AppState;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Any method, any path - render the widget described by the query string.
#[instrument(skip_all)]
pub async fn calendar_handler(
    Extension(state): Extension<Arc<AppState>>,
    query: Option<Query<Vec<(String, String)>>>,
) -> Response {
    let started = Instant::now();
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let request = RenderRequest::from_query_pairs(pairs);

    debug!(
        color = %request.color,
        date = ?request.date,
        locale = request.locale.as_str(),
        widget = %request.widget,
        "Rendering calendar widget"
    );

    let svg = render_with(&request, state.clock.as_ref());

    metrics::counter!("calendar_renders_total", "widget" => request.widget.tag()).increment(1);
    metrics::histogram!("calendar_render_duration_seconds")
        .record(started.elapsed().as_secs_f64());

    svg_response(svg)
}

/// Wrap SVG markup in a 200 response with caching disabled.
pub fn svg_response(svg: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
            (header::PRAGMA, "no-cache"),
        ],
        svg,
    )
        .into_response()
}
