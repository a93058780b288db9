//! Application state shared by request handlers.

use std::sync::Arc;

use widget_renderer::{Clock, SystemClock};

/// Shared application state.
///
/// Holds only the clock used to resolve "now"; rendering itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
