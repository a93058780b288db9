//! Calendar SVG service library.
//!
//! Exposes the router, handler and server lifecycle so the binary and the
//! integration tests share one implementation.

pub mod config;
pub mod handlers;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use server::{build_router, CalendarServer, ServerError};
pub use state::AppState;
