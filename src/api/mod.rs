//! HTTP API module for the CTC engine.
//!
//! This module exposes the salary breakdown over REST: a JSON result with
//! audit trace, a plain-text report, and the list of loaded scheme presets.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, SchemeListResponse};
pub use state::AppState;
