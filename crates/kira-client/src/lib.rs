//! HTTP client for the KIRA backend collaborators.
//!
//! The engine treats the backend as two request/response contracts: a health
//! check (`status` plus a per-service boolean map) and a chat message send
//! (`response` text plus a confidence). Both may fail; callers fall back to
//! default presentational state and surface the error string with a manual
//! retry action. No automatic retry policy is defined here.

mod client;
mod error;
mod types;

pub use client::BackendClient;
pub use error::ClientError;
pub use types::{service_display_name, service_status_label, ChatResponse, HealthResponse};
