//! Upstream prediction service client subsystem.
//!
//! # Data Flow
//! ```text
//! proxy handler (http/server.rs)
//!     → client.rs (build URL, one GET per inbound request)
//!     → prediction service (http://<base_url>/predictions/traffic)
//!     → 2xx: decoded JSON body, relayed verbatim
//!     → non-2xx / network failure: error.rs (uniform error shapes)
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound attempt per inbound request; no retries, no backoff
//! - Connect and total-request timeouts are always set; an unresponsive
//!   upstream surfaces as a transport error instead of hanging the handler
//! - Error display strings are part of the API contract and are asserted
//!   in the integration tests

pub mod client;
pub mod error;

pub use client::PredictionClient;
pub use error::UpstreamError;
