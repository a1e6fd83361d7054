//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, request ID attached)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; no metrics endpoint in this service
//! - Request ID flows from the inbound header to the outbound call

pub mod logging;
