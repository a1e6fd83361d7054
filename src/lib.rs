//! PortFlow API Gateway Library
//!
//! Public HTTP surface for the PortFlow platform. Serves the API root and
//! forwards traffic-prediction requests to the internal prediction service,
//! relaying its JSON responses.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::PredictionClient;
