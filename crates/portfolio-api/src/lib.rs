//! # portfolio-api
//!
//! HTTP API layer for the portfolio backend built on Axum.
//!
//! Provides the REST endpoints, the bearer-token guard extractor, CORS and
//! request-logging middleware, DTOs, and error-to-response mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
