//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the subtitles API
//! - Request handlers and JSON error responses
//! - CORS and request logging middleware

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
