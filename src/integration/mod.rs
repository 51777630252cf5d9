//! Integration testing module
//!
//! End-to-end tests for the subtitle server:
//! - Full request flow through the router with in-memory collaborators
//! - HTTP status and JSON error mapping
//! - CORS behaviour

pub mod e2e;
pub mod fixtures;
