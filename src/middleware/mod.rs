// ABOUTME: HTTP middleware for request tracing, request IDs, and cross-origin access
// ABOUTME: Layers applied around every route of the recipe API

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing and correlation
pub use tracing::{create_request_span, with_request_tracing, MakeRequestUuid};
