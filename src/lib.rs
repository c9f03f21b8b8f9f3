//! Error normalization and request parameter sanitization for an HTTP API
//! client.
//!
//! This crate is the pure core the transport layer calls into: it inspects
//! every parsed response and raises a typed [`ApiError`] carrying a
//! structured [`ErrorDetails`] payload when the response represents an error,
//! and it sanitizes outgoing parameters (flattening trailing option maps,
//! rewriting datetime values into the wire string format) before a request is
//! built. It performs no I/O of its own.

// Core modules
pub mod error;
pub mod types;

// Main functionality modules
pub mod params;
pub mod response;
pub mod validation;

// Seams to the transport layer
pub mod traits;

// Re-export main types for convenience
pub use error::{ApiError, ErrorDetails, ErrorKind, FieldError, Result};
pub use params::{extract_options, format_datetime, normalize_datetimes, DATETIME_WIRE_FORMAT};
pub use response::{classify, parse_response};
pub use traits::TransportResponse;
pub use types::{ApiResponse, ParamValue, ParameterBag};
