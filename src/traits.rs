use serde_json::Value;

/// Seam between the transport layer and response classification.
///
/// The transport adapts whatever its HTTP client returns to this trait;
/// classification itself never performs network I/O.
pub trait TransportResponse {
    /// HTTP status code of the response
    fn status(&self) -> u16;

    /// Parsed response body
    fn body(&self) -> &Value;
}
