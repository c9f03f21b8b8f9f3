use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::traits::TransportResponse;

/// Options bag passed as the trailing keyword-style argument at a call site.
///
/// Ordered so that normalized bags serialize into request bodies
/// deterministically.
pub type ParameterBag = BTreeMap<String, ParamValue>;

/// A single request parameter value.
///
/// Timestamps stay typed until normalization rewrites them into the wire
/// string form; everything else is carried as opaque JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// UTC instant, rewritten to `YYYY-MM-DDTHH:MM:SSZ` by normalization
    DateTime(DateTime<Utc>),
    /// Nested parameter structure, normalized recursively
    Map(ParameterBag),
    /// Any other JSON scalar or array, passed through untouched
    Json(Value),
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            // Timestamps that skipped normalization still serialize in the
            // canonical wire form
            ParamValue::DateTime(instant) => {
                serializer.serialize_str(&crate::params::format_datetime(*instant))
            }
            ParamValue::Map(bag) => bag.serialize(serializer),
            ParamValue::Json(value) => value.serialize(serializer),
        }
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(instant: DateTime<Utc>) -> Self {
        ParamValue::DateTime(instant)
    }
}

impl From<ParameterBag> for ParamValue {
    fn from(bag: ParameterBag) -> Self {
        ParamValue::Map(bag)
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        ParamValue::Json(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Json(Value::from(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Json(Value::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Json(Value::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Json(Value::from(value))
    }
}

/// Parsed transport result: HTTP status code plus decoded body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    /// Create a new parsed response
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Check if the response indicates an error (non-2xx status code)
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }
}

impl TransportResponse for ApiResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn body(&self) -> &Value {
        &self.body
    }
}
