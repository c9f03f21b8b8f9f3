use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::types::{ParamValue, ParameterBag};

/// Wire format for datetime parameters: UTC, second precision, literal `Z`
pub const DATETIME_WIRE_FORMAT: &str = "%FT%TZ";

/// Format an instant in the API's wire form, e.g. `2000-01-01T20:15:01Z`
pub fn format_datetime(instant: DateTime<Utc>) -> String {
    instant.format(DATETIME_WIRE_FORMAT).to_string()
}

/// Pop a trailing options bag off a variadic argument list.
///
/// When the last argument is a map it becomes the options bag, otherwise an
/// empty bag is used. The bag comes back with its datetime values already
/// normalized. The argument list is consumed: its trailing element is removed
/// when it was the bag.
pub fn extract_options(args: &mut Vec<ParamValue>) -> ParameterBag {
    let mut options = match args.pop() {
        Some(ParamValue::Map(bag)) => bag,
        Some(other) => {
            args.push(other);
            ParameterBag::new()
        }
        None => ParameterBag::new(),
    };
    normalize_datetimes(&mut options);
    options
}

/// Rewrite every datetime value in `bag` to the wire string form, in place.
///
/// Nested maps are normalized recursively at any depth; all other values are
/// left untouched. Also usable as the root entry point for bags that were
/// never part of an argument list.
pub fn normalize_datetimes(bag: &mut ParameterBag) -> &mut ParameterBag {
    for value in bag.values_mut() {
        match value {
            ParamValue::DateTime(instant) => {
                let wire = format_datetime(*instant);
                *value = ParamValue::Json(Value::String(wire));
            }
            ParamValue::Map(nested) => {
                normalize_datetimes(nested);
            }
            ParamValue::Json(_) => {}
        }
    }
    bag
}
