use serde_json::{Map, Value};

use crate::error::{ApiError, ErrorDetails, ErrorKind, FieldError, Result};
use crate::traits::TransportResponse;

/// Application code the API uses to signal a rejected access token
const AUTHENTICATION_CODE: i64 = 124;

/// Inspect a parsed response body and raise a typed error when it carries one.
///
/// Bodies that are not JSON objects, or objects without a `code` key, are not
/// classifiable and are handed back unchanged. Otherwise the error kind is
/// selected by fixed priority: application code 124 outranks any HTTP status,
/// then the status table (400, 401, 403, 404, 409, 429, 500), then
/// [`ErrorKind::Generic`].
pub fn classify(body: &Value, http_status: u16) -> Result<&Value> {
    let fields = match body.as_object() {
        Some(object) if object.contains_key("code") => object,
        _ => return Ok(body),
    };

    let details = build_error_details(fields, http_status);
    let kind = match (details.code, http_status) {
        (Some(AUTHENTICATION_CODE), _) => ErrorKind::Authentication,
        (_, 400) => ErrorKind::BadRequest,
        (_, 401) => ErrorKind::Unauthorized,
        (_, 403) => ErrorKind::Forbidden,
        (_, 404) => ErrorKind::NotFound,
        (_, 409) => ErrorKind::Conflict,
        (_, 429) => ErrorKind::TooManyRequests,
        (_, 500) => ErrorKind::InternalServerError,
        _ => ErrorKind::Generic,
    };

    Err(ApiError::api(kind, details))
}

/// Classify a transport result and hand back its status code on success
pub fn parse_response<R: TransportResponse>(response: &R) -> Result<u16> {
    classify(response.body(), response.status())?;
    Ok(response.status())
}

fn build_error_details(fields: &Map<String, Value>, http_status: u16) -> ErrorDetails {
    ErrorDetails {
        message: fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned),
        code: fields.get("code").and_then(Value::as_i64),
        // Key presence decides whether the list survives into the payload;
        // an empty list is still present
        errors: fields
            .get("errors")
            .filter(|value| !value.is_null())
            .map(parse_field_errors),
        http_status_code: http_status,
    }
}

fn parse_field_errors(value: &Value) -> Vec<FieldError> {
    match value.as_array() {
        Some(entries) => entries
            .iter()
            .map(|entry| FieldError {
                field: entry
                    .get("field")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned(),
                message: entry
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned(),
            })
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiResponse;
    use serde_json::json;

    fn expect_kind(body: Value, http_status: u16, expected: ErrorKind) {
        let error = classify(&body, http_status).unwrap_err();
        assert_eq!(error.kind(), Some(expected));
    }

    #[test]
    fn test_authentication_code_outranks_http_status() {
        expect_kind(
            json!({"code": 124, "message": "Invalid access token"}),
            200,
            ErrorKind::Authentication,
        );
        // The application code dominates even when a status-table entry would match
        expect_kind(
            json!({"code": 124, "message": "Invalid access token"}),
            401,
            ErrorKind::Authentication,
        );
    }

    #[test]
    fn test_status_table_dispatch() {
        let table = [
            (400, ErrorKind::BadRequest),
            (401, ErrorKind::Unauthorized),
            (403, ErrorKind::Forbidden),
            (404, ErrorKind::NotFound),
            (409, ErrorKind::Conflict),
            (429, ErrorKind::TooManyRequests),
            (500, ErrorKind::InternalServerError),
        ];
        for (http_status, expected) in table {
            expect_kind(
                json!({"code": 3161, "message": "Not allowed"}),
                http_status,
                expected,
            );
        }
    }

    #[test]
    fn test_unmapped_status_falls_back_to_generic() {
        expect_kind(
            json!({"code": 180, "message": "Im a teapot"}),
            418,
            ErrorKind::Generic,
        );
        expect_kind(json!({"code": 180, "message": "Im a teapot"}), 200, ErrorKind::Generic);
    }

    #[test]
    fn test_body_without_code_key_is_returned_unchanged() {
        let body = json!({"id": 42, "topic": "standup"});
        assert_eq!(classify(&body, 200).unwrap(), &body);

        let empty = json!({});
        assert_eq!(classify(&empty, 500).unwrap(), &empty);
    }

    #[test]
    fn test_non_object_body_is_returned_unchanged() {
        let body = json!("xxx");
        assert_eq!(classify(&body, 400).unwrap(), &body);

        let body = json!([1, 2, 3]);
        assert_eq!(classify(&body, 400).unwrap(), &body);
    }

    #[test]
    fn test_null_code_value_still_classifies() {
        // The escape hatch checks key presence, not the value
        let error = classify(&json!({"code": null, "message": "odd"}), 400).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::BadRequest));
        assert_eq!(error.details().unwrap().code, None);
    }

    #[test]
    fn test_details_without_errors_list() {
        let body = json!({
            "code": 300,
            "message": "Request Body should be a valid JSON object."
        });
        let error = classify(&body, 400).unwrap_err();
        let details = error.details().unwrap();

        assert_eq!(
            details.message.as_deref(),
            Some("Request Body should be a valid JSON object.")
        );
        assert_eq!(details.code, Some(300));
        assert!(details.errors.is_none());
        assert_eq!(details.http_status_code, 400);
    }

    #[test]
    fn test_details_with_errors_list() {
        let body = json!({
            "code": 300,
            "message": "Validation Failed.",
            "errors": [
                {"field": "user_info.email", "message": "Invalid field."},
                {"field": "user_info.type", "message": "Invalid field."}
            ]
        });
        let error = classify(&body, 400).unwrap_err();
        let details = error.details().unwrap();

        let errors = details.errors.as_ref().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "user_info.email");
        assert_eq!(errors[1].message, "Invalid field.");
    }

    #[test]
    fn test_null_errors_field_stays_absent() {
        let body = json!({"code": 300, "message": "Validation Failed.", "errors": null});
        let error = classify(&body, 400).unwrap_err();
        assert!(error.details().unwrap().errors.is_none());
    }

    #[test]
    fn test_empty_errors_list_stays_present() {
        let body = json!({"code": 300, "message": "Validation Failed.", "errors": []});
        let error = classify(&body, 400).unwrap_err();
        assert_eq!(error.details().unwrap().errors, Some(vec![]));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let body = json!({"code": 1005, "message": "Email has already been used."});
        for _ in 0..3 {
            let error = classify(&body, 409).unwrap_err();
            assert_eq!(error.kind(), Some(ErrorKind::Conflict));
        }
    }

    #[test]
    fn test_parse_response_returns_status_on_success() {
        let response = ApiResponse::new(204, json!({}));
        assert_eq!(parse_response(&response).unwrap(), 204);
    }

    #[test]
    fn test_parse_response_propagates_classification() {
        let response = ApiResponse::new(404, json!({"code": 1001, "message": "User does not exist"}));
        let error = parse_response(&response).unwrap_err();
        assert_eq!(error.kind(), Some(ErrorKind::NotFound));
        assert_eq!(error.details().unwrap().http_status_code, 404);
    }
}
