// src/rest/helpers.rs
use ic_http_certification::{HttpResponse, StatusCode};
use serde_json::json;
use std::borrow::Cow;
use url::form_urlencoded;

fn default_headers() -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ("Access-Control-Allow-Methods".to_string(), "GET, POST, OPTIONS".to_string()),
        ("Access-Control-Allow-Headers".to_string(), "Content-Type".to_string()),
        ("Access-Control-Max-Age".to_string(), "86400".to_string()),
    ]
}

pub fn create_response(status_code: StatusCode, body: Vec<u8>) -> HttpResponse<'static> {
    HttpResponse::builder()
        .with_status_code(status_code)
        .with_headers(default_headers())
        .with_body(Cow::Owned(body))
        .build()
}

pub fn not_found_response() -> HttpResponse<'static> {
    let error_payload = json!({
        "err": {
            "code": 404,
            "message": "REST API route not found"
        }
    });

    create_response(StatusCode::NOT_FOUND, error_payload.to_string().into_bytes())
}

/// Use `url::form_urlencoded` to parse query string into key-value pairs.
pub fn parse_query_string(query: &str) -> std::collections::HashMap<String, String> {
    form_urlencoded::parse(query.as_bytes()).into_owned().collect()
}

pub fn status_from_code(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn query_string_is_decoded() {
        let parsed = parse_query_string("available=true&name=a%20b");
        assert_eq!(parsed.get("available").map(String::as_str), Some("true"));
        assert_eq!(parsed.get("name").map(String::as_str), Some("a b"));
    }

    #[test]
    fn unknown_codes_fall_back_to_500() {
        assert_eq!(status_from_code(422), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_from_code(42), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
