// src/rest/types.rs
use ic_http_certification::{HttpRequest, HttpResponse};
use lazy_static::lazy_static;
use matchit::Params;
use regex::Regex;
use serde::Serialize;

use crate::core::types::BookingError;

pub type RouteHandler = for<'a, 'k, 'v> fn(&'a HttpRequest<'a>, &'a Params<'k, 'v>) -> HttpResponse<'static>;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").expect("valid email regex");
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9+\-() ]{5,32}$").expect("valid phone regex");
}

#[derive(Debug, Clone, Serialize)]
pub enum ApiResponse<'a, T = ()> {
    #[serde(rename = "ok")]
    Ok { data: &'a T },
    #[serde(rename = "err")]
    Err { code: u16, message: String },
}

impl<'a, T: Serialize> ApiResponse<'a, T> {
    pub fn ok(data: &'a T) -> Self {
        Self::Ok { data }
    }

    pub fn bad_request(message: String) -> Self {
        Self::err(400, message)
    }

    pub fn from_booking_error(error: &BookingError) -> Self {
        Self::err(error.status_code(), error.message().to_string())
    }

    pub fn err(code: u16, message: String) -> Self {
        Self::Err { code, message }
    }

    pub fn encode(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_else(|_|
            serde_json::to_vec(&ApiResponse::<()>::err(
                500,
                "Failed to serialize response".to_string()
            ))
            .unwrap_or_default()
        )
    }
}

pub type ErrorResponse<'a> = ApiResponse<'a, ()>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

pub fn validate_id_string(id: &str, field_name: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError {
            field: field_name.to_string(),
            message: format!("{} cannot be empty", field_name),
        });
    }

    if id.len() > 256 {
        return Err(ValidationError {
            field: field_name.to_string(),
            message: format!("{} must be 256 characters or less", field_name),
        });
    }

    Ok(())
}

pub fn validate_short_string(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError {
            field: field_name.to_string(),
            message: format!("{} cannot be empty", field_name),
        });
    }
    validate_id_string(value, field_name)
}

pub fn validate_description(description: &str, field_name: &str) -> Result<(), ValidationError> {
    if description.len() > 8192 {
        return Err(ValidationError {
            field: field_name.to_string(),
            message: format!("{} must be 8,192 characters or less", field_name),
        });
    }

    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.len() > 256 || !EMAIL_REGEX.is_match(email.trim()) {
        return Err(ValidationError {
            field: "email".to_string(),
            message: "Invalid email format".to_string(),
        });
    }
    Ok(())
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone_number.trim()) {
        return Err(ValidationError {
            field: "phone_number".to_string(),
            message: "Phone number must be 5 to 32 digits, spaces, '+', '-', '(' or ')'".to_string(),
        });
    }
    Ok(())
}
