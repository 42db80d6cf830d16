// src/rest/types.rs
use candid::Principal;
use ic_http_certification::{HttpRequest, HttpResponse};
use lazy_static::lazy_static;
use matchit::Params;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::types::LedgerError;

pub type RouteHandler = for<'a, 'k, 'v> fn(&'a HttpRequest<'a>, &'a Params<'k, 'v>) -> HttpResponse<'static>;

lazy_static! {
    static ref CURRENCY_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]{1,16}$").expect("valid currency regex");
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

    pub fn from_ledger_error(error: &LedgerError) -> Self {
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

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

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

pub fn validate_description(description: &str, field_name: &str) -> Result<(), ValidationError> {
    if description.len() > 8192 {
        return Err(ValidationError {
            field: field_name.to_string(),
            message: format!("{} must be 8,192 characters or less", field_name),
        });
    }

    Ok(())
}

pub fn validate_currency(currency: &str) -> Result<(), ValidationError> {
    if !CURRENCY_REGEX.is_match(currency) {
        return Err(ValidationError {
            field: "currency".to_string(),
            message: "Currency must be 1 to 16 alphanumeric characters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_icp_principal(principal: &str, field_name: &str) -> Result<Principal, ValidationError> {
    validate_id_string(principal, field_name)?;
    Principal::from_text(principal).map_err(|_| ValidationError {
        field: field_name.to_string(),
        message: "Invalid ICP principal format".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency_validation() {
        assert!(validate_currency("USD").is_ok());
        assert!(validate_currency("usdc2").is_ok());
        assert!(validate_currency("").is_err());
        assert!(validate_currency("US D").is_err());
        assert!(validate_currency("ABCDEFGHIJKLMNOPQ").is_err());
    }

    #[test]
    fn principal_validation_rejects_garbage() {
        assert!(validate_icp_principal("aaaaa-aa", "principal").is_ok());
        let err = validate_icp_principal("not a principal", "principal").unwrap_err();
        assert_eq!(err.field, "principal");
    }

    #[test]
    fn error_envelope_shape() {
        let body = ErrorResponse::from_ledger_error(&LedgerError::NotFound("Account not found.".to_string())).encode();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["err"]["code"], 404);
        assert_eq!(json["err"]["message"], "Account not found.");
    }

    #[test]
    fn ok_envelope_wraps_data() {
        let data = vec![1u64, 2, 3];
        let body = ApiResponse::ok(&data).encode();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["ok"]["data"], serde_json::json!([1, 2, 3]));
    }
}
