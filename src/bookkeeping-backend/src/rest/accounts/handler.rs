// src/rest/accounts/handler.rs

pub mod accounts_handlers {
    use crate::{
        core::api::bookkeeping::get_account,
        rest::{
            accounts::types::GetAccountResponse,
            helpers::{create_response, status_from_code},
            types::{validate_icp_principal, ErrorResponse},
        },
    };
    use ic_http_certification::{HttpRequest, HttpResponse, StatusCode};
    use matchit::Params;

    pub fn get_account_handler<'a, 'k, 'v>(_request: &'a HttpRequest<'a>, params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let raw_principal = params.get("principal").unwrap_or_default();
        let principal = match validate_icp_principal(raw_principal, "principal") {
            Ok(principal) => principal,
            Err(validation_error) => return create_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(
                    format!("Validation error: {} - {}", validation_error.field, validation_error.message)
                ).encode()
            ),
        };

        match get_account(&principal) {
            Ok(account) => create_response(
                StatusCode::OK,
                GetAccountResponse::ok(&account).encode()
            ),
            Err(err) => create_response(
                status_from_code(err.status_code()),
                ErrorResponse::from_ledger_error(&err).encode()
            ),
        }
    }
}
