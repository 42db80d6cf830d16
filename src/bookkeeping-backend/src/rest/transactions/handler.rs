// src/rest/transactions/handler.rs

pub mod transactions_handlers {
    use crate::{
        core::api::bookkeeping::{get_transaction_details, get_transaction_history},
        rest::{
            helpers::{create_response, status_from_code},
            transactions::types::{
                GetTransactionResponse, ListTransactionsRequestBody, ListTransactionsResponse,
                ListTransactionsResponseData,
            },
            types::{validate_id_string, ErrorResponse},
        },
    };
    use ic_http_certification::{HttpRequest, HttpResponse, StatusCode};
    use matchit::Params;

    pub fn get_transaction_handler<'a, 'k, 'v>(_request: &'a HttpRequest<'a>, params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let transaction_id = params.get("transaction_id").unwrap_or_default();
        if let Err(validation_error) = validate_id_string(transaction_id, "transaction_id") {
            return create_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(
                    format!("Validation error: {} - {}", validation_error.field, validation_error.message)
                ).encode()
            );
        }

        match get_transaction_details(transaction_id) {
            Ok(transaction) => create_response(
                StatusCode::OK,
                GetTransactionResponse::ok(&transaction).encode()
            ),
            Err(err) => create_response(
                status_from_code(err.status_code()),
                ErrorResponse::from_ledger_error(&err).encode()
            ),
        }
    }

    pub fn list_transactions_handler<'a, 'k, 'v>(request: &'a HttpRequest<'a>, _params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let request_body: ListTransactionsRequestBody = match serde_json::from_slice(request.body()) {
            Ok(body) => body,
            Err(_) => return create_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request("Invalid request format".to_string()).encode()
            ),
        };

        let principal = match request_body.validate_body() {
            Ok(principal) => principal,
            Err(validation_error) => return create_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(
                    format!("Validation error: {} - {}", validation_error.field, validation_error.message)
                ).encode()
            ),
        };

        let history = get_transaction_history(&principal, request_body.transaction_type);
        let page = ListTransactionsResponseData::paginate(
            history,
            request_body.direction,
            request_body.cursor_index(),
            request_body.page_size,
        );

        create_response(
            StatusCode::OK,
            ListTransactionsResponse::ok(&page).encode()
        )
    }
}
