// src/rest/customers/handler.rs

pub mod customers_handlers {
    use crate::{
        core::api::booking::get_customer,
        rest::{
            customers::types::GetCustomerResponse,
            helpers::{create_response, status_from_code},
            types::{validate_id_string, ErrorResponse},
        },
    };
    use ic_http_certification::{HttpRequest, HttpResponse, StatusCode};
    use matchit::Params;

    pub fn get_customer_handler<'a, 'k, 'v>(_request: &'a HttpRequest<'a>, params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let customer_id = params.get("customer_id").unwrap_or_default();
        if let Err(validation_error) = validate_id_string(customer_id, "customer_id") {
            return create_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(
                    format!("Validation error: {} - {}", validation_error.field, validation_error.message)
                ).encode()
            );
        }

        match get_customer(customer_id) {
            Ok(customer) => create_response(
                StatusCode::OK,
                GetCustomerResponse::ok(&customer).encode()
            ),
            Err(err) => create_response(
                status_from_code(err.status_code()),
                ErrorResponse::from_booking_error(&err).encode()
            ),
        }
    }
}
