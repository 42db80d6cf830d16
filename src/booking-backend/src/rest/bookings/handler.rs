// src/rest/bookings/handler.rs

pub mod bookings_handlers {
    use crate::{
        core::api::booking::{get_booking, get_customer, get_customer_bookings},
        rest::{
            bookings::types::{GetBookingResponse, ListBookingsResponse, ListBookingsResponseData},
            helpers::{create_response, status_from_code},
            types::{validate_id_string, ErrorResponse},
        },
    };
    use ic_http_certification::{HttpRequest, HttpResponse, StatusCode};
    use matchit::Params;

    fn path_param<'p>(params: &'p Params, name: &str) -> Result<&'p str, HttpResponse<'static>> {
        let value = params.get(name).unwrap_or_default();
        validate_id_string(value, name).map_err(|validation_error| create_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::bad_request(
                format!("Validation error: {} - {}", validation_error.field, validation_error.message)
            ).encode()
        ))?;
        Ok(value)
    }

    pub fn get_booking_handler<'a, 'k, 'v>(_request: &'a HttpRequest<'a>, params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let booking_id = match path_param(params, "booking_id") {
            Ok(id) => id,
            Err(response) => return response,
        };

        match get_booking(booking_id) {
            Ok(booking) => create_response(
                StatusCode::OK,
                GetBookingResponse::ok(&booking).encode()
            ),
            Err(err) => create_response(
                status_from_code(err.status_code()),
                ErrorResponse::from_booking_error(&err).encode()
            ),
        }
    }

    pub fn list_customer_bookings_handler<'a, 'k, 'v>(_request: &'a HttpRequest<'a>, params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let customer_id = match path_param(params, "customer_id") {
            Ok(id) => id,
            Err(response) => return response,
        };

        // unknown customers get a 404 rather than an empty list
        if let Err(err) = get_customer(customer_id) {
            return create_response(
                status_from_code(err.status_code()),
                ErrorResponse::from_booking_error(&err).encode()
            );
        }

        let items = get_customer_bookings(customer_id);
        let data = ListBookingsResponseData {
            total: items.len(),
            items,
        };
        create_response(
            StatusCode::OK,
            ListBookingsResponse::ok(&data).encode()
        )
    }
}
