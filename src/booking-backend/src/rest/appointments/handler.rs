// src/rest/appointments/handler.rs

pub mod appointments_handlers {
    use crate::{
        core::api::booking::{get_all_appointments, get_appointment},
        rest::{
            appointments::types::{
                GetAppointmentResponse, ListAppointmentsQuery, ListAppointmentsResponse, ListAppointmentsResponseData,
            },
            helpers::{create_response, parse_query_string, status_from_code},
            types::{validate_id_string, ErrorResponse},
        },
    };
    use ic_http_certification::{HttpRequest, HttpResponse, StatusCode};
    use matchit::Params;

    pub fn get_appointment_handler<'a, 'k, 'v>(_request: &'a HttpRequest<'a>, params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let appointment_id = params.get("appointment_id").unwrap_or_default();
        if let Err(validation_error) = validate_id_string(appointment_id, "appointment_id") {
            return create_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(
                    format!("Validation error: {} - {}", validation_error.field, validation_error.message)
                ).encode()
            );
        }

        match get_appointment(appointment_id) {
            Ok(appointment) => create_response(
                StatusCode::OK,
                GetAppointmentResponse::ok(&appointment).encode()
            ),
            Err(err) => create_response(
                status_from_code(err.status_code()),
                ErrorResponse::from_booking_error(&err).encode()
            ),
        }
    }

    pub fn list_appointments_handler<'a, 'k, 'v>(request: &'a HttpRequest<'a>, _params: &'a Params<'k, 'v>) -> HttpResponse<'static> {
        let query_map = request
            .url()
            .split_once('?')
            .map(|(_, query)| parse_query_string(query))
            .unwrap_or_default();

        let query = match ListAppointmentsQuery::from_query_map(&query_map) {
            Ok(query) => query,
            Err(validation_error) => return create_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::bad_request(
                    format!("Validation error: {} - {}", validation_error.field, validation_error.message)
                ).encode()
            ),
        };

        let items: Vec<_> = get_all_appointments()
            .into_iter()
            .filter(|appointment| query.available.map_or(true, |flag| appointment.available == flag))
            .collect();
        let data = ListAppointmentsResponseData {
            total: items.len(),
            items,
        };

        create_response(
            StatusCode::OK,
            ListAppointmentsResponse::ok(&data).encode()
        )
    }
}
