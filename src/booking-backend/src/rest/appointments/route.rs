// src/rest/appointments/route.rs
use crate::debug_log;
use crate::rest::router::{self, genroute};
use crate::rest::types::RouteHandler;

pub const APPOINTMENTS_GET_PATH: &str =   genroute!("/appointments/get/{appointment_id}");
pub const APPOINTMENTS_LIST_PATH: &str =  genroute!("/appointments/list");

type HandlerEntry = (&'static str, &'static str, RouteHandler);

pub fn init_routes() {
    let routes: &[HandlerEntry] = &[
        (
            "GET",
            APPOINTMENTS_GET_PATH,
            |req, params| crate::rest::appointments::handler::appointments_handlers::get_appointment_handler(req, params),
        ),
        (
            "GET",
            APPOINTMENTS_LIST_PATH,
            |req, params| crate::rest::appointments::handler::appointments_handlers::list_appointments_handler(req, params),
        ),
    ];

    for &(method, path, handler) in routes {
        debug_log!("Registering {} route: {}", method, path);
        router::insert_route(method, path, handler);
    }
}
