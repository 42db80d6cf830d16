// src/rest/bookings/route.rs
use crate::debug_log;
use crate::rest::router::{self, genroute};
use crate::rest::types::RouteHandler;

pub const BOOKINGS_GET_PATH: &str =       genroute!("/bookings/get/{booking_id}");
pub const BOOKINGS_CUSTOMER_PATH: &str =  genroute!("/bookings/customer/{customer_id}");

type HandlerEntry = (&'static str, &'static str, RouteHandler);

pub fn init_routes() {
    let routes: &[HandlerEntry] = &[
        (
            "GET",
            BOOKINGS_GET_PATH,
            |req, params| crate::rest::bookings::handler::bookings_handlers::get_booking_handler(req, params),
        ),
        (
            "GET",
            BOOKINGS_CUSTOMER_PATH,
            |req, params| crate::rest::bookings::handler::bookings_handlers::list_customer_bookings_handler(req, params),
        ),
    ];

    for &(method, path, handler) in routes {
        debug_log!("Registering {} route: {}", method, path);
        router::insert_route(method, path, handler);
    }
}
