// src/rest/customers/route.rs
use crate::debug_log;
use crate::rest::router::{self, genroute};
use crate::rest::types::RouteHandler;

pub const CUSTOMERS_GET_PATH: &str = genroute!("/customers/get/{customer_id}");

type HandlerEntry = (&'static str, &'static str, RouteHandler);

pub fn init_routes() {
    let routes: &[HandlerEntry] = &[
        (
            "GET",
            CUSTOMERS_GET_PATH,
            |req, params| crate::rest::customers::handler::customers_handlers::get_customer_handler(req, params),
        ),
    ];

    for &(method, path, handler) in routes {
        debug_log!("Registering {} route: {}", method, path);
        router::insert_route(method, path, handler);
    }
}
