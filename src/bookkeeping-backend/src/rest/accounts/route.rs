// src/rest/accounts/route.rs
use crate::debug_log;
use crate::rest::router::{self, genroute};
use crate::rest::types::RouteHandler;

pub const ACCOUNTS_GET_PATH: &str = genroute!("/accounts/get/{principal}");

type HandlerEntry = (&'static str, &'static str, RouteHandler);

pub fn init_routes() {
    let routes: &[HandlerEntry] = &[
        (
            "GET",
            ACCOUNTS_GET_PATH,
            |req, params| crate::rest::accounts::handler::accounts_handlers::get_account_handler(req, params),
        ),
    ];

    for &(method, path, handler) in routes {
        debug_log!("Registering {} route: {}", method, path);
        router::insert_route(method, path, handler);
    }
}
