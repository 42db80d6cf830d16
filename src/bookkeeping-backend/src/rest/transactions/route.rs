// src/rest/transactions/route.rs
use crate::debug_log;
use crate::rest::router::{self, genroute};
use crate::rest::types::RouteHandler;

pub const TRANSACTIONS_GET_PATH: &str =   genroute!("/transactions/get/{transaction_id}");
pub const TRANSACTIONS_LIST_PATH: &str =  genroute!("/transactions/list");

type HandlerEntry = (&'static str, &'static str, RouteHandler);

pub fn init_routes() {
    let routes: &[HandlerEntry] = &[
        (
            "GET",
            TRANSACTIONS_GET_PATH,
            |req, params| crate::rest::transactions::handler::transactions_handlers::get_transaction_handler(req, params),
        ),
        (
            "POST",
            TRANSACTIONS_LIST_PATH,
            |req, params| crate::rest::transactions::handler::transactions_handlers::list_transactions_handler(req, params),
        ),
    ];

    for &(method, path, handler) in routes {
        debug_log!("Registering {} route: {}", method, path);
        router::insert_route(method, path, handler);
    }
}
