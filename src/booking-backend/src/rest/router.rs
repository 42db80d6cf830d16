// src/rest/router.rs
use crate::debug_log;
use crate::rest::helpers::not_found_response;
use crate::rest::types::RouteHandler;
use ic_http_certification::{HttpRequest, HttpResponse};
use matchit::Router;
use std::{cell::RefCell, collections::HashMap};

macro_rules! genroute {
    ($path:expr) => {
        concat!("/v1", $path)
    };
}
pub(crate) use genroute;

thread_local! {
    static ROUTER: RefCell<HashMap<String, Router<RouteHandler>>> = RefCell::new(HashMap::new());
}

pub fn init_routes() {
    crate::rest::appointments::route::init_routes();
    crate::rest::customers::route::init_routes();
    crate::rest::bookings::route::init_routes();
}

pub fn handle_request(req: HttpRequest) -> HttpResponse<'static> {
    let req_path = match req.get_path() {
        Ok(path) => path,
        Err(_) => return not_found_response(),
    };
    let method = req.method().as_str().to_uppercase();
    debug_log!("Handling {} request for path: {}", method, req_path);

    ROUTER.with_borrow(|router| {
        let Some(method_router) = router.get(&method) else {
            return not_found_response();
        };
        match method_router.at(&req_path) {
            Ok(handler_match) => (handler_match.value)(&req, &handler_match.params),
            Err(_) => not_found_response(),
        }
    })
}

pub(crate) fn insert_route(method: &str, path: &str, route_handler: RouteHandler) {
    ROUTER.with_borrow_mut(|router| {
        let method_router = router.entry(method.to_string()).or_default();
        if let Err(err) = method_router.insert(path, route_handler) {
            debug_log!("Failed to register route {} {}: {}", method, path, err);
        }
    });
}
