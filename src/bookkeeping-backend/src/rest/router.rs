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
    crate::rest::accounts::route::init_routes();
    crate::rest::transactions::route::init_routes();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        api::bookkeeping::{register_account, record_transaction, TransferRequest},
        state::transactions::types::TransactionType,
    };
    use candid::Principal;
    use ic_http_certification::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    const NOW: u64 = 1_700_000_000_000;

    fn alice() -> Principal {
        Principal::from_slice(&[1; 29])
    }

    fn bob() -> Principal {
        Principal::from_slice(&[2; 29])
    }

    fn send(response: HttpResponse<'static>) -> (StatusCode, Value) {
        let body = serde_json::from_slice(response.body()).unwrap();
        (response.status_code(), body)
    }

    fn get(url: &str) -> (StatusCode, Value) {
        init_routes();
        send(handle_request(HttpRequest::get(url).build()))
    }

    fn post(url: &str, body: Value) -> (StatusCode, Value) {
        init_routes();
        let bytes = serde_json::to_vec(&body).unwrap();
        send(handle_request(HttpRequest::post(url).with_body(bytes).build()))
    }

    fn seed_transfers(amounts: &[u64], kind: TransactionType) {
        for (n, amount) in amounts.iter().enumerate() {
            let request = TransferRequest {
                from: alice(),
                to: bob(),
                amount: *amount,
                currency: "USD".to_string(),
                description: format!("payment {}", n),
                transaction_type: kind,
            };
            record_transaction(alice(), request, NOW + n as u64).unwrap();
        }
    }

    #[test]
    fn unknown_route_and_method_get_the_404_envelope() {
        let (status, body) = get("/v1/nothing/here");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["err"]["code"], 404);

        init_routes();
        let (status, body) = send(handle_request(HttpRequest::put("/v1/transactions/list").build()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["err"]["code"], 404);
    }

    #[test]
    fn account_lookup_by_principal() {
        register_account(alice(), 250, NOW).unwrap();

        let (status, body) = get(&format!("/v1/accounts/get/{}", alice().to_text()));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"]["data"]["balance"], 250);

        let (status, body) = get(&format!("/v1/accounts/get/{}", bob().to_text()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["err"]["code"], 404);

        let (status, _) = get("/v1/accounts/get/not-a-principal");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn transaction_lookup_by_id() {
        register_account(alice(), 100, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();
        seed_transfers(&[40], TransactionType::Bank);

        let (_, list) = post("/v1/transactions/list", json!({ "principal": alice().to_text() }));
        let id = list["ok"]["data"]["items"][0]["id"].as_str().unwrap().to_string();

        let (status, body) = get(&format!("/v1/transactions/get/{}", id));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"]["data"]["amount"], 40);

        let (status, _) = get("/v1/transactions/get/TransactionID_missing");
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn transaction_list_pages_with_cursor_and_direction() {
        register_account(alice(), 100, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();
        seed_transfers(&[1, 2, 3], TransactionType::Cash);

        let (status, first) = post(
            "/v1/transactions/list",
            json!({ "principal": alice().to_text(), "page_size": 2 }),
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["ok"]["data"]["total"], 3);
        assert_eq!(first["ok"]["data"]["items"][0]["amount"], 1);
        assert_eq!(first["ok"]["data"]["cursor"], "2");

        let (_, rest) = post(
            "/v1/transactions/list",
            json!({ "principal": alice().to_text(), "page_size": 2, "cursor": "2" }),
        );
        assert_eq!(rest["ok"]["data"]["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(rest["ok"]["data"]["cursor"], Value::Null);

        let (_, newest) = post(
            "/v1/transactions/list",
            json!({ "principal": bob().to_text(), "page_size": 1, "direction": "Desc" }),
        );
        assert_eq!(newest["ok"]["data"]["items"][0]["amount"], 3);
    }

    #[test]
    fn transaction_list_filters_by_type_in_any_case() {
        register_account(alice(), 100, NOW).unwrap();
        register_account(bob(), 0, NOW).unwrap();
        seed_transfers(&[5], TransactionType::Cash);
        seed_transfers(&[7], TransactionType::Debit);

        let (status, body) = post(
            "/v1/transactions/list",
            json!({ "principal": alice().to_text(), "transaction_type": "debit" }),
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"]["data"]["total"], 1);
        assert_eq!(body["ok"]["data"]["items"][0]["amount"], 7);
    }

    #[test]
    fn malformed_list_bodies_are_bad_requests() {
        init_routes();
        let (status, body) = send(handle_request(
            HttpRequest::post("/v1/transactions/list").with_body(b"{not json".to_vec()).build(),
        ));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["err"]["code"], 400);

        let (status, _) = post("/v1/transactions/list", json!({ "principal": "aaaaa-aa", "page_size": 0 }));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
