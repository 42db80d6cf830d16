// src/lib.rs
use candid::{CandidType, Principal};
use ic_cdk::{post_upgrade, query, update};
use ic_http_certification::{HttpRequest, HttpResponse};
use ic_stable_structures::memory_manager::{MemoryId, MemoryManager, VirtualMemory};
use ic_stable_structures::{DefaultMemoryImpl, StableCell};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

mod logger;
mod rest;
mod core;

use crate::core::{
    api::bookkeeping::{self, TransferRequest},
    state::{
        accounts::types::Account,
        config::{state::state::{get_version, set_config, set_version, CURRENT_VERSION}, types::LedgerConfig},
        transactions::types::{Transaction, TransactionType},
    },
    types::LedgerError,
};
use rest::{router, types::validate_currency};

pub static _DEPLOYMENT_STAGING: DEPLOYMENT_STAGE = DEPLOYMENT_STAGE::LocalDevelopment;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Serialize, Deserialize, CandidType, PartialEq)]
pub enum DEPLOYMENT_STAGE {
    LocalDevelopment,
    StagingPublicTestnet,
    Production
}

#[derive(Debug, Clone, Serialize, Deserialize, CandidType, Default)]
pub struct InitArgs {
    pub default_currency: Option<String>,
}

pub(crate) type Memory = VirtualMemory<DefaultMemoryImpl>;

const INITIALIZED_FLAG_MEMORY_ID: MemoryId = MemoryId::new(0);

thread_local! {
    pub(crate) static MEMORY_MANAGER: RefCell<MemoryManager<DefaultMemoryImpl>> =
        RefCell::new(MemoryManager::init(DefaultMemoryImpl::default()));

    static INITIALIZED_FLAG: RefCell<StableCell<bool, Memory>> = RefCell::new(
        StableCell::init(
            MEMORY_MANAGER.with(|m| m.borrow().get(INITIALIZED_FLAG_MEMORY_ID)),
            false
        ).expect("Failed to initialize StableCell for INITIALIZED_FLAG")
    );
}

fn now_ms() -> u64 {
    ic_cdk::api::time() / 1_000_000
}

fn read_init_args() -> Option<InitArgs> {
    ic_cdk::api::call::arg_data::<(Option<InitArgs>,)>(ic_cdk::api::call::ArgDecoderConfig::default()).0
}

fn apply_init_args(args: Option<InitArgs>) {
    let Some(init_args) = args else {
        return;
    };
    let mut config = LedgerConfig::default();
    if let Some(currency) = init_args.default_currency {
        if let Err(validation_error) = validate_currency(&currency) {
            debug_log!("FATAL: Invalid default currency: {}", validation_error.message);
            ic_cdk::trap(&format!("Initialization failed: {}", validation_error.message));
        }
        config.default_currency = currency;
    }
    set_config(config);
}

fn initialize_canister(args: Option<InitArgs>) {
    router::init_routes();

    let already_initialized = INITIALIZED_FLAG.with(|flag_cell| *flag_cell.borrow().get());

    crate::core::state::config::state::state::initialize();
    crate::core::state::accounts::state::state::initialize();
    crate::core::state::transactions::state::state::initialize();

    // a later upgrade may still carry fresh config
    apply_init_args(args);

    if already_initialized {
        debug_log!("Canister already initialized, skipping first-time setup");
        if get_version() != CURRENT_VERSION {
            debug_log!("Upgrading state version {} -> {}", get_version(), CURRENT_VERSION);
            set_version(CURRENT_VERSION);
        }
        return;
    }

    debug_log!("Initializing bookkeeping canister...");
    INITIALIZED_FLAG.with(|flag_cell| {
        flag_cell.borrow_mut().set(true).expect("Failed to set INITIALIZED_FLAG");
    });
}

#[ic_cdk_macros::init]
fn init() {
    debug_log!("INIT FUNCTION STARTED");
    initialize_canister(read_init_args());
    debug_log!("INIT FUNCTION COMPLETED");
}

#[post_upgrade]
fn post_upgrade() {
    debug_log!("Post-upgrade initialization...");
    initialize_canister(read_init_args());
}

#[update(name = "registerUser")]
fn register_user(opening_balance: Option<u64>) -> Result<Account, LedgerError> {
    bookkeeping::register_account(ic_cdk::caller(), opening_balance.unwrap_or(0), now_ms())
}

#[update(name = "recordTransaction")]
fn record_transaction(
    from: Principal,
    to: Principal,
    amount: u64,
    currency: String,
    description: String,
    transaction_type: TransactionType,
) -> Result<Transaction, LedgerError> {
    let request = TransferRequest {
        from,
        to,
        amount,
        currency,
        description,
        transaction_type,
    };
    bookkeeping::record_transaction(ic_cdk::caller(), request, now_ms())
}

#[update(name = "transferFunds")]
fn transfer_funds(
    from: Principal,
    to: Principal,
    amount: u64,
    description: String,
    transaction_type: TransactionType,
) -> Result<Transaction, LedgerError> {
    bookkeeping::transfer_funds(ic_cdk::caller(), from, to, amount, description, transaction_type, now_ms())
}

#[query(name = "getAccount")]
fn get_account(principal: Principal) -> Result<Account, LedgerError> {
    bookkeeping::get_account(&principal)
}

#[query(name = "getAccountBalance")]
fn get_account_balance(principal: Principal) -> Result<u64, LedgerError> {
    bookkeeping::get_account_balance(&principal)
}

#[query(name = "getTransactionDetails")]
fn get_transaction_details(transaction_id: String) -> Result<Transaction, LedgerError> {
    bookkeeping::get_transaction_details(&transaction_id)
}

#[query(name = "getTransactionHistory")]
fn get_transaction_history(principal: Principal) -> Vec<Transaction> {
    bookkeeping::get_transaction_history(&principal, None)
}

#[query(name = "getTransactionsByType")]
fn get_transactions_by_type(principal: Principal, transaction_type: TransactionType) -> Vec<Transaction> {
    bookkeeping::get_transaction_history(&principal, Some(transaction_type))
}

#[query(name = "getCashTransactions")]
fn get_cash_transactions(principal: Principal) -> Vec<Transaction> {
    bookkeeping::get_transaction_history(&principal, Some(TransactionType::Cash))
}

#[query(name = "getDebitTransactions")]
fn get_debit_transactions(principal: Principal) -> Vec<Transaction> {
    bookkeeping::get_transaction_history(&principal, Some(TransactionType::Debit))
}

#[query(name = "getBankTransactions")]
fn get_bank_transactions(principal: Principal) -> Vec<Transaction> {
    bookkeeping::get_transaction_history(&principal, Some(TransactionType::Bank))
}

#[query(name = "getCreditTransactions")]
fn get_credit_transactions(principal: Principal) -> Vec<Transaction> {
    bookkeeping::get_transaction_history(&principal, Some(TransactionType::Credit))
}

#[query]
fn http_request(_req: HttpRequest) -> HttpResponse<'static> {
    // All requests will be upgraded to update calls
    HttpResponse::builder()
        .with_upgrade(true)
        .build()
}

#[update]
fn http_request_update(req: HttpRequest<'_>) -> HttpResponse<'static> {
    router::handle_request(req)
}

ic_cdk::export_candid!();
