// src/lib.rs
use candid::CandidType;
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
    api::booking::{self, AppointmentDetails, CustomerDetails},
    state::{
        appointments::types::Appointment,
        bookings::types::Booking,
        config::{state::state::{get_version, set_config, set_version, CURRENT_VERSION}, types::BookingConfig},
        customers::types::Customer,
    },
    types::BookingError,
};
use rest::router;

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
    pub max_duration_minutes: Option<u64>,
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
    let mut config = BookingConfig::default();
    if let Some(max_duration) = init_args.max_duration_minutes {
        if max_duration == 0 {
            debug_log!("FATAL: max_duration_minutes must be positive");
            ic_cdk::trap("Initialization failed: max_duration_minutes must be positive");
        }
        config.max_duration_minutes = max_duration;
    }
    set_config(config);
}

fn initialize_canister(args: Option<InitArgs>) {
    router::init_routes();

    let already_initialized = INITIALIZED_FLAG.with(|flag_cell| *flag_cell.borrow().get());

    crate::core::state::config::state::state::initialize();
    crate::core::state::appointments::state::state::initialize();
    crate::core::state::customers::state::state::initialize();
    crate::core::state::bookings::state::state::initialize();

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

    debug_log!("Initializing booking canister...");
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

#[update(name = "createAppointment")]
fn create_appointment(title: String, description: String, date: u64, duration: u64) -> Result<Appointment, BookingError> {
    let details = AppointmentDetails { title, description, date, duration };
    booking::create_appointment(ic_cdk::caller(), details, now_ms())
}

#[update(name = "updateAppointment")]
fn update_appointment(
    appointment_id: String,
    title: String,
    description: String,
    date: u64,
    duration: u64,
) -> Result<Appointment, BookingError> {
    let details = AppointmentDetails { title, description, date, duration };
    booking::update_appointment(ic_cdk::caller(), &appointment_id, details, now_ms())
}

#[query(name = "getAppointmentById")]
fn get_appointment_by_id(appointment_id: String) -> Result<Appointment, BookingError> {
    booking::get_appointment(&appointment_id)
}

#[query(name = "getAllAppointments")]
fn get_all_appointments() -> Vec<Appointment> {
    booking::get_all_appointments()
}

#[query(name = "getAvailableAppointments")]
fn get_available_appointments() -> Vec<Appointment> {
    booking::get_available_appointments()
}

#[update(name = "registerCustomer")]
fn register_customer(name: String, email: String, phone_number: String) -> Result<Customer, BookingError> {
    let details = CustomerDetails { name, email, phone_number };
    booking::register_customer(ic_cdk::caller(), details, now_ms())
}

#[query(name = "getCustomerById")]
fn get_customer_by_id(customer_id: String) -> Result<Customer, BookingError> {
    booking::get_customer(&customer_id)
}

#[query(name = "getCustomerByEmail")]
fn get_customer_by_email(email: String) -> Result<Customer, BookingError> {
    booking::get_customer_by_email(&email)
}

#[update(name = "bookAppointment")]
fn book_appointment(appointment_id: String, customer_id: String) -> Result<Booking, BookingError> {
    booking::book_appointment(ic_cdk::caller(), &appointment_id, &customer_id, now_ms())
}

#[update(name = "cancelBooking")]
fn cancel_booking(booking_id: String) -> Result<Booking, BookingError> {
    booking::cancel_booking(ic_cdk::caller(), &booking_id, now_ms())
}

#[query(name = "getBookingById")]
fn get_booking_by_id(booking_id: String) -> Result<Booking, BookingError> {
    booking::get_booking(&booking_id)
}

#[query(name = "getCustomerBookings")]
fn get_customer_bookings(customer_id: String) -> Vec<Booking> {
    booking::get_customer_bookings(&customer_id)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::config::{state::state::get_config, types::DEFAULT_MAX_DURATION_MINUTES};
    use pretty_assertions::assert_eq;

    #[test]
    fn init_applies_max_duration() {
        initialize_canister(Some(InitArgs { max_duration_minutes: Some(90) }));
        assert_eq!(get_config().max_duration_minutes, 90);
        assert!(INITIALIZED_FLAG.with(|flag| *flag.borrow().get()));
    }

    #[test]
    fn upgrade_without_args_keeps_config() {
        initialize_canister(Some(InitArgs { max_duration_minutes: Some(45) }));
        initialize_canister(None);
        assert_eq!(get_config().max_duration_minutes, 45);
        assert_eq!(get_version(), CURRENT_VERSION);
    }

    #[test]
    fn defaults_apply_without_args() {
        initialize_canister(None);
        assert_eq!(get_config().max_duration_minutes, DEFAULT_MAX_DURATION_MINUTES);
    }
}
