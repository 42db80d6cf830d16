// src/core/api/booking.rs
use candid::{CandidType, Principal};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        api::uuid::generate_uuidv4,
        state::{
            appointments::{state::state as appointments_state, types::{Appointment, AppointmentID}},
            bookings::{state::state as bookings_state, types::{Booking, BookingID, BookingStatus}},
            config::state::state::get_config,
            customers::{state::state as customers_state, types::{Customer, CustomerID}},
        },
        types::{BookingError, IDPrefix},
    },
    debug_log,
    rest::types::{
        validate_description, validate_email, validate_phone_number, validate_short_string, ValidationError,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub struct AppointmentDetails {
    pub title: String,
    pub description: String,
    pub date: u64,
    pub duration: u64,
}

impl AppointmentDetails {
    pub fn validate_body(&self, max_duration_minutes: u64) -> Result<(), ValidationError> {
        validate_short_string(&self.title, "title")?;
        validate_description(&self.description, "description")?;
        if self.duration == 0 || self.duration > max_duration_minutes {
            return Err(ValidationError {
                field: "duration".to_string(),
                message: format!("Duration must be between 1 and {} minutes", max_duration_minutes),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl CustomerDetails {
    pub fn validate_body(&self) -> Result<(), ValidationError> {
        validate_short_string(&self.name, "name")?;
        validate_email(&self.email)?;
        validate_phone_number(&self.phone_number)?;
        Ok(())
    }
}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::InvalidPayload(format!("{} - {}", err.field, err.message))
    }
}

fn fresh_id<F>(prefix: IDPrefix, now_ms: u64, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut id = generate_uuidv4(prefix, now_ms);
    while exists(&id) {
        id = generate_uuidv4(prefix, now_ms);
    }
    id
}

pub fn create_appointment(caller: Principal, details: AppointmentDetails, now_ms: u64) -> Result<Appointment, BookingError> {
    details.validate_body(get_config().max_duration_minutes)?;

    let id = AppointmentID(fresh_id(IDPrefix::Appointment, now_ms, |id| {
        appointments_state::appointment_exists(&AppointmentID(id.to_string()))
    }));
    let appointment = Appointment {
        id,
        title: details.title.trim().to_string(),
        description: details.description,
        date: details.date,
        duration: details.duration,
        available: true,
        provider: caller,
        created_at: now_ms,
        updated_at: now_ms,
    };
    appointments_state::insert_new_appointment(&appointment);
    debug_log!("Created appointment {} for provider {}", appointment.id, appointment.provider);
    Ok(appointment)
}

/// Rewrites the descriptive fields of an appointment. Availability belongs to
/// the booking flow and is left as is.
pub fn update_appointment(
    caller: Principal,
    appointment_id: &str,
    details: AppointmentDetails,
    now_ms: u64,
) -> Result<Appointment, BookingError> {
    let mut appointment = get_appointment(appointment_id)?;
    if appointment.provider != caller {
        return Err(BookingError::Unauthorized(
            "Only the provider can update this appointment".to_string(),
        ));
    }
    details.validate_body(get_config().max_duration_minutes)?;

    appointment.title = details.title.trim().to_string();
    appointment.description = details.description;
    appointment.date = details.date;
    appointment.duration = details.duration;
    appointment.updated_at = now_ms;
    appointments_state::save_appointment(&appointment);
    debug_log!("Updated appointment {}", appointment.id);
    Ok(appointment)
}

pub fn get_appointment(appointment_id: &str) -> Result<Appointment, BookingError> {
    appointments_state::get_appointment(&AppointmentID(appointment_id.to_string())).ok_or_else(|| {
        BookingError::NotFound(format!("Appointment with id={} not found", appointment_id))
    })
}

pub fn get_all_appointments() -> Vec<Appointment> {
    appointments_state::collect_in_order(|_| true)
}

pub fn get_available_appointments() -> Vec<Appointment> {
    appointments_state::collect_in_order(|appointment| appointment.available)
}

pub fn register_customer(caller: Principal, details: CustomerDetails, now_ms: u64) -> Result<Customer, BookingError> {
    details.validate_body()?;

    if customers_state::get_customer_id_by_email(&details.email).is_some() {
        return Err(BookingError::AlreadyExists(format!(
            "A customer with email {} is already registered",
            details.email.trim()
        )));
    }

    let id = CustomerID(fresh_id(IDPrefix::Customer, now_ms, |id| {
        customers_state::customer_exists(&CustomerID(id.to_string()))
    }));
    let customer = Customer {
        id,
        name: details.name.trim().to_string(),
        email: details.email.trim().to_string(),
        phone_number: details.phone_number.trim().to_string(),
        principal: caller,
        created_at: now_ms,
    };
    customers_state::insert_new_customer(&customer);
    debug_log!("Registered customer {}", customer.id);
    Ok(customer)
}

pub fn get_customer(customer_id: &str) -> Result<Customer, BookingError> {
    customers_state::get_customer(&CustomerID(customer_id.to_string()))
        .ok_or_else(|| BookingError::NotFound(format!("Customer with id={} not found", customer_id)))
}

pub fn get_customer_by_email(email: &str) -> Result<Customer, BookingError> {
    customers_state::get_customer_id_by_email(email)
        .and_then(|id| customers_state::get_customer(&id))
        .ok_or_else(|| BookingError::NotFound(format!("Customer with email={} not found", email.trim())))
}

/// Takes an available appointment for a customer. Only the principal that
/// registered the customer may book under it. The availability flip and the
/// booking insert happen together after every check has passed.
pub fn book_appointment(caller: Principal, appointment_id: &str, customer_id: &str, now_ms: u64) -> Result<Booking, BookingError> {
    let mut appointment = get_appointment(appointment_id)?;
    let customer = get_customer(customer_id)?;

    if customer.principal != caller {
        return Err(BookingError::Unauthorized(
            "Only the customer can book under this customer id".to_string(),
        ));
    }

    if !appointment.available {
        return Err(BookingError::Unavailable(format!(
            "Appointment with id={} is not available",
            appointment_id
        )));
    }

    let id = BookingID(fresh_id(IDPrefix::Booking, now_ms, |id| {
        bookings_state::booking_exists(&BookingID(id.to_string()))
    }));
    let booking = Booking {
        id,
        appointment_id: appointment.id.clone(),
        customer_id: customer.id,
        status: BookingStatus::Booked,
        created_at: now_ms,
        updated_at: now_ms,
    };

    appointment.available = false;
    appointment.updated_at = now_ms;
    appointments_state::save_appointment(&appointment);
    bookings_state::insert_new_booking(&booking);

    debug_log!("Booked appointment {} for customer {} as {}", booking.appointment_id, booking.customer_id, booking.id);
    Ok(booking)
}

pub fn cancel_booking(caller: Principal, booking_id: &str, now_ms: u64) -> Result<Booking, BookingError> {
    let mut booking = get_booking(booking_id)?;
    if booking.status != BookingStatus::Booked {
        return Err(BookingError::InvalidPayload(format!(
            "Booking with id={} is already {}",
            booking_id, booking.status
        )));
    }

    let mut appointment = appointments_state::get_appointment(&booking.appointment_id).ok_or_else(|| {
        BookingError::NotFound(format!("Appointment with id={} not found", booking.appointment_id))
    })?;
    let customer_principal = customers_state::get_customer(&booking.customer_id).map(|customer| customer.principal);
    if customer_principal != Some(caller) && appointment.provider != caller {
        return Err(BookingError::Unauthorized(
            "Only the customer or the provider can cancel this booking".to_string(),
        ));
    }

    booking.status = BookingStatus::Cancelled;
    booking.updated_at = now_ms;
    appointment.available = true;
    appointment.updated_at = now_ms;
    bookings_state::save_booking(&booking);
    appointments_state::save_appointment(&appointment);

    debug_log!("Cancelled booking {}, appointment {} is open again", booking.id, appointment.id);
    Ok(booking)
}

pub fn get_booking(booking_id: &str) -> Result<Booking, BookingError> {
    bookings_state::get_booking(&BookingID(booking_id.to_string()))
        .ok_or_else(|| BookingError::NotFound(format!("Booking with id={} not found", booking_id)))
}

pub fn get_customer_bookings(customer_id: &str) -> Vec<Booking> {
    bookings_state::bookings_for_customer(&CustomerID(customer_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::config::{state::state::set_config, types::BookingConfig};
    use pretty_assertions::assert_eq;

    const NOW: u64 = 1_700_000_000_000;

    fn provider() -> Principal {
        Principal::from_slice(&[7; 29])
    }

    fn client() -> Principal {
        Principal::from_slice(&[8; 29])
    }

    fn stranger() -> Principal {
        Principal::from_slice(&[9; 29])
    }

    fn details(title: &str, duration: u64) -> AppointmentDetails {
        AppointmentDetails {
            title: title.to_string(),
            description: "Annual check-up".to_string(),
            date: 1_710_000_000_000,
            duration,
        }
    }

    fn customer_details(email: &str) -> CustomerDetails {
        CustomerDetails {
            name: "Ada".to_string(),
            email: email.to_string(),
            phone_number: "+1 555 0100".to_string(),
        }
    }

    fn setup() -> (Appointment, Customer) {
        let appointment = create_appointment(provider(), details("Dentist", 30), NOW).unwrap();
        let customer = register_customer(client(), customer_details("ada@example.com"), NOW).unwrap();
        (appointment, customer)
    }

    #[test]
    fn created_appointment_is_available_and_listed() {
        let appointment = create_appointment(provider(), details("Dentist", 30), NOW).unwrap();
        assert!(appointment.available);
        assert!(appointment.id.0.starts_with("AppointmentID_"));
        assert_eq!(get_appointment(&appointment.id.0), Ok(appointment.clone()));
        assert_eq!(get_all_appointments(), vec![appointment.clone()]);
        assert_eq!(get_available_appointments(), vec![appointment]);
    }

    #[test]
    fn appointment_validation_respects_configured_max_duration() {
        set_config(BookingConfig { max_duration_minutes: 60 });
        assert!(matches!(
            create_appointment(provider(), details("Long", 61), NOW),
            Err(BookingError::InvalidPayload(_))
        ));
        assert!(matches!(
            create_appointment(provider(), details("Zero", 0), NOW),
            Err(BookingError::InvalidPayload(_))
        ));
        assert!(matches!(
            create_appointment(provider(), details("  ", 10), NOW),
            Err(BookingError::InvalidPayload(_))
        ));
        assert!(create_appointment(provider(), details("Ok", 60), NOW).is_ok());
    }

    #[test]
    fn only_provider_updates_and_availability_is_kept() {
        let (appointment, customer) = setup();
        book_appointment(client(), &appointment.id.0, &customer.id.0, NOW).unwrap();

        let err = update_appointment(stranger(), &appointment.id.0, details("Hijack", 10), NOW).unwrap_err();
        assert!(matches!(err, BookingError::Unauthorized(_)));

        let updated = update_appointment(provider(), &appointment.id.0, details("Dentist (moved)", 45), NOW + 5).unwrap();
        assert_eq!(updated.title, "Dentist (moved)");
        assert_eq!(updated.duration, 45);
        assert_eq!(updated.updated_at, NOW + 5);
        assert!(!updated.available);
    }

    #[test]
    fn update_unknown_appointment_is_not_found() {
        let err = update_appointment(provider(), "AppointmentID_missing", details("x", 10), NOW).unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }

    #[test]
    fn customer_emails_are_unique_case_insensitively() {
        register_customer(client(), customer_details("ada@example.com"), NOW).unwrap();
        let err = register_customer(stranger(), customer_details("ADA@Example.com"), NOW).unwrap_err();
        assert!(matches!(err, BookingError::AlreadyExists(_)));

        let found = get_customer_by_email(" Ada@EXAMPLE.com ").unwrap();
        assert_eq!(found.email, "ada@example.com");
        assert_eq!(get_customer(&found.id.0), Ok(found));
    }

    #[test]
    fn invalid_customer_details_are_rejected() {
        assert!(matches!(
            register_customer(client(), customer_details("not-an-email"), NOW),
            Err(BookingError::InvalidPayload(_))
        ));
        let mut bad_phone = customer_details("ada@example.com");
        bad_phone.phone_number = "12".to_string();
        assert!(matches!(register_customer(client(), bad_phone, NOW), Err(BookingError::InvalidPayload(_))));
        assert!(matches!(get_customer_by_email("ada@example.com"), Err(BookingError::NotFound(_))));
    }

    #[test]
    fn booking_takes_the_appointment() {
        let (appointment, customer) = setup();

        let booking = book_appointment(client(), &appointment.id.0, &customer.id.0, NOW + 1).unwrap();
        assert_eq!(booking.status, BookingStatus::Booked);
        assert_eq!(booking.appointment_id, appointment.id);
        assert_eq!(booking.customer_id, customer.id);
        assert_eq!(get_booking(&booking.id.0), Ok(booking.clone()));

        assert!(!get_appointment(&appointment.id.0).unwrap().available);
        assert_eq!(get_available_appointments(), vec![]);
        assert_eq!(get_customer_bookings(&customer.id.0), vec![booking]);
    }

    #[test]
    fn double_booking_is_unavailable() {
        let (appointment, customer) = setup();
        let other = register_customer(stranger(), customer_details("grace@example.com"), NOW).unwrap();

        book_appointment(client(), &appointment.id.0, &customer.id.0, NOW).unwrap();
        let err = book_appointment(stranger(), &appointment.id.0, &other.id.0, NOW).unwrap_err();
        assert!(matches!(err, BookingError::Unavailable(_)));
        assert_eq!(get_customer_bookings(&other.id.0), vec![]);
    }

    #[test]
    fn booking_requires_existing_records_and_writes_nothing_otherwise() {
        let (appointment, customer) = setup();

        assert!(matches!(
            book_appointment(client(), "AppointmentID_missing", &customer.id.0, NOW),
            Err(BookingError::NotFound(_))
        ));
        assert!(matches!(
            book_appointment(client(), &appointment.id.0, "CustomerID_missing", NOW),
            Err(BookingError::NotFound(_))
        ));
        assert!(get_appointment(&appointment.id.0).unwrap().available);
    }

    #[test]
    fn cancel_reopens_the_appointment() {
        let (appointment, customer) = setup();
        let booking = book_appointment(client(), &appointment.id.0, &customer.id.0, NOW).unwrap();

        let cancelled = cancel_booking(client(), &booking.id.0, NOW + 10).unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert_eq!(cancelled.updated_at, NOW + 10);
        assert!(get_appointment(&appointment.id.0).unwrap().available);

        let again = cancel_booking(client(), &booking.id.0, NOW + 11).unwrap_err();
        assert!(matches!(again, BookingError::InvalidPayload(_)));

        // the slot can be taken again
        assert!(book_appointment(client(), &appointment.id.0, &customer.id.0, NOW + 12).is_ok());
        assert_eq!(get_customer_bookings(&customer.id.0).len(), 2);
    }

    #[test]
    fn provider_may_cancel_but_strangers_may_not() {
        let (appointment, customer) = setup();
        let booking = book_appointment(client(), &appointment.id.0, &customer.id.0, NOW).unwrap();

        let err = cancel_booking(stranger(), &booking.id.0, NOW).unwrap_err();
        assert!(matches!(err, BookingError::Unauthorized(_)));
        assert!(!get_appointment(&appointment.id.0).unwrap().available);

        assert!(cancel_booking(provider(), &booking.id.0, NOW).is_ok());
    }

    #[test]
    fn unknown_booking_is_not_found() {
        assert!(matches!(get_booking("BookingID_missing"), Err(BookingError::NotFound(_))));
        assert!(matches!(cancel_booking(client(), "BookingID_missing", NOW), Err(BookingError::NotFound(_))));
    }

    #[test]
    fn booking_under_someone_elses_customer_is_unauthorized() {
        let (appointment, customer) = setup();

        let err = book_appointment(stranger(), &appointment.id.0, &customer.id.0, NOW).unwrap_err();
        assert!(matches!(err, BookingError::Unauthorized(_)));
        assert!(get_appointment(&appointment.id.0).unwrap().available);
        assert_eq!(get_customer_bookings(&customer.id.0), vec![]);
    }

    #[test]
    fn customer_history_survives_thousands_of_rebookings() {
        let (appointment, customer) = setup();

        let cycles: u64 = 2_100;
        for n in 0..cycles {
            let booking = book_appointment(client(), &appointment.id.0, &customer.id.0, NOW + n)
                .unwrap_or_else(|err| panic!("booking #{} failed: {}", n, err));
            cancel_booking(client(), &booking.id.0, NOW + n).unwrap();
        }

        let history = get_customer_bookings(&customer.id.0);
        assert_eq!(history.len() as u64, cycles);
        assert_eq!(history.first().map(|b| b.created_at), Some(NOW));
        assert_eq!(history.last().map(|b| b.created_at), Some(NOW + cycles - 1));
    }
}
