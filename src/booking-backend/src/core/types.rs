// src/core/types.rs
use std::fmt;
use candid::CandidType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IDPrefix {
    Appointment,
    Customer,
    Booking,
}

impl IDPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            IDPrefix::Appointment => "AppointmentID_",
            IDPrefix::Customer => "CustomerID_",
            IDPrefix::Booking => "BookingID_",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub enum BookingError {
    NotFound(String),
    AlreadyExists(String),
    Unavailable(String),
    InvalidPayload(String),
    Unauthorized(String),
}

impl BookingError {
    pub fn status_code(&self) -> u16 {
        match self {
            BookingError::NotFound(_) => 404,
            BookingError::AlreadyExists(_) => 409,
            BookingError::Unavailable(_) => 409,
            BookingError::InvalidPayload(_) => 400,
            BookingError::Unauthorized(_) => 401,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            BookingError::NotFound(msg)
            | BookingError::AlreadyExists(msg)
            | BookingError::Unavailable(msg)
            | BookingError::InvalidPayload(msg)
            | BookingError::Unauthorized(msg) => msg,
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            BookingError::NotFound(_) => "NotFound",
            BookingError::AlreadyExists(_) => "AlreadyExists",
            BookingError::Unavailable(_) => "Unavailable",
            BookingError::InvalidPayload(_) => "InvalidPayload",
            BookingError::Unauthorized(_) => "Unauthorized",
        };
        write!(f, "{}: {}", kind, self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unavailable_maps_to_conflict() {
        let err = BookingError::Unavailable("Appointment is not available".to_string());
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.to_string(), "Unavailable: Appointment is not available");
    }

    #[test]
    fn prefixes_are_distinct() {
        assert_eq!(IDPrefix::Appointment.as_str(), "AppointmentID_");
        assert_ne!(IDPrefix::Customer.as_str(), IDPrefix::Booking.as_str());
    }
}
