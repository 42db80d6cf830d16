// src/rest/appointments/types.rs
use std::collections::HashMap;
use serde::Serialize;

use crate::{core::state::appointments::types::Appointment, rest::types::{ApiResponse, ValidationError}};

/// `?available=true|false`, absent means every appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAppointmentsQuery {
    pub available: Option<bool>,
}

impl ListAppointmentsQuery {
    pub fn from_query_map(query: &HashMap<String, String>) -> Result<Self, ValidationError> {
        let available = match query.get("available").map(|value| value.to_ascii_lowercase()) {
            None => None,
            Some(value) if value == "true" => Some(true),
            Some(value) if value == "false" => Some(false),
            Some(_) => {
                return Err(ValidationError {
                    field: "available".to_string(),
                    message: "available must be true or false".to_string(),
                })
            }
        };
        Ok(ListAppointmentsQuery { available })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListAppointmentsResponseData {
    pub items: Vec<Appointment>,
    pub total: usize,
}

pub type GetAppointmentResponse<'a> = ApiResponse<'a, Appointment>;
pub type ListAppointmentsResponse<'a> = ApiResponse<'a, ListAppointmentsResponseData>;
