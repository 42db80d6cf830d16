// src/rest/bookings/types.rs
use serde::Serialize;

use crate::{core::state::bookings::types::Booking, rest::types::ApiResponse};

#[derive(Debug, Clone, Serialize)]
pub struct ListBookingsResponseData {
    pub items: Vec<Booking>,
    pub total: usize,
}

pub type GetBookingResponse<'a> = ApiResponse<'a, Booking>;
pub type ListBookingsResponse<'a> = ApiResponse<'a, ListBookingsResponseData>;
