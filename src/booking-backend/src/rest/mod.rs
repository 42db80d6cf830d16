// src/rest/mod.rs

// general imports
pub mod router;
pub mod helpers;
pub mod types;

// rest route imports
pub mod appointments;
pub mod bookings;
pub mod customers;
