// src/core/state/mod.rs
pub mod appointments;
pub mod bookings;
pub mod config;
pub mod customers;
