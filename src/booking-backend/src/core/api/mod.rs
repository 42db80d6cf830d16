// src/core/api/mod.rs
pub mod booking;
pub mod uuid;
