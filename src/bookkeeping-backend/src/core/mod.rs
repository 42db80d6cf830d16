// src/core/mod.rs
pub mod api;
pub mod state;
pub mod types;
