// src/core/state/mod.rs
pub mod accounts;
pub mod config;
pub mod transactions;
