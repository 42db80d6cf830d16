// src/rest/mod.rs

// general imports
pub mod router;
pub mod helpers;
pub mod types;

// rest route imports
pub mod accounts;
pub mod transactions;
