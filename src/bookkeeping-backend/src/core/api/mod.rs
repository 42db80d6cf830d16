// src/core/api/mod.rs
pub mod bookkeeping;
pub mod uuid;
