pub mod handler;
pub mod route;
pub mod types;
