// src/rest/customers/types.rs
use crate::{core::state::customers::types::Customer, rest::types::ApiResponse};

pub type GetCustomerResponse<'a> = ApiResponse<'a, Customer>;
