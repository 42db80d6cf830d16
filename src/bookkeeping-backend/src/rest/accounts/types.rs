// src/rest/accounts/types.rs
use crate::{core::state::accounts::types::Account, rest::types::ApiResponse};

pub type GetAccountResponse<'a> = ApiResponse<'a, Account>;
