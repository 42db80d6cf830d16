// src/core/types.rs
use std::{borrow::Cow, fmt};
use candid::{CandidType, Principal};
use ic_stable_structures::{storable::Bound, Storable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, CandidType, PartialOrd, Ord)]
pub struct UserID(pub String);

impl Storable for UserID {
    const BOUND: Bound = Bound::Bounded {
        max_size: 256,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<[u8]> {
        let mut bytes = vec![];
        ciborium::ser::into_writer(self, &mut bytes)
            .expect("Failed to serialize UserID");
        Cow::Owned(bytes)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize UserID")
    }
}

impl fmt::Display for UserID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl UserID {
    pub fn from_principal(principal: &Principal) -> Self {
        UserID(format!("{}{}", IDPrefix::User.as_str(), principal.to_text()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IDPrefix {
    User,
    Transaction,
}

impl IDPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            IDPrefix::User => "UserID_",
            IDPrefix::Transaction => "TransactionID_",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub enum LedgerError {
    NotFound(String),
    AlreadyExists(String),
    InsufficientFunds(String),
    InvalidPayload(String),
    Unauthorized(String),
}

impl LedgerError {
    pub fn status_code(&self) -> u16 {
        match self {
            LedgerError::NotFound(_) => 404,
            LedgerError::AlreadyExists(_) => 409,
            LedgerError::InsufficientFunds(_) => 422,
            LedgerError::InvalidPayload(_) => 400,
            LedgerError::Unauthorized(_) => 401,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LedgerError::NotFound(msg)
            | LedgerError::AlreadyExists(msg)
            | LedgerError::InsufficientFunds(msg)
            | LedgerError::InvalidPayload(msg)
            | LedgerError::Unauthorized(msg) => msg,
        }
    }
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            LedgerError::NotFound(_) => "NotFound",
            LedgerError::AlreadyExists(_) => "AlreadyExists",
            LedgerError::InsufficientFunds(_) => "InsufficientFunds",
            LedgerError::InvalidPayload(_) => "InvalidPayload",
            LedgerError::Unauthorized(_) => "Unauthorized",
        };
        write!(f, "{}: {}", kind, self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_id_carries_prefix_and_principal_text() {
        let principal = Principal::from_slice(&[1, 2, 3]);
        let user_id = UserID::from_principal(&principal);
        assert_eq!(user_id.0, format!("UserID_{}", principal.to_text()));
    }

    #[test]
    fn user_id_storable_roundtrip_is_lossless() {
        let user_id = UserID("UserID_aaaaa-aa".to_string());
        let bytes = user_id.to_bytes();
        assert_eq!(UserID::from_bytes(bytes), user_id);
    }

    #[test]
    fn ledger_error_display_names_variant() {
        let err = LedgerError::InsufficientFunds("not enough".to_string());
        assert_eq!(err.to_string(), "InsufficientFunds: not enough");
        assert_eq!(err.status_code(), 422);
    }
}
