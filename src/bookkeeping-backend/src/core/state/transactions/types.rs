// src/core/state/transactions/types.rs
use std::{borrow::Cow, fmt, str::FromStr};
use candid::{CandidType, Principal};
use ic_stable_structures::{storable::Bound, Storable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, CandidType, Ord, PartialOrd)]
pub struct TransactionID(pub String);

impl fmt::Display for TransactionID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Storable for TransactionID {
    const BOUND: Bound = Bound::Bounded {
        max_size: 256,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<[u8]> {
        let mut bytes = vec![];
        ciborium::ser::into_writer(self, &mut bytes)
            .expect("Failed to serialize TransactionID");
        Cow::Owned(bytes)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize TransactionID")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, CandidType)]
pub enum TransactionType {
    Credit,
    Debit,
    Cash,
    Bank,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "Credit"),
            TransactionType::Debit => write!(f, "Debit"),
            TransactionType::Cash => write!(f, "Cash"),
            TransactionType::Bank => write!(f, "Bank"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit" => Ok(TransactionType::Credit),
            "debit" => Ok(TransactionType::Debit),
            "cash" => Ok(TransactionType::Cash),
            "bank" => Ok(TransactionType::Bank),
            other => Err(format!("Unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub struct Transaction {
    pub id: TransactionID,
    pub from: Principal,
    pub to: Principal,
    pub amount: u64,
    pub currency: String,
    pub transaction_type: TransactionType,
    pub timestamp_ms: u64,
    pub description: String,
}

impl Transaction {
    pub fn involves(&self, principal: &Principal) -> bool {
        self.from == *principal || self.to == *principal
    }
}

impl Storable for Transaction {
    const BOUND: Bound = Bound::Bounded {
        max_size: 256 * 256,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<[u8]> {
        let mut bytes = vec![];
        ciborium::ser::into_writer(self, &mut bytes)
            .expect("Failed to serialize Transaction");
        Cow::Owned(bytes)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize Transaction")
    }
}
