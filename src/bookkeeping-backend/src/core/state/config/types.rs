// src/core/state/config/types.rs
use std::borrow::Cow;
use candid::CandidType;
use ic_stable_structures::{storable::Bound, Storable};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub struct LedgerConfig {
    pub default_currency: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Storable for LedgerConfig {
    const BOUND: Bound = Bound::Bounded {
        max_size: 1024,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<[u8]> {
        let mut bytes = vec![];
        ciborium::ser::into_writer(self, &mut bytes)
            .expect("Failed to serialize LedgerConfig");
        Cow::Owned(bytes)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize LedgerConfig")
    }
}
