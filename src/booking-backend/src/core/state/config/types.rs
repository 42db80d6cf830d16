// src/core/state/config/types.rs
use std::borrow::Cow;
use candid::CandidType;
use ic_stable_structures::{storable::Bound, Storable};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DURATION_MINUTES: u64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub struct BookingConfig {
    pub max_duration_minutes: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            max_duration_minutes: DEFAULT_MAX_DURATION_MINUTES,
        }
    }
}

impl Storable for BookingConfig {
    const BOUND: Bound = Bound::Bounded {
        max_size: 256,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<[u8]> {
        let mut bytes = vec![];
        ciborium::ser::into_writer(self, &mut bytes)
            .expect("Failed to serialize BookingConfig");
        Cow::Owned(bytes)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize BookingConfig")
    }
}
