// src/core/state/appointments/types.rs
use std::{borrow::Cow, fmt};
use candid::{CandidType, Principal};
use ic_stable_structures::{storable::Bound, Storable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, CandidType, Ord, PartialOrd)]
pub struct AppointmentID(pub String);

impl fmt::Display for AppointmentID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Storable for AppointmentID {
    const BOUND: Bound = Bound::Bounded {
        max_size: 256,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<[u8]> {
        let mut bytes = vec![];
        ciborium::ser::into_writer(self, &mut bytes)
            .expect("Failed to serialize AppointmentID");
        Cow::Owned(bytes)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize AppointmentID")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CandidType)]
pub struct Appointment {
    pub id: AppointmentID,
    pub title: String,
    pub description: String,
    pub date: u64,
    pub duration: u64, // minutes
    pub available: bool,
    pub provider: Principal,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Storable for Appointment {
    const BOUND: Bound = Bound::Bounded {
        max_size: 256 * 256,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<[u8]> {
        let mut bytes = vec![];
        ciborium::ser::into_writer(self, &mut bytes)
            .expect("Failed to serialize Appointment");
        Cow::Owned(bytes)
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        ciborium::de::from_reader(bytes.as_ref())
            .expect("Failed to deserialize Appointment")
    }
}
