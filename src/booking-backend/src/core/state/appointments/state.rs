// src/core/state/appointments/state.rs
pub mod state {
    use std::cell::RefCell;
    use ic_stable_structures::memory_manager::MemoryId;
    use ic_stable_structures::{StableBTreeMap, StableVec};

    use crate::core::state::appointments::types::{Appointment, AppointmentID};
    use crate::{Memory, MEMORY_MANAGER};

    pub const APPOINTMENTS_BY_ID_MEMORY_ID: MemoryId = MemoryId::new(10);
    pub const APPOINTMENTS_BY_TIME_LIST_MEMORY_ID: MemoryId = MemoryId::new(11);

    thread_local! {
        pub(crate) static APPOINTMENTS_BY_ID_HASHTABLE: RefCell<StableBTreeMap<AppointmentID, Appointment, Memory>> = RefCell::new(
            StableBTreeMap::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(APPOINTMENTS_BY_ID_MEMORY_ID))
            )
        );
        pub(crate) static APPOINTMENTS_BY_TIME_LIST: RefCell<StableVec<AppointmentID, Memory>> = RefCell::new(
            StableVec::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(APPOINTMENTS_BY_TIME_LIST_MEMORY_ID))
            ).expect("Failed to initialize APPOINTMENTS_BY_TIME_LIST")
        );
    }

    pub fn initialize() {
        APPOINTMENTS_BY_ID_HASHTABLE.with(|_| {});
        APPOINTMENTS_BY_TIME_LIST.with(|_| {});
    }

    pub fn get_appointment(id: &AppointmentID) -> Option<Appointment> {
        APPOINTMENTS_BY_ID_HASHTABLE.with(|map| map.borrow().get(id))
    }

    pub fn appointment_exists(id: &AppointmentID) -> bool {
        APPOINTMENTS_BY_ID_HASHTABLE.with(|map| map.borrow().contains_key(id))
    }

    pub fn insert_new_appointment(appointment: &Appointment) {
        APPOINTMENTS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(appointment.id.clone(), appointment.clone());
        });
        APPOINTMENTS_BY_TIME_LIST.with(|list| {
            list.borrow_mut()
                .push(&appointment.id)
                .expect("Failed to append to APPOINTMENTS_BY_TIME_LIST");
        });
    }

    pub fn save_appointment(appointment: &Appointment) {
        APPOINTMENTS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(appointment.id.clone(), appointment.clone());
        });
    }

    /// Appointments matching `predicate`, in creation order.
    pub fn collect_in_order<F>(predicate: F) -> Vec<Appointment>
    where
        F: Fn(&Appointment) -> bool,
    {
        APPOINTMENTS_BY_TIME_LIST.with(|list| {
            let list = list.borrow();
            APPOINTMENTS_BY_ID_HASHTABLE.with(|map| {
                let map = map.borrow();
                list.iter()
                    .filter_map(|id| map.get(&id))
                    .filter(|appointment| predicate(appointment))
                    .collect()
            })
        })
    }
}
