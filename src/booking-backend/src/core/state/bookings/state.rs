// src/core/state/bookings/state.rs
pub mod state {
    use std::cell::RefCell;
    use ic_stable_structures::memory_manager::MemoryId;
    use ic_stable_structures::{StableBTreeMap, StableCell};

    use crate::core::state::bookings::types::{Booking, BookingID};
    use crate::core::state::customers::types::CustomerID;
    use crate::{Memory, MEMORY_MANAGER};

    pub const BOOKINGS_BY_ID_MEMORY_ID: MemoryId = MemoryId::new(30);
    pub const BOOKINGS_BY_CUSTOMER_MEMORY_ID: MemoryId = MemoryId::new(31);
    pub const BOOKINGS_SEQUENCE_MEMORY_ID: MemoryId = MemoryId::new(32);

    thread_local! {
        pub(crate) static BOOKINGS_BY_ID_HASHTABLE: RefCell<StableBTreeMap<BookingID, Booking, Memory>> = RefCell::new(
            StableBTreeMap::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(BOOKINGS_BY_ID_MEMORY_ID))
            )
        );
        // (customer, sequence) -> booking, one entry per booking so a range scan yields oldest first
        pub(crate) static BOOKINGS_BY_CUSTOMER_HASHTABLE: RefCell<StableBTreeMap<(CustomerID, u64), BookingID, Memory>> = RefCell::new(
            StableBTreeMap::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(BOOKINGS_BY_CUSTOMER_MEMORY_ID))
            )
        );
        pub(crate) static BOOKINGS_SEQUENCE: RefCell<StableCell<u64, Memory>> = RefCell::new(
            StableCell::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(BOOKINGS_SEQUENCE_MEMORY_ID)),
                0
            ).expect("Failed to initialize BOOKINGS_SEQUENCE")
        );
    }

    pub fn initialize() {
        BOOKINGS_BY_ID_HASHTABLE.with(|_| {});
        BOOKINGS_BY_CUSTOMER_HASHTABLE.with(|_| {});
        BOOKINGS_SEQUENCE.with(|_| {});
    }

    fn next_sequence() -> u64 {
        BOOKINGS_SEQUENCE.with(|cell| {
            let mut cell = cell.borrow_mut();
            let current = *cell.get();
            cell.set(current + 1).expect("Failed to bump BOOKINGS_SEQUENCE");
            current
        })
    }

    pub fn get_booking(id: &BookingID) -> Option<Booking> {
        BOOKINGS_BY_ID_HASHTABLE.with(|map| map.borrow().get(id))
    }

    pub fn booking_exists(id: &BookingID) -> bool {
        BOOKINGS_BY_ID_HASHTABLE.with(|map| map.borrow().contains_key(id))
    }

    pub fn insert_new_booking(booking: &Booking) {
        BOOKINGS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(booking.id.clone(), booking.clone());
        });
        let sequence = next_sequence();
        BOOKINGS_BY_CUSTOMER_HASHTABLE.with(|map| {
            map.borrow_mut().insert((booking.customer_id.clone(), sequence), booking.id.clone());
        });
    }

    pub fn save_booking(booking: &Booking) {
        BOOKINGS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(booking.id.clone(), booking.clone());
        });
    }

    pub fn bookings_for_customer(customer_id: &CustomerID) -> Vec<Booking> {
        let ids: Vec<BookingID> = BOOKINGS_BY_CUSTOMER_HASHTABLE.with(|map| {
            map.borrow()
                .range((customer_id.clone(), 0)..=(customer_id.clone(), u64::MAX))
                .map(|(_, booking_id)| booking_id)
                .collect()
        });
        BOOKINGS_BY_ID_HASHTABLE.with(|map| {
            let map = map.borrow();
            ids.iter().filter_map(|id| map.get(id)).collect()
        })
    }
}
