// src/core/state/customers/state.rs
pub mod state {
    use std::cell::RefCell;
    use ic_stable_structures::memory_manager::MemoryId;
    use ic_stable_structures::StableBTreeMap;

    use crate::core::state::customers::types::{Customer, CustomerEmailKey, CustomerID};
    use crate::{Memory, MEMORY_MANAGER};

    pub const CUSTOMERS_BY_ID_MEMORY_ID: MemoryId = MemoryId::new(20);
    pub const CUSTOMERS_BY_EMAIL_MEMORY_ID: MemoryId = MemoryId::new(21);

    thread_local! {
        pub(crate) static CUSTOMERS_BY_ID_HASHTABLE: RefCell<StableBTreeMap<CustomerID, Customer, Memory>> = RefCell::new(
            StableBTreeMap::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(CUSTOMERS_BY_ID_MEMORY_ID))
            )
        );
        // secondary index, emails are unique per canister
        pub(crate) static CUSTOMERS_BY_EMAIL_HASHTABLE: RefCell<StableBTreeMap<CustomerEmailKey, CustomerID, Memory>> = RefCell::new(
            StableBTreeMap::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(CUSTOMERS_BY_EMAIL_MEMORY_ID))
            )
        );
    }

    pub fn initialize() {
        CUSTOMERS_BY_ID_HASHTABLE.with(|_| {});
        CUSTOMERS_BY_EMAIL_HASHTABLE.with(|_| {});
    }

    pub fn get_customer(id: &CustomerID) -> Option<Customer> {
        CUSTOMERS_BY_ID_HASHTABLE.with(|map| map.borrow().get(id))
    }

    pub fn customer_exists(id: &CustomerID) -> bool {
        CUSTOMERS_BY_ID_HASHTABLE.with(|map| map.borrow().contains_key(id))
    }

    pub fn get_customer_id_by_email(email: &str) -> Option<CustomerID> {
        let key = CustomerEmailKey::from_email(email);
        CUSTOMERS_BY_EMAIL_HASHTABLE.with(|map| map.borrow().get(&key))
    }

    pub fn insert_new_customer(customer: &Customer) {
        CUSTOMERS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(customer.id.clone(), customer.clone());
        });
        CUSTOMERS_BY_EMAIL_HASHTABLE.with(|map| {
            map.borrow_mut().insert(CustomerEmailKey::from_email(&customer.email), customer.id.clone());
        });
    }
}
