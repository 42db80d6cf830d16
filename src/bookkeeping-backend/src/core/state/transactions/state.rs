// src/core/state/transactions/state.rs
pub mod state {
    use std::cell::RefCell;
    use ic_stable_structures::memory_manager::MemoryId;
    use ic_stable_structures::{StableBTreeMap, StableVec};

    use crate::core::state::transactions::types::{Transaction, TransactionID};
    use crate::{Memory, MEMORY_MANAGER};

    pub const TRANSACTIONS_BY_ID_MEMORY_ID: MemoryId = MemoryId::new(20);
    pub const TRANSACTIONS_BY_TIME_LIST_MEMORY_ID: MemoryId = MemoryId::new(21);

    thread_local! {
        pub(crate) static TRANSACTIONS_BY_ID_HASHTABLE: RefCell<StableBTreeMap<TransactionID, Transaction, Memory>> = RefCell::new(
            StableBTreeMap::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(TRANSACTIONS_BY_ID_MEMORY_ID))
            )
        );
        // insertion order, ids are random so the map alone cannot give it
        pub(crate) static TRANSACTIONS_BY_TIME_LIST: RefCell<StableVec<TransactionID, Memory>> = RefCell::new(
            StableVec::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(TRANSACTIONS_BY_TIME_LIST_MEMORY_ID))
            ).expect("Failed to initialize TRANSACTIONS_BY_TIME_LIST")
        );
    }

    pub fn initialize() {
        TRANSACTIONS_BY_ID_HASHTABLE.with(|_| {});
        TRANSACTIONS_BY_TIME_LIST.with(|_| {});
    }

    pub fn get_transaction(id: &TransactionID) -> Option<Transaction> {
        TRANSACTIONS_BY_ID_HASHTABLE.with(|map| map.borrow().get(id))
    }

    pub fn transaction_exists(id: &TransactionID) -> bool {
        TRANSACTIONS_BY_ID_HASHTABLE.with(|map| map.borrow().contains_key(id))
    }

    pub fn insert_transaction(transaction: &Transaction) {
        TRANSACTIONS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(transaction.id.clone(), transaction.clone());
        });
        TRANSACTIONS_BY_TIME_LIST.with(|list| {
            list.borrow_mut()
                .push(&transaction.id)
                .expect("Failed to append to TRANSACTIONS_BY_TIME_LIST");
        });
    }

    /// Every stored transaction matching `predicate`, oldest first.
    pub fn collect_in_order<F>(predicate: F) -> Vec<Transaction>
    where
        F: Fn(&Transaction) -> bool,
    {
        TRANSACTIONS_BY_TIME_LIST.with(|list| {
            let list = list.borrow();
            TRANSACTIONS_BY_ID_HASHTABLE.with(|map| {
                let map = map.borrow();
                list.iter()
                    .filter_map(|id| map.get(&id))
                    .filter(|transaction| predicate(transaction))
                    .collect()
            })
        })
    }

    pub fn transaction_count() -> u64 {
        TRANSACTIONS_BY_TIME_LIST.with(|list| list.borrow().len())
    }
}
