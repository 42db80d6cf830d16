// src/core/state/accounts/state.rs
pub mod state {
    use std::cell::RefCell;
    use candid::Principal;
    use ic_stable_structures::memory_manager::MemoryId;
    use ic_stable_structures::{StableBTreeMap, StableVec};

    use crate::core::state::accounts::types::Account;
    use crate::core::types::UserID;
    use crate::{Memory, MEMORY_MANAGER};

    pub const ACCOUNTS_BY_ID_MEMORY_ID: MemoryId = MemoryId::new(10);
    pub const ACCOUNTS_BY_TIME_LIST_MEMORY_ID: MemoryId = MemoryId::new(11);

    thread_local! {
        // keyed by UserID_<principal>
        pub(crate) static ACCOUNTS_BY_ID_HASHTABLE: RefCell<StableBTreeMap<UserID, Account, Memory>> = RefCell::new(
            StableBTreeMap::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(ACCOUNTS_BY_ID_MEMORY_ID))
            )
        );
        pub(crate) static ACCOUNTS_BY_TIME_LIST: RefCell<StableVec<UserID, Memory>> = RefCell::new(
            StableVec::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(ACCOUNTS_BY_TIME_LIST_MEMORY_ID))
            ).expect("Failed to initialize ACCOUNTS_BY_TIME_LIST")
        );
    }

    pub fn initialize() {
        ACCOUNTS_BY_ID_HASHTABLE.with(|_| {});
        ACCOUNTS_BY_TIME_LIST.with(|_| {});
    }

    pub fn get_account(principal: &Principal) -> Option<Account> {
        let id = UserID::from_principal(principal);
        ACCOUNTS_BY_ID_HASHTABLE.with(|map| map.borrow().get(&id))
    }

    pub fn account_exists(principal: &Principal) -> bool {
        let id = UserID::from_principal(principal);
        ACCOUNTS_BY_ID_HASHTABLE.with(|map| map.borrow().contains_key(&id))
    }

    /// Inserts a brand new account and records it in the creation-order list.
    pub fn insert_new_account(account: &Account) {
        ACCOUNTS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(account.id.clone(), account.clone());
        });
        ACCOUNTS_BY_TIME_LIST.with(|list| {
            list.borrow_mut()
                .push(&account.id)
                .expect("Failed to append to ACCOUNTS_BY_TIME_LIST");
        });
    }

    pub fn save_account(account: &Account) {
        ACCOUNTS_BY_ID_HASHTABLE.with(|map| {
            map.borrow_mut().insert(account.id.clone(), account.clone());
        });
    }

    pub fn account_count() -> u64 {
        ACCOUNTS_BY_TIME_LIST.with(|list| list.borrow().len())
    }
}
