// src/core/state/config/state.rs
pub mod state {
    use std::cell::RefCell;
    use ic_stable_structures::memory_manager::MemoryId;
    use ic_stable_structures::StableCell;

    use crate::core::state::config::types::LedgerConfig;
    use crate::{debug_log, Memory, MEMORY_MANAGER};

    pub const CONFIG_MEMORY_ID: MemoryId = MemoryId::new(1);
    pub const VERSION_MEMORY_ID: MemoryId = MemoryId::new(2);
    pub const UUID_NONCE_MEMORY_ID: MemoryId = MemoryId::new(3);

    pub const CURRENT_VERSION: &str = "Bookkeeping.0.1.0";

    thread_local! {
        pub(crate) static CONFIG: RefCell<StableCell<LedgerConfig, Memory>> = RefCell::new(
            StableCell::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(CONFIG_MEMORY_ID)),
                LedgerConfig::default()
            ).expect("Failed to initialize CONFIG")
        );

        pub(crate) static VERSION: RefCell<StableCell<String, Memory>> = RefCell::new(
            StableCell::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(VERSION_MEMORY_ID)),
                CURRENT_VERSION.to_string()
            ).expect("Failed to initialize VERSION")
        );

        // monotonic across upgrades, feeds id generation
        pub(crate) static GLOBAL_UUID_NONCE: RefCell<StableCell<u64, Memory>> = RefCell::new(
            StableCell::init(
                MEMORY_MANAGER.with(|m| m.borrow().get(UUID_NONCE_MEMORY_ID)),
                0
            ).expect("Failed to initialize GLOBAL_UUID_NONCE")
        );
    }

    pub fn initialize() {
        // Force thread_locals in this module to initialize
        CONFIG.with(|_| {});
        VERSION.with(|_| {});
        GLOBAL_UUID_NONCE.with(|_| {});
    }

    pub fn get_config() -> LedgerConfig {
        CONFIG.with(|cell| cell.borrow().get().clone())
    }

    pub fn set_config(config: LedgerConfig) {
        debug_log!("Setting ledger config: {:?}", config);
        CONFIG.with(|cell| {
            cell.borrow_mut()
                .set(config)
                .expect("Failed to write CONFIG");
        });
    }

    pub fn get_version() -> String {
        VERSION.with(|cell| cell.borrow().get().clone())
    }

    pub fn set_version(version: &str) {
        VERSION.with(|cell| {
            cell.borrow_mut()
                .set(version.to_string())
                .expect("Failed to write VERSION");
        });
    }

    pub fn next_nonce() -> u64 {
        GLOBAL_UUID_NONCE.with(|cell| {
            let mut cell = cell.borrow_mut();
            let current = *cell.get();
            cell.set(current + 1).expect("Failed to bump GLOBAL_UUID_NONCE");
            current
        })
    }
}
