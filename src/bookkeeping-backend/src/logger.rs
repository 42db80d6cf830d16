// src/logger.rs
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ic_cdk::api::print(format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ::std::eprintln!($($arg)*);
        }
    }};
}
