//! Cross-platform utilities that work in both WASM and native contexts

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        fn log(s: &str);
    }

    pub fn console_log(s: &str) {
        log(s);
    }

    pub fn set_panic_hook() {
        console_error_panic_hook::set_once();
    }

    /// Milliseconds since the epoch.
    pub fn now_millis() -> u64 {
        js_sys::Date::now() as u64
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(future);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native_impl {
    pub fn console_log(s: &str) {
        log::info!("{}", s);
    }

    pub fn set_panic_hook() {
        // env_logger plus the default hook are enough on desktop
    }

    /// Milliseconds since the epoch.
    pub fn now_millis() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    pub fn spawn_async<F>(future: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(future);
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_impl::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native_impl::*;
