/// Conditional logging for development builds
///
/// The `log!` macro writes informational messages to the browser console in
/// debug builds or when the `console_logging` feature is enabled. Release builds
/// and native test builds compile it out. Warnings and errors go through
/// `leptos::logging::warn!` and `leptos::logging::error!` instead.
///
/// # Examples
///
/// ```ignore
/// use crate::logging::log;
///
/// log!("Loaded {} performances", count);
/// ```
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging")))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
        #[cfg(not(all(target_arch = "wasm32", any(debug_assertions, feature = "console_logging"))))]
        {
            let _ = ($(&$arg),+);
        }
    };
}

pub(crate) use log;
