//! User-visible notices.
//!
//! In the browser a notice is a blocking `alert`. Natively it is only logged.

/// Show a one-line notice to the user.
pub fn notify(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("{message}");
    }
}
