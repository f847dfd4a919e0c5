//! Result extension trait for logging errors with context.

use std::fmt::Display;
use tracing::error;

/// Extension trait for logging errors with context.
///
/// Adds a `log` method to `Result` that emits a tracing error event with
/// the context message and the caller's source location.
pub trait ResultExt<T, E> {
    /// Log the error with context if this is an `Err` variant.
    ///
    /// Returns the original `Result` unchanged.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use eticket::result_ext::ResultExt;
    ///
    /// let result: Result<i32, &str> = Err("relation \"events\" does not exist");
    /// let _ = result.log("listing events");
    /// ```
    fn log<S: ToString>(self, context: S) -> Result<T, E>;
}

impl<T, E: Display> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    fn log<S: ToString>(self, context: S) -> Result<T, E> {
        if let Err(ref e) = self {
            let caller_location = std::panic::Location::caller();
            error!(
                target: "eticket",
                error = %e,
                file = %format!("{}:{}", caller_location.file(), caller_location.line()),
                context = %context.to_string(),
                "Operation failed"
            );
        }
        self
    }
}
