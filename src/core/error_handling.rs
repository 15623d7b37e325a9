//! Generic error reporting
//!
//! Every failure that ends a run goes through [`log_error_with_context`], which
//! decides between a specific user message and a generic operation context.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (a wrong project name, a malformed version in the
/// metadata file, a bad configuration value) carry a message the user can act
/// on. System errors (I/O failures) are reported with the operation context and
/// leave the detail to debug logging.
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`; otherwise it should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error has a message that should be shown directly
    fn is_user_actionable(&self) -> bool;

    /// The specific user message for user-actionable errors
    fn user_message(&self) -> Option<String>;
}

/// Primary line reported for a fatal error
pub fn fatal_message<E: ContextualError + ?Sized>(error: &E, operation_context: &str) -> String {
    match (error.is_user_actionable(), error.user_message()) {
        (true, Some(user_msg)) => format!("FATAL: {}", user_msg),
        _ => format!("FATAL: {}: {}", operation_context, error),
    }
}

/// Log a fatal error with the level of detail appropriate to its kind
///
/// # Examples
/// ```rust,no_run
/// # use appverinc::core::error_handling::log_error_with_context;
/// # use appverinc::core::validation::ValidationError;
/// let err = ValidationError::new("Release mode at index 0 cannot be empty");
/// log_error_with_context(&err, "Argument validation");
/// // Logs: "FATAL: Release mode at index 0 cannot be empty"
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("{}", fatal_message(error, operation_context));

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        log::debug!("CAUSED BY: {}", cause);
        source = cause.source();
    }
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
