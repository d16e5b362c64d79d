pub mod command;
pub mod domain;
pub mod error;
pub mod incident;
pub mod list;
pub mod manager;
pub mod record;
pub mod store;
pub mod table;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("TRANSITION_UNSUPPORTED", "Cancel is not allowed")
            .with_details("id=1; state=Closed; command=Cancel");
        assert_eq!(err.code, "TRANSITION_UNSUPPORTED");
        assert_eq!(err.to_string(), "[TRANSITION_UNSUPPORTED] Cancel is not allowed");
        assert_eq!(err.details.as_deref(), Some("id=1; state=Closed; command=Cancel"));
        assert!(!err.retryable);
        assert!(err.is("TRANSITION_UNSUPPORTED"));

        let wrapped = AppError::new("STORE_READ_FAILED", "Failed to read incident file")
            .with_retryable(true);
        assert!(wrapped.retryable);
    }
}
