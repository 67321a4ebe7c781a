use crate::error::DashError;
use tracing::debug;

pub mod alarms;
pub mod dashboard;
pub mod notes;
pub mod quick_links;
pub mod reminders;
pub mod schoology;
pub mod timers;

/// Rejected input is a silent no-op for the browser: it is logged and the redirect still
/// happens. Any other failure propagates.
pub(crate) fn ignore_rejected(kind: &'static str, res: Result<i64, DashError>) -> Result<(), DashError> {
    match res {
        Ok(id) => {
            debug!(kind, id, "record added");
            Ok(())
        }
        Err(DashError::Validation(reason)) => {
            debug!(kind, %reason, "add skipped");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn only_validation_failures_are_swallowed() {
        assert!(ignore_rejected("note", Ok(7)).is_ok());
        assert!(
            ignore_rejected("note", Err(ValidationError::EmptyField("title").into())).is_ok()
        );
        let err = ignore_rejected("note", Err(DashError::RactorError("gone".to_string())))
            .expect_err("infrastructure errors propagate");
        assert!(!err.is_validation());
    }
}
