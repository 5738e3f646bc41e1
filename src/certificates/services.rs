//! Issuance rules for completion certificates, kept free of storage
//! concerns like the progress and quiz rules.

use crate::error::ApiError;

/// Gate for certificate issuance: every milestone of the path must be
/// complete. Failures report both counts to the caller.
pub fn completion_gate(completed_count: usize, total_count: usize) -> Result<(), ApiError> {
    if completed_count < total_count {
        return Err(ApiError::PreconditionFailed(format!(
            "Path not completed. {completed_count}/{total_count} milestones done."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_path_is_rejected_with_both_counts() {
        let err = completion_gate(3, 6).unwrap_err();
        match err {
            ApiError::PreconditionFailed(msg) => {
                assert_eq!(msg, "Path not completed. 3/6 milestones done.");
            }
            other => panic!("expected PreconditionFailed, got {other:?}"),
        }
    }

    #[test]
    fn one_milestone_short_is_still_rejected() {
        assert!(completion_gate(5, 6).is_err());
        assert!(completion_gate(0, 1).is_err());
    }

    #[test]
    fn full_completion_passes() {
        assert!(completion_gate(6, 6).is_ok());
        assert!(completion_gate(1, 1).is_ok());
    }
}
