//! Errors raised by the activity directory.

use http::StatusCode;
use thiserror::Error;

/// Why a signup or unregister request was refused.
///
/// Every variant is terminal for the request and leaves the roster untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// No activity with this exact name exists.
    #[error("Activity not found")]
    NotFound(String),

    /// The email is already on the roster.
    #[error("Student is already signed up")]
    AlreadyEnrolled { activity: String, email: String },

    /// The email is not on the roster.
    #[error("Student is not signed up for this activity")]
    NotEnrolled { activity: String, email: String },

    /// The roster has reached `max_participants`. Only raised when capacity
    /// enforcement is switched on.
    #[error("Activity is full")]
    ActivityFull { activity: String, max_participants: u32 },
}

impl DirectoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::AlreadyEnrolled { .. }
            | DirectoryError::NotEnrolled { .. }
            | DirectoryError::ActivityFull { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn activity(&self) -> &str {
        match self {
            DirectoryError::NotFound(activity)
            | DirectoryError::AlreadyEnrolled { activity, .. }
            | DirectoryError::NotEnrolled { activity, .. }
            | DirectoryError::ActivityFull { activity, .. } => activity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_activity_maps_to_404() {
        let err = DirectoryError::NotFound("Knitting".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.activity(), "Knitting");
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[test]
    fn roster_state_mismatches_map_to_400() {
        let errs = [
            DirectoryError::AlreadyEnrolled {
                activity: "Chess Club".to_string(),
                email: "a@mergington.edu".to_string(),
            },
            DirectoryError::NotEnrolled {
                activity: "Chess Club".to_string(),
                email: "a@mergington.edu".to_string(),
            },
            DirectoryError::ActivityFull {
                activity: "Chess Club".to_string(),
                max_participants: 12,
            },
        ];
        for err in errs {
            assert_eq!(err.status(), StatusCode::BAD_REQUEST, "{err:?}");
            assert_eq!(err.activity(), "Chess Club");
        }
    }
}
