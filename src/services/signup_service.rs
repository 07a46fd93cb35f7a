use tracing::info;

use crate::database::ActivityDirectory;
use crate::error::DirectoryError;

pub fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let roster_size = directory.signup(activity_name, email)?;
    info!(activity = %activity_name, email = %email, roster_size, "signup_ok");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let roster_size = directory.unregister(activity_name, email)?;
    info!(activity = %activity_name, email = %email, roster_size, "unregister_ok");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_message_names_email_and_activity() {
        let dir = ActivityDirectory::seeded();
        let msg = signup(&dir, "Chess Club", "new@mergington.edu").unwrap();
        assert_eq!(msg, "Signed up new@mergington.edu for Chess Club");
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let dir = ActivityDirectory::seeded();
        let msg = unregister(&dir, "Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(msg, "Unregistered michael@mergington.edu from Chess Club");
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let dir = ActivityDirectory::seeded();
        assert_eq!(
            signup(&dir, "Nope", "x@y").unwrap_err(),
            DirectoryError::NotFound("Nope".to_string())
        );
        assert!(matches!(
            unregister(&dir, "Chess Club", "x@y").unwrap_err(),
            DirectoryError::NotEnrolled { .. }
        ));
    }
}
