use serde::Serialize;
use tracing::{info, warn};

use crate::database::{ActivityStore, StoreResult};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SignupMessage {
    pub message: String,
}

pub fn sign_up(store: &ActivityStore, activity: &str, email: &str) -> StoreResult<SignupMessage> {
    match store.add_participant(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "participant_signed_up");
            Ok(SignupMessage {
                message: format!("Signed up {} for {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, reason = %e, "signup_rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    store: &ActivityStore,
    activity: &str,
    email: &str,
) -> StoreResult<SignupMessage> {
    match store.remove_participant(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "participant_removed");
            Ok(SignupMessage {
                message: format!("Removed {} from {}", email, activity),
            })
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, reason = %e, "removal_rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::StoreError;

    #[test]
    fn sign_up_message_names_email_and_activity() {
        let store = ActivityStore::seeded();
        let msg = sign_up(&store, "Drama Club", "newstudent@mergington.edu").expect("signup");
        assert_eq!(msg.message, "Signed up newstudent@mergington.edu for Drama Club");
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let store = ActivityStore::seeded();
        let msg = unregister(&store, "Drama Club", "ava@mergington.edu").expect("remove");
        assert_eq!(msg.message, "Removed ava@mergington.edu from Drama Club");
    }

    #[test]
    fn errors_pass_through_unchanged() {
        let store = ActivityStore::seeded();
        assert_eq!(
            sign_up(&store, "Drama Club", "ava@mergington.edu"),
            Err(StoreError::AlreadyRegistered)
        );
        assert_eq!(
            unregister(&store, "Nope", "ava@mergington.edu"),
            Err(StoreError::NotFound)
        );
    }
}
