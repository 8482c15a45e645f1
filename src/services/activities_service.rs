use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn list_activities(store: &ActivityStore) -> IndexMap<String, Activity> {
    store.read(|repo| repo.list_activities())
}

pub fn signup_for_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    // Capacity is advertised only; a negative count just means the roster is over it.
    match store.write(|repo| repo.signup(activity_name, email).map(|a| a.spots_left())) {
        Ok(spots_left) => {
            info!(activity = %activity_name, email = %email, spots_left, "signup_ok");
            Ok(MessageResponse {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            info!(activity = %activity_name, error = %e, "signup_rejected");
            Err(e)
        }
    }
}

pub fn unregister_from_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    match store.write(|repo| repo.unregister(activity_name, email)) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister_ok");
            Ok(MessageResponse {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            info!(activity = %activity_name, error = %e, "unregister_rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_message_names_email_and_activity() {
        let store = ActivityStore::seeded();
        let resp = signup_for_activity(&store, "Chess Club", "new@mergington.edu").unwrap();
        assert_eq!(resp.message, "Signed up new@mergington.edu for Chess Club");
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let store = ActivityStore::seeded();
        let resp =
            unregister_from_activity(&store, "Chess Club", "daniel@mergington.edu").unwrap();
        assert_eq!(resp.message, "Unregistered daniel@mergington.edu from Chess Club");
    }

    #[test]
    fn failures_do_not_touch_the_listing() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store);

        assert!(signup_for_activity(&store, "Chess Club", "michael@mergington.edu").is_err());
        assert!(unregister_from_activity(&store, "Chess Club", "ghost@mergington.edu").is_err());
        assert!(signup_for_activity(&store, "Fake Club", "a@mergington.edu").is_err());

        assert_eq!(list_activities(&store), before);
    }
}
