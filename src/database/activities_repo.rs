use indexmap::IndexMap;

use crate::database::seed;
use crate::error::ActivityError;
use crate::models::Activity;

/// In-memory activity catalog keyed by activity name.
///
/// Iteration follows insertion order, so listings come out in seed order.
/// Only participant rosters change after construction; activities are never
/// added or removed at runtime.
#[derive(Debug, Clone, Default)]
pub struct ActivitiesRepo {
    activities: IndexMap<String, Activity>,
}

impl ActivitiesRepo {
    pub fn new(entries: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            activities: entries.into_iter().collect(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn list_activities(&self) -> IndexMap<String, Activity> {
        self.activities.clone()
    }

    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Appends `email` to the roster. No format or capacity checks.
    pub fn signup(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<&Activity, ActivityError> {
        let activity = self.activity_mut(activity_name)?;
        if activity.is_enrolled(email) {
            return Err(ActivityError::AlreadySignedUp {
                activity_name: activity_name.to_string(),
                email: email.to_string(),
            });
        }
        activity.participants.push(email.to_string());
        Ok(activity)
    }

    /// Removes one occurrence of `email`, keeping the order of everyone else.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<(), ActivityError> {
        let activity = self.activity_mut(activity_name)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotSignedUp {
                activity_name: activity_name.to_string(),
                email: email.to_string(),
            });
        };
        activity.participants.remove(pos);
        Ok(())
    }

    fn activity_mut(&mut self, activity_name: &str) -> Result<&mut Activity, ActivityError> {
        self.activities
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::ActivityNotFound {
                activity_name: activity_name.to_string(),
            })
    }
}
