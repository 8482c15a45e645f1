use serde::{Deserialize, Serialize};

// One extracurricular activity. The name is the catalog key and is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Exact, case-sensitive membership check.
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Advertised capacity minus the current roster size. Goes negative once a
    /// roster grows past `max_participants`, which signups are allowed to do.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        )
    }

    #[test]
    fn membership_is_case_sensitive() {
        let activity = chess();
        assert!(activity.is_enrolled("michael@mergington.edu"));
        assert!(!activity.is_enrolled("Michael@mergington.edu"));
        assert!(!activity.is_enrolled(""));
    }

    #[test]
    fn spots_left_can_go_negative() {
        let mut activity = chess();
        assert_eq!(activity.spots_left(), 10);

        activity.max_participants = 1;
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn serializes_to_the_public_json_shape() {
        let value = serde_json::to_value(chess()).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 4);
        assert_eq!(obj["max_participants"], 12);
        assert_eq!(obj["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(
            obj["participants"],
            serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
        );
        assert!(obj.get("name").is_none());
    }
}
