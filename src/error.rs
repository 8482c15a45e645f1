use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound { activity_name: String },
    #[error("Student is already signed up")]
    AlreadySignedUp { activity_name: String, email: String },
    #[error("Student is not signed up for this activity")]
    NotSignedUp { activity_name: String, email: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::ActivityNotFound { .. } => ErrorKind::NotFound,
            ActivityError::AlreadySignedUp { .. } | ActivityError::NotSignedUp { .. } => {
                ErrorKind::Conflict
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_activity_maps_to_404() {
        let err = ActivityError::ActivityNotFound {
            activity_name: "Fake Club".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[test]
    fn membership_conflicts_map_to_400() {
        let dup = ActivityError::AlreadySignedUp {
            activity_name: "Chess Club".to_string(),
            email: "michael@mergington.edu".to_string(),
        };
        let absent = ActivityError::NotSignedUp {
            activity_name: "Chess Club".to_string(),
            email: "nobody@mergington.edu".to_string(),
        };

        assert_eq!(dup.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(absent.status_code(), StatusCode::BAD_REQUEST);
        assert!(dup.to_string().contains("already signed up"));
        assert!(absent.to_string().contains("not signed up"));
    }
}
