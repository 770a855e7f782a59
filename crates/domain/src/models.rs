use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{clock::Clock, submission::ValidSubmission};

/// A persisted visitor comment. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub pub_date: NaiveDateTime,
}

/// A validated submission stamped with its publication time, ready to be
/// handed to a store. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub name: String,
    pub email: String,
    pub comment: String,
    pub pub_date: NaiveDateTime,
}

impl NewComment {
    pub fn new(submission: ValidSubmission, clock: &dyn Clock) -> Self {
        let ValidSubmission {
            name,
            email,
            comment,
        } = submission;
        Self {
            name,
            email,
            comment,
            pub_date: clock.now(),
        }
    }

    pub fn into_comment(self, id: i64) -> Comment {
        Comment {
            id,
            name: self.name,
            email: self.email,
            comment: self.comment,
            pub_date: self.pub_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManualClock, SubmissionForm};
    use chrono::NaiveDate;

    #[test]
    fn new_comment_takes_pub_date_from_clock() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let clock = ManualClock::new(at);
        let valid = SubmissionForm::new("Alice", "a@x.com", "hi")
            .validate()
            .expect("valid");

        let new = NewComment::new(valid, &clock);
        assert_eq!(new.pub_date, at);

        let stored = new.into_comment(7);
        assert_eq!(stored.id, 7);
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.email, "a@x.com");
        assert_eq!(stored.comment, "hi");
        assert_eq!(stored.pub_date, at);
    }

    #[test]
    fn comment_serializes_field_names() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let c = Comment {
            id: 1,
            name: "Bob".into(),
            email: "b@x.com".into(),
            comment: "great post".into(),
            pub_date: at,
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["comment"], "great post");
        assert_eq!(json["pub_date"], "2024-03-01T09:30:00");
    }
}
