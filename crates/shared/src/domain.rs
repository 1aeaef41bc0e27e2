use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(UserId);

/// Shown in place of a missing department.
pub const MISSING_DEPARTMENT_LABEL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserRecord {
    pub fn department_label(&self) -> &str {
        match self.department.as_deref() {
            Some(department) if !department.is_empty() => department,
            _ => MISSING_DEPARTMENT_LABEL,
        }
    }
}

/// Client-side id for a newly created record: `users.len() + 1`, or one past the highest
/// id when that number is still taken after a delete.
pub fn next_sequential_id(users: &[UserRecord]) -> UserId {
    let candidate = UserId(users.len() as i64 + 1);
    if users.iter().all(|user| user.id != candidate) {
        return candidate;
    }
    let highest = users.iter().map(|user| user.id.0).max().unwrap_or(0);
    UserId(highest + 1)
}

/// Working copy bound to the form. `id: None` is create mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub department: String,
}

impl UserDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: Some(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            department: record.department.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = [&self.name, &self.email, &self.department]
            .iter()
            .any(|value| value.trim().is_empty());
        if missing {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    pub fn new_user_body(&self) -> NewUserBody {
        NewUserBody {
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }

    pub fn update_body(&self, id: UserId) -> UpdateUserBody {
        UpdateUserBody {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }
}

/// `POST {base}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserBody {
    pub name: String,
    pub email: String,
    pub department: String,
}

/// `PUT {base}/{id}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserBody {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> UserRecord {
        UserRecord {
            id: UserId(1),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            department: Some("Eng".to_string()),
        }
    }

    #[test]
    fn decodes_placeholder_user_ignoring_extra_fields() {
        let raw = r#"{
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "address": { "city": "McKenziehaven" },
            "phone": "1-463-123-4447"
        }"#;
        let record: UserRecord = serde_json::from_str(raw).expect("decode");
        assert_eq!(record.id, UserId(3));
        assert_eq!(record.email, "Nathan@yesenia.net");
        assert_eq!(record.department, None);
        assert_eq!(record.department_label(), "N/A");
    }

    #[test]
    fn null_or_empty_department_renders_placeholder() {
        let record: UserRecord =
            serde_json::from_str(r#"{"id":1,"name":"a","email":"b","department":null}"#)
                .expect("decode");
        assert_eq!(record.department_label(), MISSING_DEPARTMENT_LABEL);

        let mut record = ann();
        record.department = Some(String::new());
        assert_eq!(record.department_label(), MISSING_DEPARTMENT_LABEL);
        assert_eq!(ann().department_label(), "Eng");
    }

    #[test]
    fn draft_from_record_enters_edit_mode() {
        let draft = UserDraft::from_record(&ann());
        assert!(draft.is_editing());
        assert_eq!(draft.id, Some(UserId(1)));
        assert_eq!(draft.department, "Eng");
        assert!(!UserDraft::empty().is_editing());
    }

    #[test]
    fn validation_requires_every_field() {
        let complete = UserDraft::from_record(&ann());
        assert!(complete.validate().is_ok());

        for field in 0..3 {
            let mut draft = complete.clone();
            match field {
                0 => draft.name.clear(),
                1 => draft.email = "   ".to_string(),
                _ => draft.department.clear(),
            }
            assert_eq!(draft.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn create_body_omits_id() {
        let body = serde_json::to_value(UserDraft::from_record(&ann()).new_user_body())
            .expect("encode");
        assert_eq!(
            body,
            serde_json::json!({"name": "Ann", "email": "a@x.com", "department": "Eng"})
        );
    }

    #[test]
    fn sequential_id_follows_length_unless_taken() {
        let mut users: Vec<UserRecord> = (1..=3)
            .map(|id| UserRecord {
                id: UserId(id),
                ..ann()
            })
            .collect();
        assert_eq!(next_sequential_id(&users), UserId(4));
        assert_eq!(next_sequential_id(&[]), UserId(1));

        users.retain(|user| user.id != UserId(2));
        assert_eq!(next_sequential_id(&users), UserId(4));

        users.retain(|user| user.id != UserId(3));
        assert_eq!(next_sequential_id(&users), UserId(2));
    }
}
