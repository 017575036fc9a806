//! User entity - represents a registered campaign participant

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// User entity representing an employee account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Stored lowercase; see [`crate::value_objects::normalize_email`]
    pub email: String,
    pub employee_id: String,
    pub department: String,
    pub avatar: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub contact_no: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(name: String, email: String, employee_id: String, department: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            employee_id,
            department,
            avatar: None,
            gender: None,
            date_of_birth: None,
            contact_no: None,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive key matching a post author pair to this account
    pub fn participant_key(&self) -> String {
        format!(
            "{}||{}",
            self.name.to_lowercase(),
            self.department.to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            "Jane Roe".to_string(),
            "jane.roe@example.com".to_string(),
            "EMP-042".to_string(),
            "Sales".to_string(),
        );
        assert_eq!(user.department, "Sales");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_participant_key_is_case_insensitive() {
        let mut user = User::new(
            "Jane Roe".to_string(),
            "jane@example.com".to_string(),
            "EMP-042".to_string(),
            "Sales".to_string(),
        );
        let key = user.participant_key();
        user.name = "JANE ROE".to_string();
        user.department = "SALES".to_string();
        assert_eq!(user.participant_key(), key);
    }
}
