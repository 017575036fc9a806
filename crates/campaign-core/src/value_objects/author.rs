//! Post author value object
//!
//! A participant is identified by the `(name, department)` pair recorded on
//! the post itself, not by a user id: there is no foreign-key relationship
//! between a post's author and the User collection. The pair is normalized
//! once at the request boundary and carried as a typed value from then on.

use serde::{Deserialize, Serialize};

/// The `(name, department)` pair naming who submitted a post
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostAuthor {
    pub name: String,
    pub department: String,
}

impl PostAuthor {
    /// Create a new PostAuthor
    pub fn new(name: String, department: String) -> Self {
        Self { name, department }
    }

    /// Case-insensitive bucketing key for unique-participant counting
    pub fn participant_key(&self) -> String {
        format!(
            "{}||{}",
            self.name.to_lowercase(),
            self.department.to_lowercase()
        )
    }
}

impl std::fmt::Display for PostAuthor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_key_normalizes_case() {
        let a = PostAuthor::new("Jane Roe".to_string(), "Sales".to_string());
        let b = PostAuthor::new("JANE ROE".to_string(), "sales".to_string());
        assert_eq!(a.participant_key(), b.participant_key());
    }

    #[test]
    fn test_same_name_different_department_is_distinct() {
        let a = PostAuthor::new("Jane".to_string(), "Sales".to_string());
        let b = PostAuthor::new("Jane".to_string(), "Marketing".to_string());
        assert_ne!(a.participant_key(), b.participant_key());
    }
}
