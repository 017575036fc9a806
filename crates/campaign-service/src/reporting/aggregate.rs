//! Campaign-wide aggregation over engagement snapshots
//!
//! Dimension values come from where the data authoritatively lives:
//! departments from the registered users, categories and participant
//! types from the posts themselves. Cross-tab cells are zero-filled so
//! every (department, category, participant type) triple has a value.

use std::collections::{HashMap, HashSet};

use campaign_core::entities::User;
use campaign_core::traits::PostEngagement;

/// Per-department engagement totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentTotals {
    pub total_entries: i64,
    pub unique_participants: i64,
    pub total_likes: i64,
    pub total_comments: i64,
}

/// Aggregated campaign statistics
#[derive(Debug, Clone)]
pub struct CampaignStats {
    /// Departments of registered users, sorted
    pub departments: Vec<String>,
    /// Categories seen across posts, sorted
    pub categories: Vec<String>,
    /// Participant types seen across posts, sorted
    pub participant_types: Vec<String>,
    counts: HashMap<(String, String, String), i64>,
    totals: HashMap<String, DepartmentTotals>,
    user_counts: HashMap<String, i64>,
}

impl CampaignStats {
    /// Build the full aggregation from an engagement snapshot and user list
    pub fn build(posts: &[PostEngagement], users: &[User]) -> Self {
        let mut departments: Vec<String> = users
            .iter()
            .map(|u| u.department.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        departments.sort();

        let mut categories: Vec<String> = posts
            .iter()
            .map(|p| p.category.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        categories.sort();

        let mut participant_types: Vec<String> = posts
            .iter()
            .map(|p| p.participant_type.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        participant_types.sort();

        let mut counts: HashMap<(String, String, String), i64> = HashMap::new();
        let mut totals: HashMap<String, DepartmentTotals> = HashMap::new();
        let mut participants: HashMap<String, HashSet<String>> = HashMap::new();

        for post in posts {
            *counts
                .entry((
                    post.department.clone(),
                    post.category.clone(),
                    post.participant_type.clone(),
                ))
                .or_insert(0) += 1;

            let entry = totals.entry(post.department.clone()).or_default();
            entry.total_entries += 1;
            entry.total_likes += post.likes;
            entry.total_comments += post.comments;

            participants
                .entry(post.department.clone())
                .or_default()
                .insert(post.author.participant_key());
        }

        for (department, set) in participants {
            if let Some(entry) = totals.get_mut(&department) {
                entry.unique_participants = set.len() as i64;
            }
        }

        let mut user_counts: HashMap<String, i64> = HashMap::new();
        for user in users {
            *user_counts.entry(user.department.clone()).or_insert(0) += 1;
        }

        Self {
            departments,
            categories,
            participant_types,
            counts,
            totals,
            user_counts,
        }
    }

    /// Cross-tab cell count; absent combinations are zero
    pub fn count(&self, department: &str, category: &str, participant_type: &str) -> i64 {
        self.counts
            .get(&(
                department.to_string(),
                category.to_string(),
                participant_type.to_string(),
            ))
            .copied()
            .unwrap_or(0)
    }

    /// Engagement totals for a department; departments with no posts get zeros
    pub fn totals_for(&self, department: &str) -> DepartmentTotals {
        self.totals.get(department).cloned().unwrap_or_default()
    }

    /// Registered-user headcount for a department
    pub fn user_count(&self, department: &str) -> i64 {
        self.user_counts.get(department).copied().unwrap_or(0)
    }
}

/// Percentage of `part` over `whole`; zero when `whole` is zero
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        #[allow(clippy::cast_precision_loss)]
        let pct = (part as f64 / whole as f64) * 100.0;
        pct
    } else {
        0.0
    }
}

/// Render a percentage with two decimals and a trailing percent sign
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Per-author engagement, restricted to registered users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEngagementRow {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub likes: i64,
    pub comments: i64,
}

impl UserEngagementRow {
    /// Combined likes and comments
    pub fn total(&self) -> i64 {
        self.likes + self.comments
    }
}

/// Per-author entry count, restricted to registered users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntryRow {
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub entries: i64,
}

/// Aggregate likes and comments per registered author
///
/// Authors are matched to users by normalized name and department; posts
/// whose author is not a registered user are skipped.
pub fn user_engagement(posts: &[PostEngagement], users: &[User]) -> Vec<UserEngagementRow> {
    let lookup: HashMap<String, &User> =
        users.iter().map(|u| (u.participant_key(), u)).collect();

    let mut order: Vec<String> = Vec::new();
    let mut rows: HashMap<String, UserEngagementRow> = HashMap::new();

    for post in posts {
        let key = post.author.participant_key();
        let Some(user) = lookup.get(&key) else {
            continue;
        };

        let row = rows.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            UserEngagementRow {
                employee_id: user.employee_id.clone(),
                name: post.author.name.clone(),
                department: post.author.department.clone(),
                likes: 0,
                comments: 0,
            }
        });
        row.likes += post.likes;
        row.comments += post.comments;
    }

    order
        .into_iter()
        .filter_map(|key| rows.remove(&key))
        .collect()
}

/// Count entries per registered author
pub fn user_entries(posts: &[PostEngagement], users: &[User]) -> Vec<UserEntryRow> {
    let lookup: HashMap<String, &User> =
        users.iter().map(|u| (u.participant_key(), u)).collect();

    let mut order: Vec<String> = Vec::new();
    let mut rows: HashMap<String, UserEntryRow> = HashMap::new();

    for post in posts {
        let key = post.author.participant_key();
        let Some(user) = lookup.get(&key) else {
            continue;
        };

        let row = rows.entry(key.clone()).or_insert_with(|| {
            order.push(key.clone());
            UserEntryRow {
                name: post.author.name.clone(),
                employee_id: user.employee_id.clone(),
                department: post.author.department.clone(),
                entries: 0,
            }
        });
        row.entries += 1;
    }

    order
        .into_iter()
        .filter_map(|key| rows.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::value_objects::PostAuthor;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(department: &str, category: &str, pt: &str, author: &str, likes: i64, comments: i64) -> PostEngagement {
        PostEngagement {
            id: Uuid::new_v4(),
            title: format!("{author}'s entry"),
            category: category.to_string(),
            participant_type: pt.to_string(),
            department: department.to_string(),
            author: PostAuthor::new(author.to_string(), department.to_string()),
            media_url: None,
            likes,
            comments,
            created_at: Utc::now(),
        }
    }

    fn user(name: &str, department: &str, employee_id: &str) -> User {
        User::new(
            name.to_string(),
            format!("{employee_id}@example.com"),
            employee_id.to_string(),
            department.to_string(),
        )
    }

    #[test]
    fn test_absent_combinations_are_zero() {
        let posts = vec![post("Sales", "Art", "Individual", "Asha", 3, 1)];
        let users = vec![user("Asha", "Sales", "E1"), user("Ravi", "Finance", "E2")];

        let stats = CampaignStats::build(&posts, &users);
        assert_eq!(stats.count("Sales", "Art", "Individual"), 1);
        assert_eq!(stats.count("Finance", "Art", "Individual"), 0);
        assert_eq!(stats.count("Sales", "Music", "Group"), 0);
    }

    #[test]
    fn test_entries_sum_to_input_count() {
        let posts = vec![
            post("Sales", "Art", "Individual", "Asha", 2, 0),
            post("Sales", "Art", "Individual", "Asha", 3, 1),
            post("Sales", "Music", "Group", "Meera", 0, 0),
            post("Finance", "Art", "Individual", "Ravi", 1, 2),
        ];
        let users = vec![
            user("Asha", "Sales", "E1"),
            user("Meera", "Sales", "E2"),
            user("Ravi", "Finance", "E3"),
        ];

        let stats = CampaignStats::build(&posts, &users);
        let sum: i64 = stats
            .departments
            .iter()
            .map(|d| stats.totals_for(d).total_entries)
            .sum();
        assert_eq!(sum, posts.len() as i64);
    }

    #[test]
    fn test_unique_participants_bounded_by_entries() {
        let posts = vec![
            post("Sales", "Art", "Individual", "Asha", 2, 0),
            post("Sales", "Art", "Individual", "Asha", 3, 1),
            post("Sales", "Music", "Group", "Meera", 0, 0),
        ];
        let users = vec![user("Asha", "Sales", "E1"), user("Meera", "Sales", "E2")];

        let stats = CampaignStats::build(&posts, &users);
        let totals = stats.totals_for("Sales");
        assert_eq!(totals.total_entries, 3);
        assert_eq!(totals.unique_participants, 2);
        assert!(totals.unique_participants <= totals.total_entries);
    }

    #[test]
    fn test_sales_art_scenario() {
        // Two Art/Individual posts from Sales with 2 and 3 likes
        let posts = vec![
            post("Sales", "Art", "Individual", "Asha", 2, 0),
            post("Sales", "Art", "Individual", "Meera", 3, 0),
        ];
        let users = vec![user("Asha", "Sales", "E1"), user("Meera", "Sales", "E2")];

        let stats = CampaignStats::build(&posts, &users);
        assert_eq!(stats.count("Sales", "Art", "Individual"), 2);
        assert_eq!(stats.totals_for("Sales").total_likes, 5);
    }

    #[test]
    fn test_percentage_guards_zero_division() {
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(0, 10), 0.0);
        assert!((percentage(1, 3) - 33.333_333).abs() < 0.001);
        assert_eq!(format_percent(percentage(1, 3)), "33.33%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_participant_matching_is_case_insensitive() {
        let mut posts = vec![post("Sales", "Art", "Individual", "ASHA", 4, 2)];
        posts.push(post("Sales", "Art", "Individual", "asha", 1, 1));
        let users = vec![user("Asha", "Sales", "E1")];

        let rows = user_engagement(&posts, &users);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].likes, 5);
        assert_eq!(rows[0].comments, 3);
        assert_eq!(rows[0].total(), 8);
        assert_eq!(rows[0].employee_id, "E1");
    }

    #[test]
    fn test_unregistered_authors_excluded() {
        let posts = vec![
            post("Sales", "Art", "Individual", "Asha", 2, 0),
            post("Sales", "Art", "Individual", "Ghost", 9, 9),
        ];
        let users = vec![user("Asha", "Sales", "E1")];

        let engagement = user_engagement(&posts, &users);
        assert_eq!(engagement.len(), 1);
        assert_eq!(engagement[0].name, "Asha");

        let entries = user_entries(&posts, &users);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entries, 1);
    }
}
