//! Leaderboard standings over published posts
//!
//! All functions expect posts in chronological order (oldest first) so
//! that "first" attributions - an author's department, a category's
//! leader - come from the earliest submission. Sorting by likes is
//! stable, so equal scores keep their chronological order.

use std::collections::HashMap;

use campaign_core::traits::PostEngagement;

use crate::dto::{CategoryLeaderEntry, DepartmentLeaderboardEntry, IndividualLeaderboardEntry};

/// Badges awarded to the top five individuals, in rank order
pub const INDIVIDUAL_BADGES: [&str; 5] = [
    "Top Contributor",
    "Rising Star",
    "Creative Mind",
    "Innovation Leader",
    "Community Builder",
];

/// Fallback badge when the ranking runs past the named ones
const DEFAULT_BADGE: &str = "Participant";

/// Number of individuals shown on the leaderboard
const INDIVIDUAL_LIMIT: usize = 5;

struct DepartmentAccumulator {
    department: String,
    submissions: i64,
    likes: i64,
    participants: std::collections::HashSet<String>,
}

/// Rank departments by total likes on their published posts
pub fn department_standings(posts: &[PostEngagement]) -> Vec<DepartmentLeaderboardEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, DepartmentAccumulator> = HashMap::new();

    for post in posts {
        let acc = groups
            .entry(post.department.clone())
            .or_insert_with(|| {
                order.push(post.department.clone());
                DepartmentAccumulator {
                    department: post.department.clone(),
                    submissions: 0,
                    likes: 0,
                    participants: std::collections::HashSet::new(),
                }
            });
        acc.submissions += 1;
        acc.likes += post.likes;
        acc.participants.insert(post.author.name.clone());
    }

    let mut accumulators: Vec<DepartmentAccumulator> = order
        .into_iter()
        .filter_map(|d| groups.remove(&d))
        .collect();
    accumulators.sort_by(|a, b| b.likes.cmp(&a.likes));

    accumulators
        .into_iter()
        .enumerate()
        .map(|(i, acc)| {
            let engagement = if acc.submissions > 0 {
                #[allow(clippy::cast_precision_loss)]
                let rate = (acc.likes as f64 / acc.submissions as f64) * 100.0;
                rate.round() as i64
            } else {
                0
            };
            DepartmentLeaderboardEntry {
                rank: i + 1,
                department: acc.department,
                submissions: acc.submissions,
                likes: acc.likes,
                participants: acc.participants.len(),
                engagement,
            }
        })
        .collect()
}

struct IndividualAccumulator {
    name: String,
    department: String,
    submissions: i64,
    likes: i64,
}

/// Rank the top five individuals by total likes
///
/// An author's department is taken from their earliest post.
pub fn individual_standings(posts: &[PostEngagement]) -> Vec<IndividualLeaderboardEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, IndividualAccumulator> = HashMap::new();

    for post in posts {
        let acc = groups.entry(post.author.name.clone()).or_insert_with(|| {
            order.push(post.author.name.clone());
            IndividualAccumulator {
                name: post.author.name.clone(),
                department: post.author.department.clone(),
                submissions: 0,
                likes: 0,
            }
        });
        acc.submissions += 1;
        acc.likes += post.likes;
    }

    let mut accumulators: Vec<IndividualAccumulator> = order
        .into_iter()
        .filter_map(|n| groups.remove(&n))
        .collect();
    accumulators.sort_by(|a, b| b.likes.cmp(&a.likes));
    accumulators.truncate(INDIVIDUAL_LIMIT);

    accumulators
        .into_iter()
        .enumerate()
        .map(|(i, acc)| IndividualLeaderboardEntry {
            rank: i + 1,
            name: acc.name,
            department: acc.department,
            submissions: acc.submissions,
            likes: acc.likes,
            badge: INDIVIDUAL_BADGES
                .get(i)
                .copied()
                .unwrap_or(DEFAULT_BADGE)
                .to_string(),
        })
        .collect()
}

struct CategoryAccumulator {
    category: String,
    submissions: i64,
    likes: i64,
    leader: String,
}

/// Rank categories by total likes; the leader is the category's first author
pub fn category_leaders(posts: &[PostEngagement]) -> Vec<CategoryLeaderEntry> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, CategoryAccumulator> = HashMap::new();

    for post in posts {
        let acc = groups.entry(post.category.clone()).or_insert_with(|| {
            order.push(post.category.clone());
            CategoryAccumulator {
                category: post.category.clone(),
                submissions: 0,
                likes: 0,
                leader: post.author.name.clone(),
            }
        });
        acc.submissions += 1;
        acc.likes += post.likes;
    }

    let mut accumulators: Vec<CategoryAccumulator> = order
        .into_iter()
        .filter_map(|c| groups.remove(&c))
        .collect();
    accumulators.sort_by(|a, b| b.likes.cmp(&a.likes));

    accumulators
        .into_iter()
        .map(|acc| CategoryLeaderEntry {
            category: acc.category,
            submissions: acc.submissions,
            likes: acc.likes,
            leader: acc.leader,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::value_objects::PostAuthor;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(department: &str, category: &str, author: &str, likes: i64) -> PostEngagement {
        PostEngagement {
            id: Uuid::new_v4(),
            title: format!("{author}'s entry"),
            category: category.to_string(),
            participant_type: "Individual".to_string(),
            department: department.to_string(),
            author: PostAuthor::new(author.to_string(), department.to_string()),
            media_url: None,
            likes,
            comments: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_department_standings_ranked_by_likes() {
        let posts = vec![
            post("Sales", "Art", "Asha", 2),
            post("Finance", "Art", "Ravi", 10),
            post("Sales", "Music", "Meera", 3),
        ];

        let standings = department_standings(&posts);
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].department, "Finance");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[0].likes, 10);
        assert_eq!(standings[1].department, "Sales");
        assert_eq!(standings[1].submissions, 2);
        assert_eq!(standings[1].participants, 2);
    }

    #[test]
    fn test_engagement_is_likes_per_submission_percent() {
        let posts = vec![
            post("Sales", "Art", "Asha", 2),
            post("Sales", "Music", "Meera", 3),
        ];

        let standings = department_standings(&posts);
        // 5 likes over 2 submissions => 250
        assert_eq!(standings[0].engagement, 250);
    }

    #[test]
    fn test_individuals_capped_at_five_with_badges() {
        let posts: Vec<PostEngagement> = (0..7)
            .map(|i| post("Sales", "Art", &format!("Author{i}"), i64::from(10 - i)))
            .collect();

        let standings = individual_standings(&posts);
        assert_eq!(standings.len(), 5);
        assert_eq!(standings[0].badge, "Top Contributor");
        assert_eq!(standings[4].badge, "Community Builder");
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[4].rank, 5);
    }

    #[test]
    fn test_individual_department_from_first_post() {
        let mut first = post("Sales", "Art", "Asha", 1);
        first.author = PostAuthor::new("Asha".to_string(), "Sales".to_string());
        let mut second = post("Finance", "Art", "Asha", 5);
        second.author = PostAuthor::new("Asha".to_string(), "Finance".to_string());

        let standings = individual_standings(&[first, second]);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].department, "Sales");
        assert_eq!(standings[0].likes, 6);
        assert_eq!(standings[0].submissions, 2);
    }

    #[test]
    fn test_category_leader_is_first_author() {
        let posts = vec![
            post("Sales", "Art", "Asha", 1),
            post("Finance", "Art", "Ravi", 10),
            post("Sales", "Music", "Meera", 2),
        ];

        let leaders = category_leaders(&posts);
        assert_eq!(leaders[0].category, "Art");
        assert_eq!(leaders[0].leader, "Asha");
        assert_eq!(leaders[0].likes, 11);
        assert_eq!(leaders[1].category, "Music");
    }

    #[test]
    fn test_ties_keep_chronological_order() {
        let posts = vec![
            post("Sales", "Art", "Asha", 3),
            post("Finance", "Art", "Ravi", 3),
        ];

        let standings = department_standings(&posts);
        assert_eq!(standings[0].department, "Sales");
        assert_eq!(standings[1].department, "Finance");
    }
}
