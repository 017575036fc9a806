//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod comments;
pub mod health;
pub mod leaderboard;
pub mod password;
pub mod posts;
pub mod stats;
