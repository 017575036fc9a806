//! Leaderboard service
//!
//! Loads the published engagement snapshot and delegates the ranking math
//! to the pure reporting functions.

use chrono::{Duration, Utc};
use tracing::instrument;

use crate::dto::{
    CategoryLeaderEntry, DepartmentLeaderboardEntry, IndividualLeaderboardEntry,
    WeeklySubmissionsResponse,
};
use crate::reporting::leaderboard;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Window for the weekly submissions counter
const WEEK_DAYS: i64 = 7;

/// Leaderboard service
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    /// Create a new LeaderboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Department standings ranked by likes
    #[instrument(skip(self))]
    pub async fn departments(&self) -> ServiceResult<Vec<DepartmentLeaderboardEntry>> {
        let posts = self.published_chronological().await?;
        Ok(leaderboard::department_standings(&posts))
    }

    /// Top five individuals ranked by likes
    #[instrument(skip(self))]
    pub async fn individuals(&self) -> ServiceResult<Vec<IndividualLeaderboardEntry>> {
        let posts = self.published_chronological().await?;
        Ok(leaderboard::individual_standings(&posts))
    }

    /// Category standings with their leading author
    #[instrument(skip(self))]
    pub async fn categories(&self) -> ServiceResult<Vec<CategoryLeaderEntry>> {
        let posts = self.published_chronological().await?;
        Ok(leaderboard::category_leaders(&posts))
    }

    /// Published submissions in the trailing seven days
    #[instrument(skip(self))]
    pub async fn submissions_this_week(&self) -> ServiceResult<WeeklySubmissionsResponse> {
        let since = Utc::now() - Duration::days(WEEK_DAYS);
        let count = self.ctx.post_repo().count_published_since(since).await?;
        Ok(WeeklySubmissionsResponse { count })
    }

    /// The snapshot arrives newest first; rankings want oldest first so
    /// first-post attributions land on the earliest submission.
    async fn published_chronological(
        &self,
    ) -> ServiceResult<Vec<campaign_core::traits::PostEngagement>> {
        let mut posts = self.ctx.post_repo().list_published_engagement().await?;
        posts.reverse();
        Ok(posts)
    }
}
