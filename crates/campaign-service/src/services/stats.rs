//! Stats export service
//!
//! Builds the downloadable xlsx reports: each method loads the engagement
//! snapshot plus the user list, aggregates in memory, and renders a fully
//! buffered workbook with its canonical download filename.

use tracing::instrument;

use campaign_core::entities::User;
use campaign_core::traits::PostEngagement;

use crate::reporting::aggregate::{user_engagement, user_entries};
use crate::reporting::grid::{
    entry_stats_grid, participant_type_grid, post_details_grid, stats_grid, user_stats_grid,
};
use crate::reporting::{render_xlsx, CampaignStats, ReportGrid};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A rendered report ready for download
#[derive(Debug)]
pub struct Report {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Stats export service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cross-tab of departments against category and participant type
    #[instrument(skip(self))]
    pub async fn stats_export(&self) -> ServiceResult<Report> {
        let (posts, users) = self.snapshot().await?;
        let stats = CampaignStats::build(&posts, &users);
        Self::render("stats_export.xlsx", &stats_grid(&stats))
    }

    /// Cross-tab variant with participant type as the outer dimension
    #[instrument(skip(self))]
    pub async fn stats_by_participant_type(&self) -> ServiceResult<Report> {
        let (posts, users) = self.snapshot().await?;
        let stats = CampaignStats::build(&posts, &users);
        Self::render("stats_by_participantType.xlsx", &participant_type_grid(&stats))
    }

    /// Per-user likes and comments with top-performer footer
    #[instrument(skip(self))]
    pub async fn user_stats(&self) -> ServiceResult<Report> {
        let (mut posts, users) = self.snapshot().await?;
        // Rows appear in first-posted order
        posts.reverse();
        let rows = user_engagement(&posts, &users);
        Self::render("user_stats.xlsx", &user_stats_grid(&rows))
    }

    /// Per-user entry counts
    #[instrument(skip(self))]
    pub async fn entry_stats(&self) -> ServiceResult<Report> {
        let (mut posts, users) = self.snapshot().await?;
        posts.reverse();
        let rows = user_entries(&posts, &users);
        Self::render("entry_stats.xlsx", &entry_stats_grid(&rows))
    }

    /// One row per post, newest first, with public links
    #[instrument(skip(self))]
    pub async fn post_details(&self, base_url: &str) -> ServiceResult<Report> {
        let (posts, users) = self.snapshot().await?;
        Self::render(
            "post_details_report.xlsx",
            &post_details_grid(&posts, &users, base_url),
        )
    }

    /// Load all posts (drafts included, matching what the campaign team
    /// expects in the raw exports) and all registered users.
    async fn snapshot(&self) -> ServiceResult<(Vec<PostEngagement>, Vec<User>)> {
        let posts = self.ctx.post_repo().list_engagement().await?;
        let users = self.ctx.user_repo().list_all().await?;
        Ok((posts, users))
    }

    fn render(filename: &'static str, grid: &ReportGrid) -> ServiceResult<Report> {
        let bytes = render_xlsx(grid)
            .map_err(|e| ServiceError::internal(format!("Report rendering failed: {e}")))?;
        Ok(Report { filename, bytes })
    }
}
