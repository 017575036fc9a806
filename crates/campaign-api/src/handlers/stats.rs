//! Stats export handlers
//!
//! Each endpoint renders an xlsx workbook in memory and ships it as a
//! file download.

use axum::extract::State;
use campaign_service::StatsService;

use crate::response::{ApiResult, XlsxFile};
use crate::state::AppState;

/// Department cross-tab export
///
/// GET /stats/getStats
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<XlsxFile> {
    let service = StatsService::new(state.service_context());
    let report = service.stats_export().await?;
    Ok(XlsxFile(report))
}

/// Cross-tab with participant type as the outer dimension
///
/// GET /stats/getStatsByParticipantType
pub async fn get_stats_by_participant_type(
    State(state): State<AppState>,
) -> ApiResult<XlsxFile> {
    let service = StatsService::new(state.service_context());
    let report = service.stats_by_participant_type().await?;
    Ok(XlsxFile(report))
}

/// Per-user likes and comments export
///
/// GET /stats/getUserStats
pub async fn get_user_stats(State(state): State<AppState>) -> ApiResult<XlsxFile> {
    let service = StatsService::new(state.service_context());
    let report = service.user_stats().await?;
    Ok(XlsxFile(report))
}

/// Per-user entry counts export
///
/// GET /stats/getEntryStats
pub async fn get_entry_stats(State(state): State<AppState>) -> ApiResult<XlsxFile> {
    let service = StatsService::new(state.service_context());
    let report = service.entry_stats().await?;
    Ok(XlsxFile(report))
}

/// Per-post details export with public links
///
/// GET /stats/getPostsStats
pub async fn get_posts_stats(State(state): State<AppState>) -> ApiResult<XlsxFile> {
    let service = StatsService::new(state.service_context());
    let report = service.post_details(state.public_base_url()).await?;
    Ok(XlsxFile(report))
}
