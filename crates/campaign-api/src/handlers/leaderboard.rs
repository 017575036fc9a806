//! Leaderboard handlers
//!
//! JSON standings consumed by the campaign dashboard.

use axum::{extract::State, Json};
use campaign_service::{
    CategoryLeaderEntry, DepartmentLeaderboardEntry, IndividualLeaderboardEntry,
    LeaderboardService, WeeklySubmissionsResponse,
};

use crate::response::ApiResult;
use crate::state::AppState;

/// Department standings ranked by likes
///
/// GET /leaderboard/departments
pub async fn departments(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DepartmentLeaderboardEntry>>> {
    let service = LeaderboardService::new(state.service_context());
    let response = service.departments().await?;
    Ok(Json(response))
}

/// Top five individuals ranked by likes
///
/// GET /leaderboard/individuals
pub async fn individuals(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<IndividualLeaderboardEntry>>> {
    let service = LeaderboardService::new(state.service_context());
    let response = service.individuals().await?;
    Ok(Json(response))
}

/// Category standings with their leading author
///
/// GET /leaderboard/categories
pub async fn categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryLeaderEntry>>> {
    let service = LeaderboardService::new(state.service_context());
    let response = service.categories().await?;
    Ok(Json(response))
}

/// Published submissions in the trailing seven days
///
/// GET /leaderboard/submissionsThisWeek
pub async fn submissions_this_week(
    State(state): State<AppState>,
) -> ApiResult<Json<WeeklySubmissionsResponse>> {
    let service = LeaderboardService::new(state.service_context());
    let response = service.submissions_this_week().await?;
    Ok(Json(response))
}
