//! Reporting - aggregation, leaderboards, and spreadsheet export
//!
//! Everything in this module is pure: it operates on engagement snapshots
//! and user lists already loaded from the store, so the numbers are easy
//! to test without a database.

pub mod aggregate;
pub mod grid;
pub mod leaderboard;
pub mod render;

pub use aggregate::{CampaignStats, DepartmentTotals, UserEngagementRow, UserEntryRow};
pub use grid::{Cell, MergedRegion, ReportGrid};
pub use render::render_xlsx;
