//! Report grids - worksheet layouts built from aggregated stats
//!
//! A `ReportGrid` is a renderer-independent description of one worksheet:
//! cells, merged header regions, and column widths. Builders here lay out
//! each downloadable report; `render` turns a grid into xlsx bytes.

use std::collections::BTreeMap;
use std::collections::HashMap;

use campaign_core::entities::User;
use campaign_core::traits::PostEngagement;

use super::aggregate::{
    format_percent, percentage, CampaignStats, UserEngagementRow, UserEntryRow,
};

/// One cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
}

/// A merged rectangular header region carrying its own label
#[derive(Debug, Clone)]
pub struct MergedRegion {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
    pub label: String,
}

/// Renderer-independent worksheet description
#[derive(Debug)]
pub struct ReportGrid {
    sheet_name: String,
    column_widths: Vec<f64>,
    merges: Vec<MergedRegion>,
    cells: BTreeMap<(u32, u16), (Cell, bool)>,
}

impl ReportGrid {
    /// Create an empty grid for the named worksheet
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            column_widths: Vec::new(),
            merges: Vec::new(),
            cells: BTreeMap::new(),
        }
    }

    /// Set all column widths at once
    pub fn set_column_widths(&mut self, widths: Vec<f64>) {
        self.column_widths = widths;
    }

    /// Write a text cell
    pub fn text(&mut self, row: u32, col: u16, value: impl Into<String>) {
        self.cells.insert((row, col), (Cell::Text(value.into()), false));
    }

    /// Write a bold text cell
    pub fn bold_text(&mut self, row: u32, col: u16, value: impl Into<String>) {
        self.cells.insert((row, col), (Cell::Text(value.into()), true));
    }

    /// Write an integer cell
    pub fn int(&mut self, row: u32, col: u16, value: i64) {
        self.cells.insert((row, col), (Cell::Int(value), false));
    }

    /// Write a bold integer cell
    pub fn bold_int(&mut self, row: u32, col: u16, value: i64) {
        self.cells.insert((row, col), (Cell::Int(value), true));
    }

    /// Merge a region and give it a label
    ///
    /// A region that covers a single cell (possible when a grouping
    /// dimension has exactly one distinct value) is written as a plain
    /// bold header cell; xlsx merge ranges must span at least two cells.
    pub fn merge(&mut self, first_row: u32, first_col: u16, last_row: u32, last_col: u16, label: impl Into<String>) {
        if first_row == last_row && first_col == last_col {
            self.bold_text(first_row, first_col, label);
            return;
        }
        self.merges.push(MergedRegion {
            first_row,
            first_col,
            last_row,
            last_col,
            label: label.into(),
        });
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn column_widths(&self) -> &[f64] {
        &self.column_widths
    }

    pub fn merges(&self) -> &[MergedRegion] {
        &self.merges
    }

    /// Iterate all cells as (row, col, cell, bold)
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &Cell, bool)> {
        self.cells
            .iter()
            .map(|(&(row, col), (cell, bold))| (row, col, cell, *bold))
    }

    /// Look up a cell, mainly for assertions in tests
    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col)).map(|(cell, _)| cell)
    }
}

// Header rows 0-2 carry the merged dimension labels, row 3 the derived
// column labels, data starts at row 4. Same layout as the cross-tab the
// campaign team has always downloaded.
const CROSS_TAB_DATA_START: u32 = 4;

const STATS_EXTRA_COLUMNS: [&str; 7] = [
    "Total Entries",
    "Unique Participants",
    "Total Likes",
    "Total Comments",
    "Count of Dep.",
    "Unique Participation %",
    "Participation % of Dep.",
];

const PARTICIPANT_TYPE_EXTRA_COLUMNS: [&str; 4] = [
    "Total Entries",
    "Unique Participants",
    "Total Likes",
    "Total Comments",
];

fn cross_tab_widths(inner_count: usize, extra_count: usize) -> Vec<f64> {
    let mut widths = vec![25.0];
    widths.extend(std::iter::repeat(18.0).take(inner_count));
    widths.extend(std::iter::repeat(22.0).take(extra_count));
    widths
}

fn cross_tab_headers(
    grid: &mut ReportGrid,
    outer: &[String],
    inner: &[String],
    extra_columns: &[&str],
) {
    let span = inner.len() as u16;
    let cross_cols = (outer.len() * inner.len()) as u16;

    grid.merge(0, 0, 2, 0, "Department");

    let mut col: u16 = 1;
    for label in outer {
        grid.merge(0, col, 0, col + span - 1, label.clone());
        for (i, sub) in inner.iter().enumerate() {
            grid.merge(1, col + i as u16, 2, col + i as u16, sub.clone());
        }
        col += span;
    }

    let extras_start = 1 + cross_cols;
    let last_col = extras_start + extra_columns.len() as u16 - 1;
    grid.merge(0, extras_start, 2, last_col, "Additional Stats");
    for (i, label) in extra_columns.iter().enumerate() {
        grid.bold_text(3, extras_start + i as u16, *label);
    }
}

/// Department x (category x participant type) cross-tab with derived columns
///
/// Percentage cells are rendered as text and excluded from the TOTAL row.
pub fn stats_grid(stats: &CampaignStats) -> ReportGrid {
    let mut grid = ReportGrid::new("Stats");
    let inner_count = stats.categories.len() * stats.participant_types.len();
    grid.set_column_widths(cross_tab_widths(inner_count, STATS_EXTRA_COLUMNS.len()));

    cross_tab_headers(
        &mut grid,
        &stats.categories,
        &stats.participant_types,
        &STATS_EXTRA_COLUMNS,
    );

    let extras_start = 1 + inner_count as u16;

    let mut row = CROSS_TAB_DATA_START;
    for department in &stats.departments {
        grid.text(row, 0, department.clone());

        let mut col: u16 = 1;
        for category in &stats.categories {
            for participant_type in &stats.participant_types {
                grid.int(row, col, stats.count(department, category, participant_type));
                col += 1;
            }
        }

        let totals = stats.totals_for(department);
        let headcount = stats.user_count(department);
        grid.int(row, extras_start, totals.total_entries);
        grid.int(row, extras_start + 1, totals.unique_participants);
        grid.int(row, extras_start + 2, totals.total_likes);
        grid.int(row, extras_start + 3, totals.total_comments);
        grid.int(row, extras_start + 4, headcount);
        grid.text(
            row,
            extras_start + 5,
            format_percent(percentage(totals.unique_participants, headcount)),
        );
        grid.text(
            row,
            extras_start + 6,
            format_percent(percentage(totals.unique_participants, totals.total_entries)),
        );

        row += 1;
    }

    // TOTAL row sums the numeric columns; percentage columns stay blank
    grid.bold_text(row, 0, "TOTAL");

    let mut col: u16 = 1;
    for category in &stats.categories {
        for participant_type in &stats.participant_types {
            let sum: i64 = stats
                .departments
                .iter()
                .map(|d| stats.count(d, category, participant_type))
                .sum();
            grid.bold_int(row, col, sum);
            col += 1;
        }
    }

    let mut sums = [0_i64; 5];
    for department in &stats.departments {
        let totals = stats.totals_for(department);
        sums[0] += totals.total_entries;
        sums[1] += totals.unique_participants;
        sums[2] += totals.total_likes;
        sums[3] += totals.total_comments;
        sums[4] += stats.user_count(department);
    }
    for (i, sum) in sums.iter().enumerate() {
        grid.bold_int(row, extras_start + i as u16, *sum);
    }

    grid
}

/// Department x (participant type x category) cross-tab variant
pub fn participant_type_grid(stats: &CampaignStats) -> ReportGrid {
    let mut grid = ReportGrid::new("StatsByParticipantType");
    let inner_count = stats.participant_types.len() * stats.categories.len();
    grid.set_column_widths(cross_tab_widths(
        inner_count,
        PARTICIPANT_TYPE_EXTRA_COLUMNS.len(),
    ));

    cross_tab_headers(
        &mut grid,
        &stats.participant_types,
        &stats.categories,
        &PARTICIPANT_TYPE_EXTRA_COLUMNS,
    );

    let extras_start = 1 + inner_count as u16;

    let mut row = CROSS_TAB_DATA_START;
    for department in &stats.departments {
        grid.text(row, 0, department.clone());

        let mut col: u16 = 1;
        for participant_type in &stats.participant_types {
            for category in &stats.categories {
                grid.int(row, col, stats.count(department, category, participant_type));
                col += 1;
            }
        }

        let totals = stats.totals_for(department);
        grid.int(row, extras_start, totals.total_entries);
        grid.int(row, extras_start + 1, totals.unique_participants);
        grid.int(row, extras_start + 2, totals.total_likes);
        grid.int(row, extras_start + 3, totals.total_comments);

        row += 1;
    }

    grid.bold_text(row, 0, "TOTAL");

    let mut col: u16 = 1;
    for participant_type in &stats.participant_types {
        for category in &stats.categories {
            let sum: i64 = stats
                .departments
                .iter()
                .map(|d| stats.count(d, category, participant_type))
                .sum();
            grid.bold_int(row, col, sum);
            col += 1;
        }
    }

    let mut sums = [0_i64; 4];
    for department in &stats.departments {
        let totals = stats.totals_for(department);
        sums[0] += totals.total_entries;
        sums[1] += totals.unique_participants;
        sums[2] += totals.total_likes;
        sums[3] += totals.total_comments;
    }
    for (i, sum) in sums.iter().enumerate() {
        grid.bold_int(row, extras_start + i as u16, *sum);
    }

    grid
}

/// Per-user likes and comments, with top-performer footer rows
pub fn user_stats_grid(rows: &[UserEngagementRow]) -> ReportGrid {
    let mut grid = ReportGrid::new("User Stats");
    grid.set_column_widths(vec![12.0, 28.0, 23.0, 14.0, 14.0, 14.0]);

    let headers = ["ID", "Name of Employee", "Department", "Likes", "Comments", "TOTAL"];
    for (i, header) in headers.iter().enumerate() {
        grid.bold_text(0, i as u16, *header);
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        grid.text(r, 0, row.employee_id.clone());
        grid.text(r, 1, row.name.clone());
        grid.text(r, 2, row.department.clone());
        grid.int(r, 3, row.likes);
        grid.int(r, 4, row.comments);
        grid.int(r, 5, row.total());
    }

    let top_by_likes = rows.iter().max_by_key(|r| r.likes);
    let top_by_total = rows.iter().max_by_key(|r| r.total());

    // Two blank rows, then the top performers
    let footer = rows.len() as u32 + 3;
    grid.bold_text(footer, 2, "BY LIKES");
    if let Some(top) = top_by_likes {
        grid.text(footer, 3, top.employee_id.clone());
        grid.text(footer, 4, top.name.clone());
    }
    grid.bold_text(footer, 6, "By Likes and comments");
    if let Some(top) = top_by_total {
        grid.text(footer, 7, top.employee_id.clone());
        grid.text(footer, 8, top.name.clone());
    }

    grid
}

/// Per-user entry counts
pub fn entry_stats_grid(rows: &[UserEntryRow]) -> ReportGrid {
    let mut grid = ReportGrid::new("User Entry Stats");
    grid.set_column_widths(vec![28.0, 15.0, 23.0, 14.0]);

    let headers = ["Name", "Employee ID", "Department", "Entry"];
    for (i, header) in headers.iter().enumerate() {
        grid.bold_text(0, i as u16, *header);
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        grid.text(r, 0, row.name.clone());
        grid.text(r, 1, row.employee_id.clone());
        grid.text(r, 2, row.department.clone());
        grid.int(r, 3, row.entries);
    }

    grid
}

/// One row per post, newest first, with a public link and author lookup
pub fn post_details_grid(posts: &[PostEngagement], users: &[User], base_url: &str) -> ReportGrid {
    let mut grid = ReportGrid::new("Post Details");
    grid.set_column_widths(vec![40.0, 15.0, 25.0, 20.0, 20.0, 50.0, 12.0, 15.0]);

    let headers = [
        "Post Title",
        "Employee ID",
        "Name of User",
        "Department",
        "Category",
        "Post Link",
        "Total Likes",
        "Total Comments",
    ];
    for (i, header) in headers.iter().enumerate() {
        grid.bold_text(0, i as u16, *header);
    }

    let lookup: HashMap<String, &User> =
        users.iter().map(|u| (u.participant_key(), u)).collect();

    let base = base_url.trim_end_matches('/');
    for (i, post) in posts.iter().enumerate() {
        let r = i as u32 + 1;
        let employee_id = lookup
            .get(&post.author.participant_key())
            .map_or_else(|| "N/A".to_string(), |u| u.employee_id.clone());

        grid.text(r, 0, post.title.clone());
        grid.text(r, 1, employee_id);
        grid.text(r, 2, post.author.name.clone());
        grid.text(r, 3, post.author.department.clone());
        grid.text(r, 4, post.category.clone());
        grid.text(r, 5, format!("{base}/posts/{}", post.id));
        grid.int(r, 6, post.likes);
        grid.int(r, 7, post.comments);
    }

    grid
}
