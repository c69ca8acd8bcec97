//! Responsive layout engine.
//!
//! Decides which columns fit into the available width. Columns are ranked by
//! priority (lowest `priority_level` first, registry order on ties) and the
//! longest prefix of that ranking whose width budgets fit is kept visible. The
//! walk stops at the first column that does not fit, so a lower-priority column
//! is never shown while a higher-priority one is hidden.

use crate::column::Column;

/// Width used for columns that do not carry their own `min_width`.
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// Per-column width budget used when fitting columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutBudget {
    /// Width assumed for columns without their own `min_width`.
    pub default_column_width: u32,
}

impl Default for LayoutBudget {
    fn default() -> Self {
        Self {
            default_column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

impl LayoutBudget {
    /// Creates a budget with the given default column width.
    #[must_use]
    pub fn new(default_column_width: u32) -> Self {
        Self {
            default_column_width,
        }
    }

    /// Width budget for a single column.
    #[must_use]
    pub fn width_of(&self, column: &Column) -> u32 {
        column.min_width.unwrap_or(self.default_column_width)
    }
}

/// Recomputes column visibility for `available_width`.
///
/// With `collapsible` off every column is visible and the table is expected to
/// overflow horizontally. Registry order of the returned columns is unchanged.
#[must_use]
pub fn layout(
    available_width: u32,
    columns: &[Column],
    collapsible: bool,
    budget: &LayoutBudget,
) -> Vec<Column> {
    let mut next = columns.to_vec();
    if !collapsible {
        for column in &mut next {
            column.is_visible = true;
        }
        return next;
    }

    let fitting = fitting_count(available_width, columns, budget);
    let ranking = priority_ranking(columns);
    for column in &mut next {
        column.is_visible = false;
    }
    for &index in ranking.iter().take(fitting) {
        next[index].is_visible = true;
    }

    tracing::debug!(
        available_width,
        visible = fitting,
        hidden = columns.len() - fitting,
        "layout pass"
    );
    next
}

/// Indices of `columns` ordered from most to least important.
#[must_use]
pub fn priority_ranking(columns: &[Column]) -> Vec<usize> {
    let mut ranking: Vec<usize> = (0..columns.len()).collect();
    // sort_by_key is stable, so equal priorities keep registry order
    ranking.sort_by_key(|&i| columns[i].priority_level);
    ranking
}

/// Number of columns that fit, never zero when at least one column exists.
#[must_use]
pub fn fitting_count(available_width: u32, columns: &[Column], budget: &LayoutBudget) -> usize {
    if columns.is_empty() {
        return 0;
    }

    let mut used: u64 = 0;
    let mut count = 0;
    for index in priority_ranking(columns) {
        used += u64::from(budget.width_of(&columns[index]));
        if used > u64::from(available_width) {
            break;
        }
        count += 1;
    }
    count.max(1)
}

/// Columns currently rendered, in registry order.
pub fn visible_columns(columns: &[Column]) -> impl Iterator<Item = &Column> {
    columns.iter().filter(|c| c.is_visible)
}

/// Columns folded into the detail panel, in registry order.
pub fn hidden_columns(columns: &[Column]) -> impl Iterator<Item = &Column> {
    columns.iter().filter(|c| !c.is_visible)
}
