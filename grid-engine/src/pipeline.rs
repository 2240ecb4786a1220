//! FILENAME: grid-engine/src/pipeline.rs
//! Transform Pipeline - pure filter -> sort -> paginate.
//!
//! Given the raw dataset, the resolved columns, and the current
//! view-state, produce the row slice to render. The stage order is a
//! correctness requirement, not an optimization choice: filtering
//! first fixes the count pagination is computed from, sorting before
//! slicing makes every page globally ordered.
//!
//! The pipeline is a pure total function over valid input: it never
//! mutates state and never clamps the page index (the store does that
//! before this runs). Identical inputs give identical output, so it
//! tolerates being re-run on every keystroke.

use serde::{Deserialize, Serialize};

use model::{ResolvedColumn, RowRecord};

use crate::definition::{SortDirection, Sorting};
use crate::error::GridError;
use crate::state::ViewState;

/// The pipeline result: source-row indices of the current page slice,
/// plus the filtered count pagination is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRows {
    /// Indices into the source dataset, filtered, sorted, and cut to
    /// the current page.
    pub rows: Vec<usize>,

    /// Row count after filtering, before pagination.
    pub total_filtered_count: usize,
}

/// Runs the full pipeline for the current view-state.
///
/// A zero page size is invalid input and rejected; everything else is
/// total. An out-of-range page index yields an empty slice (the store
/// is responsible for clamping before calling).
pub fn compute_visible_rows<R: RowRecord>(
    rows: &[R],
    columns: &[ResolvedColumn<R>],
    state: &ViewState,
) -> Result<VisibleRows, GridError> {
    if state.pagination.page_size == 0 {
        return Err(GridError::InvalidConfiguration(
            "page size must be positive".to_string(),
        ));
    }

    let mut indices = filter_rows(rows, columns, state);
    sort_rows(&mut indices, rows, columns, &state.sorting);

    let total_filtered_count = indices.len();
    let start = state.pagination.first_row_index();
    let end = (start + state.pagination.page_size as usize).min(total_filtered_count);
    let page = if start < end {
        indices[start..end].to_vec()
    } else {
        Vec::new()
    };

    Ok(VisibleRows {
        rows: page,
        total_filtered_count,
    })
}

/// Filter stage: a row survives iff the filter is empty, or any
/// visible column's filter text contains the needle as a
/// case-insensitive substring.
pub fn filter_rows<R: RowRecord>(
    rows: &[R],
    columns: &[ResolvedColumn<R>],
    state: &ViewState,
) -> Vec<usize> {
    if state.global_filter.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = state.global_filter.to_lowercase();
    let visible: Vec<&ResolvedColumn<R>> = columns
        .iter()
        .filter(|c| state.is_column_visible(c))
        .collect();

    (0..rows.len())
        .filter(|&index| {
            visible
                .iter()
                .any(|column| column.filter_text(&rows[index]).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort stage: stable multi-key sort over the sorting list. Ties fall
/// through to the next key; keys naming unknown or unsortable columns
/// do not participate. Stability means equal-key rows keep their
/// original relative order, so repeated sorts on tied data don't
/// visually shuffle.
pub fn sort_rows<R: RowRecord>(
    indices: &mut [usize],
    rows: &[R],
    columns: &[ResolvedColumn<R>],
    sorting: &Sorting,
) {
    let active: Vec<(&ResolvedColumn<R>, SortDirection)> = sorting
        .iter()
        .filter_map(|key| {
            columns
                .iter()
                .find(|c| c.id == key.column && c.sortable)
                .map(|c| (c, key.direction))
        })
        .collect();

    if active.is_empty() {
        return;
    }

    // One extraction pass per sort column, then the comparator is
    // pure index lookups.
    let keys: Vec<Vec<model::Value>> = active
        .iter()
        .map(|(column, _)| rows.iter().map(|row| column.sort_key(row)).collect())
        .collect();

    indices.sort_by(|&a, &b| {
        for (level, (_, direction)) in active.iter().enumerate() {
            let ordering = keys[level][a].total_cmp(&keys[level][b]);
            let ordering = match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != std::cmp::Ordering::Equal {
                return ordering;
            }
        }
        std::cmp::Ordering::Equal
    });
}
