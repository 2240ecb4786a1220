//! FILENAME: grid-engine/src/view.rs
//! Grid View - renderable output for the frontend.
//!
//! The fully resolved thing a frontend renders verbatim: header cells
//! with sort indicators, formatted body rows with selection flags, the
//! toolbar view-model, and the pagination controls. All strings, all
//! serializable; no closures or row references escape the engine.

use serde::{Deserialize, Serialize};

use model::{ColumnId, RowKey};

use crate::definition::SortDirection;
use crate::surface::{PaginationControls, Toolbar};

/// A header cell for one visible column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub column: ColumnId,
    pub label: String,
    pub sortable: bool,

    /// Sort indicator: direction plus 0-based priority within the
    /// multi-sort list. `None` when the column is unsorted.
    pub sort: Option<SortIndicator>,

    /// Whether this column hosts the row-selection checkbox.
    pub selection_column: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortIndicator {
    pub direction: SortDirection,
    pub priority: usize,
}

/// One cell of a body row, already rendered to its display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyCell {
    pub column: ColumnId,
    pub formatted_value: String,
}

/// One row of the current page slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyRow {
    /// Selection identity of this row.
    pub key: RowKey,

    /// Index of this row in the source dataset.
    pub source_row: usize,

    pub selected: bool,
    pub cells: Vec<BodyCell>,
}

/// The complete rendered view of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridView {
    /// Header cells, visible columns only, in declaration order.
    pub headers: Vec<HeaderCell>,

    /// The current page slice, filtered and sorted.
    pub rows: Vec<BodyRow>,

    /// Row count after filtering, before pagination.
    pub total_filtered_count: usize,

    pub toolbar: Toolbar,
    pub pagination: PaginationControls,
}

impl GridView {
    /// Convenience lookup of a cell by row position and column id.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row).and_then(|r| {
            r.cells
                .iter()
                .find(|c| c.column == column)
                .map(|c| c.formatted_value.as_str())
        })
    }
}
