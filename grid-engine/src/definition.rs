//! FILENAME: grid-engine/src/definition.rs
//! Grid Definition - The serializable configuration.
//!
//! This module contains the types that DESCRIBE a grid instance: the
//! recognized presentation options and the initial view-state
//! overrides. These structures are designed to be:
//! - Serializable (so a host can persist them, e.g. alongside a page)
//! - Immutable snapshots of caller intent
//!
//! The column set itself is not part of this definition; columns carry
//! render closures and are supplied wholesale to the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use model::ColumnId;

/// Default page size when the caller supplies no override.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

// ============================================================================
// SORTING
// ============================================================================

/// Direction of one sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// One entry in the ordered multi-column sort list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(column: impl Into<ColumnId>) -> Self {
        SortKey {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<ColumnId>) -> Self {
        SortKey {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// The ordered sort-key list. Order is priority: the first key is the
/// primary sort, later keys break ties. Most grids sort by one or two
/// columns, hence the inline capacity.
pub type Sorting = SmallVec<[SortKey; 2]>;

// ============================================================================
// PAGINATION VARIANT
// ============================================================================

/// Which pagination control set the surface exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationVariant {
    /// Page-size selector plus jump-to-page input.
    Advanced,
    /// Prev/next buttons plus a "page X of Y" label.
    Basic,
}

impl Default for PaginationVariant {
    fn default() -> Self {
        PaginationVariant::Advanced
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Recognized presentation options and their effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    /// Placeholder text for the search box. Display only.
    pub search_placeholder: String,

    /// Enables the column-visibility toggle menu.
    pub show_column_visibility: bool,

    /// Enables the row-selection surface.
    pub show_row_selection: bool,

    /// Enables bulk-action buttons (pairs with caller-supplied
    /// export/delete callbacks outside this engine).
    pub show_bulk_actions: bool,

    /// Which pagination control set to expose.
    pub pagination_variant: PaginationVariant,

    /// Allowed page sizes for the Advanced selector, in display order.
    pub items_per_page_options: Vec<u32>,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            search_placeholder: "Search...".to_string(),
            show_column_visibility: true,
            show_row_selection: true,
            show_bulk_actions: false,
            pagination_variant: PaginationVariant::Advanced,
            items_per_page_options: vec![10, 20, 50, 100],
        }
    }
}

// ============================================================================
// INITIAL STATE
// ============================================================================

/// Initial view-state overrides applied once when the engine is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitialState {
    /// Initial page size. `DEFAULT_PAGE_SIZE` when absent.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Default sort order.
    #[serde(default)]
    pub sorting: Vec<SortKey>,

    /// Columns that start hidden in addition to any column declared
    /// hidden by default.
    #[serde(default)]
    pub hidden_columns: Vec<ColumnId>,
}
