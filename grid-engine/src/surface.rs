//! FILENAME: grid-engine/src/surface.rs
//! Toolbar / Selection Surface - the headless presentational shell.
//!
//! Nothing here transforms data. The surface reads the view-state to
//! build plain view-models (search box, column-visibility menu,
//! selection summary, pagination controls) and writes it through the
//! store for the selection operations.
//!
//! The two select-all operations have deliberately different
//! semantics: "select all on page" covers only the keys in the
//! current paginated slice, "select all filtered" covers every key
//! passing the filter regardless of page. They must not be conflated.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use model::{ColumnId, ResolvedColumn, RowKey};

use crate::definition::{GridOptions, PaginationVariant};
use crate::pagination::page_count;
use crate::state::{StateStore, Update, ViewState};

// ============================================================================
// SELECTION OPERATIONS
// ============================================================================

/// Replaces the selection with exactly the keys of the current page
/// slice.
pub fn select_all_on_page(store: &mut StateStore, page_keys: Vec<RowKey>) {
    store.set_row_selection(Update::set(page_keys.into_iter().collect::<FxHashSet<_>>()));
}

/// Replaces the selection with every key passing the current filter,
/// across all pages.
pub fn select_all_filtered(store: &mut StateStore, filtered_keys: Vec<RowKey>) {
    store.set_row_selection(Update::set(
        filtered_keys.into_iter().collect::<FxHashSet<_>>(),
    ));
}

pub fn clear_selection(store: &mut StateStore) {
    store.set_row_selection(Update::set(FxHashSet::default()));
}

/// Toggles one row's membership in the selection.
pub fn toggle_row(store: &mut StateStore, key: RowKey) {
    store.set_row_selection(Update::with(move |previous: &FxHashSet<RowKey>| {
        let mut next = previous.clone();
        if !next.remove(&key) {
            next.insert(key);
        }
        next
    }));
}

// ============================================================================
// VIEW MODELS
// ============================================================================

/// The "N selected" indicator and bulk-action enablement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    pub selected_count: usize,
    pub bulk_actions_enabled: bool,
}

pub fn selection_summary(options: &GridOptions, state: &ViewState) -> SelectionSummary {
    let selected_count = state.row_selection.len();
    SelectionSummary {
        selected_count,
        bulk_actions_enabled: options.show_bulk_actions && selected_count > 0,
    }
}

/// One entry of the column-visibility menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibilityEntry {
    pub id: ColumnId,
    pub title: String,
    pub visible: bool,
}

/// Menu entries for every hideable column.
pub fn visibility_menu<R>(
    columns: &[ResolvedColumn<R>],
    state: &ViewState,
) -> Vec<ColumnVisibilityEntry> {
    columns
        .iter()
        .filter(|c| c.hideable)
        .map(|c| ColumnVisibilityEntry {
            id: c.id.clone(),
            title: c.title.clone(),
            visible: state.is_column_visible(c),
        })
        .collect()
}

/// The toolbar view-model: search box, visibility menu, selection
/// summary. Menus the options disable are absent, not empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolbar {
    pub search_placeholder: String,
    pub filter_value: String,
    pub visibility_menu: Option<Vec<ColumnVisibilityEntry>>,
    pub selection: Option<SelectionSummary>,
}

pub fn toolbar<R>(
    options: &GridOptions,
    columns: &[ResolvedColumn<R>],
    state: &ViewState,
) -> Toolbar {
    Toolbar {
        search_placeholder: options.search_placeholder.clone(),
        filter_value: state.global_filter.clone(),
        visibility_menu: options
            .show_column_visibility
            .then(|| visibility_menu(columns, state)),
        selection: options
            .show_row_selection
            .then(|| selection_summary(options, state)),
    }
}

/// Pagination controls for the configured variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationControls {
    /// Page-size selector plus jump-to-page input.
    Advanced {
        page_index: usize,
        page_count: usize,
        page_size: u32,
        page_size_options: Vec<u32>,
        can_previous: bool,
        can_next: bool,
    },
    /// Prev/next plus a page-of-total label.
    Basic {
        page_index: usize,
        page_count: usize,
        can_previous: bool,
        can_next: bool,
        label: String,
    },
}

pub fn pagination_controls(
    options: &GridOptions,
    state: &ViewState,
    total_filtered: usize,
) -> PaginationControls {
    let count = page_count(total_filtered, state.pagination.page_size);
    let index = state.pagination.page_index;
    let can_previous = index > 0;
    let can_next = index + 1 < count;

    match options.pagination_variant {
        PaginationVariant::Advanced => PaginationControls::Advanced {
            page_index: index,
            page_count: count,
            page_size: state.pagination.page_size,
            page_size_options: options.items_per_page_options.clone(),
            can_previous,
            can_next,
        },
        PaginationVariant::Basic => PaginationControls::Basic {
            page_index: index,
            page_count: count,
            can_previous,
            can_next,
            label: format!("Page {} of {}", index + 1, count),
        },
    }
}
