//! FILENAME: grid-engine/src/engine.rs
//! Grid Engine - the event reducer tying store, pipeline, and view.
//!
//! There is no state machine in the classical sense: the engine is a
//! pure reducer over discrete user-input events, each mapped to one
//! view-state transition. An invalid transition returns an error and
//! keeps the prior valid state; the host keeps showing the last valid
//! view. All transitions are synchronous; coalescing rapid events
//! (debouncing a fast typist) is the caller's concern.

use std::sync::Arc;

use model::{resolve_columns, ColumnDef, ColumnId, ResolvedColumn, RowKey, RowRecord};
use rustc_hash::FxHashMap;
use smallvec::smallvec;

use crate::definition::{GridOptions, InitialState, SortDirection, SortKey, Sorting};
use crate::error::GridError;
use crate::pipeline::{compute_visible_rows, filter_rows};
use crate::state::{StateListener, StateStore, Update, ViewState};
use crate::surface;
use crate::view::{BodyCell, BodyRow, GridView, HeaderCell, SortIndicator};

/// Caller-supplied row identity function. Defaults to the source
/// index when absent.
pub type RowKeyFn<R> = Arc<dyn Fn(&R) -> RowKey + Send + Sync>;

// ============================================================================
// EVENTS
// ============================================================================

/// Discrete user-input events the engine reduces over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// The search box content changed.
    FilterChanged(String),

    /// A sortable header was clicked. Non-additive clicks cycle that
    /// column through ascending -> descending -> unsorted, replacing
    /// any other sort. Additive clicks (shift) cycle the column
    /// within the multi-sort list instead.
    SortHeaderClicked { column: ColumnId, additive: bool },

    /// Absolute page navigation.
    PageChanged(usize),

    /// Page-size selector change.
    PageSizeChanged(u32),

    /// A row's selection checkbox was toggled.
    RowToggled(RowKey),

    /// Header checkbox: select exactly the rows on the current page.
    SelectAllOnPage,

    /// Toolbar action: select every row passing the filter.
    SelectAllFiltered,

    ClearSelection,

    /// A column-visibility menu entry was toggled.
    ColumnVisibilityToggled(ColumnId),

    /// The visibility menu's "show all" reset: drops every override
    /// so columns fall back to their declared defaults.
    ResetColumnVisibility,
}

// ============================================================================
// SORT CYCLE
// ============================================================================

/// Computes the next sorting list for a header click.
pub fn next_sorting(current: &Sorting, column: &ColumnId, additive: bool) -> Sorting {
    if additive {
        let mut next = current.clone();
        match next.iter().position(|k| &k.column == column) {
            Some(position) => match next[position].direction {
                SortDirection::Ascending => {
                    next[position].direction = SortDirection::Descending;
                }
                SortDirection::Descending => {
                    next.remove(position);
                }
            },
            None => next.push(SortKey::ascending(column.clone())),
        }
        return next;
    }

    // Non-additive: the clicked column becomes the only sort key,
    // cycling direction when it already was.
    match current.as_slice() {
        [only] if &only.column == column => match only.direction {
            SortDirection::Ascending => smallvec![SortKey::descending(column.clone())],
            SortDirection::Descending => Sorting::new(),
        },
        _ => smallvec![SortKey::ascending(column.clone())],
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// One grid instance: resolved columns, options, and the view-state
/// store. The dataset itself stays with the caller and is passed into
/// `apply`/`view`, so the engine holds no row copies.
pub struct GridEngine<R> {
    columns: Vec<ResolvedColumn<R>>,
    options: GridOptions,
    store: StateStore,
    row_key_fn: Option<RowKeyFn<R>>,
}

impl<R> std::fmt::Debug for GridEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEngine")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<R: RowRecord> GridEngine<R> {
    /// Builds an engine, validating the column set and initial state.
    pub fn new(
        columns: Vec<ColumnDef<R>>,
        options: GridOptions,
        initial: InitialState,
    ) -> Result<Self, GridError> {
        let columns = resolve_columns(columns)?;

        if let Some(0) = initial.page_size {
            return Err(GridError::InvalidConfiguration(
                "initial page size must be positive".to_string(),
            ));
        }
        if options.items_per_page_options.iter().any(|&s| s == 0) {
            return Err(GridError::InvalidConfiguration(
                "page size options must be positive".to_string(),
            ));
        }
        for id in &initial.hidden_columns {
            if !columns.iter().any(|c| &c.id == id) {
                return Err(GridError::UnknownColumn(id.clone()));
            }
        }

        Ok(GridEngine {
            columns,
            options,
            store: StateStore::new(ViewState::from_initial(&initial)),
            row_key_fn: None,
        })
    }

    /// Installs a row identity function (e.g. a primary-key column)
    /// so selection survives reordering of the source data.
    pub fn with_row_key(mut self, f: impl Fn(&R) -> RowKey + Send + Sync + 'static) -> Self {
        self.row_key_fn = Some(Arc::new(f));
        self
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn columns(&self) -> &[ResolvedColumn<R>] {
        &self.columns
    }

    /// The current view-state snapshot.
    pub fn state(&self) -> &ViewState {
        self.store.snapshot()
    }

    /// Direct access to the store for functional-update callers.
    pub fn store_mut(&mut self) -> &mut StateStore {
        &mut self.store
    }

    /// Notifies the listener after every applied state change, so the
    /// host can persist the state externally.
    pub fn set_listener(&mut self, listener: StateListener) {
        self.store.set_listener(listener);
    }

    /// Identity of one row.
    pub fn row_key(&self, index: usize, row: &R) -> RowKey {
        match &self.row_key_fn {
            Some(f) => f(row),
            None => RowKey::Index(index),
        }
    }

    /// Applies one event as one view-state transition. On error the
    /// prior valid state is kept untouched.
    pub fn apply(&mut self, rows: &[R], event: GridEvent) -> Result<(), GridError> {
        match event {
            GridEvent::FilterChanged(filter) => {
                self.store.set_global_filter(Update::Set(filter));
                Ok(())
            }

            GridEvent::SortHeaderClicked { column, additive } => {
                let col = self
                    .columns
                    .iter()
                    .find(|c| c.id == column)
                    .ok_or_else(|| GridError::UnknownColumn(column.clone()))?;
                if !col.sortable {
                    // Clicking a non-sortable header is a no-op.
                    return Ok(());
                }
                let next = next_sorting(&self.store.snapshot().sorting, &column, additive);
                self.store.set_sorting(Update::Set(next));
                Ok(())
            }

            GridEvent::PageChanged(page) => {
                let total = self.filtered_count(rows);
                let mut pagination = self.store.snapshot().pagination;
                pagination.go_to_page(page, total)?;
                self.store.set_pagination(Update::Set(pagination));
                Ok(())
            }

            GridEvent::PageSizeChanged(size) => {
                let total = self.filtered_count(rows);
                let mut pagination = self.store.snapshot().pagination;
                pagination.set_page_size(size, total)?;
                self.store.set_pagination(Update::Set(pagination));
                Ok(())
            }

            GridEvent::RowToggled(key) => {
                surface::toggle_row(&mut self.store, key);
                Ok(())
            }

            GridEvent::SelectAllOnPage => {
                let visible = compute_visible_rows(rows, &self.columns, self.store.snapshot())?;
                let keys = visible
                    .rows
                    .iter()
                    .map(|&index| self.row_key(index, &rows[index]))
                    .collect();
                surface::select_all_on_page(&mut self.store, keys);
                Ok(())
            }

            GridEvent::SelectAllFiltered => {
                let keys = filter_rows(rows, &self.columns, self.store.snapshot())
                    .into_iter()
                    .map(|index| self.row_key(index, &rows[index]))
                    .collect();
                surface::select_all_filtered(&mut self.store, keys);
                Ok(())
            }

            GridEvent::ClearSelection => {
                surface::clear_selection(&mut self.store);
                Ok(())
            }

            GridEvent::ColumnVisibilityToggled(column) => {
                let col = self
                    .columns
                    .iter()
                    .find(|c| c.id == column)
                    .ok_or_else(|| GridError::UnknownColumn(column.clone()))?;
                if !col.hideable {
                    return Err(GridError::InvalidConfiguration(format!(
                        "column '{}' is not hideable",
                        column
                    )));
                }
                let was_visible = self.store.snapshot().is_column_visible(col);
                self.store
                    .set_column_visibility(Update::with(move |previous: &FxHashMap<ColumnId, bool>| {
                        let mut next = previous.clone();
                        next.insert(column.clone(), !was_visible);
                        next
                    }));
                // Hiding a column can shrink the filtered set.
                self.reconcile_page(rows);
                Ok(())
            }

            GridEvent::ResetColumnVisibility => {
                self.store
                    .set_column_visibility(Update::Set(Default::default()));
                self.reconcile_page(rows);
                Ok(())
            }
        }
    }

    /// Renders the current view: filtered, sorted, paginated, and
    /// fully formatted.
    pub fn view(&self, rows: &[R]) -> Result<GridView, GridError> {
        let state = self.store.snapshot();
        let visible = compute_visible_rows(rows, &self.columns, state)?;

        let headers = self
            .columns
            .iter()
            .filter(|c| state.is_column_visible(c))
            .map(|c| HeaderCell {
                column: c.id.clone(),
                label: c.header_label(),
                sortable: c.sortable,
                sort: state
                    .sorting
                    .iter()
                    .position(|k| k.column == c.id)
                    .map(|priority| SortIndicator {
                        direction: state.sorting[priority].direction,
                        priority,
                    }),
                selection_column: c.enable_selection,
            })
            .collect();

        let body = visible
            .rows
            .iter()
            .map(|&index| {
                let row = &rows[index];
                let key = self.row_key(index, row);
                BodyRow {
                    selected: state.row_selection.contains(&key),
                    key,
                    source_row: index,
                    cells: self
                        .columns
                        .iter()
                        .filter(|c| state.is_column_visible(c))
                        .map(|c| BodyCell {
                            column: c.id.clone(),
                            formatted_value: c.display_string(row),
                        })
                        .collect(),
                }
            })
            .collect();

        Ok(GridView {
            headers,
            rows: body,
            total_filtered_count: visible.total_filtered_count,
            toolbar: surface::toolbar(&self.options, &self.columns, state),
            pagination: surface::pagination_controls(
                &self.options,
                state,
                visible.total_filtered_count,
            ),
        })
    }

    fn filtered_count(&self, rows: &[R]) -> usize {
        filter_rows(rows, &self.columns, self.store.snapshot()).len()
    }

    /// Re-clamps the page index after a change that may have shrunk
    /// the filtered set without resetting the page.
    fn reconcile_page(&mut self, rows: &[R]) {
        let total = self.filtered_count(rows);
        let mut pagination = self.store.snapshot().pagination;
        pagination.clamp_page_index(total);
        self.store.set_pagination(Update::Set(pagination));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Record, Value};

    use crate::definition::PaginationVariant;
    use crate::surface::PaginationControls;

    /// 97 payment rows with distinct, shuffled amounts 0..97.
    fn payment_rows() -> Vec<Record> {
        (0..97)
            .map(|i| {
                let amount = (i * 13) % 97; // distinct permuted amounts
                Record::new()
                    .with_field("id", format!("p_{}", i))
                    .with_field("status", if i % 3 == 0 { "success" } else { "pending" })
                    .with_field("email", format!("user{}@example.com", i))
                    .with_field("amount", amount as f64)
            })
            .collect()
    }

    fn payment_columns() -> Vec<ColumnDef<Record>> {
        vec![
            ColumnDef::field("id", "Id", "id").hidden_by_default(),
            ColumnDef::field("status", "Status", "status"),
            ColumnDef::field("email", "Email", "email"),
            ColumnDef::field("amount", "Amount", "amount")
                .with_cell_render(|_, value| format!("${}", value.display_string())),
        ]
    }

    fn engine() -> GridEngine<Record> {
        GridEngine::new(
            payment_columns(),
            GridOptions::default(),
            InitialState::default(),
        )
        .unwrap()
    }

    fn amounts(view: &GridView) -> Vec<f64> {
        view.rows
            .iter()
            .map(|r| {
                r.cells
                    .iter()
                    .find(|c| c.column == "amount")
                    .unwrap()
                    .formatted_value
                    .trim_start_matches('$')
                    .parse()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_sort_header_cycle() {
        let rows = payment_rows();
        let mut grid = engine();

        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: false,
            },
        )
        .unwrap();
        assert_eq!(
            grid.state().sorting.as_slice(),
            &[SortKey::ascending("amount")]
        );

        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: false,
            },
        )
        .unwrap();
        assert_eq!(
            grid.state().sorting.as_slice(),
            &[SortKey::descending("amount")]
        );

        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: false,
            },
        )
        .unwrap();
        assert!(grid.state().sorting.is_empty());
    }

    #[test]
    fn test_additive_clicks_build_multi_sort() {
        let rows = payment_rows();
        let mut grid = engine();

        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "status".to_string(),
                additive: false,
            },
        )
        .unwrap();
        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: true,
            },
        )
        .unwrap();
        assert_eq!(
            grid.state().sorting.as_slice(),
            &[SortKey::ascending("status"), SortKey::ascending("amount")]
        );

        // Additive click on an existing key advances just that key.
        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: true,
            },
        )
        .unwrap();
        assert_eq!(
            grid.state().sorting.as_slice(),
            &[SortKey::ascending("status"), SortKey::descending("amount")]
        );

        // A third additive click removes it, leaving the primary key.
        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: true,
            },
        )
        .unwrap();
        assert_eq!(
            grid.state().sorting.as_slice(),
            &[SortKey::ascending("status")]
        );
    }

    #[test]
    fn test_sorting_a_non_sortable_header_is_a_no_op() {
        let rows = payment_rows();
        let mut grid = GridEngine::new(
            vec![
                ColumnDef::field("status", "Status", "status").with_sortable(false),
                ColumnDef::field("amount", "Amount", "amount"),
            ],
            GridOptions::default(),
            InitialState::default(),
        )
        .unwrap();

        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "status".to_string(),
                additive: false,
            },
        )
        .unwrap();
        assert!(grid.state().sorting.is_empty());
    }

    #[test]
    fn test_unknown_column_events_are_rejected() {
        let rows = payment_rows();
        let mut grid = engine();

        let err = grid
            .apply(
                &rows,
                GridEvent::SortHeaderClicked {
                    column: "nope".to_string(),
                    additive: false,
                },
            )
            .unwrap_err();
        assert_eq!(err, GridError::UnknownColumn("nope".to_string()));

        let err = grid
            .apply(&rows, GridEvent::ColumnVisibilityToggled("nope".to_string()))
            .unwrap_err();
        assert_eq!(err, GridError::UnknownColumn("nope".to_string()));
    }

    #[test]
    fn test_filter_changed_resets_page() {
        let rows = payment_rows();
        let mut grid = engine();

        grid.apply(&rows, GridEvent::PageChanged(5)).unwrap();
        assert_eq!(grid.state().pagination.page_index, 5);

        grid.apply(&rows, GridEvent::FilterChanged("success".to_string()))
            .unwrap();
        assert_eq!(grid.state().pagination.page_index, 0);
    }

    #[test]
    fn test_out_of_range_navigation_keeps_prior_state() {
        let rows = payment_rows();
        let mut grid = engine();
        grid.apply(&rows, GridEvent::PageChanged(3)).unwrap();

        // 97 rows at size 10: pages 0..10, page 10 does not exist.
        let err = grid.apply(&rows, GridEvent::PageChanged(10)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfRangeNavigation {
                requested: 10,
                page_count: 10
            }
        );
        assert_eq!(grid.state().pagination.page_index, 3);
    }

    #[test]
    fn test_select_all_on_page_vs_select_all_filtered() {
        let rows = payment_rows();
        let mut grid = engine();

        grid.apply(&rows, GridEvent::SelectAllOnPage).unwrap();
        assert_eq!(grid.state().row_selection.len(), 10);

        grid.apply(&rows, GridEvent::SelectAllFiltered).unwrap();
        assert_eq!(grid.state().row_selection.len(), 97);

        // Last page holds the 7 remainder rows.
        grid.apply(&rows, GridEvent::PageChanged(9)).unwrap();
        grid.apply(&rows, GridEvent::SelectAllOnPage).unwrap();
        assert_eq!(grid.state().row_selection.len(), 7);

        grid.apply(&rows, GridEvent::ClearSelection).unwrap();
        assert!(grid.state().row_selection.is_empty());
    }

    #[test]
    fn test_selection_survives_filtering() {
        let rows = payment_rows();
        let mut grid = engine();

        grid.apply(&rows, GridEvent::RowToggled(RowKey::Index(1)))
            .unwrap();
        grid.apply(&rows, GridEvent::FilterChanged("success".to_string()))
            .unwrap();
        // Row 1 is "pending" and filtered out, but stays selected.
        assert!(grid.state().row_selection.contains(&RowKey::Index(1)));
    }

    #[test]
    fn test_custom_row_keys_flow_through_selection() {
        let rows = payment_rows();
        let mut grid = GridEngine::new(
            payment_columns(),
            GridOptions::default(),
            InitialState::default(),
        )
        .unwrap()
        .with_row_key(|row: &Record| match row.field("id") {
            Some(Value::Text(id)) => RowKey::Custom(id),
            _ => RowKey::Index(usize::MAX),
        });

        grid.apply(&rows, GridEvent::SelectAllOnPage).unwrap();
        assert!(grid
            .state()
            .row_selection
            .contains(&RowKey::Custom("p_0".to_string())));

        let view = grid.view(&rows).unwrap();
        assert!(view.rows.iter().all(|r| r.selected));
    }

    #[test]
    fn test_hiding_a_column_reconciles_the_page() {
        let rows = payment_rows();
        let mut grid = engine();

        // Filter on emails only matchable through the email column.
        grid.apply(&rows, GridEvent::FilterChanged("example.com".to_string()))
            .unwrap();
        grid.apply(&rows, GridEvent::PageChanged(9)).unwrap();

        // Hiding the email column empties the filtered set; the page
        // index must be clamped back, not left dangling.
        grid.apply(&rows, GridEvent::ColumnVisibilityToggled("email".to_string()))
            .unwrap();
        assert_eq!(grid.state().pagination.page_index, 0);

        let view = grid.view(&rows).unwrap();
        assert_eq!(view.total_filtered_count, 0);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_non_hideable_column_toggle_is_refused() {
        let rows = payment_rows();
        let mut grid = GridEngine::new(
            vec![ColumnDef::field("status", "Status", "status").with_hideable(false)],
            GridOptions::default(),
            InitialState::default(),
        )
        .unwrap();

        let err = grid
            .apply(&rows, GridEvent::ColumnVisibilityToggled("status".to_string()))
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration(_)));
        assert!(grid.state().column_visibility.is_empty());
    }

    #[test]
    fn test_reset_column_visibility_restores_defaults() {
        let rows = payment_rows();
        let mut grid = engine();

        grid.apply(&rows, GridEvent::ColumnVisibilityToggled("id".to_string()))
            .unwrap();
        assert_eq!(grid.state().column_visibility.get("id"), Some(&true));

        grid.apply(&rows, GridEvent::ResetColumnVisibility).unwrap();
        assert!(grid.state().column_visibility.is_empty());
        // "id" is hidden by default again.
        let view = grid.view(&rows).unwrap();
        assert!(view.headers.iter().all(|h| h.column != "id"));
    }

    #[test]
    fn test_view_renders_headers_and_formatted_cells() {
        let rows = payment_rows();
        let mut grid = engine();
        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: false,
            },
        )
        .unwrap();

        let view = grid.view(&rows).unwrap();
        // "id" starts hidden; three visible columns remain.
        let header_ids: Vec<&str> = view.headers.iter().map(|h| h.column.as_str()).collect();
        assert_eq!(header_ids, vec!["status", "email", "amount"]);

        let amount_header = &view.headers[2];
        assert_eq!(
            amount_header.sort,
            Some(SortIndicator {
                direction: SortDirection::Ascending,
                priority: 0
            })
        );

        // Custom cell renderer applied; lowest amount first.
        assert_eq!(view.cell(0, "amount"), Some("$0"));
    }

    #[test]
    fn test_end_to_end_sort_paginate_resize() {
        let rows = payment_rows();
        let mut grid = engine();

        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: false,
            },
        )
        .unwrap();
        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: false,
            },
        )
        .unwrap(); // now descending

        let view = grid.view(&rows).unwrap();
        assert_eq!(view.rows.len(), 10);
        let top = amounts(&view);
        assert_eq!(top, vec![96.0, 95.0, 94.0, 93.0, 92.0, 91.0, 90.0, 89.0, 88.0, 87.0]);
        let top_key = view.rows[0].key.clone();

        grid.apply(&rows, GridEvent::PageSizeChanged(25)).unwrap();
        let view = grid.view(&rows).unwrap();
        match view.pagination {
            PaginationControls::Advanced {
                page_count,
                page_size,
                ..
            } => {
                assert_eq!(page_count, 4);
                assert_eq!(page_size, 25);
            }
            other => panic!("expected advanced controls, got {:?}", other),
        }
        // The previously-topmost row is still on the visible page.
        assert!(view.rows.iter().any(|r| r.key == top_key));
    }

    #[test]
    fn test_page_size_change_preserves_first_visible_row() {
        let rows = payment_rows();
        let mut grid = engine();
        grid.apply(
            &rows,
            GridEvent::SortHeaderClicked {
                column: "amount".to_string(),
                additive: false,
            },
        )
        .unwrap();
        grid.apply(&rows, GridEvent::PageChanged(4)).unwrap();

        let before = grid.view(&rows).unwrap();
        let first_key = before.rows[0].key.clone();

        grid.apply(&rows, GridEvent::PageSizeChanged(25)).unwrap();
        // Row 40 of the sorted order lives on page 1 of size 25.
        assert_eq!(grid.state().pagination.page_index, 1);
        let after = grid.view(&rows).unwrap();
        assert!(after.rows.iter().any(|r| r.key == first_key));
    }

    #[test]
    fn test_basic_pagination_variant_in_view() {
        let rows = payment_rows();
        let mut options = GridOptions::default();
        options.pagination_variant = PaginationVariant::Basic;
        let grid = GridEngine::new(payment_columns(), options, InitialState::default()).unwrap();

        let view = grid.view(&rows).unwrap();
        match view.pagination {
            PaginationControls::Basic { label, .. } => assert_eq!(label, "Page 1 of 10"),
            other => panic!("expected basic controls, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_initial_configuration_is_rejected() {
        let err = GridEngine::<Record>::new(
            payment_columns(),
            GridOptions::default(),
            InitialState {
                page_size: Some(0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, GridError::InvalidConfiguration(_)));

        let err = GridEngine::<Record>::new(
            payment_columns(),
            GridOptions::default(),
            InitialState {
                hidden_columns: vec!["nope".to_string()],
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err, GridError::UnknownColumn("nope".to_string()));
    }
}
