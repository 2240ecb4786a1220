//! FILENAME: grid-engine/src/state.rs
//! View-State Store - the only mutable entity of a grid instance.
//!
//! One `ViewState` per table instance, created at mount, mutated only
//! through the store's setters, discarded at unmount. It owns no
//! external resources. Each setter accepts either a literal value or a
//! pure updater closure resolved synchronously against the latest
//! state (the functional-update pattern), so a single-threaded UI can
//! issue read-modify-write updates without races.
//!
//! Policy: changing the global filter or the sort order resets the
//! page index to 0, because the old page position is meaningless once
//! the result set changes. This is explicit, not incidental.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use model::{ColumnId, ResolvedColumn, RowKey};

use crate::definition::{InitialState, Sorting, DEFAULT_PAGE_SIZE};

// ============================================================================
// VIEW STATE
// ============================================================================

/// Pagination cursor: zero-based page index, positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The complete mutable view-state of one grid instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Ordered multi-column sort; the first key has highest priority.
    pub sorting: Sorting,

    /// Free-text filter matched case-insensitively against every
    /// visible column's filter text.
    pub global_filter: String,

    /// Visibility overrides by column id. Columns absent from the map
    /// fall back to their declared default.
    pub column_visibility: FxHashMap<ColumnId, bool>,

    /// Keys of the currently selected rows.
    pub row_selection: FxHashSet<RowKey>,

    /// Pagination cursor.
    pub pagination: Pagination,
}

impl ViewState {
    /// Builds the initial state from caller overrides.
    pub fn from_initial(initial: &InitialState) -> Self {
        let mut state = ViewState::default();
        if let Some(size) = initial.page_size {
            state.pagination.page_size = size;
        }
        state.sorting = SmallVec::from_vec(initial.sorting.clone());
        for id in &initial.hidden_columns {
            state.column_visibility.insert(id.clone(), false);
        }
        state
    }

    /// Effective visibility of a column: the override if present,
    /// otherwise the column's declared default.
    pub fn is_column_visible<R>(&self, column: &ResolvedColumn<R>) -> bool {
        self.column_visibility
            .get(&column.id)
            .copied()
            .unwrap_or(column.visible_by_default)
    }
}

// ============================================================================
// FUNCTIONAL UPDATES
// ============================================================================

/// A state-slice update: either a literal new value or a pure updater
/// of the previous value.
pub enum Update<T> {
    Set(T),
    With(Box<dyn FnOnce(&T) -> T>),
}

impl<T> Update<T> {
    pub fn set(value: impl Into<T>) -> Self {
        Update::Set(value.into())
    }

    pub fn with(f: impl FnOnce(&T) -> T + 'static) -> Self {
        Update::With(Box::new(f))
    }

    fn resolve(self, previous: &T) -> T {
        match self {
            Update::Set(value) => value,
            Update::With(f) => f(previous),
        }
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Callback invoked after every applied mutation, so a host can
/// persist the state (e.g. into a URL query string). The store itself
/// never reads or writes any external store.
pub type StateListener = Box<dyn Fn(&ViewState) + Send>;

/// Owns the `ViewState` and applies all mutations to it.
pub struct StateStore {
    state: ViewState,
    version: u64,
    listener: Option<StateListener>,
}

impl StateStore {
    pub fn new(state: ViewState) -> Self {
        StateStore {
            state,
            version: 0,
            listener: None,
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &ViewState {
        &self.state
    }

    /// Monotonically increasing mutation counter. Unchanged when a
    /// setter resolves to a value equal to the current one.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_listener(&mut self, listener: StateListener) {
        self.listener = Some(listener);
    }

    pub fn set_sorting(&mut self, update: Update<Sorting>) {
        let next = update.resolve(&self.state.sorting);
        if next != self.state.sorting {
            self.state.sorting = next;
            // Changing the sort order invalidates the page position.
            self.state.pagination.page_index = 0;
            self.committed();
        }
    }

    pub fn set_global_filter(&mut self, update: Update<String>) {
        let next = update.resolve(&self.state.global_filter);
        if next != self.state.global_filter {
            self.state.global_filter = next;
            // Changing the result set invalidates the page position.
            self.state.pagination.page_index = 0;
            self.committed();
        }
    }

    pub fn set_column_visibility(&mut self, update: Update<FxHashMap<ColumnId, bool>>) {
        let next = update.resolve(&self.state.column_visibility);
        if next != self.state.column_visibility {
            self.state.column_visibility = next;
            self.committed();
        }
    }

    pub fn set_row_selection(&mut self, update: Update<FxHashSet<RowKey>>) {
        let next = update.resolve(&self.state.row_selection);
        if next != self.state.row_selection {
            self.state.row_selection = next;
            self.committed();
        }
    }

    pub fn set_pagination(&mut self, update: Update<Pagination>) {
        let next = update.resolve(&self.state.pagination);
        if next != self.state.pagination {
            self.state.pagination = next;
            self.committed();
        }
    }

    fn committed(&mut self) {
        self.version += 1;
        if let Some(listener) = &self.listener {
            listener(&self.state);
        }
    }
}

impl Default for StateStore {
    fn default() -> Self {
        StateStore::new(ViewState::default())
    }
}
