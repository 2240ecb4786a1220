//! FILENAME: grid-engine/src/lib.rs
//! Headless data-grid subsystem.
//!
//! This crate provides the grid calculation engine as a standalone
//! module. It depends on `model` for column definitions, row access,
//! and the value type. It owns no rendering: the output is a fully
//! resolved, serializable view the frontend draws verbatim.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the grid IS)
//! - `state`: The view-state store (what the user has done to it)
//! - `pipeline`: Pure filter -> sort -> paginate transform
//! - `pagination`: Page-cursor bounds arithmetic
//! - `surface`: Toolbar/selection view-models and operations
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Event reducer tying the layers together (HOW it runs)

pub mod definition;
pub mod engine;
pub mod error;
pub mod pagination;
pub mod pipeline;
pub mod state;
pub mod surface;
pub mod view;

pub use definition::*;
pub use engine::{next_sorting, GridEngine, GridEvent, RowKeyFn};
pub use error::GridError;
pub use pagination::page_count;
pub use pipeline::{compute_visible_rows, VisibleRows};
pub use state::{Pagination, StateListener, StateStore, Update, ViewState};
pub use surface::{
    ColumnVisibilityEntry, PaginationControls, SelectionSummary, Toolbar,
};
pub use view::{BodyCell, BodyRow, GridView, HeaderCell, SortIndicator};
