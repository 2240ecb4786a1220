//! FILENAME: grid-engine/src/error.rs

use thiserror::Error;

use model::{ColumnError, ColumnId};

/// Errors the grid engine can refuse a transition with.
///
/// None of these are fatal to the host: every error leaves the prior
/// valid view-state untouched. Accessor failures are deliberately not
/// represented here; they degrade to an empty value at the column
/// model layer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("page {requested} is out of range (page count {page_count})")]
    OutOfRangeNavigation { requested: usize, page_count: usize },

    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    #[error(transparent)]
    Column(#[from] ColumnError),
}
