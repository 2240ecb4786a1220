//! FILENAME: model/src/lib.rs
//! PURPOSE: Main library entry point for the shared grid data model.
//! CONTEXT: Re-exports the value, row, and column types used by the
//! grid engine and by host applications building column sets.

pub mod column;
pub mod row;
pub mod value;

// Re-export commonly used types at the crate root
pub use column::{
    resolve_columns, Accessor, AccessorFn, CellRender, CellRenderFn, ColumnDef, ColumnError,
    ColumnId, HeaderRender, HeaderRenderFn, ResolvedColumn,
};
pub use row::{Record, RowKey, RowRecord};
pub use value::Value;
