//! FILENAME: model/src/column.rs
//! Column Model - declarative descriptors for one facet of a row.
//!
//! A column describes how to extract a value from a row, how to render
//! it, and whether it participates in sorting, hiding, and selection.
//! Columns are supplied wholesale by the caller and immutable once
//! resolved; the engine never mutates them.
//!
//! Render hooks are resolved once per column at setup time into a
//! tagged variant (`CellRender`/`HeaderRender`), not re-dispatched per
//! cell through a dynamic lookup.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::row::RowRecord;
use crate::value::Value;

/// Stable identifier of a column within one grid instance.
pub type ColumnId = String;

/// Caller-supplied value extractor.
pub type AccessorFn<R> = Arc<dyn Fn(&R) -> Option<Value> + Send + Sync>;

/// Caller-supplied cell render hook: row + extracted value -> display string.
pub type CellRenderFn<R> = Arc<dyn Fn(&R, &Value) -> String + Send + Sync>;

/// Caller-supplied header render hook: title -> display string.
pub type HeaderRenderFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Errors raised while resolving a column set.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColumnError {
    #[error("column '{0}' has neither a field accessor nor an accessor function")]
    MissingAccessor(ColumnId),

    #[error("duplicate column id '{0}'")]
    DuplicateId(ColumnId),
}

// ============================================================================
// ACCESSOR
// ============================================================================

/// How a column extracts its value from a row.
#[derive(Clone)]
pub enum Accessor<R> {
    /// Look up a named field through `RowRecord::field`.
    Field(String),
    /// Arbitrary computation over the row.
    Computed(AccessorFn<R>),
}

impl<R: RowRecord> Accessor<R> {
    /// Extracts the value, degrading any miss to `Value::Empty`.
    /// One malformed row must not break rendering of the rest.
    pub fn extract(&self, row: &R) -> Value {
        match self {
            Accessor::Field(name) => row.field(name).unwrap_or(Value::Empty),
            Accessor::Computed(f) => f(row).unwrap_or(Value::Empty),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => write!(f, "Accessor::Field({:?})", name),
            Accessor::Computed(_) => write!(f, "Accessor::Computed(..)"),
        }
    }
}

// ============================================================================
// RENDER HOOKS (resolved variants)
// ============================================================================

/// Cell render capability, resolved once at setup.
#[derive(Clone)]
pub enum CellRender<R> {
    /// `Value::display_string` of the extracted value.
    Default,
    Custom(CellRenderFn<R>),
}

impl<R> fmt::Debug for CellRender<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRender::Default => write!(f, "CellRender::Default"),
            CellRender::Custom(_) => write!(f, "CellRender::Custom(..)"),
        }
    }
}

/// Header render capability, resolved once at setup.
#[derive(Clone)]
pub enum HeaderRender {
    /// The column title verbatim.
    Default,
    Custom(HeaderRenderFn),
}

impl fmt::Debug for HeaderRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderRender::Default => write!(f, "HeaderRender::Default"),
            HeaderRender::Custom(_) => write!(f, "HeaderRender::Custom(..)"),
        }
    }
}

// ============================================================================
// COLUMN DEFINITION
// ============================================================================

/// The caller-facing column descriptor.
#[derive(Clone)]
pub struct ColumnDef<R> {
    /// Stable identifier within the grid.
    pub id: ColumnId,

    /// Header title (also the default header render output).
    pub title: String,

    /// Value extractor. Required unless the column is render-only
    /// with a custom cell render hook (e.g. an actions column).
    pub accessor: Option<Accessor<R>>,

    /// Optional custom header render hook.
    pub header_render: Option<HeaderRenderFn>,

    /// Optional custom cell render hook.
    pub cell_render: Option<CellRenderFn<R>>,

    /// Whether header clicks may sort by this column.
    pub sortable: bool,

    /// Whether the column appears in the visibility menu.
    pub hideable: bool,

    /// Whether this column hosts the row-selection checkbox.
    pub enable_selection: bool,

    /// Whether the column starts visible.
    pub visible_by_default: bool,
}

impl<R> ColumnDef<R> {
    /// Creates a column reading the named field from the row.
    pub fn field(id: impl Into<ColumnId>, title: impl Into<String>, field: impl Into<String>) -> Self {
        ColumnDef {
            id: id.into(),
            title: title.into(),
            accessor: Some(Accessor::Field(field.into())),
            header_render: None,
            cell_render: None,
            sortable: true,
            hideable: true,
            enable_selection: false,
            visible_by_default: true,
        }
    }

    /// Creates a column with a computed accessor.
    pub fn computed(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        accessor: impl Fn(&R) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        ColumnDef {
            id: id.into(),
            title: title.into(),
            accessor: Some(Accessor::Computed(Arc::new(accessor))),
            header_render: None,
            cell_render: None,
            sortable: true,
            hideable: true,
            enable_selection: false,
            visible_by_default: true,
        }
    }

    /// Creates a render-only column (no accessor). Requires a custom
    /// cell render hook or resolution fails with `MissingAccessor`.
    pub fn render_only(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        render: impl Fn(&R, &Value) -> String + Send + Sync + 'static,
    ) -> Self {
        ColumnDef {
            id: id.into(),
            title: title.into(),
            accessor: None,
            header_render: None,
            cell_render: Some(Arc::new(render)),
            sortable: false,
            hideable: true,
            enable_selection: false,
            visible_by_default: true,
        }
    }

    pub fn with_header_render(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.header_render = Some(Arc::new(f));
        self
    }

    pub fn with_cell_render(mut self, f: impl Fn(&R, &Value) -> String + Send + Sync + 'static) -> Self {
        self.cell_render = Some(Arc::new(f));
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_hideable(mut self, hideable: bool) -> Self {
        self.hideable = hideable;
        self
    }

    pub fn with_selection(mut self, enable: bool) -> Self {
        self.enable_selection = enable;
        self
    }

    pub fn hidden_by_default(mut self) -> Self {
        self.visible_by_default = false;
        self
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .field("enable_selection", &self.enable_selection)
            .field("visible_by_default", &self.visible_by_default)
            .finish()
    }
}

// ============================================================================
// RESOLVED COLUMN
// ============================================================================

/// A column after one-time setup resolution.
///
/// Render capabilities are fixed tagged variants here, so per-cell
/// work is a direct match instead of an option chain.
#[derive(Debug, Clone)]
pub struct ResolvedColumn<R> {
    pub id: ColumnId,
    pub title: String,
    accessor: Option<Accessor<R>>,
    header: HeaderRender,
    cell: CellRender<R>,
    pub sortable: bool,
    pub hideable: bool,
    pub enable_selection: bool,
    pub visible_by_default: bool,
}

impl<R: RowRecord> ResolvedColumn<R> {
    /// The extracted value, `Empty` on any accessor miss.
    pub fn sort_key(&self, row: &R) -> Value {
        match &self.accessor {
            Some(accessor) => accessor.extract(row),
            None => Value::Empty,
        }
    }

    /// The rendered cell string for display.
    pub fn display_string(&self, row: &R) -> String {
        let value = self.sort_key(row);
        match &self.cell {
            CellRender::Default => value.display_string(),
            CellRender::Custom(f) => f(row, &value),
        }
    }

    /// The string the global filter matches against. Deliberately the
    /// raw value's display string: custom cell renderers (badges,
    /// icons) do not change what the user can search for.
    pub fn filter_text(&self, row: &R) -> String {
        self.sort_key(row).display_string()
    }

    /// The rendered header label.
    pub fn header_label(&self) -> String {
        match &self.header {
            HeaderRender::Default => self.title.clone(),
            HeaderRender::Custom(f) => f(&self.title),
        }
    }
}

/// Resolves a column set, validating ids and accessor coverage.
pub fn resolve_columns<R>(defs: Vec<ColumnDef<R>>) -> Result<Vec<ResolvedColumn<R>>, ColumnError> {
    let mut resolved: Vec<ResolvedColumn<R>> = Vec::with_capacity(defs.len());

    for def in defs {
        if resolved.iter().any(|c| c.id == def.id) {
            return Err(ColumnError::DuplicateId(def.id));
        }
        if def.accessor.is_none() && def.cell_render.is_none() {
            return Err(ColumnError::MissingAccessor(def.id));
        }

        let header = match def.header_render {
            Some(f) => HeaderRender::Custom(f),
            None => HeaderRender::Default,
        };
        let cell = match def.cell_render {
            Some(f) => CellRender::Custom(f),
            None => CellRender::Default,
        };

        resolved.push(ResolvedColumn {
            id: def.id,
            title: def.title,
            accessor: def.accessor,
            header,
            cell,
            sortable: def.sortable,
            hideable: def.hideable,
            enable_selection: def.enable_selection,
            visible_by_default: def.visible_by_default,
        });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Record;

    fn status_row(status: &str) -> Record {
        Record::new()
            .with_field("status", status)
            .with_field("amount", 100.0)
    }

    #[test]
    fn test_field_accessor_extracts() {
        let col: ColumnDef<Record> = ColumnDef::field("status", "Status", "status");
        let resolved = resolve_columns(vec![col]).unwrap();
        assert_eq!(resolved[0].sort_key(&status_row("success")), Value::text("success"));
    }

    #[test]
    fn test_accessor_miss_degrades_to_empty() {
        let col: ColumnDef<Record> = ColumnDef::field("missing", "Missing", "no_such_field");
        let resolved = resolve_columns(vec![col]).unwrap();
        let row = status_row("success");
        assert_eq!(resolved[0].sort_key(&row), Value::Empty);
        assert_eq!(resolved[0].display_string(&row), "");
        assert_eq!(resolved[0].filter_text(&row), "");
    }

    #[test]
    fn test_computed_accessor_none_degrades_to_empty() {
        let col: ColumnDef<Record> = ColumnDef::computed("half", "Half", |row: &Record| match row.field("amount") {
            Some(Value::Number(n)) => Some(Value::Number(n / 2.0)),
            _ => None,
        });
        let resolved = resolve_columns(vec![col]).unwrap();
        assert_eq!(resolved[0].sort_key(&status_row("x")), Value::Number(50.0));
        assert_eq!(resolved[0].sort_key(&Record::new()), Value::Empty);
    }

    #[test]
    fn test_custom_cell_render_does_not_change_filter_text() {
        let col: ColumnDef<Record> = ColumnDef::field("amount", "Amount", "amount")
            .with_cell_render(|_, value| format!("${}", value.display_string()));
        let resolved = resolve_columns(vec![col]).unwrap();
        let row = status_row("success");
        assert_eq!(resolved[0].display_string(&row), "$100");
        assert_eq!(resolved[0].filter_text(&row), "100");
    }

    #[test]
    fn test_custom_header_render() {
        let col: ColumnDef<Record> =
            ColumnDef::field("email", "Email", "email").with_header_render(|t| t.to_uppercase());
        let resolved = resolve_columns(vec![col]).unwrap();
        assert_eq!(resolved[0].header_label(), "EMAIL");
    }

    #[test]
    fn test_missing_accessor_rejected() {
        let col: ColumnDef<Record> = ColumnDef {
            id: "broken".to_string(),
            title: "Broken".to_string(),
            accessor: None,
            header_render: None,
            cell_render: None,
            sortable: false,
            hideable: true,
            enable_selection: false,
            visible_by_default: true,
        };
        let err = resolve_columns(vec![col]).unwrap_err();
        assert_eq!(err, ColumnError::MissingAccessor("broken".to_string()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let cols: Vec<ColumnDef<Record>> = vec![
            ColumnDef::field("status", "Status", "status"),
            ColumnDef::field("status", "Status 2", "status"),
        ];
        let err = resolve_columns(cols).unwrap_err();
        assert_eq!(err, ColumnError::DuplicateId("status".to_string()));
    }

    #[test]
    fn test_render_only_column_allowed() {
        let col: ColumnDef<Record> = ColumnDef::render_only("actions", "", |_, _| "...".to_string());
        let resolved = resolve_columns(vec![col]).unwrap();
        assert!(!resolved[0].sortable);
        assert_eq!(resolved[0].display_string(&status_row("x")), "...");
        assert_eq!(resolved[0].sort_key(&status_row("x")), Value::Empty);
    }
}
