//! Reader and extraction options

use sheetpick_core::Span;

/// Which axis produces the top-level units of a collection
///
/// The chosen axis is the "outer" axis: one output unit (string or list)
/// per outer index, assembled by walking the other ("inner") axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// One unit per row, cells gathered across columns
    #[default]
    Rows,
    /// One unit per column, cells gathered across rows
    Columns,
}

/// Output shape of a [`collect`](crate::RangeReader::collect) call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Concatenated, delimiter-joined strings
    #[default]
    Text,
    /// Raw cell values, nested or flattened per the degenerate-span rules
    List,
    /// Keyed mapping; delegates to [`keyed`](crate::RangeReader::keyed)
    Keyed,
}

/// Instance defaults for a [`RangeReader`](crate::RangeReader)
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Default row span
    pub rows: Span,
    /// Default column span
    pub cols: Span,
    /// Default delimiter for text output
    pub delimiter: String,
    /// Elide empty cells and empty units from output
    pub skip_empty: bool,
    /// Emit progress events through the `log` facade
    pub alerts: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            rows: Span::single(1),
            cols: Span::single(1),
            delimiter: " ".to_string(),
            skip_empty: true,
            alerts: true,
        }
    }
}

/// Per-call options for [`collect`](crate::RangeReader::collect)
///
/// Every `None` falls back to the reader's instance default.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Output shape (default: [`OutputKind::Text`])
    pub kind: OutputKind,
    /// Row span override
    pub rows: Option<Span>,
    /// Column span override
    pub cols: Option<Span>,
    /// Outer axis (default: [`Axis::Rows`]; [`OutputKind::Keyed`] defaults
    /// to [`Axis::Columns`])
    pub axis: Option<Axis>,
    /// Explicit key names for keyed output
    pub key_names: Option<Vec<String>>,
    /// Header row/column index for derived keys (default: 1)
    pub key_index: Option<u32>,
    /// strftime pattern for date-time cells (default: `%m/%d/%Y %H:%M:%S`)
    pub date_format: Option<String>,
    /// Delimiter override; a degenerate column span defaults this to `""`.
    /// Degeneracy is the only test: an inclusive pair covering one column,
    /// such as `Span::inclusive(2, 2)`, triggers the empty default exactly
    /// like a single-index span does.
    pub delimiter: Option<String>,
    /// Skip-empty override
    pub skip_empty: Option<bool>,
    /// Progress-event override
    pub alerts: Option<bool>,
}

/// Per-call options for [`keyed`](crate::RangeReader::keyed)
#[derive(Debug, Clone)]
pub struct KeyedOptions {
    /// Axis the keys run along (default: [`Axis::Columns`])
    pub axis: Axis,
    /// Explicit key names; `None` (or an empty vector) derives them from
    /// header cells. A fresh container is built per call, never shared.
    pub key_names: Option<Vec<String>>,
    /// Row index (axis Columns) or column index (axis Rows) holding the
    /// header cells used for derived keys
    pub key_index: u32,
}

impl Default for KeyedOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Columns,
            key_names: None,
            key_index: 1,
        }
    }
}
