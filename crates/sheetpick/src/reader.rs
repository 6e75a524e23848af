//! Range extraction
//!
//! [`RangeReader`] walks a rectangular region of one worksheet and reshapes
//! it into a scalar, a delimiter-joined string, a list of raw values, or a
//! keyed mapping. The reader borrows the sheet immutably for its whole
//! lifetime; every operation is a pure synchronous walk over `N*M` cell
//! reads with no internal locking and no retries.

use indexmap::IndexMap;

use crate::collected::Collected;
use crate::options::{Axis, CollectOptions, KeyedOptions, OutputKind, ReaderOptions};
use sheetpick_core::cell::DEFAULT_DATE_FORMAT;
use sheetpick_core::{CellValue, Span, Worksheet};

/// Reads rectangular regions of one worksheet into program-native collections
///
/// A reader carries instance defaults (row span, column span, delimiter,
/// skip-empty policy) that every call can override per parameter. It holds
/// no cursor and no mutable state across calls; the only captured state is
/// [`default_value`](Self::default_value), read once at construction from
/// the top-left corner of the default spans.
#[derive(Debug)]
pub struct RangeReader<'a> {
    sheet: &'a Worksheet,
    rows: Span,
    cols: Span,
    delimiter: String,
    skip_empty: bool,
    alerts: bool,
    /// Cell at the top-left of the default spans, captured at construction
    value: CellValue,
}

impl<'a> RangeReader<'a> {
    /// Create a reader with default options (spans `[1]`, delimiter `" "`,
    /// skip-empty on)
    pub fn new(sheet: &'a Worksheet) -> Self {
        Self::with_options(sheet, ReaderOptions::default())
    }

    /// Create a reader with explicit instance defaults
    pub fn with_options(sheet: &'a Worksheet, options: ReaderOptions) -> Self {
        let ReaderOptions {
            rows,
            cols,
            delimiter,
            skip_empty,
            alerts,
        } = options;
        if alerts {
            log::debug!(
                "Range reader bound to sheet '{}' (rows {}..{}, cols {}..{})",
                sheet.name(),
                rows.start(),
                rows.end(),
                cols.start(),
                cols.end()
            );
        }
        let value = sheet.value(rows.start(), cols.start());
        Self {
            sheet,
            rows,
            cols,
            delimiter,
            skip_empty,
            alerts,
            value,
        }
    }

    /// The worksheet this reader walks
    pub fn sheet(&self) -> &Worksheet {
        self.sheet
    }

    /// Default row span
    pub fn rows(&self) -> Span {
        self.rows
    }

    /// Default column span
    pub fn cols(&self) -> Span {
        self.cols
    }

    /// Replace the default row span
    ///
    /// Does not re-derive [`default_value`](Self::default_value); that is
    /// captured once at construction.
    pub fn set_rows<S: Into<Span>>(&mut self, rows: S) {
        self.rows = rows.into();
    }

    /// Replace the default column span
    ///
    /// Does not re-derive [`default_value`](Self::default_value).
    pub fn set_cols<S: Into<Span>>(&mut self, cols: S) {
        self.cols = cols.into();
    }

    /// The cell captured from the top-left corner of the default spans at
    /// construction time
    pub fn default_value(&self) -> &CellValue {
        &self.value
    }

    /// The raw cell at the top-left corner of the current default spans
    ///
    /// A direct pass-through: no date formatting, no empty-skipping.
    pub fn scalar(&self) -> CellValue {
        self.scalar_at(self.rows.start(), self.cols.start())
    }

    /// The raw cell at a 1-based coordinate, untransformed
    pub fn scalar_at(&self, row: u32, col: u32) -> CellValue {
        self.sheet.value(row, col)
    }

    /// Walk a rectangular region and build the requested collection
    ///
    /// See [`CollectOptions`] for the parameter surface; every unset option
    /// falls back to the instance default. [`OutputKind::Keyed`] delegates
    /// to [`keyed`](Self::keyed) with the axis defaulting to
    /// [`Axis::Columns`].
    pub fn collect(&self, options: &CollectOptions) -> Collected {
        let alerts = options.alerts.unwrap_or(self.alerts);
        if alerts {
            log::info!("Collecting data from worksheet '{}'", self.sheet.name());
        }

        if options.kind == OutputKind::Keyed {
            return Collected::Keyed(self.keyed(&KeyedOptions {
                axis: options.axis.unwrap_or(Axis::Columns),
                key_names: options.key_names.clone(),
                key_index: options.key_index.unwrap_or(1),
            }));
        }

        let rows = options.rows.unwrap_or(self.rows);
        let cols = options.cols.unwrap_or(self.cols);
        let axis = options.axis.unwrap_or(Axis::Rows);
        let skip_empty = options.skip_empty.unwrap_or(self.skip_empty);
        let date_format = options.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);

        // A single column needs no separator between cells
        let delimiter = match &options.delimiter {
            Some(d) => d.clone(),
            None if cols.is_degenerate() => String::new(),
            None => self.delimiter.clone(),
        };

        let (outer, inner) = match axis {
            Axis::Rows => (rows, cols),
            Axis::Columns => (cols, rows),
        };

        match options.kind {
            OutputKind::Text => {
                let mut units: Vec<String> = Vec::new();
                for f in outer.iter() {
                    let mut acc = String::new();
                    for s in inner.iter() {
                        let (row, col) = match axis {
                            Axis::Rows => (f, s),
                            Axis::Columns => (s, f),
                        };
                        let cell = self.sheet.value(row, col);
                        if skip_empty && cell.is_empty() {
                            continue;
                        }
                        acc.push_str(&cell.render(date_format));
                        acc.push_str(&delimiter);
                    }
                    if skip_empty && acc.is_empty() {
                        continue;
                    }
                    units.push(acc);
                }
                // A one-unit result is the common single-row/column case;
                // hand back the bare string
                if units.len() == 1 {
                    Collected::Text(units.pop().unwrap_or_default())
                } else {
                    Collected::TextList(units)
                }
            }
            OutputKind::List => {
                let mut units: Vec<Vec<CellValue>> = Vec::new();
                for f in outer.iter() {
                    let mut unit: Vec<CellValue> = Vec::new();
                    for s in inner.iter() {
                        let (row, col) = match axis {
                            Axis::Rows => (f, s),
                            Axis::Columns => (s, f),
                        };
                        let cell = self.sheet.value(row, col);
                        if skip_empty && cell.is_empty() {
                            continue;
                        }
                        unit.push(cell);
                    }
                    if skip_empty && unit.is_empty() {
                        continue;
                    }
                    units.push(unit);
                }
                Self::collapse_list(units, rows, cols)
            }
            OutputKind::Keyed => unreachable!("handled above"),
        }
    }

    /// Collapse degenerate spans of a list result.
    ///
    /// The tests run against the column span and then the row span, in that
    /// order, regardless of which axis was outer for the walk. This
    /// asymmetry is kept for compatibility with existing callers; swapping
    /// the axis parameter does not swap which span collapses. A unit that
    /// unexpectedly has no element is replaced with an empty string, never
    /// an error.
    fn collapse_list(units: Vec<Vec<CellValue>>, rows: Span, cols: Span) -> Collected {
        if cols.is_degenerate() {
            let flat = units
                .into_iter()
                .map(|unit| {
                    unit.into_iter()
                        .next()
                        .unwrap_or_else(|| CellValue::string(""))
                })
                .collect();
            return Collected::Values(flat);
        }
        if rows.is_degenerate() {
            // Still nested: the single outer unit is the whole flat result
            let flat = units.into_iter().next().unwrap_or_default();
            return Collected::Values(flat);
        }
        Collected::Table(units)
    }

    /// Build an insertion-ordered mapping from key name to a list of cell
    /// values
    ///
    /// Keys either come from `options.key_names` or are derived from header
    /// cells: with [`Axis::Columns`] the keys run along the instance column
    /// span, read from row `key_index`; with [`Axis::Rows`] they run along
    /// the row span, read from column `key_index`. Each key's list is the
    /// walk of the other axis's instance span at that key's position,
    /// eliding empty cells under the instance skip-empty policy. Duplicate
    /// key names overwrite the earlier list and keep the original position.
    pub fn keyed(&self, options: &KeyedOptions) -> IndexMap<String, Vec<CellValue>> {
        let key_index = options.key_index;

        let key_names: Vec<String> = match &options.key_names {
            Some(names) if !names.is_empty() => names.clone(),
            _ => {
                let key_span = match options.axis {
                    Axis::Columns => self.cols,
                    Axis::Rows => self.rows,
                };
                key_span
                    .iter()
                    .map(|f| {
                        let (row, col) = match options.axis {
                            Axis::Columns => (key_index, f),
                            Axis::Rows => (f, key_index),
                        };
                        self.sheet.value(row, col).to_string()
                    })
                    .collect()
            }
        };

        let (walk, anchor) = match options.axis {
            Axis::Columns => (self.rows, self.cols.start()),
            Axis::Rows => (self.cols, self.rows.start()),
        };

        let mut map: IndexMap<String, Vec<CellValue>> = IndexMap::new();
        for (i, key) in key_names.into_iter().enumerate() {
            let mut values = Vec::new();
            for f in walk.iter() {
                let (row, col) = match options.axis {
                    Axis::Columns => (f, anchor + i as u32),
                    Axis::Rows => (anchor + i as u32, f),
                };
                let cell = self.sheet.value(row, col);
                if self.skip_empty && cell.is_empty() {
                    continue;
                }
                values.push(cell);
            }
            map.insert(key, values);
        }
        map
    }
}
