//! # sheetpick
//!
//! Reshape rectangular regions of spreadsheet-like tabular documents into
//! program-native collections: a scalar cell, a delimiter-joined string,
//! a flat or nested list of values, or an insertion-ordered keyed mapping.
//!
//! The system is read-only. A document is loaded once into a fully
//! materialized [`Workbook`]; a [`RangeReader`] then borrows one sheet and
//! walks rectangular regions addressed by row/column [`Span`]s.
//!
//! ## Example
//!
//! ```rust
//! use sheetpick::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_value(1, 1, "x").unwrap();
//! sheet.set_value(2, 1, "y").unwrap();
//! sheet.set_value(3, 1, "z").unwrap();
//!
//! let reader = RangeReader::with_options(
//!     workbook.require_sheet("Sheet1").unwrap(),
//!     ReaderOptions {
//!         rows: Span::inclusive(1, 3),
//!         cols: Span::single(1),
//!         ..Default::default()
//!     },
//! );
//!
//! let values = reader.collect(&CollectOptions {
//!     kind: OutputKind::List,
//!     ..Default::default()
//! });
//! assert_eq!(values.as_values().unwrap().len(), 3);
//! ```

pub mod collected;
pub mod options;
pub mod prelude;
pub mod reader;

pub use collected::Collected;
pub use options::{Axis, CollectOptions, KeyedOptions, OutputKind, ReaderOptions};
pub use reader::RangeReader;

// Re-export core types
pub use sheetpick_core::{CellValue, Error, Result, Span, Workbook, Worksheet};

// Re-export I/O types
pub use sheetpick_csv::{CsvError, CsvReadOptions, CsvReader, CsvResult};

use std::path::Path;

/// Extension trait for [`Workbook`] to add document loading
pub trait WorkbookExt {
    /// Open a tabular document from a file, dispatching on its extension
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("csv") | Some("tsv") => {
                let mut options = CsvReadOptions::default();
                if extension.as_deref() == Some("tsv") {
                    options.delimiter = b'\t';
                }
                let worksheet = CsvReader::read_file(path, &options)
                    .map_err(|e| Error::Load(e.to_string()))?;

                let mut workbook = Workbook::empty();
                workbook.add_existing_worksheet(worksheet)?;
                Ok(workbook)
            }
            _ => Err(Error::Load(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "a,b\n1,2\n").unwrap();

        let workbook = Workbook::open(&path).unwrap();
        let sheet = workbook.require_sheet("Sheet1").unwrap();
        assert_eq!(sheet.value(2, 2), CellValue::Number(2.0));
    }

    #[test]
    fn test_open_unsupported_extension() {
        assert!(matches!(
            Workbook::open("document.xlsx"),
            Err(Error::Load(_))
        ));
    }
}
