//! # sheetpick-csv
//!
//! CSV document loader for sheetpick. Reads a CSV file into a fully
//! materialized [`sheetpick_core::Worksheet`] with typed cells; sheetpick
//! itself never streams or lazily populates cells.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
