//! Convenient re-exports for common usage
//!
//! ```rust
//! use sheetpick::prelude::*;
//! ```

pub use crate::collected::Collected;
pub use crate::options::{Axis, CollectOptions, KeyedOptions, OutputKind, ReaderOptions};
pub use crate::reader::RangeReader;
pub use crate::WorkbookExt;
pub use sheetpick_core::{CellValue, Span, Workbook, Worksheet};
