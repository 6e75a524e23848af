//! # sheetpick-core
//!
//! Core data structures for the sheetpick range-extraction library.
//!
//! This crate provides the fundamental types used throughout sheetpick:
//! - [`CellValue`] - Represents cell values (strings, numbers, booleans, date-times, empty)
//! - [`Span`] - 1-based half-open index ranges along one axis
//! - [`Workbook`], [`Worksheet`] - The tabular document structures
//!
//! A [`Worksheet`] is an eagerly-materialized, read-oriented table: once
//! loaded, readers borrow it immutably and every cell access is a plain
//! lookup. Coordinates are 1-based; reading an unpopulated coordinate
//! returns [`CellValue::Empty`] rather than an error.
//!
//! ## Example
//!
//! ```rust
//! use sheetpick_core::{Workbook, CellValue};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! sheet.set_value(1, 1, "Hello").unwrap();
//! sheet.set_value(1, 2, 42.0).unwrap();
//!
//! assert_eq!(sheet.value(1, 2), CellValue::Number(42.0));
//! assert_eq!(sheet.value(9, 9), CellValue::Empty);
//! ```

pub mod cell;
pub mod error;
pub mod span;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::CellValue;
pub use error::{Error, Result};
pub use span::Span;
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
