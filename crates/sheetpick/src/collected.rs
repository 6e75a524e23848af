//! Collected extraction results

use indexmap::IndexMap;
use sheetpick_core::CellValue;

/// Result of a [`collect`](crate::RangeReader::collect) call
///
/// The variant encodes both the requested output kind and any collapse
/// that applied: a single-unit text result collapses to [`Text`], and a
/// list result over a degenerate span collapses from [`Table`] to
/// [`Values`].
///
/// [`Text`]: Collected::Text
/// [`Table`]: Collected::Table
/// [`Values`]: Collected::Values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Collected {
    /// A single concatenated string (text output with exactly one unit)
    Text(String),
    /// One concatenated string per outer index
    TextList(Vec<String>),
    /// A flat list of cell values (list output with a degenerate span)
    Values(Vec<CellValue>),
    /// One list of cell values per outer index
    Table(Vec<Vec<CellValue>>),
    /// Insertion-ordered mapping from key name to column/row values
    Keyed(IndexMap<String, Vec<CellValue>>),
}

impl Collected {
    /// Get the single collapsed string, if this is a [`Collected::Text`]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Collected::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the per-unit strings, if this is a [`Collected::TextList`]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            Collected::TextList(units) => Some(units),
            _ => None,
        }
    }

    /// Get the flat values, if this is a [`Collected::Values`]
    pub fn as_values(&self) -> Option<&[CellValue]> {
        match self {
            Collected::Values(values) => Some(values),
            _ => None,
        }
    }

    /// Get the nested rows, if this is a [`Collected::Table`]
    pub fn as_table(&self) -> Option<&[Vec<CellValue>]> {
        match self {
            Collected::Table(rows) => Some(rows),
            _ => None,
        }
    }

    /// Get the keyed mapping, if this is a [`Collected::Keyed`]
    pub fn as_keyed(&self) -> Option<&IndexMap<String, Vec<CellValue>>> {
        match self {
            Collected::Keyed(map) => Some(map),
            _ => None,
        }
    }

    /// Number of top-level units in the result
    pub fn len(&self) -> usize {
        match self {
            Collected::Text(_) => 1,
            Collected::TextList(units) => units.len(),
            Collected::Values(values) => values.len(),
            Collected::Table(rows) => rows.len(),
            Collected::Keyed(map) => map.len(),
        }
    }

    /// Check whether the result holds no units
    pub fn is_empty(&self) -> bool {
        match self {
            Collected::Text(_) => false,
            Collected::TextList(units) => units.is_empty(),
            Collected::Values(values) => values.is_empty(),
            Collected::Table(rows) => rows.is_empty(),
            Collected::Keyed(map) => map.is_empty(),
        }
    }
}
