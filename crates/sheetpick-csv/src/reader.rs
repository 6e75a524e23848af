//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetpick_core::{CellValue, Worksheet};

/// Date-time patterns tried during type detection, most specific first
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Date-only patterns; matches are promoted to midnight date-times
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a worksheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let path = path.as_ref();
        log::debug!("Reading '{}'", path.display());
        let file = File::open(path)?;
        let sheet = Self::read(file, options)?;
        log::debug!(
            "Loaded '{}': {} cells",
            path.display(),
            sheet.cell_count()
        );
        Ok(sheet)
    }

    /// Read CSV from a reader into a worksheet
    ///
    /// Every record lands in the sheet as-is, header rows included; range
    /// extraction addresses headers by index, so the loader never strips
    /// them.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new(options.sheet_name.clone());

        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result?;

            for (col_idx, field) in record.iter().enumerate() {
                let value = if options.detect_types {
                    Self::detect_type(field)
                } else if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::string(field)
                };

                if !value.is_empty() {
                    // 1-based sheet coordinates
                    worksheet.set_value(row_idx as u32 + 1, col_idx as u32 + 1, value)?;
                }
            }
        }

        Ok(worksheet)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let field = field.trim();

        if field.is_empty() {
            return CellValue::Empty;
        }

        // Try boolean
        match field.to_lowercase().as_str() {
            "true" => return CellValue::Boolean(true),
            "false" => return CellValue::Boolean(false),
            _ => {}
        }

        // Try number
        if let Ok(n) = field.parse::<f64>() {
            return CellValue::Number(n);
        }

        // Try date-time
        if let Some(dt) = Self::detect_datetime(field) {
            return CellValue::DateTime(dt);
        }

        // Default to string
        CellValue::string(field)
    }

    fn detect_datetime(field: &str) -> Option<NaiveDateTime> {
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(field, fmt) {
                return Some(dt);
            }
        }
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(field, fmt) {
                return d.and_hms_opt(0, 0, 0);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_read_typed_cells() {
        let data = "name,count,active\nwidget,42,true\n";
        let sheet = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(sheet.value(1, 1), CellValue::from("name"));
        assert_eq!(sheet.value(2, 2), CellValue::Number(42.0));
        assert_eq!(sheet.value(2, 3), CellValue::Boolean(true));
    }

    #[test]
    fn test_empty_fields_are_empty_cells() {
        let data = "a,,c\n";
        let sheet = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(sheet.value(1, 2), CellValue::Empty);
        assert_eq!(sheet.cell_count(), 2);
    }

    #[test]
    fn test_detect_datetime() {
        let data = "2024-03-05 14:30:00\n2024-03-05\n";
        let sheet = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        let dt = sheet.value(1, 1).as_datetime().unwrap();
        assert_eq!(dt.to_string(), "2024-03-05 14:30:00");
        let midnight = sheet.value(2, 1).as_datetime().unwrap();
        assert_eq!(midnight.to_string(), "2024-03-05 00:00:00");
    }

    #[test]
    fn test_detection_disabled_keeps_strings() {
        let options = CsvReadOptions {
            detect_types: false,
            ..Default::default()
        };
        let sheet = CsvReader::read("42,true\n".as_bytes(), &options).unwrap();
        assert_eq!(sheet.value(1, 1), CellValue::from("42"));
        assert_eq!(sheet.value(1, 2), CellValue::from("true"));
    }

    #[test]
    fn test_read_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "x,y\n1,2\n").unwrap();

        let sheet = CsvReader::read_file(tmp.path(), &CsvReadOptions::default()).unwrap();
        assert_eq!(sheet.value(2, 1), CellValue::Number(1.0));
        assert_eq!(sheet.dimensions(), Some((2, 2)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvReader::read_file("/no/such/file.csv", &CsvReadOptions::default());
        assert!(matches!(err, Err(crate::CsvError::Io(_))));
    }
}
