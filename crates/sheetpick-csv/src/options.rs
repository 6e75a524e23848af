//! CSV options

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Automatic type detection (numbers, booleans, date-times)
    pub detect_types: bool,
    /// Sheet name for the loaded worksheet (default: "Sheet1")
    pub sheet_name: String,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            detect_types: true,
            sheet_name: "Sheet1".to_string(),
        }
    }
}
