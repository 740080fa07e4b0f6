//! XLSX backend options

/// How date and time cells are loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    /// Keep the spreadsheet serial number as a [`CellValue::Number`](gridstore_core::CellValue::Number)
    #[default]
    Serial,
    /// Render as `YYYY-MM-DD HH:MM:SS` text
    Text,
}

/// Options for opening and creating XLSX workbooks
#[derive(Debug, Clone)]
pub struct XlsxOptions {
    /// Name of the sheet a new workbook starts with
    pub default_sheet_name: String,
    /// How date and time cells are loaded
    pub date_mode: DateMode,
}

impl Default for XlsxOptions {
    fn default() -> Self {
        Self {
            default_sheet_name: "Sheet1".to_string(),
            date_mode: DateMode::Serial,
        }
    }
}
