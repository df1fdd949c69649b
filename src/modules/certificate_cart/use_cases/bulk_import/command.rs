use std::collections::BTreeMap;

/// One spreadsheet row, column key to cell value.
pub type ParsedRow = BTreeMap<String, String>;

/// The certificate form the rows are applied to. Each row is merged over the
/// current values before its item is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }

    pub fn apply_row(&mut self, row: &ParsedRow) {
        for (key, value) in row {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkImport {
    pub certificate_slug: String,
    pub title: String,
    /// Column whose value labels each row's entry.
    pub summary_field: Option<String>,
    pub rows: Vec<ParsedRow>,
}

pub fn is_blank_row(row: &ParsedRow) -> bool {
    row.values().all(|value| value.trim().is_empty())
}
