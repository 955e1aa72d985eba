use crate::model::Record;

/// Lower-cases and trims a free-text field.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Normalized `(name, category)` of a record.
pub fn normalize_record(record: &Record) -> (String, String) {
    (normalize(&record.name), normalize(&record.category))
}
