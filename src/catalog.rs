// Catalog I/O: upstream product array in, annotated rows out.
use crate::model::{PipelineError, Record};
use crate::pipeline::results::Resolution;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Delimiter used to flatten tags into the `classifiers` column.
pub const TAG_DELIMITER: &str = "|";

pub fn read_records(path: &Path) -> Result<Vec<Record>, PipelineError> {
    let content = fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| PipelineError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// One annotated record. Every input column other than `name` is written
/// back under its original key.
#[derive(Debug, Serialize)]
pub struct OutputRow<'a> {
    pub name: &'a str,
    pub ingredient: bool,
    pub classifiers: String,
    #[serde(flatten)]
    pub extra: &'a Map<String, Value>,
}

impl<'a> OutputRow<'a> {
    pub fn new(record: &'a Record, resolution: &Resolution) -> Self {
        Self {
            name: &record.name,
            ingredient: resolution.result.is_ingredient,
            classifiers: resolution.result.joined_tags(TAG_DELIMITER),
            extra: &record.extra,
        }
    }
}

/// Pairs records with their outcomes, dropping rows that were never resolved.
pub fn output_rows<'a>(
    records: &'a [Record],
    resolutions: &[Option<Resolution>],
) -> Vec<OutputRow<'a>> {
    records
        .iter()
        .zip(resolutions)
        .filter_map(|(record, slot)| slot.as_ref().map(|r| OutputRow::new(record, r)))
        .collect()
}

pub fn write_output(path: &Path, rows: &[OutputRow<'_>]) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(rows).map_err(|source| PipelineError::Json {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(|source| PipelineError::Io {
        path: path.display().to_string(),
        source,
    })
}
