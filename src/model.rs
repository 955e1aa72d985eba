// Core structs: Record, TagCode, ClassificationResult, WorkItem, Batch
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on tags attached to a single positive classification.
pub const MAX_TAGS: usize = 3;

/// One catalog row as handed over by the upstream reader.
///
/// `name` is taken out of the row; every other column (category, description,
/// price, image URLs, ...) stays in `extra` under its source key and is
/// written back untouched. `category` and `short_description` are lenient
/// views of those columns: `category_name` wins over `category`, and
/// `shortDescription` over `short_description`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Record {
    pub name: String,
    pub category: String,
    pub short_description: Option<String>,
    pub extra: Map<String, Value>,
}

impl Record {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let category = category.into();
        let mut extra = Map::new();
        extra.insert("category".to_string(), Value::from(category.as_str()));
        Self {
            name: name.into(),
            category,
            short_description: None,
            extra,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.extra.insert("shortDescription".to_string(), Value::from(description.as_str()));
        self.short_description = Some(description);
        self
    }
}

impl From<Map<String, Value>> for Record {
    fn from(mut row: Map<String, Value>) -> Self {
        let name = optional_text(row.remove("name")).unwrap_or_default();
        // rewritten by the output stage
        row.remove("ingredient");
        row.remove("classifiers");
        let category = first_text(&row, &["category_name", "category"]).unwrap_or_default();
        let short_description = first_text(&row, &["shortDescription", "short_description"]);
        Self {
            name,
            category,
            short_description,
            extra: row,
        }
    }
}

/// First of `keys` holding a non-null value, as text.
fn first_text(row: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| optional_text(row.get(*key).cloned()))
}

/// Tolerates numbers and booleans where text is expected; `null` is absent.
fn optional_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Closed vocabulary of category labels for positive classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TagCode {
    Produce,
    Dairy,
    Protein,
    Grain,
    Baking,
    Spice,
    OilFat,
    Condiment,
    CannedGood,
    Sweetener,
    NutSeed,
    Thickener,
    FreshHerb,
    Alcohol,
    OtherIngr,
}

impl TagCode {
    pub const ALL: [TagCode; 15] = [
        TagCode::Produce,
        TagCode::Dairy,
        TagCode::Protein,
        TagCode::Grain,
        TagCode::Baking,
        TagCode::Spice,
        TagCode::OilFat,
        TagCode::Condiment,
        TagCode::CannedGood,
        TagCode::Sweetener,
        TagCode::NutSeed,
        TagCode::Thickener,
        TagCode::FreshHerb,
        TagCode::Alcohol,
        TagCode::OtherIngr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagCode::Produce => "PRODUCE",
            TagCode::Dairy => "DAIRY",
            TagCode::Protein => "PROTEIN",
            TagCode::Grain => "GRAIN",
            TagCode::Baking => "BAKING",
            TagCode::Spice => "SPICE",
            TagCode::OilFat => "OIL_FAT",
            TagCode::Condiment => "CONDIMENT",
            TagCode::CannedGood => "CANNED_GOOD",
            TagCode::Sweetener => "SWEETENER",
            TagCode::NutSeed => "NUT_SEED",
            TagCode::Thickener => "THICKENER",
            TagCode::FreshHerb => "FRESH_HERB",
            TagCode::Alcohol => "ALCOHOL",
            TagCode::OtherIngr => "OTHER_INGR",
        }
    }
}

impl fmt::Display for TagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag code: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for TagCode {
    type Err = UnknownTag;

    /// Accepts the canonical spelling plus the loose variants models tend to
    /// emit (`oil fat`, `Canned-Good`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().to_uppercase().replace([' ', '-'], "_");
        TagCode::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == canonical)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Outcome for one record. `tags` is empty whenever `is_ingredient` is false.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassificationResult {
    pub is_ingredient: bool,
    pub tags: Vec<TagCode>,
}

impl ClassificationResult {
    /// `{isIngredient: false, tags: []}`, used whenever inference cannot finish.
    pub fn safe_default() -> Self {
        Self::default()
    }

    pub fn non_ingredient() -> Self {
        Self::default()
    }

    /// Builds a positive result, dropping duplicates and keeping at most
    /// [`MAX_TAGS`] tags. An empty tag list falls back to `OTHER_INGR`.
    pub fn ingredient(tags: impl IntoIterator<Item = TagCode>) -> Self {
        let mut kept: Vec<TagCode> = Vec::with_capacity(MAX_TAGS);
        for tag in tags {
            if kept.len() == MAX_TAGS {
                break;
            }
            if !kept.contains(&tag) {
                kept.push(tag);
            }
        }
        if kept.is_empty() {
            kept.push(TagCode::OtherIngr);
        }
        Self {
            is_ingredient: true,
            tags: kept,
        }
    }

    /// Tags flattened for the writer, e.g. `PRODUCE|SPICE`.
    pub fn joined_tags(&self, delimiter: &str) -> String {
        self.tags
            .iter()
            .map(TagCode::as_str)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

/// A record waiting for inference, tagged with its original row position.
#[derive(Debug, Clone, Copy)]
pub struct WorkItem<'a> {
    pub index: usize,
    pub record: &'a Record,
}

/// A bounded run of work items sent to the backend in a single call.
#[derive(Debug, Clone)]
pub struct Batch<'a> {
    pub id: usize,
    pub items: Vec<WorkItem<'a>>,
}

impl<'a> Batch<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.index).collect()
    }

    /// Splits the batch into single-item batches sharing the same id.
    pub fn singles(&self) -> Vec<Batch<'a>> {
        self.items
            .iter()
            .map(|item| Batch {
                id: self.id,
                items: vec![*item],
            })
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Why a backend answer was rejected. Every variant is retryable.
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("no JSON array in response")]
    NoArray,
    #[error("malformed JSON array: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected {expected} items, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("item ids do not match the request numbering")]
    IdMismatch,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("backend responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode backend envelope: {0}")]
    Decode(String),
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

impl From<reqwest::Error> for InferenceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            InferenceError::Timeout
        } else if error.is_decode() {
            InferenceError::Decode(error.to_string())
        } else {
            InferenceError::Transport(error.to_string())
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("row {index} is outside a table of {len} rows")]
    OutOfRange { index: usize, len: usize },
    #[error("row {0} was already resolved")]
    AlreadyResolved(usize),
    #[error("{indices} indices but {results} results")]
    LengthMismatch { indices: usize, results: usize },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no input records")]
    NoRecords,
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error("{missing} rows were never resolved")]
    Incomplete { missing: usize },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
