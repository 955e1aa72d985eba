use crate::classifier::tables;
use crate::model::{ClassificationResult, ConfigError, Record, TagCode};
use crate::normalizer::normalize_record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A keyword group and the tags it assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclusionRule {
    pub keywords: Vec<String>,
    pub tags: Vec<TagCode>,
}

/// Immutable keyword tables driving the rule engine.
///
/// Declaration order of `inclusion_rules` is part of the contract: the first
/// group with a matching keyword decides the tags, so reordering the groups
/// changes classification output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub exclusion_keywords: Vec<String>,
    #[serde(default)]
    pub exclusion_categories: Vec<String>,
    pub inclusion_rules: Vec<InclusionRule>,
    #[serde(default)]
    pub food_category_keywords: Vec<String>,
}

impl RuleSet {
    /// The catalog ruleset compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            exclusion_keywords: owned(tables::EXCLUSION_KEYWORDS),
            exclusion_categories: owned(tables::EXCLUSION_CATEGORIES),
            inclusion_rules: tables::INCLUSION_RULES
                .iter()
                .map(|&(keywords, tag)| InclusionRule {
                    keywords: owned(keywords),
                    tags: vec![tag],
                })
                .collect(),
            food_category_keywords: owned(tables::FOOD_CATEGORY_KEYWORDS),
        }
    }

    /// Loads a ruleset from a JSON file. Keywords are lower-cased but not
    /// trimmed, so padded keywords such as `" gum "` keep their boundaries.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rules: RuleSet =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.display().to_string(),
                source,
            })?;
        rules.lowercased().validated()
    }

    fn lowercased(mut self) -> Self {
        lower(&mut self.exclusion_keywords);
        lower(&mut self.exclusion_categories);
        lower(&mut self.food_category_keywords);
        for rule in self.inclusion_rules.iter_mut() {
            lower(&mut rule.keywords);
        }
        self
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if blank(&self.exclusion_keywords)
            || blank(&self.exclusion_categories)
            || blank(&self.food_category_keywords)
            || self.inclusion_rules.iter().any(|r| blank(&r.keywords))
        {
            // An empty keyword is a substring of everything.
            return Err(ConfigError::Invalid("ruleset contains an empty keyword".into()));
        }
        if let Some(rule) = self.inclusion_rules.iter().find(|r| r.tags.is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "inclusion rule starting with {:?} has no tags",
                rule.keywords.first()
            )));
        }
        Ok(self)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Which rule decided a record, borrowed from the ruleset for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch<'r> {
    Excluded { keyword: &'r str },
    ExcludedCategory { keyword: &'r str },
    Included { keyword: &'r str, tags: &'r [TagCode] },
    FoodCategory { keyword: &'r str },
    Unresolved,
}

impl RuleMatch<'_> {
    pub fn into_result(self) -> Option<ClassificationResult> {
        match self {
            RuleMatch::Excluded { .. } | RuleMatch::ExcludedCategory { .. } => {
                Some(ClassificationResult::non_ingredient())
            }
            RuleMatch::Included { tags, .. } => {
                Some(ClassificationResult::ingredient(tags.iter().copied()))
            }
            RuleMatch::FoodCategory { .. } => {
                Some(ClassificationResult::ingredient([TagCode::OtherIngr]))
            }
            RuleMatch::Unresolved => None,
        }
    }
}

/// Deterministic first pass: exclusions, then inclusion groups, then the
/// food-category heuristic. A single substring hit is enough at every step.
pub struct RuleEngine {
    rules: RuleSet,
}

impl RuleEngine {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn evaluate(&self, record: &Record) -> RuleMatch<'_> {
        let (name, category) = normalize_record(record);
        let combined = format!("{} {}", name, category);

        if let Some(keyword) = first_hit(&self.rules.exclusion_keywords, &combined) {
            return RuleMatch::Excluded { keyword };
        }
        if let Some(keyword) = first_hit(&self.rules.exclusion_categories, &category) {
            return RuleMatch::ExcludedCategory { keyword };
        }
        for rule in &self.rules.inclusion_rules {
            if let Some(keyword) = first_hit(&rule.keywords, &combined) {
                return RuleMatch::Included {
                    keyword,
                    tags: &rule.tags,
                };
            }
        }
        if let Some(keyword) = first_hit(&self.rules.food_category_keywords, &category) {
            return RuleMatch::FoodCategory { keyword };
        }
        RuleMatch::Unresolved
    }

    /// `None` means the rules cannot decide and the record needs inference.
    pub fn classify(&self, record: &Record) -> Option<ClassificationResult> {
        self.evaluate(record).into_result()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(RuleSet::builtin())
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn lower(words: &mut [String]) {
    for word in words.iter_mut() {
        *word = word.to_lowercase();
    }
}

fn blank(words: &[String]) -> bool {
    words.iter().any(|w| w.is_empty())
}

fn first_hit<'r>(keywords: &'r [String], text: &str) -> Option<&'r str> {
    keywords
        .iter()
        .find(|keyword| text.contains(keyword.as_str()))
        .map(String::as_str)
}
