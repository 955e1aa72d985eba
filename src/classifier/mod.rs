// Classifier module: keyword rule engine and the built-in catalog tables.

pub mod rules;
pub mod tables;

pub use rules::{RuleEngine, RuleSet};
