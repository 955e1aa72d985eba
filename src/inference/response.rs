use crate::model::{ClassificationResult, ParseFailure, TagCode};
use serde::Deserialize;
use serde_json::Value;

/// One object of the answer array. Tags may arrive under `classifiers`.
#[derive(Debug, Deserialize)]
struct Verdict {
    #[serde(default)]
    id: Option<Value>,
    ingredient: bool,
    #[serde(default, alias = "classifiers")]
    tags: Vec<String>,
}

impl Verdict {
    fn id(&self) -> Option<usize> {
        match self.id.as_ref()? {
            Value::Number(n) => n.as_u64().map(|n| n as usize),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn into_result(self) -> ClassificationResult {
        if !self.ingredient {
            return ClassificationResult::non_ingredient();
        }
        ClassificationResult::ingredient(self.tags.iter().filter_map(|t| t.parse::<TagCode>().ok()))
    }
}

/// Decodes a backend answer into exactly `expected` results.
///
/// Code fences are stripped, the payload between the first `[` and the last
/// `]` is decoded, and anything other than an array of `expected` objects is
/// a [`ParseFailure`]. Without any `id`, request order is assumed. Once one
/// object echoes an `id`, all of them must, and the ids must be a permutation
/// of `1..=expected`; results are then placed by id.
pub fn parse_verdicts(
    text: &str,
    expected: usize,
) -> Result<Vec<ClassificationResult>, ParseFailure> {
    let payload = extract_array(strip_code_fence(text)).ok_or(ParseFailure::NoArray)?;
    let verdicts: Vec<Verdict> = serde_json::from_str(payload)?;
    if verdicts.len() != expected {
        return Err(ParseFailure::LengthMismatch {
            expected,
            actual: verdicts.len(),
        });
    }

    if verdicts.iter().all(|v| v.id.is_none()) {
        return Ok(verdicts.into_iter().map(Verdict::into_result).collect());
    }
    let ids: Option<Vec<usize>> = verdicts.iter().map(Verdict::id).collect();
    match ids {
        Some(ids) => order_by_id(verdicts, &ids),
        None => Err(ParseFailure::IdMismatch),
    }
}

fn order_by_id(
    verdicts: Vec<Verdict>,
    ids: &[usize],
) -> Result<Vec<ClassificationResult>, ParseFailure> {
    let mut slots: Vec<Option<ClassificationResult>> = vec![None; verdicts.len()];
    for (verdict, &id) in verdicts.into_iter().zip(ids) {
        let slot = id
            .checked_sub(1)
            .and_then(|i| slots.get_mut(i))
            .ok_or(ParseFailure::IdMismatch)?;
        if slot.is_some() {
            return Err(ParseFailure::IdMismatch);
        }
        *slot = Some(verdict.into_result());
    }
    // n distinct ids in 1..=n fill every slot
    Ok(slots.into_iter().flatten().collect())
}

/// Returns the first non-empty fenced block, minus a `json` language tag.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    if !text.contains("```") {
        return text;
    }
    text.split("```")
        .skip(1)
        .map(|part| part.strip_prefix("json").unwrap_or(part).trim())
        .find(|part| !part.is_empty())
        .unwrap_or(text)
}

fn extract_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spice() -> ClassificationResult {
        ClassificationResult::ingredient([TagCode::Spice])
    }

    #[test]
    fn plain_array() {
        let parsed = parse_verdicts(
            r#"[{"ingredient": true, "tags": ["SPICE"]}, {"ingredient": false, "tags": []}]"#,
            2,
        )
        .unwrap();
        assert_eq!(parsed, vec![spice(), ClassificationResult::non_ingredient()]);
    }

    #[test]
    fn fenced_array_with_surrounding_prose() {
        let text = "Sure!\n```json\n[{\"ingredient\": true, \"classifiers\": [\"spice\"]}]\n```\nDone.";
        assert_eq!(parse_verdicts(text, 1).unwrap(), vec![spice()]);

        let bare_fence = "```\n[{\"ingredient\": false}]\n```";
        assert_eq!(
            parse_verdicts(bare_fence, 1).unwrap(),
            vec![ClassificationResult::non_ingredient()]
        );
    }

    #[test]
    fn prose_around_unfenced_array() {
        let text = r#"Here you go: [{"ingredient": true, "tags": ["SPICE"]}] hope that helps"#;
        assert_eq!(parse_verdicts(text, 1).unwrap(), vec![spice()]);
    }

    #[test]
    fn wrong_length_is_a_failure() {
        let text = r#"[{"ingredient": true, "tags": ["SPICE"]}]"#;
        assert!(matches!(
            parse_verdicts(text, 2),
            Err(ParseFailure::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn missing_array_or_bad_shape_is_a_failure() {
        assert!(matches!(
            parse_verdicts("I cannot help with that.", 1),
            Err(ParseFailure::NoArray)
        ));
        assert!(matches!(parse_verdicts("] oops [", 1), Err(ParseFailure::NoArray)));
        assert!(matches!(
            parse_verdicts(r#"[{"tags": ["SPICE"]}]"#, 1),
            Err(ParseFailure::Malformed(_))
        ));
        assert!(matches!(
            parse_verdicts(r#"[{"ingredient": "yes"}]"#, 1),
            Err(ParseFailure::Malformed(_))
        ));
    }

    #[test]
    fn tags_are_cleaned_up() {
        let text = r#"[
            {"ingredient": true, "tags": ["snack", "oil fat", "OIL_FAT", "DAIRY", "GRAIN", "SPICE"]},
            {"ingredient": true, "tags": ["NOT_A_TAG"]},
            {"ingredient": false, "tags": ["SPICE"]}
        ]"#;
        let parsed = parse_verdicts(text, 3).unwrap();
        assert_eq!(
            parsed[0].tags,
            vec![TagCode::OilFat, TagCode::Dairy, TagCode::Grain]
        );
        assert_eq!(parsed[1].tags, vec![TagCode::OtherIngr]);
        assert_eq!(parsed[2], ClassificationResult::non_ingredient());
    }

    #[test]
    fn echoed_ids_restore_request_order() {
        let text = r#"[
            {"id": 2, "ingredient": false, "tags": []},
            {"id": "1", "ingredient": true, "tags": ["SPICE"]}
        ]"#;
        assert_eq!(
            parse_verdicts(text, 2).unwrap(),
            vec![spice(), ClassificationResult::non_ingredient()]
        );
    }

    #[test]
    fn inconsistent_ids_are_rejected() {
        let duplicate = r#"[{"id": 1, "ingredient": false}, {"id": 1, "ingredient": false}]"#;
        assert!(matches!(parse_verdicts(duplicate, 2), Err(ParseFailure::IdMismatch)));

        let out_of_range = r#"[{"id": 0, "ingredient": false}, {"id": 3, "ingredient": false}]"#;
        assert!(matches!(parse_verdicts(out_of_range, 2), Err(ParseFailure::IdMismatch)));

        let garbage = r#"[{"id": "first", "ingredient": false}]"#;
        assert!(matches!(parse_verdicts(garbage, 1), Err(ParseFailure::IdMismatch)));
    }

    #[test]
    fn partial_ids_are_rejected() {
        let text = r#"[{"id": 2, "ingredient": true, "tags": ["SPICE"]}, {"ingredient": false}]"#;
        assert!(matches!(parse_verdicts(text, 2), Err(ParseFailure::IdMismatch)));

        let null_id = r#"[{"id": 1, "ingredient": false}, {"id": null, "ingredient": false}]"#;
        assert!(matches!(parse_verdicts(null_id, 2), Err(ParseFailure::IdMismatch)));
    }
}
