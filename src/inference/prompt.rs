use crate::inference::traits::CompletionRequest;
use crate::model::{Batch, Record, TagCode};

/// Characters of the short description included per product.
pub const DESCRIPTION_LIMIT: usize = 200;

pub fn system_prompt() -> String {
    let tags = TagCode::ALL
        .iter()
        .map(TagCode::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are a food product classifier. For each product determine:\n\
         1. Is it an INGREDIENT a home cook would use in a recipe?\n\
         2. If yes, assign 1-3 tags: {tags}\n\
         \n\
         Respond ONLY with a JSON array, one object per product in the same order.\n\
         Each: {{\"id\": <product number>, \"ingredient\": true/false, \"tags\": [\"TAG\"]}}\n\
         No explanation. No markdown. Only the JSON array."
    )
}

/// `Name: … | Category: … | Desc: …`, omitting empty parts.
pub fn summarize(record: &Record) -> String {
    let mut parts = vec![format!("Name: {}", record.name.trim())];
    let category = record.category.trim();
    if !category.is_empty() {
        parts.push(format!("Category: {}", category));
    }
    if let Some(description) = record.short_description.as_deref() {
        let description: String = description.trim().chars().take(DESCRIPTION_LIMIT).collect();
        if !description.is_empty() {
            parts.push(format!("Desc: {}", description));
        }
    }
    parts.join(" | ")
}

pub fn user_message(batch: &Batch<'_>) -> String {
    let numbered = batch
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, summarize(item.record)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Classify these {n} food products. Return a JSON array with exactly {n} objects.\n\n{numbered}",
        n = batch.len()
    )
}

pub fn build_request(batch: &Batch<'_>, model: &str, temperature: f32) -> CompletionRequest {
    CompletionRequest {
        model: model.to_string(),
        system: system_prompt(),
        user: user_message(batch),
        temperature,
    }
}
