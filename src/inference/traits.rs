use crate::model::InferenceError;

/// One chat-style completion call: a fixed system instruction plus the
/// numbered product list.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

#[async_trait::async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Model identifiers the backend can serve, used by the preflight check.
    async fn list_models(&self) -> Result<Vec<String>, InferenceError>;

    /// Sends one request and returns the raw text of the answer.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, InferenceError>;
}
