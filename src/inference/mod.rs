pub mod ollama;
pub mod prompt;
pub mod response;
pub mod traits;
pub mod worker;

pub use ollama::OllamaBackend;
pub use traits::{CompletionRequest, InferenceBackend};
pub use worker::{BatchResolver, InferencePool, PoolStats, Preflight, RetryPolicy, preflight};
