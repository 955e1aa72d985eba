use crate::inference::prompt::build_request;
use crate::inference::response::parse_verdicts;
use crate::inference::traits::{CompletionRequest, InferenceBackend};
use crate::model::{Batch, ClassificationResult, InferenceError};
use crate::pipeline::progress::ProgressTracker;
use crate::pipeline::results::{Resolution, ResolutionSource, ResultTable};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Result of the one-time backend check made before any batch is sent.
#[derive(Debug)]
pub enum Preflight {
    Ready,
    Unreachable(InferenceError),
    ModelMissing { available: Vec<String> },
}

/// `llama3.2:1b` -> `llama3.2`
pub fn base_model_name(identifier: &str) -> &str {
    identifier.split(':').next().unwrap_or(identifier).trim()
}

pub async fn preflight(backend: &dyn InferenceBackend, model: &str) -> Preflight {
    let available = match backend.list_models().await {
        Ok(models) => models,
        Err(e) => return Preflight::Unreachable(e),
    };
    let wanted = base_model_name(model);
    if available.iter().any(|name| base_model_name(name) == wanted) {
        Preflight::Ready
    } else {
        Preflight::ModelMissing { available }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made after the first one.
    pub retry_count: usize,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn attempts(&self) -> usize {
        self.retry_count + 1
    }
}

/// Per-batch result: one resolution per item, in batch order.
#[derive(Debug)]
pub struct BatchOutcome {
    pub resolutions: Vec<Resolution>,
    pub calls: usize,
}

/// Turns a batch into classifications with one backend call, retrying and
/// finally degrading to the safe default.
pub struct BatchResolver {
    backend: Arc<dyn InferenceBackend>,
    model: String,
    temperature: f32,
    policy: RetryPolicy,
    isolate_failures: bool,
}

impl BatchResolver {
    pub fn new(
        backend: Arc<dyn InferenceBackend>,
        model: impl Into<String>,
        temperature: f32,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            backend,
            model: model.into(),
            temperature,
            policy,
            isolate_failures: false,
        }
    }

    /// Re-query a failed multi-item batch one item at a time before falling back.
    pub fn isolate_failures(mut self, enabled: bool) -> Self {
        self.isolate_failures = enabled;
        self
    }

    pub async fn resolve_batch(&self, batch: &Batch<'_>) -> BatchOutcome {
        let (answer, mut calls) = self.attempt(batch).await;
        if let Some(results) = answer {
            return BatchOutcome {
                resolutions: results.into_iter().map(Resolution::inferred).collect(),
                calls,
            };
        }

        if !self.isolate_failures || batch.len() < 2 {
            warn!(
                "Batch {} exhausted {} attempts, {} items fall back to non-ingredient",
                batch.id,
                calls,
                batch.len()
            );
            return BatchOutcome {
                resolutions: vec![Resolution::fallback(); batch.len()],
                calls,
            };
        }

        warn!("Batch {} failed, re-querying {} items singly", batch.id, batch.len());
        let mut resolutions = Vec::with_capacity(batch.len());
        for single in batch.singles() {
            let (answer, single_calls) = self.attempt(&single).await;
            calls += single_calls;
            match answer.and_then(|results| results.into_iter().next()) {
                Some(result) => resolutions.push(Resolution::inferred(result)),
                None => {
                    warn!("Row {} falls back to non-ingredient", single.items[0].index);
                    resolutions.push(Resolution::fallback());
                }
            }
        }
        BatchOutcome { resolutions, calls }
    }

    /// Sends the same request up to `policy.attempts()` times.
    async fn attempt(&self, batch: &Batch<'_>) -> (Option<Vec<ClassificationResult>>, usize) {
        let request = build_request(batch, &self.model, self.temperature);
        let attempts = self.policy.attempts();
        for attempt in 1..=attempts {
            match self.call_once(&request, batch.len()).await {
                Ok(results) => return (Some(results), attempt),
                Err(e) => {
                    warn!(
                        "Batch {} attempt {}/{} failed: {}",
                        batch.id, attempt, attempts, e
                    );
                    if attempt < attempts {
                        sleep(self.policy.backoff).await;
                    }
                }
            }
        }
        (None, attempts)
    }

    async fn call_once(
        &self,
        request: &CompletionRequest,
        expected: usize,
    ) -> Result<Vec<ClassificationResult>, InferenceError> {
        let raw = self.backend.complete(request).await?;
        Ok(parse_verdicts(&raw, expected)?)
    }
}

/// Totals reported by a pool run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub batches: usize,
    pub calls: usize,
    pub inferred: usize,
    pub fallback: usize,
}

/// Drains the batch sequence with at most `worker_count` batches in flight.
/// Completion order is free; each batch merges by original row index.
pub struct InferencePool {
    resolver: BatchResolver,
    worker_count: usize,
}

impl InferencePool {
    pub fn new(resolver: BatchResolver, worker_count: usize) -> Self {
        Self {
            resolver,
            worker_count: worker_count.max(1),
        }
    }

    pub async fn run(&self, batches: Vec<Batch<'_>>, table: &ResultTable) -> PoolStats {
        let progress = ProgressTracker::new(batches.len());
        let tracker = &progress;
        let resolver = &self.resolver;

        let per_batch: Vec<PoolStats> = stream::iter(batches)
            .map(move |batch| async move {
                let outcome = resolver.resolve_batch(&batch).await;
                let inferred = outcome
                    .resolutions
                    .iter()
                    .filter(|r| r.source == ResolutionSource::Inference)
                    .count();
                let stats = PoolStats {
                    batches: 1,
                    calls: outcome.calls,
                    inferred,
                    fallback: batch.len() - inferred,
                };
                if let Err(e) = table.merge_batch_result(&batch.indices(), outcome.resolutions) {
                    error!("Batch {} could not be merged: {}", batch.id, e);
                }
                info!("{}", tracker.record_batch_completion());
                stats
            })
            .buffer_unordered(self.worker_count)
            .collect()
            .await;
        info!("Inference finished: {}", progress.snapshot());

        per_batch.into_iter().fold(PoolStats::default(), |acc, s| PoolStats {
            batches: acc.batches + s.batches,
            calls: acc.calls + s.calls,
            inferred: acc.inferred + s.inferred,
            fallback: acc.fallback + s.fallback,
        })
    }
}
