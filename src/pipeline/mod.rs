// Pipeline driver: rules first, then batched inference for whatever is left.

pub mod batcher;
pub mod partition;
pub mod progress;
pub mod results;

use crate::classifier::RuleEngine;
use crate::config::AppConfig;
use crate::inference::{
    BatchResolver, InferenceBackend, InferencePool, PoolStats, Preflight, RetryPolicy, preflight,
};
use crate::model::{PipelineError, Record, WorkItem};
use crate::report::RunSummary;
use batcher::make_batches;
use chrono::Utc;
use partition::{Partition, partition};
use results::{Resolution, ResultTable};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Knobs the driver needs, lifted out of [`AppConfig`].
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub model: String,
    pub temperature: f32,
    pub batch_size: usize,
    pub worker_count: usize,
    pub retry: RetryPolicy,
    pub skip_inference: bool,
    pub isolate_failed_batches: bool,
}

impl From<&AppConfig> for PipelineSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            batch_size: config.batch_size,
            worker_count: config.worker_count,
            retry: RetryPolicy {
                retry_count: config.retry_count,
                backoff: config.retry_backoff(),
            },
            skip_inference: config.skip_inference,
            isolate_failed_batches: config.isolate_failed_batches,
        }
    }
}

/// Per-row outcomes in input order plus the completion report. A `None` row
/// was left unresolved because inference was skipped.
#[derive(Debug)]
pub struct PipelineOutput {
    pub resolutions: Vec<Option<Resolution>>,
    pub summary: RunSummary,
}

pub struct Pipeline {
    engine: RuleEngine,
    backend: Arc<dyn InferenceBackend>,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(
        engine: RuleEngine,
        backend: Arc<dyn InferenceBackend>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            engine,
            backend,
            settings,
        }
    }

    pub async fn run(&self, records: &[Record]) -> Result<PipelineOutput, PipelineError> {
        if records.is_empty() {
            return Err(PipelineError::NoRecords);
        }
        let started_at = Utc::now();
        let clock = Instant::now();
        let table = ResultTable::new(records.len());

        let Partition {
            resolved,
            unresolved,
        } = partition(&self.engine, records, &table)?;
        info!(
            "Rules resolved {} of {} rows ({:.1}%), {} need inference",
            resolved,
            records.len(),
            resolved as f64 * 100.0 / records.len() as f64,
            unresolved.len()
        );

        let mut stats = PoolStats::default();
        if self.settings.skip_inference {
            info!("Inference skipped, dropping {} unresolved rows", unresolved.len());
        } else if !unresolved.is_empty() {
            stats = self.infer(&unresolved, &table).await?;
        }

        if !self.settings.skip_inference && !table.is_complete() {
            return Err(PipelineError::Incomplete {
                missing: table.missing(),
            });
        }

        let resolutions = table.into_vec();
        let mut summary = RunSummary::tally(&resolutions, started_at, clock.elapsed());
        summary.batches = stats.batches;
        summary.backend_calls = stats.calls;
        Ok(PipelineOutput {
            resolutions,
            summary,
        })
    }

    async fn infer(
        &self,
        unresolved: &[WorkItem<'_>],
        table: &ResultTable,
    ) -> Result<PoolStats, PipelineError> {
        let model = &self.settings.model;
        match preflight(self.backend.as_ref(), model).await {
            Preflight::Ready => info!("Backend ready, model {} available", model),
            Preflight::Unreachable(e) => {
                warn!("Backend unreachable ({}), {} rows fall back", e, unresolved.len());
                fall_back_all(unresolved, table)?;
                return Ok(PoolStats::default());
            }
            Preflight::ModelMissing { available } => {
                warn!(
                    "Model {} not offered by backend (available: {}), {} rows fall back",
                    model,
                    available.join(", "),
                    unresolved.len()
                );
                fall_back_all(unresolved, table)?;
                return Ok(PoolStats::default());
            }
        }

        let batches = make_batches(unresolved, self.settings.batch_size);
        info!(
            "Dispatching {} batches of up to {} rows to {} workers",
            batches.len(),
            self.settings.batch_size,
            self.settings.worker_count
        );
        let resolver = BatchResolver::new(
            Arc::clone(&self.backend),
            model.as_str(),
            self.settings.temperature,
            self.settings.retry,
        )
        .isolate_failures(self.settings.isolate_failed_batches);
        let pool = InferencePool::new(resolver, self.settings.worker_count);
        let stats = pool.run(batches, table).await;
        info!(
            "Inference done: {} rows inferred, {} fell back, {} backend calls",
            stats.inferred, stats.fallback, stats.calls
        );
        Ok(stats)
    }
}

fn fall_back_all(items: &[WorkItem<'_>], table: &ResultTable) -> Result<(), PipelineError> {
    for item in items {
        table.set(item.index, Resolution::fallback())?;
    }
    Ok(())
}
