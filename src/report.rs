use crate::pipeline::results::{Resolution, ResolutionSource};
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Completion report for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub total: usize,
    pub rule_resolved: usize,
    pub inferred: usize,
    pub fallback: usize,
    /// Unresolved rows dropped because inference was skipped.
    pub skipped: usize,
    pub ingredients: usize,
    pub batches: usize,
    pub backend_calls: usize,
}

impl RunSummary {
    /// Tallies a finished table; `None` slots count as skipped.
    pub fn tally(
        resolutions: &[Option<Resolution>],
        started_at: DateTime<Utc>,
        elapsed: Duration,
    ) -> Self {
        let mut summary = RunSummary {
            started_at,
            elapsed,
            total: resolutions.len(),
            rule_resolved: 0,
            inferred: 0,
            fallback: 0,
            skipped: 0,
            ingredients: 0,
            batches: 0,
            backend_calls: 0,
        };
        for slot in resolutions {
            let Some(resolution) = slot else {
                summary.skipped += 1;
                continue;
            };
            match resolution.source {
                ResolutionSource::Rule => summary.rule_resolved += 1,
                ResolutionSource::Inference => summary.inferred += 1,
                ResolutionSource::Fallback => summary.fallback += 1,
            }
            if resolution.result.is_ingredient {
                summary.ingredients += 1;
            }
        }
        summary
    }

    /// Rows present in the output.
    pub fn emitted(&self) -> usize {
        self.total - self.skipped
    }

    pub fn log(&self) {
        info!("{}", self);
        if self.fallback > 0 {
            warn!(
                "{} rows fell back to non-ingredient after inference failures",
                self.fallback
            );
        }
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Run started {} finished in {:.1}s",
            self.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.elapsed.as_secs_f64()
        )?;
        writeln!(
            f,
            "  rules:     {:>7} ({:.1}%)",
            self.rule_resolved,
            percent(self.rule_resolved, self.total)
        )?;
        writeln!(
            f,
            "  inferred:  {:>7} ({:.1}%) in {} batches, {} calls",
            self.inferred,
            percent(self.inferred, self.total),
            self.batches,
            self.backend_calls
        )?;
        writeln!(
            f,
            "  fallback:  {:>7} ({:.1}%)",
            self.fallback,
            percent(self.fallback, self.total)
        )?;
        writeln!(f, "  skipped:   {:>7}", self.skipped)?;
        write!(
            f,
            "  ingredients: {} of {} emitted rows",
            self.ingredients,
            self.emitted()
        )
    }
}
