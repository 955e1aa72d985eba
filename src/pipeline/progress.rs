use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Point-in-time view of inference progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub total: usize,
    pub elapsed: Duration,
    /// Zero while no rate can be derived yet.
    pub eta: Duration,
}

impl fmt::Display for ProgressSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LLM batch {:>5}/{}  ETA: {:>5.1} min",
            self.completed,
            self.total,
            self.eta.as_secs_f64() / 60.0
        )
    }
}

/// Completed-batch counter shared by all inference workers.
///
/// Observability only: nothing in the pipeline branches on its output.
pub struct ProgressTracker {
    total: usize,
    started: Instant,
    completed: Mutex<usize>,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self::starting_at(total, Instant::now())
    }

    pub fn starting_at(total: usize, started: Instant) -> Self {
        Self {
            total,
            started,
            completed: Mutex::new(0),
        }
    }

    pub fn record_batch_completion(&self) -> ProgressSnapshot {
        let mut completed = self.completed.lock().unwrap_or_else(PoisonError::into_inner);
        *completed += 1;
        self.snapshot_with(*completed)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let completed = *self.completed.lock().unwrap_or_else(PoisonError::into_inner);
        self.snapshot_with(completed)
    }

    fn snapshot_with(&self, completed: usize) -> ProgressSnapshot {
        let elapsed = self.started.elapsed();
        ProgressSnapshot {
            completed,
            total: self.total,
            elapsed,
            eta: estimate_eta(completed, self.total, elapsed),
        }
    }
}

/// `(total - completed) / (completed / elapsed)`, or zero when the rate is
/// zero or undefined.
pub fn estimate_eta(completed: usize, total: usize, elapsed: Duration) -> Duration {
    let secs = elapsed.as_secs_f64();
    if completed == 0 || secs <= 0.0 {
        return Duration::ZERO;
    }
    let rate = completed as f64 / secs;
    let remaining = total.saturating_sub(completed) as f64;
    let eta = remaining / rate;
    if eta.is_finite() && eta >= 0.0 {
        Duration::from_secs_f64(eta)
    } else {
        Duration::ZERO
    }
}
