//! Grid search for the smallest GPU fleet meeting a processing-time target

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::workload::WorkloadSpec;

const SECONDS_PER_HOUR: f64 = 3600.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Inclusive upper bounds of the (rate × GPU count) grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBounds {
    /// Highest per-GPU throughput (tokens/sec) to consider
    pub max_rate: u32,

    /// Largest GPU count to consider
    pub max_parallelism: u32,
}

impl Default for SearchBounds {
    fn default() -> Self {
        Self {
            max_rate: 150,
            max_parallelism: 70,
        }
    }
}

impl SearchBounds {
    /// Create bounds for the configuration grid
    pub fn new(max_rate: u32, max_parallelism: u32) -> Self {
        Self {
            max_rate,
            max_parallelism,
        }
    }
}

/// A candidate (per-GPU throughput, GPU count) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Per-GPU throughput in tokens/sec
    pub rate: u32,

    /// Number of GPUs running in parallel
    pub parallelism: u32,
}

/// Result of a configuration search: the best configuration found together
/// with the processing time it achieves, or nothing if no candidate inside
/// the bounds met the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    best: Option<Configuration>,
    closest_minutes: f64,
}

impl SearchOutcome {
    /// The best configuration found, if any candidate met the target.
    pub fn best_configuration(&self) -> Option<Configuration> {
        self.best
    }

    /// Processing time of the best configuration in minutes;
    /// `f64::INFINITY` when nothing met the target.
    pub fn achieved_minutes(&self) -> f64 {
        self.closest_minutes
    }

    /// Whether any configuration inside the bounds met the target.
    pub fn is_feasible(&self) -> bool {
        self.best.is_some()
    }
}

/// Processing time in minutes for one window of `workload` on `parallelism`
/// GPUs each sustaining `rate` tokens/sec.
///
/// A zero rate or GPU count is not an error: the configuration simply cannot
/// finish, so the estimate is `f64::INFINITY`. Time never increases when
/// either argument grows.
pub fn estimate_minutes(rate: u32, parallelism: u32, workload: &WorkloadSpec) -> f64 {
    if rate == 0 || parallelism == 0 {
        trace!(rate, parallelism, "degenerate configuration, infinite time");
        return f64::INFINITY;
    }

    let total_tokens = workload.total_tokens();
    let tokens_per_second = rate as f64 * parallelism as f64;
    let tokens_per_hour = tokens_per_second * SECONDS_PER_HOUR;
    let hours = total_tokens / tokens_per_hour;
    let minutes = hours * MINUTES_PER_HOUR;

    trace!(rate, parallelism, total_tokens, minutes, "estimated window time");
    minutes
}

/// Grid search with an arbitrary cost function (minutes).
///
/// Rates are tried from `bounds.max_rate` downward; for each rate the GPU
/// count grows from 1 and stops at the first count meeting the target, so
/// higher counts at the same rate are never evaluated. With a cost that is
/// non-increasing in both arguments the skipped pairs cannot beat the one
/// kept, but the result is the best *first-feasible* pair per rate, not a
/// full-grid minimum. Among equal achieved times the configuration with
/// fewer GPUs wins.
pub fn search_with<F>(target_minutes: f64, bounds: SearchBounds, cost: F) -> SearchOutcome
where
    F: Fn(u32, u32) -> f64,
{
    let mut best: Option<Configuration> = None;
    let mut closest = f64::INFINITY;

    debug!(
        target_minutes,
        max_rate = bounds.max_rate,
        max_parallelism = bounds.max_parallelism,
        "starting configuration search"
    );

    for rate in (1..=bounds.max_rate).rev() {
        for parallelism in 1..=bounds.max_parallelism {
            let minutes = cost(rate, parallelism);

            if minutes <= target_minutes {
                let fewer_gpus = best.map_or(true, |b| parallelism < b.parallelism);
                if minutes < closest || (minutes == closest && fewer_gpus) {
                    closest = minutes;
                    best = Some(Configuration { rate, parallelism });
                    trace!(rate, parallelism, minutes, "new best configuration");
                }
                // First feasible GPU count settles this rate.
                break;
            }
        }
    }

    debug!(?best, closest, "configuration search complete");
    SearchOutcome {
        best,
        closest_minutes: closest,
    }
}

/// Search the bounded grid for the configuration that meets `target_minutes`
/// with the fewest GPUs, preferring higher per-GPU throughput first.
///
/// Degenerate bounds (`max_rate == 0` or `max_parallelism == 0`) yield an
/// empty outcome rather than an error.
pub fn find_optimal_configuration(
    target_minutes: f64,
    bounds: SearchBounds,
    workload: &WorkloadSpec,
) -> SearchOutcome {
    search_with(target_minutes, bounds, |rate, parallelism| {
        estimate_minutes(rate, parallelism, workload)
    })
}
