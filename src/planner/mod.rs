//! Capacity planning: workload model and configuration search
//!
//! Sizes a GPU fleet for a recurring batch workload by searching the bounded
//! (per-GPU throughput × GPU count) grid for the cheapest configuration that
//! still meets a processing-time target.

mod search;
mod workload;

pub use search::{
    estimate_minutes, find_optimal_configuration, search_with, Configuration, SearchBounds,
    SearchOutcome,
};
pub use workload::{WorkloadSpec, DEFAULT_TOKENS_PER_WORD, DEFAULT_WORDS_PER_ITEM};
