//! gpuplan - GPU capacity planning for LLM batch-inference workloads
//!
//! Sizes a GPU fleet for a recurring batch workload, e.g. summarizing every
//! article a set of regional newsfeeds produces per scheduling window. The
//! planner searches a bounded (per-GPU throughput × GPU count) grid for the
//! configuration that meets a processing-time target with the fewest GPUs.
//!
//! # Modules
//!
//! - [`planner`] - Workload model and configuration search
//! - [`client`] - HTTP client for a local Ollama-compatible endpoint
//! - [`cli`] - Command-line interface
//! - [`error`] - Crate error types

// Core error handling
pub mod error;

// Capacity planning core
pub mod planner;

// Model endpoint client
pub mod client;

// Command-line interface
pub mod cli;

pub use error::{PlannerError, Result};
