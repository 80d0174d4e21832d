//! Command-line surface for the capacity planner and endpoint utilities

use std::io::Write;

use clap::{Parser, Subcommand};
use colored::*;

use crate::client::{GenerateRequest, OllamaClient};
use crate::error::Result;
use crate::planner::{find_optimal_configuration, SearchBounds, WorkloadSpec};

// ─── Styling helpers ───────────────────────────────────────────────────────────

fn accent(s: &str) -> ColoredString {
    s.truecolor(120, 170, 255)
}
fn muted(s: &str) -> ColoredString {
    s.truecolor(140, 140, 140)
}
fn ok(s: &str) -> ColoredString {
    s.truecolor(100, 210, 120)
}

fn kv(key: &str, val: &str) {
    println!("  {} {}", muted(key), val.white());
}

fn section(title: &str) {
    println!();
    println!("  {}", title.white().bold());
    println!("  {}", muted(&"─".repeat(48)));
}

// ─── CLI definition ────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "gpuplan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GPU capacity planning for LLM batch-inference workloads")]
#[command(long_about = None)]
pub struct Cli {
    /// Enable debug tracing
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the smallest GPU fleet meeting a processing-time target
    Plan {
        /// Articles produced per partition per window (e.g. 150)
        #[arg(short, long)]
        items_per_partition: u32,

        /// Target processing time in minutes (e.g. 30.0)
        #[arg(short, long)]
        target_time: f64,

        /// Highest per-GPU throughput (tokens/sec) to consider
        #[arg(long, default_value = "150")]
        max_rate: u32,

        /// Largest GPU count to consider
        #[arg(long, default_value = "70")]
        max_gpus: u32,

        /// Number of independent workload partitions
        #[arg(long, default_value = "7")]
        partitions: u32,
    },

    /// List models installed on the local endpoint
    Models {
        /// Endpoint host
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Endpoint port
        #[arg(long, default_value = "11434")]
        port: u16,
    },

    /// Stream a prompt through a model on the local endpoint
    Prompt {
        /// Model name (e.g. llama3.2:3b)
        #[arg(short, long)]
        model: String,

        /// Prompt text
        prompt: String,

        /// System prompt
        #[arg(long, default_value = "You are a helpful assistant.")]
        system: String,

        /// Sampling temperature
        #[arg(long, default_value = "0.7")]
        temperature: f64,

        /// Maximum tokens to generate
        #[arg(long, default_value = "1024")]
        max_tokens: u32,

        /// Endpoint host
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Endpoint port
        #[arg(long, default_value = "11434")]
        port: u16,
    },
}

// ─── Commands ──────────────────────────────────────────────────────────────────

pub fn cmd_plan(
    items_per_partition: u32,
    target_time: f64,
    max_rate: u32,
    max_gpus: u32,
    partitions: u32,
) -> Result<()> {
    let workload = WorkloadSpec::new(partitions, items_per_partition);
    let bounds = SearchBounds::new(max_rate, max_gpus);
    let outcome = find_optimal_configuration(target_time, bounds, &workload);

    section("Workload");
    kv("partitions        ", &partitions.to_string());
    kv("items / partition ", &items_per_partition.to_string());
    kv(
        "token volume      ",
        &format!("{:.0} tokens / window", workload.total_tokens()),
    );
    kv("target time       ", &format!("<= {target_time} min"));

    match outcome.best_configuration() {
        Some(config) => {
            section("Optimal configuration");
            kv("throughput per GPU", &format!("{} tokens/sec", config.rate));
            kv("GPUs              ", &config.parallelism.to_string());
            kv(
                "achieved time     ",
                &format!("{:.2} min", outcome.achieved_minutes()),
            );
            println!();
            println!("  {} target met", ok("✓"));
        }
        None => {
            println!();
            println!(
                "  no configuration within max_rate={max_rate}, max_gpus={max_gpus} \
                 meets {target_time} minutes"
            );
        }
    }
    Ok(())
}

pub async fn cmd_models(host: &str, port: u16) -> Result<()> {
    let client = OllamaClient::new(host, port)?;
    let models = client.list_models().await?;

    if models.is_empty() {
        println!("  no models installed on {host}:{port}");
        return Ok(());
    }

    section("Installed models");
    for model in models {
        println!("  {}", accent(&model.name));
        kv("  size        ", &format!("{:.2} GB", model.size as f64 / 1e9));
        kv("  modified    ", &model.modified_at);
        kv("  parameters  ", &model.details.parameter_size);
        kv("  quantization", &model.details.quantization_level);
        kv("  format      ", &model.details.format);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn cmd_prompt(
    model: &str,
    prompt: &str,
    system: &str,
    temperature: f64,
    max_tokens: u32,
    host: &str,
    port: u16,
) -> Result<()> {
    let client = OllamaClient::new(host, port)?;
    let request = GenerateRequest {
        model: model.to_string(),
        prompt: prompt.to_string(),
        system: system.to_string(),
        temperature,
        max_tokens,
    };

    let last = client
        .generate(&request, |chunk| {
            print!("{}", chunk.response);
            let _ = std::io::stdout().flush();
        })
        .await?;
    println!();

    if let Some(tps) = last.as_ref().and_then(|c| c.tokens_per_second()) {
        println!("{}", muted(&format!("{tps:.1} tokens/sec")));
    }
    Ok(())
}
