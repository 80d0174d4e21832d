//! gpuplan - Main Entry Point

use clap::Parser;
use gpuplan::cli::{cmd_models, cmd_plan, cmd_prompt, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; --debug raises the default filter
    let default_filter = if cli.debug {
        "gpuplan=debug"
    } else {
        "gpuplan=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Plan {
            items_per_partition,
            target_time,
            max_rate,
            max_gpus,
            partitions,
        } => {
            cmd_plan(items_per_partition, target_time, max_rate, max_gpus, partitions)?;
        }
        Commands::Models { host, port } => {
            cmd_models(&host, port).await?;
        }
        Commands::Prompt {
            model,
            prompt,
            system,
            temperature,
            max_tokens,
            host,
            port,
        } => {
            cmd_prompt(&model, &prompt, &system, temperature, max_tokens, &host, port).await?;
        }
    }

    Ok(())
}
