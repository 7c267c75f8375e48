use clap::Parser;
use knapsack_bench::utils::{logger, validation::Validate};
use knapsack_bench::{BenchPipeline, BenchRunner, CliConfig, LocalStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting knapsack-bench");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let pipeline = BenchPipeline::new(storage, config);
    let runner = BenchRunner::new(pipeline);

    match runner.run().await {
        Ok(chart_path) => {
            tracing::info!("Benchmark run completed");
            println!("✅ Benchmark run completed");
            println!("📈 Chart saved to: {}", chart_path);
        }
        Err(e) => {
            tracing::error!("Benchmark run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
