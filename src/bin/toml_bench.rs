use clap::Parser;
use knapsack_bench::config::toml_config::TomlConfig;
use knapsack_bench::utils::{logger, validation::Validate};
use knapsack_bench::{BenchPipeline, BenchRunner, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-bench")]
#[command(about = "Knapsack timing bench driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "bench-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Starting run '{}'", config.run.name);
    if let Some(description) = &config.run.description {
        tracing::info!("{}", description);
    }

    let pipeline = BenchPipeline::new(LocalStorage::new(), config);
    let runner = BenchRunner::new(pipeline);

    match runner.run().await {
        Ok(chart_path) => {
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
