pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "knapsack-bench")]
#[command(about = "Times exhaustive subset-sum searches over coin test cases")]
pub struct CliConfig {
    /// File containing the test cases to read
    #[arg(long, short = 't')]
    pub test_file: String,

    /// File containing the guaranteed fails to read
    #[arg(long, short = 'f')]
    pub fail_file: String,

    /// File to log the per-case output
    #[arg(long, short = 'l')]
    pub log_file: String,

    /// Directory for the chart, timings and summary artifacts
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn test_file(&self) -> &str {
        &self.test_file
    }

    fn fail_file(&self) -> &str {
        &self.fail_file
    }

    fn log_file(&self) -> &str {
        &self.log_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_input_file("test_file", &self.test_file)?;
        validation::validate_input_file("fail_file", &self.fail_file)?;
        validation::validate_path("log_file", &self.log_file)?;
        validation::validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_input_file() {
        let config = CliConfig {
            test_file: "/no/such/cases.txt".to_string(),
            fail_file: "/no/such/fails.txt".to_string(),
            log_file: "run.log".to_string(),
            output_path: "./output".to_string(),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
