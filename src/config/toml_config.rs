use crate::core::ConfigProvider;
use crate::utils::error::{BenchError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub run: RunConfig,
    pub input: InputConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub test_file: String,
    pub fail_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub log_file: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_output_path() -> String {
    "./output".to_string()
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BenchError::ConfigError {
            message: format!("cannot read config file '{}': {}", path, e),
        })?;

        toml::from_str(&content).map_err(|e| BenchError::ConfigError {
            message: format!("invalid TOML in '{}': {}", path, e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn test_file(&self) -> &str {
        &self.input.test_file
    }

    fn fail_file(&self) -> &str {
        &self.input.fail_file
    }

    fn log_file(&self) -> &str {
        &self.report.log_file
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("run.name", &self.run.name)?;
        validation::validate_input_file("input.test_file", &self.input.test_file)?;
        validation::validate_input_file("input.fail_file", &self.input.fail_file)?;
        validation::validate_path("report.log_file", &self.report.log_file)?;
        validation::validate_path("report.output_path", &self.report.output_path)?;
        Ok(())
    }
}
