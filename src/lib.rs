pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::pipeline::BenchPipeline;
pub use core::runner::BenchRunner;
pub use core::search::{search, CombinationsWithReplacement};
pub use domain::model::{Case, SearchResult};
pub use utils::error::{BenchError, Result};
