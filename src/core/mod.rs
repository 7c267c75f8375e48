pub mod chart;
pub mod pipeline;
pub mod runner;
pub mod search;

pub use crate::domain::model::{Case, CaseBatch, Combination, RunReport, SearchResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
