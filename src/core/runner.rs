use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives one benchmark run through a pipeline: read the case files,
/// search every case, write the report. Returns the chart path.
pub struct BenchRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BenchRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Reading case files...");
        let batch = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} test cases and {} guaranteed fails",
            batch.tests.len(),
            batch.guaranteed_fails.len()
        );

        tracing::info!("Running exhaustive searches...");
        let report = self.pipeline.process(batch).await?;
        tracing::info!(
            "{} successes, {} failures, {:.6}s spent searching",
            report.summary.successes,
            report.summary.failures,
            report.summary.total_elapsed_secs
        );

        tracing::info!("Writing report...");
        let chart_path = self.pipeline.load(report).await?;
        tracing::info!("Chart saved to: {}", chart_path);

        Ok(chart_path)
    }
}
