use crate::config::ReporterConfig;
use crate::error::ReporterError;
use crate::github::{GitHubClient, RepoId, GITHUB_API_URL};
use crate::inputs::{self, RunInputs};
use bench_comparison_report::report::ComparisonReport;
use bench_comparison_report::system_run::SystemRun;
use chrono::Utc;
use tracing::{error, info};

/// Issue on which the comparison comment is published.
pub const REPORT_ISSUE_NUMBER: u64 = 1;

/// Loads the pipeline results, composes the Markdown report and submits it as
/// an issue comment. A submission failure is logged without failing the run,
/// a record missing from the composed report is fatal.
pub async fn run(config: ReporterConfig) -> Result<(), ReporterError> {
    let inputs = inputs::load(&config.workspace_home);
    let report = build_report(inputs, &config)?;
    let body = report.to_markdown();
    info!("Report body:\n{body}");
    match post_report(&config, &body).await {
        Ok(()) => info!("Comment created successfully"),
        Err(error) => error!("Error creating comment: {error}"),
    }
    Ok(())
}

fn build_report(
    inputs: RunInputs,
    config: &ReporterConfig,
) -> Result<ComparisonReport, ReporterError> {
    let candidate = SystemRun::new(
        inputs
            .candidate_result
            .ok_or(ReporterError::MissingInput(inputs::CANDIDATE_RESULT_PATH))?,
        inputs
            .candidate_data
            .ok_or(ReporterError::MissingInput(inputs::CANDIDATE_DATA_PATH))?,
        config.candidate_costs.clone(),
    );
    let baseline = SystemRun::new(
        inputs
            .baseline_result
            .ok_or(ReporterError::MissingInput(inputs::BASELINE_RESULT_PATH))?,
        inputs
            .baseline_data
            .ok_or(ReporterError::MissingInput(inputs::BASELINE_DATA_PATH))?,
        config.baseline_costs.clone(),
    );
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Ok(ComparisonReport::new(timestamp, candidate, baseline))
}

async fn post_report(config: &ReporterConfig, body: &str) -> Result<(), ReporterError> {
    let repository = config.repository.parse::<RepoId>()?;
    let client = GitHubClient::new(GITHUB_API_URL, repository, config.token.as_deref())?;
    client
        .create_issue_comment(REPORT_ISSUE_NUMBER, body)
        .await
}
