use crate::error::ReporterError;
use bench_comparison_report::costs::CostSummary;
use std::env;
use std::path::PathBuf;

static ENV_WORKSPACE_HOME: &str = "WORKSPACE_HOME";
static ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
static ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
static ENV_BASELINE_COST_CANDIDATE: &str = "BASELINE_COST_CANDIDATE";
static ENV_USAGE_COST_CANDIDATE: &str = "USAGE_COST_CANDIDATE";
static ENV_TOTAL_COST_CANDIDATE: &str = "TOTAL_COST_CANDIDATE";
static ENV_BASELINE_COST_BASELINE: &str = "BASELINE_COST_BASELINE";
static ENV_USAGE_COST_BASELINE: &str = "USAGE_COST_BASELINE";
static ENV_TOTAL_COST_BASELINE: &str = "TOTAL_COST_BASELINE";

/// Runtime configuration resolved from the CI environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ReporterConfig {
    /// Directory under which the pipeline stages place their result files.
    pub workspace_home: PathBuf,
    /// Target repository as an `owner/name` identifier.
    pub repository: String,
    /// Bearer token for the comment submission, when one is provided.
    pub token: Option<String>,
    pub candidate_costs: CostSummary,
    pub baseline_costs: CostSummary,
}

impl ReporterConfig {
    /// Reads the configuration from environment variables. Fails when
    /// `WORKSPACE_HOME` or `GITHUB_REPOSITORY` is unset or empty.
    pub fn from_env() -> Result<Self, ReporterError> {
        Ok(Self {
            workspace_home: PathBuf::from(required(ENV_WORKSPACE_HOME)?),
            repository: required(ENV_GITHUB_REPOSITORY)?,
            token: optional(ENV_GITHUB_TOKEN),
            candidate_costs: CostSummary::new(
                cost(ENV_BASELINE_COST_CANDIDATE),
                cost(ENV_USAGE_COST_CANDIDATE),
                cost(ENV_TOTAL_COST_CANDIDATE),
            ),
            baseline_costs: CostSummary::new(
                cost(ENV_BASELINE_COST_BASELINE),
                cost(ENV_USAGE_COST_BASELINE),
                cost(ENV_TOTAL_COST_BASELINE),
            ),
        })
    }
}

fn required(name: &'static str) -> Result<String, ReporterError> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ReporterError::MissingEnv(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

// Cost figures keep whatever string the pipeline exported, empty included.
fn cost(name: &str) -> Option<String> {
    env::var(name).ok()
}
