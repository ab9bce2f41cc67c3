use super::benchmark_result::BenchmarkResult;
use super::costs::CostSummary;
use super::run_data::ExtractedRunData;
use serde::{Deserialize, Serialize};

/// Everything the report needs about one system's benchmark run.
#[derive(Debug, Serialize, Deserialize, Clone, derive_new::new, PartialEq, Default)]
pub struct SystemRun {
    pub result: BenchmarkResult,
    pub run_data: ExtractedRunData,
    pub costs: CostSummary,
}
