use bench_comparison_report::benchmark_result::BenchmarkResult;
use bench_comparison_report::run_data::ExtractedRunData;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::error;

pub const CANDIDATE_RESULT_PATH: &str = "results/BENCHMARK_RESULT_CANDIDATE.info";
pub const BASELINE_RESULT_PATH: &str = "results/BENCHMARK_RESULT_BASELINE.info";
pub const CANDIDATE_DATA_PATH: &str = "results/EXTRACTED_DATA_CANDIDATE.info";
pub const BASELINE_DATA_PATH: &str = "results/EXTRACTED_DATA_BASELINE.info";

/// Records loaded from the four pipeline result files. Each record is `None`
/// when its file was missing or malformed.
#[derive(Debug, Default)]
pub struct RunInputs {
    pub candidate_result: Option<BenchmarkResult>,
    pub baseline_result: Option<BenchmarkResult>,
    pub candidate_data: Option<ExtractedRunData>,
    pub baseline_data: Option<ExtractedRunData>,
}

/// Loads the four result files relative to the workspace root. Read and parse
/// failures are logged and leave the record absent instead of failing the run.
pub fn load(workspace_home: &Path) -> RunInputs {
    RunInputs {
        candidate_result: read_json_file(&workspace_home.join(CANDIDATE_RESULT_PATH)),
        baseline_result: read_json_file(&workspace_home.join(BASELINE_RESULT_PATH)),
        candidate_data: read_json_file(&workspace_home.join(CANDIDATE_DATA_PATH)),
        baseline_data: read_json_file(&workspace_home.join(BASELINE_DATA_PATH)),
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(error) => {
                error!("Error parsing file {}: {error}", path.display());
                None
            }
        },
        Err(error) => {
            error!("Error reading file {}: {error}", path.display());
            None
        }
    }
}
