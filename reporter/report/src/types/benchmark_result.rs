use serde::{Deserialize, Serialize};

/// Aggregated end-to-end latency statistics for one system's benchmark run,
/// as written by the benchmark pipeline. All latency fields are required:
/// a document missing any of them does not parse and the whole file degrades
/// to a missing record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Average end-to-end latency in milliseconds
    pub aggregated_end_to_end_latency_avg: f64,

    /// 95th-percentile end-to-end latency in milliseconds
    pub aggregated_end_to_end_latency_95pct: f64,

    /// 99th-percentile end-to-end latency in milliseconds
    pub aggregated_end_to_end_latency_99pct: f64,
}
