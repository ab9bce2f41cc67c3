use serde::{Deserialize, Serialize};

/// Cost figures for one system, supplied by the CI environment rather than
/// the benchmark artifacts. A missing figure renders as `undefined`.
#[derive(Debug, Serialize, Deserialize, Clone, derive_new::new, PartialEq, Default)]
pub struct CostSummary {
    pub baseline: Option<String>,
    pub usage: Option<String>,
    pub total: Option<String>,
}
