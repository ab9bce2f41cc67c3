use super::system_run::SystemRun;
use serde::{Deserialize, Serialize};

/// A comparison of two benchmark runs, composed into one Markdown document
/// by `to_markdown`.
#[derive(Debug, Serialize, Deserialize, Clone, derive_new::new, PartialEq, Default)]
pub struct ComparisonReport {
    /// Timestamp when the report was generated
    pub timestamp: String,

    /// The system under test
    pub candidate: SystemRun,

    /// The reference system
    pub baseline: SystemRun,
}
