use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// The two sides of a comparison: the system under test and the reference
/// system it is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum SystemKind {
    #[display("Candidate")]
    #[serde(rename = "candidate")]
    Candidate,
    #[display("Baseline")]
    #[serde(rename = "baseline")]
    Baseline,
}
