use serde::{Deserialize, Serialize};

/// Point-in-time aggregate quality metrics for one repository.
///
/// Represents an average over the repository's analyses. Absent (`None` in
/// the projection) means not yet loaded or load failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub coverage: f64,
    pub bugs: f64,
    pub complexity: f64,
    pub code_smells: f64,
    pub duplicated_lines_density: f64,
    pub vulnerabilities: f64,
    pub total_score: f64,
}
