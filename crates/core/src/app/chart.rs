use crate::domain::MetricsSnapshot;

/// Fixed category order of the quality chart
pub const CHART_LABELS: [&str; 7] = [
    "Coverage",
    "Bugs",
    "Complexity",
    "Code Smells",
    "Duplicated Lines",
    "Vulnerabilities",
    "Total Score",
];

/// Labeled dataset ready for bar-chart rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub labels: [&'static str; 7],
    pub values: [f64; 7],
}

impl ChartDataset {
    /// Iterate label/value pairs in chart order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.labels.iter().copied().zip(self.values.iter().copied())
    }
}

/// Project a metrics snapshot into a bar-chart dataset.
///
/// Pure and deterministic: no normalization or scaling, raw values are
/// passed through positionally. `None` in means `None` out (no chart).
pub fn project(metrics: Option<&MetricsSnapshot>) -> Option<ChartDataset> {
    let m = metrics?;
    Some(ChartDataset {
        labels: CHART_LABELS,
        values: [
            m.coverage,
            m.bugs,
            m.complexity,
            m.code_smells,
            m.duplicated_lines_density,
            m.vulnerabilities,
            m.total_score,
        ],
    })
}
