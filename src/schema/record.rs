//! Per-generation history records and run analysis results.

use serde::{Deserialize, Serialize};

/// Summary of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// 1-based generation index.
    pub generation: u64,
    /// Number of alive cells.
    pub population: usize,
    /// Standard deviation of the 0/1 grid values, in [0, 0.5].
    pub entropy: f64,
}

/// Narrative verdict over a run's population trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    /// Absent only for the empty-history verdict.
    pub metrics: Option<RunMetrics>,
}

/// Fixed metric set reported with every non-empty analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    #[serde(rename = "Peak Population")]
    pub peak_population: usize,
    #[serde(rename = "Final Population")]
    pub final_population: usize,
    #[serde(rename = "Generations")]
    pub generations: usize,
    /// Volatility formatted to two decimals.
    #[serde(rename = "Volatility Index")]
    pub volatility_index: String,
}

impl RunMetrics {
    /// Labelled values in display order.
    pub fn entries(&self) -> [(&'static str, String); 4] {
        [
            ("Peak Population", self.peak_population.to_string()),
            ("Final Population", self.final_population.to_string()),
            ("Generations", self.generations.to_string()),
            ("Volatility Index", self.volatility_index.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_entries_order() {
        let metrics = RunMetrics {
            peak_population: 30,
            final_population: 25,
            generations: 3,
            volatility_index: "6.24".to_string(),
        };
        let labels: Vec<&str> = metrics.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            labels,
            [
                "Peak Population",
                "Final Population",
                "Generations",
                "Volatility Index"
            ]
        );
        assert_eq!(metrics.entries()[3].1, "6.24");
    }

    #[test]
    fn test_metrics_serialize_with_display_keys() {
        let metrics = RunMetrics {
            peak_population: 1,
            final_population: 0,
            generations: 2,
            volatility_index: "0.50".to_string(),
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["Peak Population"], 1);
        assert_eq!(json["Volatility Index"], "0.50");
    }
}
