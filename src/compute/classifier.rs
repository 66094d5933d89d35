//! Trajectory classifier - narrative verdicts over a run's population history.
//!
//! The verdict is picked from a priority-ordered decision list. The buckets
//! overlap, so the order of [`RULES`] is part of the behavior: the first
//! matching rule wins and [`Narrative::SteadyState`] catches the rest.

use crate::schema::{AnalysisResult, HistoryRecord, RunMetrics};

const VOID_TITLE: &str = "The Void";
const VOID_DESCRIPTION: &str = "Nothing happened. Time stood still in an empty universe.";

/// Aggregate statistics of a population trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryStats {
    pub start_pop: usize,
    pub end_pop: usize,
    pub max_pop: usize,
    pub min_pop: usize,
    pub steps: usize,
    /// Sample standard deviation (n - 1 denominator) of the first
    /// differences, the first record's difference counting as 0.
    /// NaN for a single record, which fails every volatility comparison.
    pub volatility: f64,
}

impl TrajectoryStats {
    /// Compute statistics, or None for an empty history.
    pub fn from_history(history: &[HistoryRecord]) -> Option<Self> {
        let first = history.first()?;
        let last = history.last()?;
        let populations = history.iter().map(|r| r.population);

        Some(Self {
            start_pop: first.population,
            end_pop: last.population,
            max_pop: populations.clone().max().unwrap_or(0),
            min_pop: populations.min().unwrap_or(0),
            steps: history.len(),
            volatility: volatility(history),
        })
    }
}

fn volatility(history: &[HistoryRecord]) -> f64 {
    if history.len() < 2 {
        return f64::NAN;
    }
    let n = history.len() as f64;
    let diffs: Vec<f64> = std::iter::once(0.0)
        .chain(
            history
                .windows(2)
                .map(|w| w[1].population as f64 - w[0].population as f64),
        )
        .collect();

    let mean = diffs.iter().sum::<f64>() / n;
    let variance = diffs.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Narrative bucket assigned to a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Narrative {
    TotalExtinction,
    StaticEquilibrium,
    GoldenAge,
    GreatFilter,
    ChaoticFluctuations,
    SteadyState,
}

type Rule = (fn(&TrajectoryStats) -> bool, Narrative);

/// Decision list in priority order.
pub const RULES: [Rule; 5] = [
    (|s: &TrajectoryStats| s.end_pop == 0, Narrative::TotalExtinction),
    (
        |s: &TrajectoryStats| s.end_pop == s.start_pop && s.volatility < 1.0,
        Narrative::StaticEquilibrium,
    ),
    (
        |s: &TrajectoryStats| s.end_pop as f64 > s.start_pop as f64 * 1.5,
        Narrative::GoldenAge,
    ),
    (
        |s: &TrajectoryStats| (s.end_pop as f64) < s.start_pop as f64 * 0.5,
        Narrative::GreatFilter,
    ),
    (
        |s: &TrajectoryStats| s.volatility > s.start_pop as f64 * 0.1,
        Narrative::ChaoticFluctuations,
    ),
];

impl Narrative {
    pub fn title(self) -> &'static str {
        match self {
            Narrative::TotalExtinction => "Total Extinction",
            Narrative::StaticEquilibrium => "Static Equilibrium",
            Narrative::GoldenAge => "Golden Age of Growth",
            Narrative::GreatFilter => "Great Filter",
            Narrative::ChaoticFluctuations => "Chaotic Fluctuations",
            Narrative::SteadyState => "Steady State Survival",
        }
    }

    /// Narrative text with the run's numbers filled in.
    pub fn describe(self, s: &TrajectoryStats) -> String {
        match self {
            Narrative::TotalExtinction => format!(
                "The civilization struggled for {} generations before succumbing to the harsh void. \
                 Despite reaching a peak of {} entities, resource scarcity (or perhaps loneliness) \
                 led to a complete collapse. Silence reigns once more.",
                s.steps, s.max_pop
            ),
            Narrative::StaticEquilibrium => {
                "A remarkably stable society. Structure emerged instantly and refused to yield to time. \
                 These digital denizens found the perfect balance immediately, trapped in eternal stasis."
                    .to_string()
            }
            Narrative::GoldenAge => format!(
                "A thriving era! Starting from a humble {}, the population exploded to {}. \
                 Cooperation between cellular structures has led to a booming metropolis of automata.",
                s.start_pop, s.end_pop
            ),
            Narrative::GreatFilter => format!(
                "Catastrophe. From an initial state of {}, the system degraded significantly to {}. \
                 Overpopulation in the early stages likely caused overcrowding deaths, thinning the herd \
                 to a bare minimum.",
                s.start_pop, s.end_pop
            ),
            Narrative::ChaoticFluctuations => format!(
                "A turbulent history. Empires rose and fell in rapid succession. \
                 The population swung wildly between {} and {}, indicating a highly unstable \
                 genetic configuration or a war-torn grid.",
                s.min_pop, s.max_pop
            ),
            Narrative::SteadyState => format!(
                "Life found a way. Despite minor fluctuations, the system maintained a healthy consistence. \
                 Ending with {} survivors, it represents a resilient, if unexciting, ecosystem.",
                s.end_pop
            ),
        }
    }
}

/// First matching rule, falling back to steady-state survival.
pub fn classify(stats: &TrajectoryStats) -> Narrative {
    RULES
        .iter()
        .find(|(matches, _)| matches(stats))
        .map(|&(_, narrative)| narrative)
        .unwrap_or(Narrative::SteadyState)
}

fn format_volatility(volatility: f64) -> String {
    if volatility.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", volatility)
    }
}

/// Analyze a completed history. An empty history yields the void verdict.
pub fn analyze(history: &[HistoryRecord]) -> AnalysisResult {
    let Some(stats) = TrajectoryStats::from_history(history) else {
        return AnalysisResult {
            title: VOID_TITLE.to_string(),
            description: VOID_DESCRIPTION.to_string(),
            metrics: None,
        };
    };

    let narrative = classify(&stats);
    AnalysisResult {
        title: narrative.title().to_string(),
        description: narrative.describe(&stats),
        metrics: Some(RunMetrics {
            peak_population: stats.max_pop,
            final_population: stats.end_pop,
            generations: stats.steps,
            volatility_index: format_volatility(stats.volatility),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(populations: &[usize]) -> Vec<HistoryRecord> {
        populations
            .iter()
            .enumerate()
            .map(|(i, &population)| HistoryRecord {
                generation: i as u64 + 1,
                population,
                entropy: 0.0,
            })
            .collect()
    }

    fn verdict(populations: &[usize]) -> Narrative {
        classify(&TrajectoryStats::from_history(&history(populations)).unwrap())
    }

    #[test]
    fn test_empty_history_is_void() {
        let result = analyze(&[]);
        assert_eq!(result.title, "The Void");
        assert_eq!(
            result.description,
            "Nothing happened. Time stood still in an empty universe."
        );
        assert!(result.metrics.is_none());
    }

    #[test]
    fn test_stats() {
        let stats = TrajectoryStats::from_history(&history(&[10, 10, 25])).unwrap();
        assert_eq!(stats.start_pop, 10);
        assert_eq!(stats.end_pop, 25);
        assert_eq!(stats.max_pop, 25);
        assert_eq!(stats.min_pop, 10);
        assert_eq!(stats.steps, 3);
        // diffs [0, 0, 15]: mean 5, sample variance 150 / 2
        assert!((stats.volatility - 75f64.sqrt()).abs() < 1e-12);
        assert_eq!(
            analyze(&history(&[10, 10, 25])).metrics.unwrap().volatility_index,
            "8.66"
        );
    }

    #[test]
    fn test_single_record_volatility_is_undefined() {
        let stats = TrajectoryStats::from_history(&history(&[7])).unwrap();
        assert!(stats.volatility.is_nan());
        assert_eq!(classify(&stats), Narrative::SteadyState);

        let result = analyze(&history(&[7]));
        assert_eq!(result.title, "Steady State Survival");
        assert_eq!(result.metrics.unwrap().volatility_index, "nan");

        // Extinction still wins for a single empty generation
        assert_eq!(verdict(&[0]), Narrative::TotalExtinction);
    }

    #[test]
    fn test_unit_volatility_is_chaotic_not_static() {
        // diffs [0, 1, -1]: sample std is exactly 1.0, which is not below 1.0
        // but exceeds 5 * 0.1
        let stats = TrajectoryStats::from_history(&history(&[5, 6, 5])).unwrap();
        assert_eq!(stats.volatility, 1.0);
        assert_eq!(classify(&stats), Narrative::ChaoticFluctuations);
        assert_eq!(
            analyze(&history(&[5, 6, 5])).metrics.unwrap().volatility_index,
            "1.00"
        );
    }

    #[test]
    fn test_extinction_precedes_equilibrium() {
        let stats = TrajectoryStats::from_history(&history(&[0, 3, 0])).unwrap();
        assert!(stats.volatility > 0.0);
        assert_eq!(classify(&stats), Narrative::TotalExtinction);
        // Flat zero run also lands in extinction, never in the great filter
        assert_eq!(verdict(&[0, 0, 0]), Narrative::TotalExtinction);
    }

    #[test]
    fn test_growth_and_collapse_thresholds() {
        assert_eq!(verdict(&[10, 10, 25]), Narrative::GoldenAge);
        assert_eq!(verdict(&[10, 10, 4]), Narrative::GreatFilter);
        // Exactly 1.5x and 0.5x are not enough
        assert_eq!(
            verdict(&[100, 110, 120, 130, 140, 150]),
            Narrative::SteadyState
        );
        assert_eq!(verdict(&[100, 90, 80, 70, 60, 50]), Narrative::SteadyState);
    }

    #[test]
    fn test_zero_start_growth() {
        assert_eq!(verdict(&[0, 0, 5]), Narrative::GoldenAge);
    }

    #[test]
    fn test_static_equilibrium() {
        assert_eq!(verdict(&[5, 5, 5, 5]), Narrative::StaticEquilibrium);
    }

    #[test]
    fn test_chaotic_fluctuations() {
        // Returns to start, but diffs [0, 40, -80, 40] have std ~57
        assert_eq!(verdict(&[100, 140, 60, 100]), Narrative::ChaoticFluctuations);
    }

    #[test]
    fn test_steady_state() {
        assert_eq!(verdict(&[100, 101, 102]), Narrative::SteadyState);
    }

    #[test]
    fn test_analysis_text_and_metrics() {
        let result = analyze(&history(&[10, 30, 25]));
        assert_eq!(result.title, "Golden Age of Growth");
        assert!(result.description.contains("humble 10"));
        assert!(result.description.contains("exploded to 25"));

        let metrics = result.metrics.unwrap();
        assert_eq!(metrics.peak_population, 30);
        assert_eq!(metrics.final_population, 25);
        assert_eq!(metrics.generations, 3);
        // diffs [0, 20, -5]: mean 5, sample variance 350 / 2
        assert_eq!(metrics.volatility_index, "13.23");
    }

    #[test]
    fn test_extinction_description_mentions_peak() {
        let result = analyze(&history(&[4, 9, 0]));
        assert_eq!(result.title, "Total Extinction");
        assert!(result.description.contains("3 generations"));
        assert!(result.description.contains("peak of 9"));
    }
}
