//! End-to-end analysis pipeline
//!
//! Wires the stages together: raw payload -> normalizer -> the three domain
//! analyzers -> insight aggregation. The normalizer is the only stage that can
//! fail; everything downstream degrades to error-shaped reports instead.

use crate::aggregator::InsightAggregator;
use crate::error::AnalysisError;
use crate::fitness::{FitnessAnalyzer, FitnessGoals};
use crate::normalizer::Normalizer;
use crate::sentiment::SentimentAnalyzer;
use crate::sleep::{SleepAnalyzer, SleepGoals};
use crate::types::{
    AggregatedInsight, FitnessReport, JournalEntry, RawHealthData, SentimentReport, SleepReport,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete analysis output for one user over one reporting window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessAnalysis {
    pub user_id: String,
    pub generated_at: DateTime<Utc>,
    pub fitness: FitnessReport,
    pub sleep: SleepReport,
    /// Absent when no journal entries were supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentReport>,
    pub aggregated: AggregatedInsight,
}

/// Stateful pipeline holding the configured analyzers
#[derive(Debug, Clone, Default)]
pub struct WellnessEngine {
    fitness: FitnessAnalyzer,
    sleep: SleepAnalyzer,
    sentiment: SentimentAnalyzer,
    aggregator: InsightAggregator,
}

impl WellnessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goals(fitness_goals: FitnessGoals, sleep_goals: SleepGoals) -> Self {
        Self {
            fitness: FitnessAnalyzer::with_goals(fitness_goals),
            sleep: SleepAnalyzer::with_goals(sleep_goals),
            sentiment: SentimentAnalyzer::new(),
            aggregator: InsightAggregator::new(),
        }
    }

    /// Run the full pipeline.
    ///
    /// Fails only on structurally invalid health data; an empty journal is
    /// valid input and yields an analysis without a sentiment report, with the
    /// mood component omitted from the wellness score.
    pub fn run(
        &self,
        raw: &RawHealthData,
        journal: &[JournalEntry],
    ) -> Result<WellnessAnalysis, AnalysisError> {
        let records = Normalizer::normalize(raw)?;
        log::info!(
            "analyzing {} day(s) of metrics and {} journal entr(ies) for user {}",
            records.len(),
            journal.len(),
            raw.user_id
        );

        let fitness = self.fitness.analyze(&records);
        let sleep = self.sleep.analyze(&records);
        let sentiment = if journal.is_empty() {
            None
        } else {
            Some(self.sentiment.analyze(journal))
        };

        let aggregated = self
            .aggregator
            .aggregate(Some(&fitness), Some(&sleep), sentiment.as_ref());

        Ok(WellnessAnalysis {
            user_id: raw.user_id.clone(),
            generated_at: Utc::now(),
            fitness,
            sleep,
            sentiment,
            aggregated,
        })
    }
}

/// One-shot convenience wrapper with default goals
pub fn analyze_wellness(
    raw: &RawHealthData,
    journal: &[JournalEntry],
) -> Result<WellnessAnalysis, AnalysisError> {
    WellnessEngine::new().run(raw, journal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawMetric;
    use chrono::NaiveDate;

    fn raw_data() -> RawHealthData {
        RawHealthData {
            user_id: "12345".to_string(),
            metrics: vec![
                RawMetric {
                    date: Some("2024-11-20".to_string()),
                    steps: Some(8500),
                    heart_rate: Some(72),
                    sleep_hours: Some(7.5),
                    hrv: Some(45),
                },
                RawMetric {
                    date: Some("2024-11-21".to_string()),
                    steps: Some(10_200),
                    heart_rate: Some(68),
                    sleep_hours: Some(8.0),
                    hrv: Some(52),
                },
                RawMetric {
                    date: Some("2024-11-22".to_string()),
                    steps: Some(4300),
                    heart_rate: Some(75),
                    sleep_hours: Some(6.2),
                    hrv: None,
                },
            ],
        }
    }

    fn journal() -> Vec<JournalEntry> {
        vec![
            JournalEntry {
                date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
                text: "Felt really anxious about the presentation, but the walk helped."
                    .to_string(),
            },
            JournalEntry {
                date: NaiveDate::from_ymd_opt(2024, 11, 21).unwrap(),
                text: "Great day! Grateful for good sleep and a productive morning.".to_string(),
            },
        ]
    }

    #[test]
    fn test_full_pipeline() {
        let analysis = analyze_wellness(&raw_data(), &journal()).unwrap();

        assert_eq!(analysis.user_id, "12345");
        assert!(!analysis.fitness.is_error());
        assert!(!analysis.sleep.is_error());
        assert!(!analysis.aggregated.is_error());

        let sentiment = analysis.sentiment.as_ref().unwrap();
        assert_eq!(sentiment.results.len(), 2);

        assert!((0.0..=100.0).contains(&analysis.aggregated.wellness_score));
        assert_eq!(analysis.aggregated.action_plan.len(), 3);
        assert_eq!(analysis.fitness.recommendations.len(), 3);
        assert_eq!(analysis.sleep.days.len(), 3);
    }

    #[test]
    fn test_empty_journal_skips_sentiment() {
        let analysis = analyze_wellness(&raw_data(), &[]).unwrap();

        assert!(analysis.sentiment.is_none());
        assert!(!analysis.aggregated.is_error());

        // Mood is omitted from the weighted sum rather than imputed
        let f = analysis
            .fitness
            .performance_metrics
            .as_ref()
            .unwrap()
            .fitness_score;
        let s = analysis
            .sleep
            .sleep_quality_metrics
            .as_ref()
            .unwrap()
            .sleep_score;
        let expected = f * 0.4 + s * 0.35;
        assert!((analysis.aggregated.wellness_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_health_data_fails_the_run() {
        let raw = RawHealthData {
            user_id: String::new(),
            metrics: vec![RawMetric::default()],
        };
        assert!(matches!(
            analyze_wellness(&raw, &[]),
            Err(AnalysisError::MissingField("user_id"))
        ));

        let raw = RawHealthData {
            user_id: "12345".to_string(),
            metrics: Vec::new(),
        };
        assert!(matches!(
            analyze_wellness(&raw, &[]),
            Err(AnalysisError::EmptyInput("metrics"))
        ));
    }

    #[test]
    fn test_analysis_serializes_to_json() {
        let analysis = analyze_wellness(&raw_data(), &journal()).unwrap();
        let json = serde_json::to_value(&analysis).unwrap();

        assert!(json["fitness"]["performance_metrics"]["fitness_score"].is_f64());
        assert!(json["sleep"]["sleep_quality_metrics"]["sleep_debt"].is_f64());
        assert!(json["aggregated"]["wellness_score"].is_f64());
        assert!(json["aggregated"]["analysis_id"].is_string());
    }
}
