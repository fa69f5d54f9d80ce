//! Insight aggregation
//!
//! This module combines the fitness, sleep, and sentiment reports into a
//! single wellness score with cross-domain correlations, priority-ranked
//! recommendations, and a fixed three-phase action plan.
//!
//! Correlation strengths and holistic insights come from fixed decision
//! tables over paired thresholds. Report consumers are calibrated to the
//! exact category strings, so the tables must not be swapped for statistical
//! correlation coefficients.

use crate::types::{
    ActionPhase, AggregatedInsight, Correlation, CorrelationStrength, FitnessReport, OverallTrend,
    Priority, PriorityRecommendation, QualityTrend, RecommendationCategory, Sentiment,
    SentimentReport, SentimentTrend, SleepReport, TrendAnalysis,
};
use chrono::Utc;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Fixed weights of the wellness score's convex combination
const FITNESS_WEIGHT: f64 = 0.4;
const SLEEP_WEIGHT: f64 = 0.35;
const MOOD_WEIGHT: f64 = 0.25;

/// Insight aggregator. Stateless; safe to share across users.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightAggregator;

impl InsightAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate the three domain reports into one wellness insight.
    ///
    /// Never fails. A `None` component is simply omitted from the weighted
    /// sum and every rule that needs it; an error-shaped component (the
    /// typed analog of a report missing required keys) makes the whole
    /// result error-shaped, with zeroed score and empty sections.
    pub fn aggregate(
        &self,
        fitness: Option<&FitnessReport>,
        sleep: Option<&SleepReport>,
        sentiment: Option<&SentimentReport>,
    ) -> AggregatedInsight {
        if fitness.is_some_and(|r| r.is_error())
            || sleep.is_some_and(|r| r.is_error())
            || sentiment.is_some_and(|r| r.is_error())
        {
            log::warn!("aggregation received an error-shaped component report");
            return AggregatedInsight::error("Insights aggregation failed");
        }

        AggregatedInsight {
            analysis_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            wellness_score: wellness_score(fitness, sleep, sentiment),
            holistic_insights: holistic_insights(fitness, sleep, sentiment),
            correlation_analysis: analyze_correlations(fitness, sleep, sentiment),
            priority_recommendations: priority_recommendations(fitness, sleep, sentiment),
            trend_analysis: Some(analyze_trends(fitness, sleep, sentiment)),
            action_plan: action_plan(),
            error: None,
        }
    }
}

/// Composite wellness score: fixed convex combination of whichever component
/// scores are present. Missing components are omitted, never imputed, so the
/// score is strictly less than the full-range maximum when any are absent.
fn wellness_score(
    fitness: Option<&FitnessReport>,
    sleep: Option<&SleepReport>,
    sentiment: Option<&SentimentReport>,
) -> f64 {
    let mut score = 0.0;

    if let Some(metrics) = fitness.and_then(|r| r.performance_metrics.as_ref()) {
        score += metrics.fitness_score * FITNESS_WEIGHT;
    }
    if let Some(metrics) = sleep.and_then(|r| r.sleep_quality_metrics.as_ref()) {
        score += metrics.sleep_score * SLEEP_WEIGHT;
    }
    if let Some(summary) = sentiment.and_then(|r| r.summary.as_ref()) {
        score += summary.positive_percentage * MOOD_WEIGHT;
    }

    score
}

fn holistic_insights(
    fitness: Option<&FitnessReport>,
    sleep: Option<&SleepReport>,
    sentiment: Option<&SentimentReport>,
) -> Vec<String> {
    let mut insights = Vec::new();

    let performance = fitness.and_then(|r| r.performance_metrics.as_ref());
    let patterns = sleep.and_then(|r| r.sleep_patterns.as_ref());
    let quality_metrics = sleep.and_then(|r| r.sleep_quality_metrics.as_ref());
    let summary = sentiment.and_then(|r| r.summary.as_ref());

    // Activity vs sleep duration
    if let (Some(perf), Some(pat)) = (performance, patterns) {
        let avg_steps = perf.average_steps;
        let avg_sleep = pat.average_duration;

        if avg_steps > 8000.0 && avg_sleep >= 7.0 {
            insights.push(
                "Excellent balance between physical activity and sleep! Your lifestyle supports optimal health."
                    .to_string(),
            );
        } else if avg_steps < 5000.0 && avg_sleep < 6.0 {
            insights.push(
                "Both your activity level and sleep duration need attention. Consider a gradual approach to improve both areas."
                    .to_string(),
            );
        } else if avg_steps > 8000.0 && avg_sleep < 6.0 {
            insights.push(
                "High activity with insufficient sleep may lead to burnout. Prioritize sleep for better recovery."
                    .to_string(),
            );
        }
    }

    // Mood vs physical health
    if let (Some(sum), Some(perf)) = (summary, performance) {
        if sum.overall_sentiment == Sentiment::Positive && perf.fitness_score > 70.0 {
            insights.push(
                "Great synergy between your mental and physical well-being! This positive cycle supports overall health."
                    .to_string(),
            );
        } else if sum.overall_sentiment == Sentiment::Negative && perf.fitness_score < 50.0 {
            insights.push(
                "Your mood and physical activity both need attention. Consider starting with light exercise to boost both mood and fitness."
                    .to_string(),
            );
        }
    }

    // Sleep quality vs mood
    if let (Some(quality), Some(sum)) = (quality_metrics, summary) {
        if quality.sleep_score > 80.0 && sum.overall_sentiment == Sentiment::Positive {
            insights.push(
                "Quality sleep is supporting your positive mood. Maintain your current sleep routine."
                    .to_string(),
            );
        } else if quality.sleep_score < 50.0 && sum.overall_sentiment == Sentiment::Negative {
            insights.push(
                "Poor sleep quality may be contributing to low mood. Focus on sleep hygiene to improve both sleep and emotional well-being."
                    .to_string(),
            );
        }
    }

    insights
}

fn analyze_correlations(
    fitness: Option<&FitnessReport>,
    sleep: Option<&SleepReport>,
    sentiment: Option<&SentimentReport>,
) -> BTreeMap<String, Correlation> {
    let mut correlations = BTreeMap::new();

    let performance = fitness.and_then(|r| r.performance_metrics.as_ref());
    let quality_metrics = sleep.and_then(|r| r.sleep_quality_metrics.as_ref());
    let summary = sentiment.and_then(|r| r.summary.as_ref());

    if let (Some(perf), Some(quality)) = (performance, quality_metrics) {
        let correlation = if perf.fitness_score > 70.0 && quality.sleep_score > 70.0 {
            Correlation {
                strength: CorrelationStrength::StrongPositive,
                description: "High fitness levels correlate with good sleep quality".to_string(),
            }
        } else if perf.fitness_score < 50.0 && quality.sleep_score < 50.0 {
            Correlation {
                strength: CorrelationStrength::StrongNegative,
                description: "Low fitness and poor sleep may be interconnected".to_string(),
            }
        } else {
            Correlation {
                strength: CorrelationStrength::Moderate,
                description: "Some correlation between fitness and sleep patterns".to_string(),
            }
        };
        correlations.insert("fitness_sleep".to_string(), correlation);
    }

    if let (Some(sum), Some(perf)) = (summary, performance) {
        if sum.positive_percentage > 60.0 && perf.fitness_score > 70.0 {
            correlations.insert(
                "mood_fitness".to_string(),
                Correlation {
                    strength: CorrelationStrength::StrongPositive,
                    description: "Positive mood correlates with high fitness levels".to_string(),
                },
            );
        } else if sum.positive_percentage < 40.0 && perf.fitness_score < 50.0 {
            correlations.insert(
                "mood_fitness".to_string(),
                Correlation {
                    strength: CorrelationStrength::StrongNegative,
                    description: "Low mood and low fitness may be related".to_string(),
                },
            );
        }
    }

    correlations
}

/// Priority recommendations, checked in a fixed order. Every matching
/// condition appends; there is no early exit, and each condition is
/// evaluated exactly once.
fn priority_recommendations(
    fitness: Option<&FitnessReport>,
    sleep: Option<&SleepReport>,
    sentiment: Option<&SentimentReport>,
) -> Vec<PriorityRecommendation> {
    let mut recommendations = Vec::new();

    let performance = fitness.and_then(|r| r.performance_metrics.as_ref());
    let patterns = sleep.and_then(|r| r.sleep_patterns.as_ref());
    let quality_metrics = sleep.and_then(|r| r.sleep_quality_metrics.as_ref());
    let summary = sentiment.and_then(|r| r.summary.as_ref());

    // High priority: critically short sleep
    if let Some(pat) = patterns {
        if pat.average_duration < 6.0 {
            recommendations.push(PriorityRecommendation {
                priority: Priority::High,
                category: RecommendationCategory::Sleep,
                recommendation: "Sleep duration is critically low. This should be your top priority for health improvement."
                    .to_string(),
                action: "Establish a consistent bedtime routine and aim for 7-9 hours nightly."
                    .to_string(),
            });
        }
    }

    // High priority: predominantly negative mood
    if let Some(sum) = summary {
        if sum.negative_percentage > 60.0 {
            recommendations.push(PriorityRecommendation {
                priority: Priority::High,
                category: RecommendationCategory::MentalHealth,
                recommendation:
                    "High frequency of negative emotions detected. Consider professional support."
                        .to_string(),
                action: "Reach out to a mental health professional or trusted support system."
                    .to_string(),
            });
        }
    }

    // Medium priority: fitness improvement
    if let Some(perf) = performance {
        if perf.fitness_score < 60.0 {
            recommendations.push(PriorityRecommendation {
                priority: Priority::Medium,
                category: RecommendationCategory::Fitness,
                recommendation: "Fitness levels could be improved for better health outcomes."
                    .to_string(),
                action: "Start with 30 minutes of moderate activity daily, gradually increasing intensity."
                    .to_string(),
            });
        }
    }

    // Low priority: maintenance
    if let (Some(perf), Some(quality)) = (performance, quality_metrics) {
        if perf.fitness_score > 80.0 && quality.sleep_score > 80.0 {
            recommendations.push(PriorityRecommendation {
                priority: Priority::Low,
                category: RecommendationCategory::Maintenance,
                recommendation: "Excellent health metrics! Focus on maintaining current habits."
                    .to_string(),
                action: "Continue current routine and consider adding variety to prevent plateau."
                    .to_string(),
            });
        }
    }

    recommendations
}

/// Cross-domain trend roll-up. Only quality and mood trends carry the
/// improving/declining vocabulary; the steps trend is recorded but does not
/// vote on the overall direction.
fn analyze_trends(
    fitness: Option<&FitnessReport>,
    sleep: Option<&SleepReport>,
    sentiment: Option<&SentimentReport>,
) -> TrendAnalysis {
    let fitness_trend = fitness
        .and_then(|r| r.trends.as_ref())
        .map(|t| t.steps_trend);
    let sleep_trend = sleep
        .and_then(|r| r.sleep_patterns.as_ref())
        .map(|p| p.quality_trend);
    let mood_trend = sentiment.and_then(|r| r.trends.as_ref()).map(|t| t.trend);

    let mut improving = 0;
    let mut declining = 0;

    match sleep_trend {
        Some(QualityTrend::Improving) => improving += 1,
        Some(QualityTrend::Declining) => declining += 1,
        _ => {}
    }
    match mood_trend {
        Some(SentimentTrend::Improving) => improving += 1,
        Some(SentimentTrend::Declining) => declining += 1,
        _ => {}
    }

    let overall = if improving > declining {
        OverallTrend::Improving
    } else if declining > improving {
        OverallTrend::Declining
    } else {
        OverallTrend::Stable
    };

    TrendAnalysis {
        fitness: fitness_trend,
        sleep: sleep_trend,
        mood: mood_trend,
        overall,
    }
}

/// The three-phase action plan. Static template by design: independent of
/// input data.
fn action_plan() -> Vec<ActionPhase> {
    vec![
        ActionPhase {
            week: "1".to_string(),
            focus: "Foundation".to_string(),
            actions: vec![
                "Establish consistent sleep schedule (same bedtime and wake time)".to_string(),
                "Start with 10-minute daily walks".to_string(),
                "Practice 5 minutes of daily gratitude journaling".to_string(),
            ],
        },
        ActionPhase {
            week: "2-4".to_string(),
            focus: "Building Habits".to_string(),
            actions: vec![
                "Increase daily steps to 7,000-8,000".to_string(),
                "Implement sleep hygiene practices".to_string(),
                "Add 10 minutes of mindfulness or meditation".to_string(),
            ],
        },
        ActionPhase {
            week: "2+ months".to_string(),
            focus: "Optimization".to_string(),
            actions: vec![
                "Aim for 10,000 daily steps".to_string(),
                "Maintain 7-9 hours of quality sleep".to_string(),
                "Develop stress management techniques".to_string(),
            ],
        },
    ]
}
