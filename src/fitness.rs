//! Fitness scoring
//!
//! This module computes trend, consistency, and a 0-100 fitness score from a
//! step and heart rate series, plus per-day recommendations keyed off the
//! activity level classification.

use crate::stats;
use crate::types::{
    ActivityLevel, DailyFitnessRecommendation, FitnessReport, FitnessTrends, GoalProgress,
    GoalStatus, HeartRateTrend, NormalizedRecord, PerformanceMetrics, StepsTrend,
};
use chrono::Utc;

/// Fixed activity goals applied across all users
#[derive(Debug, Clone, Copy)]
pub struct FitnessGoals {
    /// Daily step goal
    pub steps_daily: u32,
}

impl Default for FitnessGoals {
    fn default() -> Self {
        Self { steps_daily: 10_000 }
    }
}

/// Fitness analyzer. Stateless beyond its fixed goal thresholds set at
/// construction; safe to share across users.
#[derive(Debug, Clone, Default)]
pub struct FitnessAnalyzer {
    goals: FitnessGoals,
}

impl FitnessAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goals(goals: FitnessGoals) -> Self {
        Self { goals }
    }

    /// Analyze an ordered sequence of normalized records.
    ///
    /// Never fails: an empty series yields an error-shaped report instead.
    pub fn analyze(&self, records: &[NormalizedRecord]) -> FitnessReport {
        if records.is_empty() {
            log::warn!("fitness analysis called with no records");
            return FitnessReport::error("No records to analyze");
        }

        let steps: Vec<f64> = records.iter().map(|r| r.record.steps as f64).collect();
        let heart_rates: Vec<f64> = records.iter().map(|r| r.record.heart_rate as f64).collect();

        let recommendations = records
            .iter()
            .map(|r| self.daily_recommendation(r))
            .collect();

        FitnessReport {
            generated_at: Utc::now(),
            trends: Some(calculate_trends(&steps, &heart_rates)),
            performance_metrics: Some(self.performance_metrics(records, &steps, &heart_rates)),
            recommendations,
            insights: health_insights(&steps, &heart_rates),
            error: None,
        }
    }

    fn performance_metrics(
        &self,
        records: &[NormalizedRecord],
        steps: &[f64],
        heart_rates: &[f64],
    ) -> PerformanceMetrics {
        PerformanceMetrics {
            average_steps: stats::mean(steps),
            max_steps: records.iter().map(|r| r.record.steps).max().unwrap_or(0),
            min_steps: records.iter().map(|r| r.record.steps).min().unwrap_or(0),
            average_heart_rate: stats::mean(heart_rates),
            fitness_score: self.fitness_score(steps, heart_rates),
            goal_achievement_rate: self.goal_achievement_rate(records),
        }
    }

    /// Composite fitness score: mean of a step component and a heart rate
    /// component, each bounded to [0, 100].
    fn fitness_score(&self, steps: &[f64], heart_rates: &[f64]) -> f64 {
        let steps_score = (stats::mean(steps) / self.goals.steps_daily as f64 * 100.0).min(100.0);
        let hr_score = (100.0 - (stats::mean(heart_rates) - 60.0) * 2.0).clamp(0.0, 100.0);
        (steps_score + hr_score) / 2.0
    }

    /// Percentage of days the step goal was met
    fn goal_achievement_rate(&self, records: &[NormalizedRecord]) -> f64 {
        let achieved = records
            .iter()
            .filter(|r| r.record.steps >= self.goals.steps_daily)
            .count();
        achieved as f64 / records.len() as f64 * 100.0
    }

    fn daily_recommendation(&self, record: &NormalizedRecord) -> DailyFitnessRecommendation {
        let recommendation = match record.activity_level {
            ActivityLevel::Low => {
                "Consider taking a 30-minute walk or doing light exercises to boost your activity level."
            }
            ActivityLevel::Moderate => {
                "Good activity level! Try to add some strength training or increase your walking pace."
            }
            ActivityLevel::High => {
                "Excellent activity level! Consider adding variety with different types of exercises."
            }
        };

        let steps = record.record.steps;
        let steps_progress =
            (steps as f64 / self.goals.steps_daily as f64 * 100.0).min(100.0);
        let goal_status = if steps >= self.goals.steps_daily {
            GoalStatus::Achieved
        } else {
            GoalStatus::InProgress
        };

        DailyFitnessRecommendation {
            date: record.record.date,
            steps,
            heart_rate: record.record.heart_rate,
            activity_level: record.activity_level,
            recommendation: recommendation.to_string(),
            goal_progress: GoalProgress {
                steps_progress,
                goal_status,
            },
        }
    }
}

/// Trend fields over the step and heart rate series.
///
/// The steps trend is a two-point comparison of first and last day, not a
/// regression.
fn calculate_trends(steps: &[f64], heart_rates: &[f64]) -> FitnessTrends {
    let steps_trend = if steps.len() > 1 && steps[steps.len() - 1] > steps[0] {
        StepsTrend::Increasing
    } else {
        StepsTrend::Decreasing
    };

    let heart_rate_trend = if stats::std_dev(heart_rates) < 5.0 {
        HeartRateTrend::Stable
    } else {
        HeartRateTrend::Variable
    };

    FitnessTrends {
        steps_trend,
        heart_rate_trend,
        consistency_score: stats::consistency(steps),
        improvement_rate: improvement_rate(steps),
    }
}

/// Relative change from the first to the last day
fn improvement_rate(steps: &[f64]) -> f64 {
    if steps.len() < 2 || steps[0] <= 0.0 {
        return 0.0;
    }
    (steps[steps.len() - 1] - steps[0]) / steps[0]
}

fn health_insights(steps: &[f64], heart_rates: &[f64]) -> Vec<String> {
    let mut insights = Vec::new();

    let avg_steps = stats::mean(steps);
    if avg_steps < 5000.0 {
        insights.push(
            "Your daily step count is significantly below recommended levels. Consider taking short walks throughout the day."
                .to_string(),
        );
    } else if avg_steps < 8000.0 {
        insights.push(
            "You're making good progress on daily steps. Try to reach 10,000 steps for optimal health benefits."
                .to_string(),
        );
    } else {
        insights.push(
            "Excellent activity level! Your step count indicates good cardiovascular health."
                .to_string(),
        );
    }

    let avg_hr = stats::mean(heart_rates);
    if avg_hr > 80.0 {
        insights.push(
            "Your resting heart rate is elevated. Consider stress management techniques and regular exercise."
                .to_string(),
        );
    } else if avg_hr < 60.0 {
        insights.push(
            "Your heart rate indicates good cardiovascular fitness. Keep up the excellent work!"
                .to_string(),
        );
    }

    if stats::consistency(steps) < 0.7 {
        insights.push(
            "Your activity levels vary significantly. Try to maintain more consistent daily exercise habits."
                .to_string(),
        );
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::Normalizer;
    use crate::types::{RawHealthData, RawMetric};

    fn make_records(days: &[(u32, u32, f64)]) -> Vec<NormalizedRecord> {
        let metrics = days
            .iter()
            .enumerate()
            .map(|(i, &(steps, heart_rate, sleep_hours))| RawMetric {
                date: Some(format!("2024-11-{:02}", i + 1)),
                steps: Some(steps),
                heart_rate: Some(heart_rate),
                sleep_hours: Some(sleep_hours),
                hrv: None,
            })
            .collect();
        Normalizer::normalize(&RawHealthData {
            user_id: "12345".to_string(),
            metrics,
        })
        .unwrap()
    }

    #[test]
    fn test_fitness_score_scenario() {
        // mean steps = 8666.7 -> steps_score ~ 86.7
        // mean hr = 72.3 -> hr_score ~ 75.4
        let records = make_records(&[(8000, 70, 7.5), (9500, 72, 7.2), (8500, 75, 6.5)]);
        let report = FitnessAnalyzer::new().analyze(&records);

        let metrics = report.performance_metrics.unwrap();
        assert!((metrics.average_steps - 8666.67).abs() < 1.0);
        assert!((metrics.fitness_score - 81.0).abs() < 0.5);
        assert_eq!(metrics.max_steps, 9500);
        assert_eq!(metrics.min_steps, 8000);
        assert_eq!(metrics.goal_achievement_rate, 0.0);
    }

    #[test]
    fn test_score_bounds_hold() {
        // Very low heart rate would push the hr component above 100 unclamped
        let low_hr = make_records(&[(20_000, 40, 8.0), (22_000, 42, 8.0)]);
        let report = FitnessAnalyzer::new().analyze(&low_hr);
        let score = report.performance_metrics.unwrap().fitness_score;
        assert!((0.0..=100.0).contains(&score));

        // Very high heart rate bottoms out the hr component at 0
        let high_hr = make_records(&[(500, 160, 4.0), (700, 170, 4.0)]);
        let report = FitnessAnalyzer::new().analyze(&high_hr);
        let score = report.performance_metrics.unwrap().fitness_score;
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_steps_trend_two_point_comparison() {
        let up = make_records(&[(5000, 70, 7.0), (3000, 70, 7.0), (8000, 70, 7.0)]);
        let report = FitnessAnalyzer::new().analyze(&up);
        assert_eq!(report.trends.unwrap().steps_trend, StepsTrend::Increasing);

        let down = make_records(&[(8000, 70, 7.0), (9000, 70, 7.0), (7000, 70, 7.0)]);
        let report = FitnessAnalyzer::new().analyze(&down);
        assert_eq!(report.trends.unwrap().steps_trend, StepsTrend::Decreasing);

        // Single record has no direction to compare
        let single = make_records(&[(8000, 70, 7.0)]);
        let report = FitnessAnalyzer::new().analyze(&single);
        let trends = report.trends.unwrap();
        assert_eq!(trends.steps_trend, StepsTrend::Decreasing);
        assert_eq!(trends.consistency_score, 1.0);
        assert_eq!(trends.improvement_rate, 0.0);
    }

    #[test]
    fn test_heart_rate_trend_threshold() {
        let stable = make_records(&[(8000, 70, 7.0), (8000, 72, 7.0), (8000, 71, 7.0)]);
        let report = FitnessAnalyzer::new().analyze(&stable);
        assert_eq!(
            report.trends.unwrap().heart_rate_trend,
            HeartRateTrend::Stable
        );

        let variable = make_records(&[(8000, 60, 7.0), (8000, 90, 7.0), (8000, 65, 7.0)]);
        let report = FitnessAnalyzer::new().analyze(&variable);
        assert_eq!(
            report.trends.unwrap().heart_rate_trend,
            HeartRateTrend::Variable
        );
    }

    #[test]
    fn test_goal_achievement_and_progress() {
        let records = make_records(&[(10_000, 70, 7.0), (12_000, 70, 7.0), (6_000, 70, 7.0)]);
        let report = FitnessAnalyzer::new().analyze(&records);

        let metrics = report.performance_metrics.as_ref().unwrap();
        assert!((metrics.goal_achievement_rate - 66.67).abs() < 0.1);

        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(
            report.recommendations[0].goal_progress.goal_status,
            GoalStatus::Achieved
        );
        assert_eq!(report.recommendations[0].goal_progress.steps_progress, 100.0);
        assert_eq!(
            report.recommendations[2].goal_progress.goal_status,
            GoalStatus::InProgress
        );
        assert!((report.recommendations[2].goal_progress.steps_progress - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_recommendation_text_tracks_activity_level() {
        let records = make_records(&[(2000, 70, 7.0), (7000, 70, 7.0), (11_000, 70, 7.0)]);
        let report = FitnessAnalyzer::new().analyze(&records);

        assert!(report.recommendations[0].recommendation.contains("30-minute walk"));
        assert!(report.recommendations[1].recommendation.contains("strength training"));
        assert!(report.recommendations[2].recommendation.contains("adding variety"));
    }

    #[test]
    fn test_empty_records_yield_error_report() {
        let report = FitnessAnalyzer::new().analyze(&[]);
        assert!(report.is_error());
        assert!(report.performance_metrics.is_none());
        assert!(report.trends.is_none());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.insights.len(), 1);
    }
}
