//! Sleep scoring
//!
//! This module computes duration and quality distributions, consistency,
//! sleep debt, and a 0-100 sleep score from the normalized daily records,
//! plus per-day recommendations with priorities.

use crate::stats;
use crate::types::{
    NormalizedRecord, Priority, QualityDistribution, QualityTrend, SleepDay, SleepPatterns,
    SleepQuality, SleepQualityMetrics, SleepRecommendation, SleepReport,
};
use chrono::Utc;

/// Fixed sleep goals applied across all users
#[derive(Debug, Clone, Copy)]
pub struct SleepGoals {
    /// Target nightly duration (hours)
    pub optimal_duration: f64,
    /// Below this the day counts as insufficient (hours)
    pub minimum_duration: f64,
    /// Above this the day counts as excessive (hours)
    pub maximum_duration: f64,
}

impl Default for SleepGoals {
    fn default() -> Self {
        Self {
            optimal_duration: 7.5,
            minimum_duration: 6.0,
            maximum_duration: 9.0,
        }
    }
}

/// Per-day quality weight used by the recovery index
fn quality_weight(quality: SleepQuality) -> f64 {
    match quality {
        SleepQuality::Excellent => 1.0,
        SleepQuality::Good => 0.8,
        SleepQuality::Fair => 0.6,
        SleepQuality::Poor => 0.4,
    }
}

/// Per-day quality points used by the overall quality score
fn quality_points(quality: SleepQuality) -> f64 {
    match quality {
        SleepQuality::Excellent => 100.0,
        SleepQuality::Good => 75.0,
        SleepQuality::Fair => 50.0,
        SleepQuality::Poor => 25.0,
    }
}

/// Sleep analyzer. Stateless beyond its fixed goals set at construction.
#[derive(Debug, Clone, Default)]
pub struct SleepAnalyzer {
    goals: SleepGoals,
}

impl SleepAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goals(goals: SleepGoals) -> Self {
        Self { goals }
    }

    /// Analyze an ordered sequence of normalized records.
    ///
    /// Never fails: an empty series yields an error-shaped report instead.
    pub fn analyze(&self, records: &[NormalizedRecord]) -> SleepReport {
        if records.is_empty() {
            log::warn!("sleep analysis called with no records");
            return SleepReport::error("No records to analyze");
        }

        let days: Vec<SleepDay> = records
            .iter()
            .map(|r| SleepDay {
                date: r.record.date,
                sleep_hours: r.record.sleep_hours,
                quality: r.sleep_quality,
                adequacy: r.sleep_adequacy,
            })
            .collect();

        let durations: Vec<f64> = days.iter().map(|d| d.sleep_hours).collect();
        let qualities: Vec<SleepQuality> = days.iter().map(|d| d.quality).collect();

        let recommendations = days.iter().map(|d| self.daily_recommendation(d)).collect();

        SleepReport {
            generated_at: Utc::now(),
            sleep_patterns: Some(self.sleep_patterns(&durations, &qualities)),
            sleep_quality_metrics: Some(self.quality_metrics(&durations, &qualities)),
            recommendations,
            insights: self.sleep_insights(&days, &durations),
            days,
            error: None,
        }
    }

    fn sleep_patterns(&self, durations: &[f64], qualities: &[SleepQuality]) -> SleepPatterns {
        SleepPatterns {
            average_duration: stats::mean(durations),
            duration_consistency: stats::consistency(durations),
            quality_trend: quality_trend(qualities),
            sleep_efficiency: self.sleep_efficiency(durations),
            optimal_sleep_days: durations.iter().filter(|&&d| (7.0..=9.0).contains(&d)).count(),
            insufficient_sleep_days: durations
                .iter()
                .filter(|&&d| d < self.goals.minimum_duration)
                .count(),
            excessive_sleep_days: durations
                .iter()
                .filter(|&&d| d > self.goals.maximum_duration)
                .count(),
        }
    }

    fn quality_metrics(&self, durations: &[f64], qualities: &[SleepQuality]) -> SleepQualityMetrics {
        let mut distribution = QualityDistribution::default();
        for quality in qualities {
            match quality {
                SleepQuality::Excellent => distribution.excellent += 1,
                SleepQuality::Good => distribution.good += 1,
                SleepQuality::Fair => distribution.fair += 1,
                SleepQuality::Poor => distribution.poor += 1,
            }
        }

        SleepQualityMetrics {
            overall_quality_score: self.overall_quality_score(durations, qualities),
            quality_distribution: distribution,
            sleep_score: self.sleep_score(durations),
            recovery_index: self.recovery_index(durations, qualities),
            sleep_debt: self.sleep_debt(durations),
        }
    }

    /// Mean duration as a percentage of the optimal duration, capped at 100
    fn sleep_efficiency(&self, durations: &[f64]) -> f64 {
        (stats::mean(durations) / self.goals.optimal_duration * 100.0).min(100.0)
    }

    /// Mean of a duration component and the average per-day quality points
    fn overall_quality_score(&self, durations: &[f64], qualities: &[SleepQuality]) -> f64 {
        let duration_score = self.sleep_efficiency(durations);
        let points: Vec<f64> = qualities.iter().map(|&q| quality_points(q)).collect();
        (duration_score + stats::mean(&points)) / 2.0
    }

    /// Sleep score: a three-tier duration component (0-70) plus a consistency
    /// component (0-30).
    fn sleep_score(&self, durations: &[f64]) -> f64 {
        let avg = stats::mean(durations);

        let duration_score = if (7.0..=9.0).contains(&avg) {
            70.0
        } else if (6.0..7.0).contains(&avg) || (avg > 9.0 && avg <= 10.0) {
            50.0
        } else {
            30.0
        };

        duration_score + stats::consistency(durations) * 30.0
    }

    /// Recovery index (0-100) from a duration factor and the mean of per-day
    /// quality weights.
    fn recovery_index(&self, durations: &[f64], qualities: &[SleepQuality]) -> f64 {
        let duration_factor = (stats::mean(durations) / self.goals.optimal_duration).min(1.0);
        let weights: Vec<f64> = qualities.iter().map(|&q| quality_weight(q)).collect();
        (duration_factor + stats::mean(&weights)) / 2.0 * 100.0
    }

    /// Cumulative shortfall vs the optimal duration; per-day debt is never
    /// negative.
    fn sleep_debt(&self, durations: &[f64]) -> f64 {
        durations
            .iter()
            .map(|d| (self.goals.optimal_duration - d).max(0.0))
            .sum()
    }

    fn daily_recommendation(&self, day: &SleepDay) -> SleepRecommendation {
        let (recommendation, priority) = if day.sleep_hours < self.goals.minimum_duration {
            (
                "Your sleep duration is insufficient. Aim for 7-9 hours nightly for optimal health and recovery.",
                Priority::High,
            )
        } else if day.sleep_hours > self.goals.maximum_duration {
            (
                "You're sleeping more than recommended. Consider if you're getting quality sleep or if there are underlying health issues.",
                Priority::Medium,
            )
        } else if day.quality == SleepQuality::Poor {
            (
                "Focus on sleep quality. Consider sleep hygiene practices like consistent bedtime and screen-free hour before bed.",
                Priority::High,
            )
        } else if day.quality == SleepQuality::Fair {
            (
                "Your sleep is adequate but could be improved. Try maintaining a consistent sleep schedule.",
                Priority::Medium,
            )
        } else {
            (
                "Excellent sleep habits! Continue maintaining your current sleep routine.",
                Priority::Low,
            )
        };

        SleepRecommendation {
            date: day.date,
            recommendation: recommendation.to_string(),
            priority,
            sleep_hours: day.sleep_hours,
            quality: day.quality,
        }
    }

    fn sleep_insights(&self, days: &[SleepDay], durations: &[f64]) -> Vec<String> {
        let mut insights = Vec::new();
        let avg = stats::mean(durations);

        if avg < 6.0 {
            insights.push(
                "Your average sleep duration is critically low. Chronic sleep deprivation can impact cognitive function and physical health."
                    .to_string(),
            );
        } else if avg < 7.0 {
            insights.push(
                "You're getting less sleep than recommended. Even small increases in sleep duration can improve your daily performance."
                    .to_string(),
            );
        } else if avg > 9.0 {
            insights.push(
                "You're sleeping more than the recommended amount. This might indicate poor sleep quality or underlying health conditions."
                    .to_string(),
            );
        } else {
            insights.push(
                "Your sleep duration is within the healthy range. Focus on maintaining consistency in your sleep schedule."
                    .to_string(),
            );
        }

        if stats::consistency(durations) < 0.7 {
            insights.push(
                "Your sleep schedule is inconsistent. Try to go to bed and wake up at the same time every day, even on weekends."
                    .to_string(),
            );
        } else {
            insights.push(
                "Good sleep consistency! Maintaining a regular sleep schedule helps regulate your body's internal clock."
                    .to_string(),
            );
        }

        let low_quality_days = days
            .iter()
            .filter(|d| matches!(d.quality, SleepQuality::Poor | SleepQuality::Fair))
            .count();
        if low_quality_days as f64 / days.len() as f64 > 0.5 {
            insights.push(
                "Your sleep quality needs improvement. Consider sleep hygiene practices like limiting caffeine, creating a dark bedroom, and avoiding screens before bed."
                    .to_string(),
            );
        }

        insights
    }
}

/// Quality trend from the first vs last day's quality rank
fn quality_trend(qualities: &[SleepQuality]) -> QualityTrend {
    if qualities.len() < 2 {
        return QualityTrend::Stable;
    }
    let first = qualities[0].rank();
    let last = qualities[qualities.len() - 1].rank();
    if last > first {
        QualityTrend::Improving
    } else if last < first {
        QualityTrend::Declining
    } else {
        QualityTrend::Stable
    }
}
