//! Core types for the Wellspring analysis pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: raw input, normalized daily records, the three domain reports, and
//! the aggregated insight output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Raw health payload as supplied by the ingestion layer.
///
/// Field-level validation happens at the normalization boundary, not here, so
/// that malformed payloads survive deserialization and are rejected with a
/// precise error instead of an opaque serde failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHealthData {
    /// Owner of the metrics
    pub user_id: String,
    /// One entry per day, any order
    #[serde(default)]
    pub metrics: Vec<RawMetric>,
}

/// One day's raw metrics before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMetric {
    /// Calendar date (YYYY-MM-DD)
    pub date: Option<String>,
    /// Total step count
    pub steps: Option<u32>,
    /// Average heart rate (bpm)
    pub heart_rate: Option<u32>,
    /// Sleep duration (hours)
    pub sleep_hours: Option<f64>,
    /// Heart rate variability (ms), optional in the source data
    pub hrv: Option<u32>,
}

/// Validated daily record. Immutable once created; one per user per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub steps: u32,
    pub heart_rate: u32,
    pub sleep_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv: Option<u32>,
}

/// Activity classification from daily steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
        }
    }
}

/// Heart rate zone classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeartRateZone {
    Resting,
    Normal,
    Elevated,
    High,
}

/// Sleep quality classification from duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SleepQuality {
    /// Ordinal rank used for trend comparison (poor=1 .. excellent=4)
    pub fn rank(&self) -> u8 {
        match self {
            SleepQuality::Poor => 1,
            SleepQuality::Fair => 2,
            SleepQuality::Good => 3,
            SleepQuality::Excellent => 4,
        }
    }
}

/// Sleep adequacy classification from duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepAdequacy {
    Insufficient,
    Borderline,
    Adequate,
}

/// Daily record with derived classifications. Derived once at normalization
/// time; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Source daily record
    pub record: DailyRecord,
    pub activity_level: ActivityLevel,
    pub heart_rate_zone: HeartRateZone,
    pub sleep_quality: SleepQuality,
    pub sleep_adequacy: SleepAdequacy,
}

/// Direction of the step series (two-point comparison, not a regression)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepsTrend {
    Increasing,
    Decreasing,
}

/// Heart rate variability over the period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeartRateTrend {
    Stable,
    Variable,
}

/// Fitness trend fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessTrends {
    pub steps_trend: StepsTrend,
    pub heart_rate_trend: HeartRateTrend,
    /// 1 minus coefficient of variation of daily steps (0-1)
    pub consistency_score: f64,
    /// Relative change from first to last day
    pub improvement_rate: f64,
}

/// Key fitness performance metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub average_steps: f64,
    pub max_steps: u32,
    pub min_steps: u32,
    pub average_heart_rate: f64,
    /// Composite fitness score (0-100)
    pub fitness_score: f64,
    /// Percentage of days the step goal was met
    pub goal_achievement_rate: f64,
}

/// Progress towards the daily step goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Percentage of the step goal reached, capped at 100
    pub steps_progress: f64,
    pub goal_status: GoalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Achieved,
    InProgress,
}

/// Per-day fitness recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyFitnessRecommendation {
    pub date: NaiveDate,
    pub steps: u32,
    pub heart_rate: u32,
    pub activity_level: ActivityLevel,
    pub recommendation: String,
    pub goal_progress: GoalProgress,
}

/// Fitness analysis output. Produced once per analysis call; when the input is
/// empty or malformed the `error` field is set and the optional sections are
/// absent (uniform failure contract, see the aggregator module).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<FitnessTrends>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_metrics: Option<PerformanceMetrics>,
    pub recommendations: Vec<DailyFitnessRecommendation>,
    pub insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FitnessReport {
    /// Error-shaped report: expected shape, empty sections, `error` populated
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            trends: None,
            performance_metrics: None,
            recommendations: Vec::new(),
            insights: vec!["Unable to analyze fitness data at this time.".to_string()],
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Direction of sleep quality over the period (first vs last day)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTrend {
    Improving,
    Declining,
    Stable,
}

/// Per-day sleep data echoed into the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepDay {
    pub date: NaiveDate,
    pub sleep_hours: f64,
    pub quality: SleepQuality,
    pub adequacy: SleepAdequacy,
}

/// Sleep pattern statistics over the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepPatterns {
    pub average_duration: f64,
    /// 1 minus coefficient of variation of durations (0-1)
    pub duration_consistency: f64,
    pub quality_trend: QualityTrend,
    /// Mean duration as a percentage of the optimal duration, capped at 100
    pub sleep_efficiency: f64,
    pub optimal_sleep_days: usize,
    pub insufficient_sleep_days: usize,
    pub excessive_sleep_days: usize,
}

/// Day counts per quality category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityDistribution {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

/// Sleep quality metrics over the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepQualityMetrics {
    pub overall_quality_score: f64,
    pub quality_distribution: QualityDistribution,
    /// Composite sleep score (0-100)
    pub sleep_score: f64,
    /// Recovery index (0-100)
    pub recovery_index: f64,
    /// Cumulative shortfall vs optimal duration (hours)
    pub sleep_debt: f64,
}

/// Recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Per-day sleep recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecommendation {
    pub date: NaiveDate,
    pub recommendation: String,
    pub priority: Priority,
    pub sleep_hours: f64,
    pub quality: SleepQuality,
}

/// Sleep analysis output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepReport {
    pub generated_at: DateTime<Utc>,
    pub days: Vec<SleepDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_patterns: Option<SleepPatterns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep_quality_metrics: Option<SleepQualityMetrics>,
    pub recommendations: Vec<SleepRecommendation>,
    pub insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SleepReport {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            days: Vec::new(),
            sleep_patterns: None,
            sleep_quality_metrics: None,
            recommendations: Vec::new(),
            insights: vec!["Unable to analyze sleep data at this time.".to_string()],
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A dated free-text journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub text: String,
}

/// Overall sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Discrete emotion tags detected by keyword lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anxiety,
    Depression,
    Anger,
    Joy,
    Fear,
    Gratitude,
}

/// Coarse strength of emotional expression in one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Sentiment analysis of a single journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub date: NaiveDate,
    pub sentiment: Sentiment,
    /// Compound polarity score in [-1, 1]
    pub compound: f64,
    pub emotions: Vec<Emotion>,
    pub intensity: Intensity,
    pub insights: Vec<String>,
    pub word_count: usize,
    /// Length-based readability heuristic (0-100)
    pub readability_score: f64,
}

/// Direction of sentiment over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTrend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

/// Fraction of entries per sentiment label (each in [0, 1])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Sentiment trend over time. Distributions are present only when there are
/// enough entries to compute a trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentTrends {
    pub trend: SentimentTrend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_distribution: Option<SentimentDistribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_distribution: Option<SentimentDistribution>,
}

/// Summary aggregates over all analyzed entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub total_entries: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
    pub high_intensity_percentage: f64,
    pub overall_sentiment: Sentiment,
}

/// Sentiment analysis output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<SentimentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trends: Option<SentimentTrends>,
    pub emotional_insights: Vec<String>,
    pub wellness_recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SentimentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SentimentReport {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            results: Vec::new(),
            trends: None,
            emotional_insights: Vec::new(),
            wellness_recommendations: Vec::new(),
            summary: None,
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Strength category for a metric-pair correlation. These are rule-table
/// lookups calibrated into downstream consumers, not statistical coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    StrongPositive,
    StrongNegative,
    Moderate,
}

/// One metric-pair correlation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    pub strength: CorrelationStrength,
    pub description: String,
}

/// Recommendation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Sleep,
    MentalHealth,
    Fitness,
    Maintenance,
}

/// A priority-ranked cross-domain recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityRecommendation {
    pub priority: Priority,
    pub category: RecommendationCategory,
    pub recommendation: String,
    pub action: String,
}

/// Overall trend direction across domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTrend {
    Improving,
    Declining,
    Stable,
}

/// Cross-domain trend roll-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness: Option<StepsTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<QualityTrend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<SentimentTrend>,
    pub overall: OverallTrend,
}

/// One time-phased bundle of the static action plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPhase {
    pub week: String,
    pub focus: String,
    pub actions: Vec<String>,
}

/// Aggregated wellness insight built from the three domain reports. Built
/// fresh on each aggregation call; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedInsight {
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Composite wellness score (0-100)
    pub wellness_score: f64,
    pub holistic_insights: Vec<String>,
    pub correlation_analysis: BTreeMap<String, Correlation>,
    pub priority_recommendations: Vec<PriorityRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_analysis: Option<TrendAnalysis>,
    pub action_plan: Vec<ActionPhase>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AggregatedInsight {
    /// Error-shaped result: zeroed score, empty sections, `error` populated
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            wellness_score: 0.0,
            holistic_insights: Vec::new(),
            correlation_analysis: BTreeMap::new(),
            priority_recommendations: Vec::new(),
            trend_analysis: None,
            action_plan: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
