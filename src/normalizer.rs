//! Record normalization
//!
//! This module validates raw daily metrics and derives the canonical
//! classifications used by the scorers:
//! - Activity level from step counts
//! - Heart rate zone from average heart rate
//! - Sleep quality and adequacy from sleep duration
//!
//! Validation fails fast before any computation; classification thresholds are
//! fixed constants with >=/< boundary semantics.

use crate::error::AnalysisError;
use crate::types::{
    ActivityLevel, DailyRecord, HeartRateZone, NormalizedRecord, RawHealthData, RawMetric,
    SleepAdequacy, SleepQuality,
};
use chrono::NaiveDate;

/// Normalizer for converting raw daily metrics into normalized records
pub struct Normalizer;

impl Normalizer {
    /// Validate and normalize a raw health payload.
    ///
    /// Requires a non-empty `user_id` and a non-empty `metrics` array; each
    /// metric must carry date, steps, heart rate, and sleep hours. The output
    /// is sorted by date ascending.
    pub fn normalize(raw: &RawHealthData) -> Result<Vec<NormalizedRecord>, AnalysisError> {
        if raw.user_id.trim().is_empty() {
            return Err(AnalysisError::MissingField("user_id"));
        }
        if raw.metrics.is_empty() {
            return Err(AnalysisError::EmptyInput("metrics"));
        }

        let mut records = Vec::with_capacity(raw.metrics.len());
        for metric in &raw.metrics {
            records.push(normalize_metric(metric)?);
        }
        records.sort_by_key(|r| r.record.date);

        log::debug!("normalized {} daily records", records.len());
        Ok(records)
    }
}

fn normalize_metric(metric: &RawMetric) -> Result<NormalizedRecord, AnalysisError> {
    let date_str = metric
        .date
        .as_deref()
        .ok_or(AnalysisError::MissingField("date"))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|e| AnalysisError::DateParseError(format!("{date_str}: {e}")))?;

    let steps = metric.steps.ok_or(AnalysisError::MissingField("steps"))?;

    let heart_rate = metric
        .heart_rate
        .ok_or(AnalysisError::MissingField("heart_rate"))?;
    if heart_rate == 0 {
        return Err(AnalysisError::InvalidValue {
            field: "heart_rate",
            reason: "must be positive".to_string(),
        });
    }

    let sleep_hours = metric
        .sleep_hours
        .ok_or(AnalysisError::MissingField("sleep_hours"))?;
    if !sleep_hours.is_finite() || sleep_hours < 0.0 {
        return Err(AnalysisError::InvalidValue {
            field: "sleep_hours",
            reason: format!("must be a non-negative number, got {sleep_hours}"),
        });
    }

    Ok(NormalizedRecord {
        activity_level: classify_activity_level(steps),
        heart_rate_zone: classify_heart_rate_zone(heart_rate),
        sleep_quality: classify_sleep_quality(sleep_hours),
        sleep_adequacy: assess_sleep_adequacy(sleep_hours),
        record: DailyRecord {
            date,
            steps,
            heart_rate,
            sleep_hours,
            hrv: metric.hrv,
        },
    })
}

/// Classify activity level from daily steps
fn classify_activity_level(steps: u32) -> ActivityLevel {
    if steps >= 10_000 {
        ActivityLevel::High
    } else if steps >= 5_000 {
        ActivityLevel::Moderate
    } else {
        ActivityLevel::Low
    }
}

/// Classify heart rate zone from average heart rate (bpm)
fn classify_heart_rate_zone(heart_rate: u32) -> HeartRateZone {
    if heart_rate < 60 {
        HeartRateZone::Resting
    } else if heart_rate < 100 {
        HeartRateZone::Normal
    } else if heart_rate < 120 {
        HeartRateZone::Elevated
    } else {
        HeartRateZone::High
    }
}

/// Classify sleep quality from duration (hours)
fn classify_sleep_quality(sleep_hours: f64) -> SleepQuality {
    if sleep_hours >= 7.0 {
        SleepQuality::Excellent
    } else if sleep_hours >= 6.0 {
        SleepQuality::Good
    } else if sleep_hours >= 5.0 {
        SleepQuality::Fair
    } else {
        SleepQuality::Poor
    }
}

/// Assess sleep adequacy from duration (hours)
fn assess_sleep_adequacy(sleep_hours: f64) -> SleepAdequacy {
    if sleep_hours >= 7.0 {
        SleepAdequacy::Adequate
    } else if sleep_hours >= 6.0 {
        SleepAdequacy::Borderline
    } else {
        SleepAdequacy::Insufficient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw_metric(date: &str, steps: u32, heart_rate: u32, sleep_hours: f64) -> RawMetric {
        RawMetric {
            date: Some(date.to_string()),
            steps: Some(steps),
            heart_rate: Some(heart_rate),
            sleep_hours: Some(sleep_hours),
            hrv: None,
        }
    }

    fn raw_data(metrics: Vec<RawMetric>) -> RawHealthData {
        RawHealthData {
            user_id: "12345".to_string(),
            metrics,
        }
    }

    #[test]
    fn test_normalize_derives_classifications() {
        let raw = raw_data(vec![raw_metric("2024-11-20", 8000, 70, 7.5)]);
        let records = Normalizer::normalize(&raw).unwrap();

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.activity_level, ActivityLevel::Moderate);
        assert_eq!(rec.heart_rate_zone, HeartRateZone::Normal);
        assert_eq!(rec.sleep_quality, SleepQuality::Excellent);
        assert_eq!(rec.sleep_adequacy, SleepAdequacy::Adequate);
    }

    #[test]
    fn test_activity_level_boundaries() {
        let raw = raw_data(vec![
            raw_metric("2024-11-20", 10_000, 70, 7.0),
            raw_metric("2024-11-21", 9_999, 70, 7.0),
            raw_metric("2024-11-22", 5_000, 70, 7.0),
            raw_metric("2024-11-23", 4_999, 70, 7.0),
        ]);
        let records = Normalizer::normalize(&raw).unwrap();

        assert_eq!(records[0].activity_level, ActivityLevel::High);
        assert_eq!(records[1].activity_level, ActivityLevel::Moderate);
        assert_eq!(records[2].activity_level, ActivityLevel::Moderate);
        assert_eq!(records[3].activity_level, ActivityLevel::Low);
    }

    #[test]
    fn test_sleep_quality_boundaries() {
        let raw = raw_data(vec![
            raw_metric("2024-11-20", 8000, 70, 7.0),
            raw_metric("2024-11-21", 8000, 70, 6.99),
            raw_metric("2024-11-22", 8000, 70, 5.0),
            raw_metric("2024-11-23", 8000, 70, 4.99),
        ]);
        let records = Normalizer::normalize(&raw).unwrap();

        assert_eq!(records[0].sleep_quality, SleepQuality::Excellent);
        assert_eq!(records[1].sleep_quality, SleepQuality::Good);
        assert_eq!(records[2].sleep_quality, SleepQuality::Fair);
        assert_eq!(records[3].sleep_quality, SleepQuality::Poor);
    }

    #[test]
    fn test_heart_rate_zone_boundaries() {
        let raw = raw_data(vec![
            raw_metric("2024-11-20", 8000, 59, 7.0),
            raw_metric("2024-11-21", 8000, 60, 7.0),
            raw_metric("2024-11-22", 8000, 100, 7.0),
            raw_metric("2024-11-23", 8000, 120, 7.0),
        ]);
        let records = Normalizer::normalize(&raw).unwrap();

        assert_eq!(records[0].heart_rate_zone, HeartRateZone::Resting);
        assert_eq!(records[1].heart_rate_zone, HeartRateZone::Normal);
        assert_eq!(records[2].heart_rate_zone, HeartRateZone::Elevated);
        assert_eq!(records[3].heart_rate_zone, HeartRateZone::High);
    }

    #[test]
    fn test_output_sorted_by_date() {
        let raw = raw_data(vec![
            raw_metric("2024-11-22", 8000, 70, 7.0),
            raw_metric("2024-11-20", 9000, 72, 6.5),
            raw_metric("2024-11-21", 8500, 71, 7.2),
        ]);
        let records = Normalizer::normalize(&raw).unwrap();

        let dates: Vec<_> = records.iter().map(|r| r.record.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = raw_data(vec![
            raw_metric("2024-11-20", 8000, 70, 7.5),
            raw_metric("2024-11-21", 9500, 72, 7.2),
        ]);
        let first = Normalizer::normalize(&raw).unwrap();
        let second = Normalizer::normalize(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut metric = raw_metric("2024-11-20", 8000, 70, 7.5);
        metric.heart_rate = None;
        let err = Normalizer::normalize(&raw_data(vec![metric])).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingField("heart_rate")));
    }

    #[test]
    fn test_empty_metrics_rejected() {
        let err = Normalizer::normalize(&raw_data(vec![])).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput("metrics")));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_hr = raw_metric("2024-11-20", 8000, 0, 7.5);
        assert!(Normalizer::normalize(&raw_data(vec![zero_hr])).is_err());

        let negative_sleep = raw_metric("2024-11-20", 8000, 70, -1.0);
        assert!(Normalizer::normalize(&raw_data(vec![negative_sleep])).is_err());

        let bad_date = raw_metric("not-a-date", 8000, 70, 7.5);
        assert!(matches!(
            Normalizer::normalize(&raw_data(vec![bad_date])).unwrap_err(),
            AnalysisError::DateParseError(_)
        ));
    }
}
