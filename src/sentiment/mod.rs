//! Journal sentiment scoring
//!
//! This module classifies journal entries into positive/negative/neutral with
//! a lexicon-based compound polarity score in [-1, 1], tags discrete emotions
//! by keyword lookup, and rolls per-entry results into trend, summary, and
//! recommendation aggregates.

mod lexicon;

use crate::types::{
    Emotion, Intensity, JournalEntry, Sentiment, SentimentDistribution, SentimentReport,
    SentimentResult, SentimentSummary, SentimentTrend, SentimentTrends,
};
use chrono::Utc;

/// Compound scores at or above this are positive, at or below the negation
/// are negative, in between neutral.
const SENTIMENT_THRESHOLD: f64 = 0.05;

/// Normalization constant for compressing the valence sum into [-1, 1]
const COMPOUND_ALPHA: f64 = 15.0;

/// Magnitude a booster word adds in the valence direction
const BOOSTER_INCREMENT: f64 = 0.293;

/// Scale factor applied when a valence word is negated
const NEGATION_FACTOR: f64 = -0.74;

/// Sentiment analyzer. Stateless; the lexicon is a compile-time constant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a sequence of journal entries.
    ///
    /// Entries are scored independently, then ordered by date ascending so
    /// the trend window means "most recent". Never fails: an empty input
    /// yields an error-shaped report instead.
    pub fn analyze(&self, entries: &[JournalEntry]) -> SentimentReport {
        if entries.is_empty() {
            log::warn!("sentiment analysis called with no journal entries");
            return SentimentReport::error("No journal entries to analyze");
        }

        let mut results: Vec<SentimentResult> =
            entries.iter().map(|e| self.analyze_entry(e)).collect();
        results.sort_by_key(|r| r.date);

        SentimentReport {
            generated_at: Utc::now(),
            trends: Some(sentiment_trends(&results)),
            emotional_insights: emotional_insights(&results),
            wellness_recommendations: wellness_recommendations(&results),
            summary: Some(summary(&results)),
            results,
            error: None,
        }
    }

    /// Score a single entry: polarity, emotion tags, intensity, insights
    pub fn analyze_entry(&self, entry: &JournalEntry) -> SentimentResult {
        let compound = compound_score(&entry.text);

        let sentiment = if compound >= SENTIMENT_THRESHOLD {
            Sentiment::Positive
        } else if compound <= -SENTIMENT_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let emotions = detect_emotions(&entry.text);
        let intensity = emotional_intensity(compound, &emotions);

        SentimentResult {
            date: entry.date,
            sentiment,
            compound,
            insights: entry_insights(sentiment, &emotions, intensity),
            intensity,
            emotions,
            word_count: entry.text.split_whitespace().count(),
            readability_score: readability_score(&entry.text),
        }
    }
}

/// Compound polarity of a text in [-1, 1].
///
/// Sums lexicon valences over tokens, with negation flipping within a
/// 3-token lookback window and degree adverbs boosting the preceding-word
/// case, then compresses with sum / sqrt(sum^2 + alpha).
fn compound_score(text: &str) -> f64 {
    let tokens = tokenize(text);
    let mut total = 0.0;

    for (i, token) in tokens.iter().enumerate() {
        let Some(mut valence) = lexicon::valence_of(token) else {
            continue;
        };

        let window_start = i.saturating_sub(3);
        if tokens[window_start..i].iter().any(|t| lexicon::is_negator(t)) {
            valence *= NEGATION_FACTOR;
        }
        if i > 0 && lexicon::is_booster(&tokens[i - 1]) {
            valence += BOOSTER_INCREMENT * valence.signum();
        }

        total += valence;
    }

    if total == 0.0 {
        0.0
    } else {
        total / (total * total + COMPOUND_ALPHA).sqrt()
    }
}

/// Lowercase word tokens; apostrophes are kept so contractions survive
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Emotion tags by case-insensitive substring match against the fixed
/// keyword tables. An entry may carry zero or many tags.
fn detect_emotions(text: &str) -> Vec<Emotion> {
    let lower = text.to_lowercase();
    lexicon::EMOTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|&(emotion, _)| emotion)
        .collect()
}

/// Coarse intensity from compound magnitude and tag count
fn emotional_intensity(compound: f64, emotions: &[Emotion]) -> Intensity {
    let magnitude = compound.abs();
    if magnitude >= 0.7 || emotions.len() >= 3 {
        Intensity::High
    } else if magnitude >= 0.4 || emotions.len() >= 2 {
        Intensity::Medium
    } else {
        Intensity::Low
    }
}

/// At most one per-entry insight, picked from a fixed rule chain
fn entry_insights(sentiment: Sentiment, emotions: &[Emotion], intensity: Intensity) -> Vec<String> {
    let mut insights = Vec::new();

    if sentiment == Sentiment::Negative && emotions.contains(&Emotion::Anxiety) {
        insights.push(
            "This entry shows signs of anxiety. Consider stress management techniques.".to_string(),
        );
    } else if sentiment == Sentiment::Negative && emotions.contains(&Emotion::Depression) {
        insights.push(
            "This entry suggests low mood. It might be helpful to engage in activities you enjoy."
                .to_string(),
        );
    } else if sentiment == Sentiment::Positive && emotions.contains(&Emotion::Gratitude) {
        insights.push(
            "Great to see gratitude in your writing! This practice can improve overall well-being."
                .to_string(),
        );
    } else if intensity == Intensity::High {
        insights.push(
            "This entry shows strong emotional expression. Consider if you need additional support."
                .to_string(),
        );
    }

    insights
}

/// Length-based readability heuristic: 100 - (avg words per sentence - 10) * 2,
/// clamped to [0, 100]. Empty text scores 0.
fn readability_score(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    if words == 0 || sentences == 0 {
        return 0.0;
    }

    let avg_words_per_sentence = words as f64 / sentences as f64;
    (100.0 - (avg_words_per_sentence - 10.0) * 2.0).clamp(0.0, 100.0)
}

/// Trend from the positive fraction of the most recent 3 entries vs all
/// earlier entries. Needs more than 3 entries; otherwise insufficient data.
fn sentiment_trends(results: &[SentimentResult]) -> SentimentTrends {
    let insufficient = SentimentTrends {
        trend: SentimentTrend::InsufficientData,
        recent_distribution: None,
        overall_distribution: None,
    };

    if results.len() <= 3 {
        return insufficient;
    }

    let split = results.len() - 3;
    let (earlier, recent) = results.split_at(split);

    let recent_positive = positive_fraction(recent);
    let earlier_positive = positive_fraction(earlier);

    let trend = if recent_positive > earlier_positive + 0.2 {
        SentimentTrend::Improving
    } else if recent_positive < earlier_positive - 0.2 {
        SentimentTrend::Declining
    } else {
        SentimentTrend::Stable
    };

    SentimentTrends {
        trend,
        recent_distribution: Some(distribution(recent)),
        overall_distribution: Some(distribution(results)),
    }
}

fn positive_fraction(results: &[SentimentResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Positive)
        .count() as f64
        / results.len() as f64
}

fn distribution(results: &[SentimentResult]) -> SentimentDistribution {
    let total = results.len() as f64;
    let count = |sentiment: Sentiment| {
        results.iter().filter(|r| r.sentiment == sentiment).count() as f64 / total
    };
    SentimentDistribution {
        positive: count(Sentiment::Positive),
        negative: count(Sentiment::Negative),
        neutral: count(Sentiment::Neutral),
    }
}

fn emotional_insights(results: &[SentimentResult]) -> Vec<String> {
    let mut insights = Vec::new();
    let total = results.len() as f64;

    let emotion_count = |emotion: Emotion| {
        results
            .iter()
            .filter(|r| r.emotions.contains(&emotion))
            .count() as f64
    };

    if emotion_count(Emotion::Anxiety) > total * 0.3 {
        insights.push(
            "You've been experiencing anxiety frequently. Consider mindfulness or relaxation techniques."
                .to_string(),
        );
    }
    if emotion_count(Emotion::Depression) > total * 0.2 {
        insights.push(
            "Your entries show signs of low mood. Consider reaching out to a mental health professional."
                .to_string(),
        );
    }
    if emotion_count(Emotion::Gratitude) > total * 0.3 {
        insights.push(
            "Great job practicing gratitude! This positive habit can significantly improve your well-being."
                .to_string(),
        );
    }

    let negative = results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Negative)
        .count() as f64;
    if negative > total * 0.5 {
        insights.push(
            "Your recent entries show predominantly negative sentiment. Consider activities that bring you joy."
                .to_string(),
        );
    }

    insights
}

fn wellness_recommendations(results: &[SentimentResult]) -> Vec<String> {
    let mut recommendations = Vec::new();
    let total = results.len() as f64;

    let positive = results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Positive)
        .count();
    let negative = results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Negative)
        .count();

    if negative > positive {
        recommendations
            .push("Consider incorporating daily gratitude practice into your routine.".to_string());
        recommendations
            .push("Try engaging in activities that bring you joy and relaxation.".to_string());
    }

    let anxiety_entries = results
        .iter()
        .filter(|r| r.emotions.contains(&Emotion::Anxiety))
        .count() as f64;
    if anxiety_entries > total * 0.3 {
        recommendations
            .push("For managing anxiety, try deep breathing exercises or meditation.".to_string());
        recommendations.push(
            "Consider establishing a consistent daily routine to reduce uncertainty.".to_string(),
        );
    }

    let depression_entries = results
        .iter()
        .filter(|r| r.emotions.contains(&Emotion::Depression))
        .count() as f64;
    if depression_entries > total * 0.2 {
        recommendations.push(
            "If you're feeling consistently down, consider reaching out to a mental health professional."
                .to_string(),
        );
        recommendations.push(
            "Try to maintain social connections and engage in activities you used to enjoy."
                .to_string(),
        );
    }

    recommendations
}

fn summary(results: &[SentimentResult]) -> SentimentSummary {
    let total = results.len();
    let positive = results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Positive)
        .count();
    let negative = results
        .iter()
        .filter(|r| r.sentiment == Sentiment::Negative)
        .count();
    let neutral = total - positive - negative;
    let high_intensity = results
        .iter()
        .filter(|r| r.intensity == Intensity::High)
        .count();

    let pct = |count: usize| count as f64 / total as f64 * 100.0;

    let overall_sentiment = if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    SentimentSummary {
        total_entries: total,
        positive_percentage: pct(positive),
        negative_percentage: pct(negative),
        neutral_percentage: pct(neutral),
        high_intensity_percentage: pct(high_intensity),
        overall_sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(date: &str, text: &str) -> JournalEntry {
        JournalEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_anxious_entry_scenario() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze_entry(&entry(
            "2024-11-22",
            "I feel really anxious about the upcoming presentation. It's overwhelming",
        ));

        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!(result.emotions.contains(&Emotion::Anxiety));
        assert!(result.compound <= -0.05);
    }

    #[test]
    fn test_grateful_entry_positive() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze_entry(&entry(
            "2024-11-21",
            "Had a great day today! Felt accomplished after finishing all my tasks. I'm grateful for the support from my team.",
        ));

        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.emotions.contains(&Emotion::Gratitude));
        assert!(result
            .insights
            .iter()
            .any(|i| i.contains("gratitude in your writing")));
    }

    #[test]
    fn test_neutral_entry() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.analyze_entry(&entry(
            "2024-11-20",
            "Went to the store and bought groceries for the week.",
        ));

        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.compound, 0.0);
        assert!(result.emotions.is_empty());
        assert_eq!(result.intensity, Intensity::Low);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = SentimentAnalyzer::new();
        let negated = analyzer.analyze_entry(&entry("2024-11-20", "I am not happy about this."));
        let plain = analyzer.analyze_entry(&entry("2024-11-20", "I am happy about this."));

        assert!(plain.compound > 0.0);
        assert!(negated.compound < plain.compound);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_compound_bounded() {
        let analyzer = SentimentAnalyzer::new();
        let extreme = analyzer.analyze_entry(&entry(
            "2024-11-20",
            "terrible awful horrible worst hate miserable hopeless furious terrified",
        ));
        assert!((-1.0..=1.0).contains(&extreme.compound));
        assert_eq!(extreme.sentiment, Sentiment::Negative);
        assert_eq!(extreme.intensity, Intensity::High);
    }

    #[test]
    fn test_intensity_from_emotion_count() {
        let analyzer = SentimentAnalyzer::new();
        // Three distinct emotion tags force high intensity regardless of
        // compound magnitude
        let result = analyzer.analyze_entry(&entry(
            "2024-11-20",
            "Felt a little worried, slightly sad, and somewhat annoyed at times, though the day was otherwise fine and calm and I managed everything on the list without trouble.",
        ));
        assert!(result.emotions.len() >= 3);
        assert_eq!(result.intensity, Intensity::High);
    }

    #[test]
    fn test_trend_requires_more_than_three_entries() {
        let analyzer = SentimentAnalyzer::new();
        let report = analyzer.analyze(&[
            entry("2024-11-20", "Feeling sad and down today."),
            entry("2024-11-21", "Another rough, frustrating day."),
            entry("2024-11-22", "Still struggling and tired."),
        ]);

        let trends = report.trends.unwrap();
        assert_eq!(trends.trend, SentimentTrend::InsufficientData);
        assert!(trends.recent_distribution.is_none());
    }

    #[test]
    fn test_improving_trend() {
        let analyzer = SentimentAnalyzer::new();
        let report = analyzer.analyze(&[
            entry("2024-11-18", "Feeling sad and hopeless."),
            entry("2024-11-19", "Terrible day, everything went wrong."),
            entry("2024-11-20", "Had a wonderful walk, feeling happy."),
            entry("2024-11-21", "Great day, so grateful for my friends."),
            entry("2024-11-22", "Feeling excited and optimistic about the future."),
        ]);

        let trends = report.trends.unwrap();
        assert_eq!(trends.trend, SentimentTrend::Improving);
        assert_eq!(trends.recent_distribution.unwrap().positive, 1.0);
    }

    #[test]
    fn test_results_sorted_by_date() {
        let analyzer = SentimentAnalyzer::new();
        // Reverse-chronological input, as journaling apps typically export
        let report = analyzer.analyze(&[
            entry("2024-11-22", "Feeling anxious about the presentation."),
            entry("2024-11-21", "Had a great day, grateful for my team."),
            entry("2024-11-20", "Feeling a bit down, struggling for motivation."),
        ]);

        let dates: Vec<_> = report.results.iter().map(|r| r.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_summary_percentages() {
        let analyzer = SentimentAnalyzer::new();
        let report = analyzer.analyze(&[
            entry("2024-11-20", "Feeling sad and down."),
            entry("2024-11-21", "Wonderful, happy day!"),
            entry("2024-11-22", "Amazing day, so grateful."),
            entry("2024-11-23", "Bought groceries for the week."),
        ]);

        let summary = report.summary.unwrap();
        assert_eq!(summary.total_entries, 4);
        assert_eq!(summary.positive_percentage, 50.0);
        assert_eq!(summary.negative_percentage, 25.0);
        assert_eq!(summary.neutral_percentage, 25.0);
        assert_eq!(summary.overall_sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_negative_majority_drives_recommendations() {
        let analyzer = SentimentAnalyzer::new();
        let report = analyzer.analyze(&[
            entry("2024-11-20", "Feeling anxious and overwhelmed."),
            entry("2024-11-21", "Sad, lonely, everything feels empty."),
            entry("2024-11-22", "Another stressful, worried evening."),
        ]);

        assert!(report
            .wellness_recommendations
            .iter()
            .any(|r| r.contains("gratitude practice")));
        assert!(report
            .wellness_recommendations
            .iter()
            .any(|r| r.contains("deep breathing")));
        assert!(report
            .emotional_insights
            .iter()
            .any(|i| i.contains("anxiety frequently")));
    }

    #[test]
    fn test_readability_clamped() {
        assert_eq!(readability_score(""), 0.0);
        // 10 words in one sentence -> exactly 100
        assert_eq!(
            readability_score("one two three four five six seven eight nine ten."),
            100.0
        );
        // A single rambling 80-word sentence bottoms out at 0
        let rambling = "word ".repeat(80);
        assert_eq!(readability_score(rambling.trim()), 0.0);
    }

    #[test]
    fn test_empty_entries_yield_error_report() {
        let report = SentimentAnalyzer::new().analyze(&[]);
        assert!(report.is_error());
        assert!(report.results.is_empty());
        assert!(report.summary.is_none());
    }
}
