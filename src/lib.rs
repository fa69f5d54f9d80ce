//! Wellspring - Deterministic wellness scoring engine for wearable metrics and journal text
//!
//! Wellspring turns raw daily health metrics and free-text journal entries into
//! a composite wellness insight through a deterministic pipeline: normalization
//! → fitness scoring → sleep scoring → sentiment scoring → insight aggregation.
//!
//! ## Modules
//!
//! - **Normalizer**: Validate raw payloads into classified daily records
//! - **Fitness / Sleep / Sentiment**: Independent domain scorers, each producing
//!   a self-contained report
//! - **Aggregator**: Cross-domain wellness score, correlations, and action plan

pub mod aggregator;
pub mod error;
pub mod fitness;
pub mod normalizer;
pub mod pipeline;
pub mod sentiment;
pub mod sleep;
pub mod types;

mod stats;

pub use aggregator::InsightAggregator;
pub use error::AnalysisError;
pub use fitness::{FitnessAnalyzer, FitnessGoals};
pub use normalizer::Normalizer;
pub use pipeline::{analyze_wellness, WellnessAnalysis, WellnessEngine};
pub use sentiment::SentimentAnalyzer;
pub use sleep::{SleepAnalyzer, SleepGoals};

/// Engine version embedded in CLI output
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for analysis payloads
pub const ENGINE_NAME: &str = "wellspring";
