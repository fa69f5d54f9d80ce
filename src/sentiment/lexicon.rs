//! Static polarity lexicon and emotion keyword tables
//!
//! Valences are on a -4..4 scale and compress into the [-1, 1] compound score
//! in the analyzer. The emotion tables are fixed keyword lists matched as
//! case-insensitive substrings; changing them changes report semantics for
//! downstream consumers, so treat additions as a compatibility decision.

use crate::types::Emotion;

/// Token valences. Kept sorted loosely by theme for review, looked up
/// linearly; the table is small enough that a map buys nothing.
pub(crate) const VALENCE: &[(&str, f64)] = &[
    // anxiety / stress
    ("anxious", -1.9),
    ("anxiety", -1.8),
    ("worried", -1.3),
    ("worry", -1.3),
    ("worrying", -1.4),
    ("nervous", -1.2),
    ("stressed", -1.8),
    ("stressful", -1.7),
    ("overwhelmed", -1.7),
    ("overwhelming", -1.7),
    ("panic", -2.2),
    ("uneasy", -1.1),
    ("tense", -1.0),
    // low mood
    ("sad", -2.1),
    ("depressed", -2.7),
    ("depressing", -2.3),
    ("down", -1.1),
    ("hopeless", -2.8),
    ("empty", -1.4),
    ("lonely", -1.9),
    ("miserable", -2.7),
    ("unhappy", -1.9),
    ("gloomy", -1.6),
    ("crying", -1.9),
    ("cried", -1.8),
    // anger
    ("angry", -2.3),
    ("anger", -2.1),
    ("frustrated", -2.0),
    ("frustrating", -1.9),
    ("irritated", -1.8),
    ("mad", -2.2),
    ("furious", -2.9),
    ("annoyed", -1.6),
    ("annoying", -1.6),
    ("resentful", -1.9),
    // fear
    ("scared", -2.2),
    ("afraid", -2.0),
    ("terrified", -3.0),
    ("fearful", -2.1),
    ("fear", -1.9),
    ("dread", -2.1),
    ("concerned", -1.1),
    // general negative
    ("bad", -2.5),
    ("terrible", -3.1),
    ("awful", -2.9),
    ("horrible", -2.9),
    ("worst", -3.1),
    ("worse", -2.1),
    ("hate", -2.7),
    ("hated", -2.6),
    ("tired", -1.2),
    ("exhausted", -2.0),
    ("exhausting", -1.9),
    ("drained", -1.6),
    ("pain", -2.1),
    ("painful", -2.2),
    ("hurt", -2.0),
    ("hurts", -2.0),
    ("sick", -1.9),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.5),
    ("upset", -1.8),
    ("struggle", -1.7),
    ("struggling", -1.8),
    ("difficult", -1.5),
    ("lost", -1.3),
    ("alone", -1.0),
    ("guilty", -1.9),
    ("ashamed", -2.1),
    ("disappointed", -2.0),
    ("disappointing", -1.9),
    // joy
    ("happy", 2.7),
    ("happiness", 2.6),
    ("excited", 2.4),
    ("exciting", 2.2),
    ("joyful", 2.9),
    ("joy", 2.8),
    ("cheerful", 2.5),
    ("elated", 3.0),
    ("thrilled", 2.9),
    ("delighted", 2.8),
    ("glad", 2.1),
    // gratitude
    ("grateful", 2.4),
    ("thankful", 2.3),
    ("appreciate", 2.0),
    ("appreciated", 2.1),
    ("appreciative", 2.1),
    ("blessed", 2.6),
    ("fortunate", 2.0),
    ("gratitude", 2.3),
    // general positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 3.2),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("fantastic", 2.9),
    ("awesome", 3.1),
    ("love", 3.2),
    ("loved", 2.9),
    ("like", 1.5),
    ("liked", 1.6),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("fun", 2.3),
    ("proud", 2.4),
    ("accomplished", 1.9),
    ("accomplishment", 2.0),
    ("productive", 1.8),
    ("calm", 1.3),
    ("peaceful", 2.2),
    ("relaxed", 1.9),
    ("relaxing", 1.8),
    ("refreshed", 1.9),
    ("energized", 2.0),
    ("motivated", 1.9),
    ("motivation", 1.4),
    ("hope", 1.9),
    ("hopeful", 2.0),
    ("optimistic", 2.1),
    ("better", 1.9),
    ("best", 3.2),
    ("progress", 1.6),
    ("success", 2.7),
    ("successful", 2.6),
    ("win", 2.8),
    ("smile", 2.1),
    ("smiled", 2.1),
    ("laughed", 2.2),
    ("laughing", 2.2),
];

/// Degree adverbs that push a following valence word further from zero
pub(crate) const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "extremely",
    "so",
    "incredibly",
    "absolutely",
    "completely",
    "totally",
    "deeply",
    "especially",
];

/// Negations that flip and dampen a valence word within a 3-token window
pub(crate) const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "can't", "cant", "won't", "wont", "isn't", "isnt",
    "wasn't", "wasnt", "didn't", "didnt", "couldn't", "couldnt", "nothing", "hardly", "barely",
    "without",
];

/// Emotion tag -> keyword list, matched as case-insensitive substrings
pub(crate) const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Anxiety,
        &["anxious", "worried", "nervous", "stressed", "overwhelmed", "panic"],
    ),
    (
        Emotion::Depression,
        &["sad", "depressed", "down", "hopeless", "empty", "lonely"],
    ),
    (
        Emotion::Anger,
        &["angry", "frustrated", "irritated", "mad", "furious", "annoyed"],
    ),
    (
        Emotion::Joy,
        &["happy", "excited", "joyful", "cheerful", "elated", "thrilled"],
    ),
    (
        Emotion::Fear,
        &["scared", "afraid", "terrified", "fearful", "worried", "concerned"],
    ),
    (
        Emotion::Gratitude,
        &["grateful", "thankful", "appreciate", "blessed", "fortunate"],
    ),
];

pub(crate) fn valence_of(token: &str) -> Option<f64> {
    VALENCE
        .iter()
        .find(|(word, _)| *word == token)
        .map(|&(_, valence)| valence)
}

pub(crate) fn is_booster(token: &str) -> bool {
    BOOSTERS.contains(&token)
}

pub(crate) fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token)
}
