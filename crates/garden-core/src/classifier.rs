//! Keyword-based emotion classifier.
//!
//! The local default for tagging a new memory from its text. Model-backed
//! classifiers live outside this crate; anything they return can be fed
//! through [`Emotion::parse_lenient`].

use regex::Regex;
use std::sync::LazyLock;

use crate::emotion::Emotion;

/// Tag used when no keyword family matches.
pub const UNMATCHED_EMOTION: Emotion = Emotion::Nostalgic;

/// Keyword families, tested in order; first match wins.
static RULES: LazyLock<Vec<(Regex, Emotion)>> = LazyLock::new(|| {
    [
        (r"\b(happy|joy|glad|smile|delight|celebrate)\b", Emotion::Happy),
        (r"\b(love|romance|date|anniversary|kiss|valentine)\b", Emotion::Romantic),
        (r"\b(sad|cry|loss|hurt|miss|lonely)\b", Emotion::Sad),
        (r"\b(calm|peace|relax|serene|quiet|beach)\b", Emotion::Calm),
        (r"\b(angry|mad|rage|furious|annoyed)\b", Emotion::Angry),
        (r"\b(old times|nostalgia|remember|childhood|school)\b", Emotion::Nostalgic),
        (r"\b(excited|thrill|hype|can['’]t wait|win)\b", Emotion::Excited),
        (r"\b(proud|achievement|award|rank|milestone)\b", Emotion::Proud),
    ]
    .into_iter()
    .map(|(pattern, emotion)| (Regex::new(pattern).unwrap(), emotion))
    .collect()
});

/// Classify free text into an emotion tag. Text that is itself a tag name
/// (any case) maps straight to it.
pub fn classify_text(text: &str) -> Emotion {
    if let Some(emotion) = Emotion::parse_lenient(text) {
        return emotion;
    }
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(re, _)| re.is_match(&lower))
        .map(|(_, emotion)| *emotion)
        .unwrap_or(UNMATCHED_EMOTION)
}
