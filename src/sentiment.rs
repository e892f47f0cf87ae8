//! Keyword-based sentiment scoring.
//!
//! Classifies a comment as Positive, Negative, or Neutral using the static
//! lexicon tables. Matching runs in three tiers: negative phrases, then
//! positive phrases (either short-circuits the rest), then a cumulative
//! word-by-word pass. No external ML dependencies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::lexicon::{NEGATIVE_PHRASES, NEGATIVE_WORDS, POSITIVE_PHRASES, POSITIVE_WORDS};

/// Coarse sentiment label derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a raw score: > 0.5 positive, < -0.5 negative, else neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.5 {
            Sentiment::Positive
        } else if score < -0.5 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Scorer output: label plus the raw score that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    pub sentiment: Sentiment,
    pub score: f64,
}

/// Score a single comment.
///
/// The text is lowercased and trimmed, then matched by substring containment
/// (not whole words — "bad" also matches inside "badminton"; this mirrors the
/// observed behavior of the scoring tables and is kept as-is). A phrase match
/// replaces the word pass entirely; within each phrase table the first
/// declared match wins.
pub fn score_text(text: &str) -> SentimentScore {
    let lowered = text.to_lowercase();
    let normalized = lowered.trim();

    let mut score = 0.0;
    let mut found_phrase = false;

    // Negative phrases take priority over everything else.
    for (phrase, weight) in NEGATIVE_PHRASES.iter() {
        if normalized.contains(phrase) {
            score = *weight;
            found_phrase = true;
            break;
        }
    }

    if !found_phrase {
        for (phrase, weight) in POSITIVE_PHRASES.iter() {
            if normalized.contains(phrase) {
                score = *weight;
                found_phrase = true;
                break;
            }
        }
    }

    // Word tier is cumulative: every matching word contributes.
    if !found_phrase {
        for (word, weight) in POSITIVE_WORDS.iter() {
            if normalized.contains(word) {
                score += *weight;
            }
        }
        for (word, weight) in NEGATIVE_WORDS.iter() {
            if normalized.contains(word) {
                score += *weight;
            }
        }
    }

    SentimentScore {
        sentiment: Sentiment::from_score(score),
        score,
    }
}
