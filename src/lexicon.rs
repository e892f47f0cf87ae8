//! Static sentiment lexicon.
//!
//! Four weighted lookup tables: single words and multi-word phrases, positive
//! and negative. Keys are lowercase and matched by substring containment
//! against normalized comment text. Declaration order IS the match priority
//! for the phrase tables (first entry that matches wins), so these are ordered
//! vectors, not hash maps.

use once_cell::sync::Lazy;

/// Weighted table entry: lowercase key, signed weight.
pub type Entry = (&'static str, f64);

pub static POSITIVE_WORDS: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        ("love", 3.0),
        ("great", 2.0),
        ("excellent", 3.0),
        ("happy", 1.5),
        ("amazing", 2.5),
        ("awesome", 2.5),
        ("fantastic", 2.0),
        ("wonderful", 2.5),
        ("helpful", 1.5),
        ("good", 1.0),
        ("perfect", 3.0),
        ("superb", 2.5),
        ("brilliant", 2.0),
        ("gorgeous", 2.0),
        ("charming", 1.5),
        ("delightful", 2.0),
        ("exciting", 1.5),
        ("joyful", 2.0),
        ("kind", 1.0),
        ("lovely", 1.5),
        ("magnificent", 2.5),
        ("pleasure", 2.0),
        ("satisfied", 1.5),
        ("success", 2.0),
        ("terrific", 2.0),
        ("thrilled", 2.0),
        ("victory", 3.0),
        ("well done", 2.5),
        ("impressive", 2.0),
        ("innovative", 2.0),
    ]
});

pub static NEGATIVE_WORDS: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        ("bad", -2.0),
        ("terrible", -3.0),
        ("unfair", -2.0),
        ("poor", -1.5),
        ("sad", -1.0),
        ("angry", -2.0),
        ("hate", -2.5),
        ("worst", -3.0),
        ("disappointed", -2.5),
        ("stupid", -2.0),
        ("useless", -2.5),
        ("horrible", -2.5),
        ("awful", -2.5),
        ("disgusting", -3.0),
        ("dreadful", -2.5),
        ("frustrated", -1.5),
        ("insane", -2.0),
        ("unhappy", -1.5),
        ("lousy", -2.0),
        ("miserable", -2.5),
        ("painful", -2.0),
        ("regret", -1.5),
        ("shocking", -2.5),
        ("slow", -1.0),
        ("unprofessional", -2.0),
        ("unreliable", -2.5),
        ("waste", -2.0),
        ("annoying", -1.5),
        ("unacceptable", -2.5),
    ]
});

pub static POSITIVE_PHRASES: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        ("very good", 2.5),
        ("well done", 2.0),
        ("fantastic work", 2.5),
        ("excellent initiative", 3.0),
        ("good job", 2.0),
        ("could not be better", 3.0),
        ("highly recommend", 2.5),
        ("five stars", 3.0),
        ("exceeded expectations", 2.5),
        ("worth the money", 2.0),
    ]
});

pub static NEGATIVE_PHRASES: Lazy<Vec<Entry>> = Lazy::new(|| {
    vec![
        ("not good", -2.5),
        ("no support", -3.0),
        ("very bad", -3.0),
        ("really terrible", -3.0),
        ("does not work", -2.5),
        ("waste of time", -3.0),
        ("never again", -3.0),
        ("not worth it", -2.5),
        ("poor quality", -2.0),
    ]
});
