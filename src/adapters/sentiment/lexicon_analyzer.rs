//! Lexicon-based sentiment analyzer.
//!
//! Scores each known word from a built-in polarity table, adjusted by a
//! preceding intensifier or negation, and averages the scored words.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::ports::SentimentAnalyzer;

/// Multiplier applied to a word that follows a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// Number of tokens a negation reaches forward ("don't think this is bad").
const NEGATION_WINDOW: usize = 4;

/// Boost per exclamation mark, capped at three marks.
const EXCLAMATION_BOOST: f64 = 0.1;

static POLARITY: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // positive
        ("good", 0.7),
        ("great", 0.8),
        ("excellent", 1.0),
        ("amazing", 0.6),
        ("awesome", 1.0),
        ("wonderful", 1.0),
        ("fantastic", 0.4),
        ("perfect", 1.0),
        ("best", 1.0),
        ("better", 0.5),
        ("nice", 0.6),
        ("happy", 0.8),
        ("glad", 0.5),
        ("pleased", 0.5),
        ("love", 0.5),
        ("loved", 0.7),
        ("enjoy", 0.4),
        ("enjoyed", 0.4),
        ("excited", 0.4),
        ("exciting", 0.3),
        ("interesting", 0.5),
        ("confident", 0.5),
        ("passionate", 0.6),
        ("fun", 0.3),
        ("thanks", 0.3),
        ("thank", 0.3),
        ("helpful", 0.5),
        ("easy", 0.4),
        ("success", 0.5),
        ("successful", 0.75),
        ("proud", 0.8),
        // negative
        ("bad", -0.7),
        ("terrible", -1.0),
        ("awful", -1.0),
        ("horrible", -1.0),
        ("worst", -1.0),
        ("worse", -0.4),
        ("poor", -0.4),
        ("hate", -0.8),
        ("hated", -0.9),
        ("sad", -0.5),
        ("unhappy", -0.6),
        ("upset", -0.6),
        ("angry", -0.5),
        ("annoyed", -0.4),
        ("annoying", -0.8),
        ("frustrated", -0.7),
        ("frustrating", -0.7),
        ("disappointed", -0.75),
        ("disappointing", -0.6),
        ("boring", -1.0),
        ("bored", -0.5),
        ("stupid", -0.8),
        ("useless", -0.5),
        ("pointless", -0.5),
        ("ridiculous", -0.35),
        ("confused", -0.4),
        ("confusing", -0.3),
        ("difficult", -0.5),
        ("nervous", -0.3),
        ("wrong", -0.5),
        ("tired", -0.4),
        ("worried", -0.4),
        ("fail", -0.5),
        ("failed", -0.5),
    ]
    .into_iter()
    .collect()
});

static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.2),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("super", 1.4),
        ("truly", 1.3),
        ("quite", 1.1),
        ("totally", 1.3),
        ("absolutely", 1.5),
        ("somewhat", 0.7),
        ("slightly", 0.5),
    ]
    .into_iter()
    .collect()
});

const NEGATIONS: [&str; 8] = ["not", "no", "never", "nor", "none", "nothing", "cannot", "without"];

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase().replace('’', "'"))
}

/// Deterministic, dictionary-driven polarity scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentimentAnalyzer;

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();
        let mut multiplier = 1.0;
        let mut negation_left = 0usize;

        for token in tokenize(text) {
            if is_negation(&token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(factor) = INTENSIFIERS.get(token.as_str()) {
                multiplier *= factor;
                continue;
            }

            match POLARITY.get(token.as_str()) {
                Some(polarity) => {
                    let mut score = polarity * multiplier;
                    if negation_left > 0 {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score);
                    multiplier = 1.0;
                    negation_left = 0;
                }
                None => {
                    multiplier = 1.0;
                    negation_left = negation_left.saturating_sub(1);
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        let exclamations = text.matches('!').count().min(3) as f64;
        (mean * (1.0 + EXCLAMATION_BOOST * exclamations)).clamp(-1.0, 1.0)
    }
}
