//! Sentiment Analyzer Port - scores the polarity of a candidate turn.

use crate::domain::interview::Sentiment;

/// Analyzer for the emotional polarity of a single text.
///
/// Implementations must be deterministic and stateless: each call depends
/// only on its input.
pub trait SentimentAnalyzer: Send + Sync {
    /// Returns a polarity score in `[-1, 1]`.
    fn polarity(&self, text: &str) -> f64;

    /// Classifies the text using the domain thresholds.
    fn classify(&self, text: &str) -> Sentiment {
        Sentiment::from_polarity(self.polarity(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScore(f64);

    impl SentimentAnalyzer for FixedScore {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn classify_delegates_to_thresholds() {
        assert_eq!(FixedScore(0.5).classify("x"), Sentiment::Positive);
        assert_eq!(FixedScore(0.2).classify("x"), Sentiment::Neutral);
        assert_eq!(FixedScore(-0.2).classify("x"), Sentiment::Neutral);
        assert_eq!(FixedScore(-0.7).classify("x"), Sentiment::Negative);
    }
}
