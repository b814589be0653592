//! Sentiment Analyzer Adapters.

mod lexicon_analyzer;

pub use lexicon_analyzer::LexiconSentimentAnalyzer;
