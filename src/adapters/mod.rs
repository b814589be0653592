//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language model providers (Gemini, mock)
//! - `sentiment` - Polarity scoring
//! - `transcript` - Transcript persistence (JSON file, in-memory)
//! - `session` - Live session registry
//! - `http` - REST API

pub mod ai;
pub mod http;
pub mod sentiment;
pub mod session;
pub mod transcript;
