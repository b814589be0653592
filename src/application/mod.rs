//! Application layer - orchestrates domain operations across ports.

pub mod interview;

pub use interview::{ControllerConfig, InterviewController, InterviewError, TurnOutcome};
