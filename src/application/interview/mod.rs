//! Interview orchestration.

mod controller;
mod error;

pub use controller::{ControllerConfig, InterviewController, TurnOutcome};
pub use error::InterviewError;
