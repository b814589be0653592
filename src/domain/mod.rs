//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `interview` - Interview phases, session aggregate, signals and prompts

pub mod foundation;
pub mod interview;
