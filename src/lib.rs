//! Hiring Assistant - Conversational Candidate Screening
//!
//! This crate runs a screening interview through a language model: it greets
//! the candidate, gathers a fixed profile, asks technical questions derived
//! from the stated tech stack, tracks the candidate's sentiment and stores the
//! finished transcript.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
