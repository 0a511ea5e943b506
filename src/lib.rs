//! Sports Numerology - numerology-based match prediction for one-on-one sports
//!
//! This library derives birth-date and name figures for two competitors,
//! compares them against the universal cycle of the match date and predicts
//! a winner with a confidence tier and betting guidance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{AlignmentScorer, MatchPredictor, NumerologyError, reduce};
pub use crate::models::{Competitor, Confidence, MatchResult, PersonFigures, ScoringRules, Sport, UniversalCycle};
