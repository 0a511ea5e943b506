// Numerology engine exports
pub mod cycle;
pub mod error;
pub mod person;
pub mod predictor;
pub mod reduction;
pub mod scoring;

pub use cycle::derive_universal_cycle;
pub use error::{NumerologyError, Result};
pub use person::{derive_person_figures, expression, life_path, normalize_name, parse_date, personal_year};
pub use predictor::{MatchPredictor, TIE_SENTINEL};
pub use reduction::{digit_sum, reduce};
pub use scoring::{AlignmentRule, AlignmentScorer, Award};
