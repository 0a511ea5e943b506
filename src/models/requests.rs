use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::{parse_date, NumerologyError};
use crate::models::{Competitor, Sport};

/// Request to analyze a match
///
/// Dates stay as strings here so malformed values reach the engine and come
/// back as `InvalidInput`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeMatchRequest {
    #[validate(length(min = 1, max = 100))]
    pub player1_name: String,
    pub player1_birthdate: String,
    #[validate(length(min = 1, max = 100))]
    pub player2_name: String,
    pub player2_birthdate: String,
    pub match_date: String,
    #[serde(default)]
    pub sport: Sport,
}

/// Inputs of an analyze request after date parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatch {
    pub player1: Competitor,
    pub player2: Competitor,
    pub match_date: chrono::NaiveDate,
    pub sport: Sport,
}

impl AnalyzeMatchRequest {
    pub fn parse(&self) -> Result<ParsedMatch, NumerologyError> {
        let player1_birthdate =
            parse_date(&self.player1_birthdate).map_err(|e| e.for_field("player1_birthdate"))?;
        let player2_birthdate =
            parse_date(&self.player2_birthdate).map_err(|e| e.for_field("player2_birthdate"))?;
        let match_date = parse_date(&self.match_date).map_err(|e| e.for_field("match_date"))?;

        Ok(ParsedMatch {
            player1: Competitor::new(self.player1_name.clone(), player1_birthdate),
            player2: Competitor::new(self.player2_name.clone(), player2_birthdate),
            match_date,
            sport: self.sport,
        })
    }
}
