use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A competitor as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub birthdate: NaiveDate,
}

impl Competitor {
    pub fn new(name: impl Into<String>, birthdate: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthdate,
        }
    }
}

/// Figures derived for one competitor, each in 1..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonFigures {
    pub life_path: u8,
    pub expression: u8,
    pub personal_year: u8,
}

/// Figures derived from the match date, each in 1..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalCycle {
    pub universal_year: u8,
    pub universal_month: u8,
    pub universal_day: u8,
}

/// Score earned by one competitor with one reason per award
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Sport tag; display only, never part of the math
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    #[default]
    Tennis,
    TableTennis,
    Boxing,
    Mma,
    Basketball,
    Football,
}

impl Sport {
    pub const ALL: [Sport; 6] = [
        Sport::Tennis,
        Sport::TableTennis,
        Sport::Boxing,
        Sport::Mma,
        Sport::Basketball,
        Sport::Football,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Tennis => "tennis",
            Sport::TableTennis => "table-tennis",
            Sport::Boxing => "boxing",
            Sport::Mma => "mma",
            Sport::Basketball => "basketball",
            Sport::Football => "football",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prediction strength, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "LOW",
            Confidence::Moderate => "MODERATE",
            Confidence::High => "HIGH",
            Confidence::VeryHigh => "VERY_HIGH",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One competitor's block in a match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    pub name: String,
    #[serde(flatten)]
    pub figures: PersonFigures,
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

/// Complete prediction for one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_date: NaiveDate,
    pub sport: Sport,
    #[serde(flatten)]
    pub cycle: UniversalCycle,
    pub player1: CompetitorAnalysis,
    pub player2: CompetitorAnalysis,
    #[serde(rename = "winner_prediction")]
    pub winner_name: String,
    pub confidence: Confidence,
    pub score_difference: u32,
    pub recommendation: String,
    #[serde(rename = "bet_size")]
    pub bet_size_hint: String,
    pub analysis_summary: String,
}

/// Points awarded by each alignment rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulePoints {
    pub life_path_match: u32,
    pub expression_match: u32,
    pub personal_year_match: u32,
    pub harmony: u32,
    pub personal_day: u32,
}

impl Default for RulePoints {
    fn default() -> Self {
        Self {
            life_path_match: 10,
            expression_match: 10,
            personal_year_match: 10,
            harmony: 3,
            personal_day: 5,
        }
    }
}

/// How personal year is compared with the universal day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalDayRule {
    /// Award when both figures are equal
    #[default]
    Exact,
    /// Award when both figures are odd or both are even
    Parity,
}

/// Minimum score difference for each tier above LOW
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceThresholds {
    pub moderate: u32,
    pub high: u32,
    pub very_high: u32,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            moderate: 6,
            high: 15,
            very_high: 25,
        }
    }
}

impl ConfidenceThresholds {
    pub fn tier_for(&self, score_difference: u32) -> Confidence {
        if score_difference >= self.very_high {
            Confidence::VeryHigh
        } else if score_difference >= self.high {
            Confidence::High
        } else if score_difference >= self.moderate {
            Confidence::Moderate
        } else {
            Confidence::Low
        }
    }
}

/// Bet size hint shown for each confidence tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetSizeHints {
    pub low: String,
    pub moderate: String,
    pub high: String,
    pub very_high: String,
}

impl Default for BetSizeHints {
    fn default() -> Self {
        Self {
            low: "Skip this match".to_string(),
            moderate: "1-2% of bankroll".to_string(),
            high: "3-5% of bankroll".to_string(),
            very_high: "5-7% of bankroll".to_string(),
        }
    }
}

impl BetSizeHints {
    pub fn for_tier(&self, confidence: Confidence) -> &str {
        match confidence {
            Confidence::Low => &self.low,
            Confidence::Moderate => &self.moderate,
            Confidence::High => &self.high,
            Confidence::VeryHigh => &self.very_high,
        }
    }
}

/// Tunable scoring table shared by the scorer and the predictor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub points: RulePoints,
    pub harmony_groups: Vec<Vec<u8>>,
    /// Maximum number of life path matches rewarded; `None` is unlimited
    pub life_path_match_limit: Option<usize>,
    pub personal_day_rule: PersonalDayRule,
    pub confidence: ConfidenceThresholds,
    pub bet_sizes: BetSizeHints,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            points: RulePoints::default(),
            harmony_groups: vec![vec![1, 5, 7], vec![2, 4, 8], vec![3, 6, 9]],
            life_path_match_limit: None,
            personal_day_rule: PersonalDayRule::default(),
            confidence: ConfidenceThresholds::default(),
            bet_sizes: BetSizeHints::default(),
        }
    }
}

impl ScoringRules {
    /// Index of the harmony group holding `figure`
    pub fn harmony_group_of(&self, figure: u8) -> Option<usize> {
        self.harmony_groups
            .iter()
            .position(|group| group.contains(&figure))
    }

    pub fn validate(&self) -> Result<(), String> {
        let mut seen = [false; 10];
        for group in &self.harmony_groups {
            for &figure in group {
                if !(1..=9).contains(&figure) {
                    return Err(format!("Harmony group figure {} is outside 1..9", figure));
                }
                if seen[figure as usize] {
                    return Err(format!("Figure {} appears in more than one harmony group", figure));
                }
                seen[figure as usize] = true;
            }
        }
        if let Some(missing) = (1..=9).find(|&figure| !seen[figure]) {
            return Err(format!("Figure {} is not in any harmony group", missing));
        }

        let thresholds = &self.confidence;
        if thresholds.moderate == 0 {
            return Err("The moderate confidence threshold must be above 0".to_string());
        }
        if !(thresholds.moderate < thresholds.high && thresholds.high < thresholds.very_high) {
            return Err(format!(
                "Confidence thresholds must ascend, got {}/{}/{}",
                thresholds.moderate, thresholds.high, thresholds.very_high
            ));
        }

        Ok(())
    }
}
