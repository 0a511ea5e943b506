use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::core::{
    cycle::derive_universal_cycle,
    error::{NumerologyError, Result},
    person::{expression, life_path, personal_year},
    scoring::AlignmentScorer,
};
use crate::models::{
    CompetitorAnalysis, Competitor, Confidence, MatchResult, PersonFigures, ScoringRules, Sport,
    UniversalCycle,
};

/// Winner value reported when neither competitor has an edge
pub const TIE_SENTINEL: &str = "TIE";

/// Reasons quoted in the analysis summary
const SUMMARY_REASONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Player1,
    Player2,
    Tie,
}

/// Main prediction orchestrator
///
/// # Pipeline Stages
/// 1. Universal cycle for the match date
/// 2. Person figures for both competitors, evaluated in the match year
/// 3. Alignment scoring against the cycle
/// 4. Winner, confidence tier and betting guidance
#[derive(Debug, Clone)]
pub struct MatchPredictor {
    scorer: AlignmentScorer,
}

impl MatchPredictor {
    /// Build a predictor from a rules table
    ///
    /// The table is taken as is; use `try_new` for tables that have not been
    /// through `ScoringRules::validate`.
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            scorer: AlignmentScorer::new(rules),
        }
    }

    /// Build a predictor, rejecting an invalid rules table
    pub fn try_new(rules: ScoringRules) -> Result<Self> {
        rules
            .validate()
            .map_err(|e| NumerologyError::invalid(format!("scoring rules: {}", e)))?;
        Ok(Self::new(rules))
    }

    pub fn with_default_rules() -> Self {
        Self::new(ScoringRules::default())
    }

    pub fn rules(&self) -> &ScoringRules {
        self.scorer.rules()
    }

    /// Predict the outcome of a match between two competitors
    ///
    /// Either the whole result is produced or an `InvalidInput` error is
    /// returned; the result depends only on the arguments.
    pub fn predict(
        &self,
        player1: &Competitor,
        player2: &Competitor,
        match_date: NaiveDate,
        sport: Sport,
    ) -> Result<MatchResult> {
        let cycle = derive_universal_cycle(match_date).map_err(|e| e.for_field("match_date"))?;

        let player1 = self.analyze(player1, match_date, &cycle, "player1")?;
        let player2 = self.analyze(player2, match_date, &cycle, "player2")?;

        let score1 = player1.breakdown.score;
        let score2 = player2.breakdown.score;
        let score_difference = score1.abs_diff(score2);

        let verdict = match score1.cmp(&score2) {
            Ordering::Greater => Verdict::Player1,
            Ordering::Less => Verdict::Player2,
            // Equal scores: more individual awards wins
            Ordering::Equal => match player1
                .breakdown
                .reasons
                .len()
                .cmp(&player2.breakdown.reasons.len())
            {
                Ordering::Greater => Verdict::Player1,
                Ordering::Less => Verdict::Player2,
                Ordering::Equal => Verdict::Tie,
            },
        };

        let rules = self.rules();
        let confidence = match verdict {
            Verdict::Tie => Confidence::Low,
            _ => rules.confidence.tier_for(score_difference),
        };

        let (winner, loser) = match verdict {
            Verdict::Player1 | Verdict::Tie => (&player1, &player2),
            Verdict::Player2 => (&player2, &player1),
        };

        let (winner_name, recommendation, analysis_summary) = if verdict == Verdict::Tie {
            (
                TIE_SENTINEL.to_string(),
                "No bet: too close to call".to_string(),
                format!(
                    "No numerological edge between {} and {} ({} vs {}) on {} ({}), {} confidence.",
                    player1.name, player2.name, score1, score2, match_date, sport, confidence
                ),
            )
        } else {
            (
                winner.name.clone(),
                recommendation_for(confidence, &winner.name),
                summarize(winner, loser, match_date, sport, confidence),
            )
        };

        Ok(MatchResult {
            match_date,
            sport,
            cycle,
            bet_size_hint: rules.bet_sizes.for_tier(confidence).to_string(),
            player1,
            player2,
            winner_name,
            confidence,
            score_difference,
            recommendation,
            analysis_summary,
        })
    }

    fn analyze(
        &self,
        competitor: &Competitor,
        match_date: NaiveDate,
        cycle: &UniversalCycle,
        field: &str,
    ) -> Result<CompetitorAnalysis> {
        let name = competitor.name.trim();
        if name.is_empty() {
            return Err(NumerologyError::invalid("name must not be empty")
                .for_field(&format!("{}_name", field)));
        }

        // Match date was already checked by the cycle, so personal year
        // can only fail on the birthdate.

        let name_field = format!("{}_name", field);
        let birthdate_field = format!("{}_birthdate", field);
        let figures = PersonFigures {
            life_path: life_path(competitor.birthdate).map_err(|e| e.for_field(&birthdate_field))?,
            expression: expression(name).map_err(|e| e.for_field(&name_field))?,
            personal_year: personal_year(competitor.birthdate, match_date)
                .map_err(|e| e.for_field(&birthdate_field))?,
        };
        let breakdown = self.scorer.score(&figures, cycle);

        Ok(CompetitorAnalysis {
            name: name.to_string(),
            figures,
            breakdown,
        })
    }
}

impl Default for MatchPredictor {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

fn recommendation_for(confidence: Confidence, winner: &str) -> String {
    match confidence {
        Confidence::Low => format!("No bet: lean {}", winner),
        Confidence::Moderate => format!("Moderate bet on {}", winner),
        Confidence::High => format!("Strong bet on {}", winner),
        Confidence::VeryHigh => format!("Maximum conviction bet on {}", winner),
    }
}

fn summarize(
    winner: &CompetitorAnalysis,
    loser: &CompetitorAnalysis,
    match_date: NaiveDate,
    sport: Sport,
    confidence: Confidence,
) -> String {
    let mut summary = format!(
        "{} holds the numerological edge ({} vs {}) on {} ({}), {} confidence.",
        winner.name,
        winner.breakdown.score,
        loser.breakdown.score,
        match_date,
        sport,
        confidence
    );

    let leading: Vec<&str> = winner
        .breakdown
        .reasons
        .iter()
        .take(SUMMARY_REASONS)
        .map(String::as_str)
        .collect();
    if !leading.is_empty() {
        summary.push_str(" Key factors: ");
        summary.push_str(&leading.join("; "));
        summary.push('.');
    }

    summary
}
