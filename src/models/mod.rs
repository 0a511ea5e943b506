// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BetSizeHints, Competitor, CompetitorAnalysis, Confidence, ConfidenceThresholds, MatchResult,
    PersonFigures, PersonalDayRule, RulePoints, ScoreBreakdown, ScoringRules, Sport, UniversalCycle,
};
pub use requests::{AnalyzeMatchRequest, ParsedMatch};
pub use responses::{DemoAnalyzeResponse, ErrorResponse, HealthResponse};
