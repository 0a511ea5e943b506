use std::fmt;

use crate::models::{PersonFigures, PersonalDayRule, ScoreBreakdown, ScoringRules, UniversalCycle};

/// The alignment rules, in the order they are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentRule {
    LifePathMatch,
    ExpressionMatch,
    PersonalYearMatch,
    Harmony,
    PersonalDay,
}

/// A single point award, rendered as one reason line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Award {
    pub rule: AlignmentRule,
    pub points: u32,
    pub personal: (&'static str, u8),
    pub universal: (&'static str, u8),
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.rule {
            AlignmentRule::Harmony => "harmonizes with",
            AlignmentRule::PersonalDay => "aligns with",
            _ => "matches",
        };
        write!(
            f,
            "{} {} {} {} {} (+{})",
            self.personal.0, self.personal.1, verb, self.universal.0, self.universal.1, self.points
        )
    }
}

/// Scores a competitor's figures against the universal cycle
#[derive(Debug, Clone)]
pub struct AlignmentScorer {
    rules: ScoringRules,
}

impl AlignmentScorer {
    pub fn new(rules: ScoringRules) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self::new(ScoringRules::default())
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Every award the figures earn, in rule order
    ///
    /// Rules are independent; one competitor can collect several awards.
    pub fn awards(&self, person: &PersonFigures, cycle: &UniversalCycle) -> Vec<Award> {
        let points = &self.rules.points;
        let mut awards = Vec::new();

        // Rule 1: life path against each universal figure
        let universal = [
            ("Universal Year", cycle.universal_year),
            ("Universal Month", cycle.universal_month),
            ("Universal Day", cycle.universal_day),
        ];
        let life_path_limit = self.rules.life_path_match_limit.unwrap_or(universal.len());
        awards.extend(
            universal
                .into_iter()
                .filter(|(_, figure)| *figure == person.life_path)
                .take(life_path_limit)
                .map(|target| Award {
                    rule: AlignmentRule::LifePathMatch,
                    points: points.life_path_match,
                    personal: ("Life Path", person.life_path),
                    universal: target,
                }),
        );

        // Rule 2
        if person.expression == cycle.universal_year {
            awards.push(Award {
                rule: AlignmentRule::ExpressionMatch,
                points: points.expression_match,
                personal: ("Expression", person.expression),
                universal: ("Universal Year", cycle.universal_year),
            });
        }

        // Rule 3
        if person.personal_year == cycle.universal_year {
            awards.push(Award {
                rule: AlignmentRule::PersonalYearMatch,
                points: points.personal_year_match,
                personal: ("Personal Year", person.personal_year),
                universal: ("Universal Year", cycle.universal_year),
            });
        }

        // Rule 4: equal figures are already rewarded by rule 1
        if person.life_path != cycle.universal_year
            && self.same_harmony_group(person.life_path, cycle.universal_year)
        {
            awards.push(Award {
                rule: AlignmentRule::Harmony,
                points: points.harmony,
                personal: ("Life Path", person.life_path),
                universal: ("Universal Year", cycle.universal_year),
            });
        }

        // Rule 5
        let day_aligned = match self.rules.personal_day_rule {
            PersonalDayRule::Exact => person.personal_year == cycle.universal_day,
            PersonalDayRule::Parity => person.personal_year % 2 == cycle.universal_day % 2,
        };
        if day_aligned {
            awards.push(Award {
                rule: AlignmentRule::PersonalDay,
                points: points.personal_day,
                personal: ("Personal Year", person.personal_year),
                universal: ("Universal Day", cycle.universal_day),
            });
        }

        awards
    }

    /// Score and reasons for one competitor
    ///
    /// Both come from the same award list, so every point has a reason line
    /// and every reason line carries its points.
    pub fn score(&self, person: &PersonFigures, cycle: &UniversalCycle) -> ScoreBreakdown {
        let awards = self.awards(person, cycle);

        ScoreBreakdown {
            score: awards.iter().map(|award| award.points).sum(),
            reasons: awards.iter().map(ToString::to_string).collect(),
        }
    }

    fn same_harmony_group(&self, a: u8, b: u8) -> bool {
        match (self.rules.harmony_group_of(a), self.rules.harmony_group_of(b)) {
            (Some(group_a), Some(group_b)) => group_a == group_b,
            _ => false,
        }
    }
}

impl Default for AlignmentScorer {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
