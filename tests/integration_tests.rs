// Integration tests for Sports Numerology

use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sports_numerology::core::{MatchPredictor, NumerologyError, TIE_SENTINEL};
use sports_numerology::models::{Competitor, Confidence, MatchResult, RulePoints, ScoringRules, Sport};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn djokovic() -> Competitor {
    Competitor::new("Novak Djokovic", date(1987, 5, 22))
}

fn alcaraz() -> Competitor {
    Competitor::new("Carlos Alcaraz", date(2003, 5, 5))
}

fn reason_points(reason: &str) -> u32 {
    let start = reason.rfind("(+").expect("reason carries its points") + 2;
    reason[start..reason.len() - 1].parse().expect("points are numeric")
}

fn assert_invariants(result: &MatchResult) {
    let cycle = &result.cycle;
    for figure in [cycle.universal_year, cycle.universal_month, cycle.universal_day] {
        assert!((1..=9).contains(&figure), "cycle figure {} out of range", figure);
    }

    for player in [&result.player1, &result.player2] {
        let f = &player.figures;
        for figure in [f.life_path, f.expression, f.personal_year] {
            assert!((1..=9).contains(&figure), "{} figure {} out of range", player.name, figure);
        }
        let from_reasons: u32 = player.breakdown.reasons.iter().map(|r| reason_points(r)).sum();
        assert_eq!(player.breakdown.score, from_reasons);
    }

    let s1 = result.player1.breakdown.score;
    let s2 = result.player2.breakdown.score;
    assert_eq!(result.score_difference, s1.abs_diff(s2));

    if s1 > s2 {
        assert_eq!(result.winner_name, result.player1.name);
    } else if s2 > s1 {
        assert_eq!(result.winner_name, result.player2.name);
    } else {
        assert_eq!(result.confidence, Confidence::Low);
        let awards1 = result.player1.breakdown.reasons.len();
        let awards2 = result.player2.breakdown.reasons.len();
        if awards1 > awards2 {
            assert_eq!(result.winner_name, result.player1.name);
        } else if awards2 > awards1 {
            assert_eq!(result.winner_name, result.player2.name);
        } else {
            assert_eq!(result.winner_name, TIE_SENTINEL);
        }
    }

    assert!(matches!(
        result.confidence,
        Confidence::Low | Confidence::Moderate | Confidence::High | Confidence::VeryHigh
    ));
}

#[test]
fn test_integration_end_to_end_prediction() {
    let predictor = MatchPredictor::with_default_rules();
    let result = predictor
        .predict(&djokovic(), &alcaraz(), date(2024, 7, 14), Sport::Tennis)
        .unwrap();

    assert_eq!(result.cycle.universal_year, 8);
    assert_eq!(result.cycle.universal_month, 6);
    assert_eq!(result.cycle.universal_day, 2);

    assert_eq!(result.player1.figures.life_path, 7);
    assert_eq!(result.player1.figures.expression, 8);
    assert_eq!(result.player1.figures.personal_year, 8);
    assert_eq!(result.player2.figures.life_path, 6);
    assert_eq!(result.player2.figures.expression, 4);
    assert_eq!(result.player2.figures.personal_year, 9);

    assert_eq!(result.player1.breakdown.score, 20);
    assert_eq!(result.player2.breakdown.score, 10);
    assert_eq!(result.winner_name, "Novak Djokovic");
    assert_eq!(result.score_difference, 10);
    assert_eq!(result.confidence, Confidence::Moderate);

    assert_invariants(&result);
}

#[test]
fn test_integration_confidence_tiers() {
    let predictor = MatchPredictor::with_default_rules();

    // 2023-03-15: 35 vs 0
    let result = predictor
        .predict(&djokovic(), &alcaraz(), date(2023, 3, 15), Sport::Tennis)
        .unwrap();
    assert_eq!(result.score_difference, 35);
    assert_eq!(result.confidence, Confidence::VeryHigh);
    assert_eq!(result.bet_size_hint, "5-7% of bankroll");
    assert_eq!(result.recommendation, "Maximum conviction bet on Novak Djokovic");

    // 2024-07-10: 30 vs 10
    let result = predictor
        .predict(&djokovic(), &alcaraz(), date(2024, 7, 10), Sport::Tennis)
        .unwrap();
    assert_eq!(result.score_difference, 20);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.recommendation, "Strong bet on Novak Djokovic");

    // 2024-07-12: 20 vs 15
    let result = predictor
        .predict(&djokovic(), &alcaraz(), date(2024, 7, 12), Sport::Tennis)
        .unwrap();
    assert_eq!(result.score_difference, 5);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.bet_size_hint, "Skip this match");
    assert_eq!(result.recommendation, "No bet: lean Novak Djokovic");
}

#[test]
fn test_integration_tie_for_identical_competitors() {
    let predictor = MatchPredictor::with_default_rules();
    let result = predictor
        .predict(&alcaraz(), &alcaraz(), date(2024, 7, 14), Sport::TableTennis)
        .unwrap();

    assert_eq!(result.score_difference, 0);
    assert_eq!(result.winner_name, TIE_SENTINEL);
    assert_eq!(result.confidence, Confidence::Low);
    assert!(result.analysis_summary.starts_with("No numerological edge"));
    assert_invariants(&result);
}

#[test]
fn test_integration_empty_name_is_invalid_input() {
    let predictor = MatchPredictor::with_default_rules();
    let result = predictor.predict(
        &djokovic(),
        &Competitor::new("", date(2003, 5, 5)),
        date(2024, 7, 14),
        Sport::Tennis,
    );

    assert!(matches!(result, Err(NumerologyError::InvalidInput(_))));
}

#[test]
fn test_integration_deterministic_output() {
    let predictor = MatchPredictor::with_default_rules();
    let first = predictor
        .predict(&djokovic(), &alcaraz(), date(2024, 7, 14), Sport::Tennis)
        .unwrap();
    let second = MatchPredictor::with_default_rules()
        .predict(&djokovic(), &alcaraz(), date(2024, 7, 14), Sport::Tennis)
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

#[test]
fn test_integration_swapping_players_mirrors_result() {
    let predictor = MatchPredictor::with_default_rules();
    let forward = predictor
        .predict(&djokovic(), &alcaraz(), date(2025, 6, 9), Sport::Tennis)
        .unwrap();
    let reverse = predictor
        .predict(&alcaraz(), &djokovic(), date(2025, 6, 9), Sport::Tennis)
        .unwrap();

    assert_eq!(forward.player1, reverse.player2);
    assert_eq!(forward.winner_name, reverse.winner_name);
    assert_eq!(forward.confidence, reverse.confidence);
}

fn random_invariant_scan(predictor: &MatchPredictor, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ éü-'".chars().collect();

    let random_name = |rng: &mut StdRng| -> String {
        let len = rng.gen_range(1..24);
        let mut name: String = (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect();
        // guarantee at least one ASCII letter
        name.push(alphabet[rng.gen_range(0..26)]);
        name
    };

    let random_date = |rng: &mut StdRng, from: i32, to: i32| -> NaiveDate {
        date(rng.gen_range(from..to), rng.gen_range(1..=12), rng.gen_range(1..=28))
    };

    for _ in 0..5_000 {
        let p1 = Competitor::new(random_name(&mut rng), random_date(&mut rng, 1900, 2020));
        let p2 = Competitor::new(random_name(&mut rng), random_date(&mut rng, 1900, 2020));
        let match_date = random_date(&mut rng, 1990, 2100);
        let sport = Sport::ALL[rng.gen_range(0..Sport::ALL.len())];

        let result = predictor.predict(&p1, &p2, match_date, sport).unwrap();
        assert_invariants(&result);
    }
}

#[test]
fn test_integration_random_invariant_scan() {
    random_invariant_scan(&MatchPredictor::with_default_rules(), 0x5eed);
}

#[test]
fn test_integration_random_scan_with_award_count_tie_breaks() {
    // Harmony and personal day worth 5 each, so equal scores can hide
    // different award counts
    let rules = ScoringRules {
        points: RulePoints { harmony: 5, personal_day: 5, ..RulePoints::default() },
        ..ScoringRules::default()
    };
    random_invariant_scan(&MatchPredictor::try_new(rules).unwrap(), 0xbeef);
}

#[test]
fn test_integration_serialized_field_names() {
    let predictor = MatchPredictor::with_default_rules();
    let result = predictor
        .predict(&djokovic(), &alcaraz(), date(2024, 7, 14), Sport::Tennis)
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for key in [
        "match_date", "sport", "universal_year", "universal_month", "universal_day",
        "player1", "player2", "winner_prediction", "confidence", "score_difference",
        "recommendation", "bet_size", "analysis_summary",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    for key in ["name", "life_path", "expression", "personal_year", "score", "reasons"] {
        assert!(json["player1"].get(key).is_some(), "missing player1.{}", key);
    }

    let back: MatchResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
