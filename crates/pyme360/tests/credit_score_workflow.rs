//! Integration scenarios for scoring a full company credit history.
//!
//! The fixture is the Textiles Andinos backend document, ingested through the public import
//! API with its Spanish field names intact.

use chrono::NaiveDate;

use pyme360::scoring::{
    compute_score, load_history_from_path, CreditLevel, FactorKind, NewCreditFactor,
    NewCreditVariant, ScoringOptions, TrustComponents, TrustScoreCard, TrustTier,
};

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/textiles_andinos.json",
        env!("CARGO_MANIFEST_DIR")
    )
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date")
}

#[test]
fn sample_company_scores_excellent_without_recent_applications() {
    let history = load_history_from_path(fixture_path()).expect("fixture loads");
    let options = ScoringOptions::new(as_of()).with_variant(NewCreditVariant::NewApplications);

    let result = compute_score(&history, &options);

    let payments = &result.factor_scores.payment_history.supporting_metrics;
    assert_eq!(payments.total_payments, 120);
    assert_eq!(payments.late_payments, 3);
    assert_eq!(payments.monthly.len(), 6);
    assert_eq!(
        (payments.monthly[5].year, payments.monthly[5].month),
        (2023, 12)
    );

    let utilization = &result.factor_scores.credit_utilization.supporting_metrics;
    assert!((utilization.utilization - 47.733).abs() < 0.01);
    assert_eq!(utilization.by_account.len(), 5);
    assert!(utilization
        .by_account
        .windows(2)
        .all(|pair| pair[0].utilization >= pair[1].utilization));

    let ages = &result.factor_scores.history_length.supporting_metrics;
    assert_eq!(ages.accounts_counted, 3);
    assert!(ages.average_age_years > 5.0 && ages.average_age_years < 5.3);

    let scores: Vec<u8> = FactorKind::ALL
        .iter()
        .map(|factor| result.factor_scores.score(*factor))
        .collect();
    assert_eq!(scores, vec![90, 75, 90, 100, 100]);
    assert_eq!(result.composite_score, 87.5);
    assert_eq!(result.rescaled_score, 781);
    assert_eq!(result.credit_level, CreditLevel::Excellent);
}

#[test]
fn sample_company_incidents_pull_the_score_down() {
    let history = load_history_from_path(fixture_path()).expect("fixture loads");
    let options = ScoringOptions::new(as_of()).with_variant(NewCreditVariant::Incidents);

    let result = compute_score(&history, &options);

    match &result.factor_scores.incidents_or_new_applications {
        NewCreditFactor::Incidents(factor) => {
            assert_eq!(factor.score, 40);
            assert_eq!(factor.supporting_metrics.total_amount, 49_875_000.0);
        }
        other => panic!("expected incidents factor, got {other:?}"),
    }
    assert_eq!(result.rescaled_score, 748);
    assert_eq!(result.credit_level, CreditLevel::Good);
}

#[test]
fn result_serializes_in_camel_case() {
    let history = load_history_from_path(fixture_path()).expect("fixture loads");
    let result = compute_score(&history, &ScoringOptions::new(as_of()));

    let json = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(json["rescaledScore"], 748);
    assert_eq!(json["factorScores"]["creditMix"]["supportingMetrics"]["typeCount"], 4);
    assert_eq!(
        json["factorScores"]["creditMix"]["supportingMetrics"]["accountsByType"]
            ["Commercial Credit"],
        2
    );
    assert_eq!(json["contributions"][0]["factor"], "paymentHistory");
}

#[test]
fn trust_card_uses_credit_payment_history_for_punctuality() {
    let history = load_history_from_path(fixture_path()).expect("fixture loads");
    let credit = compute_score(&history, &ScoringOptions::new(as_of()));

    let components = TrustComponents {
        sustainability: 78,
        tax_compliance: 92,
        labor_practices: 84,
        financial_stability: 81,
        payment_punctuality: None,
        innovation: 68,
    };
    let card = TrustScoreCard::compute(
        &components,
        Some(credit.factor_scores.payment_history.score),
    );

    // 11.7 + 18.4 + 12.6 + 16.2 + 18 + 6.8
    assert_eq!(card.score, 84);
    assert_eq!(card.tier, TrustTier::Gold);
    assert_eq!(card.benefits.len(), 5);
}
