use crate::screening::affordability::{
    estimate, CapacitySource, DEFAULT_INTEREST_RATE_PCT, DEFAULT_LOAN_TERM_YEARS, REVENUE_SHARE,
};
use crate::screening::domain::FinancingTerms;

#[test]
fn capacity_falls_back_to_the_revenue_share() {
    let breakdown = estimate(10_000.0, &FinancingTerms::default());

    assert_eq!(breakdown.capacity_source, CapacitySource::RevenueShare);
    assert_eq!(breakdown.payment_capacity, 10_000.0 * REVENUE_SHARE);
    assert_eq!(
        breakdown.monthly_rate,
        DEFAULT_INTEREST_RATE_PCT / 100.0 / 12.0
    );
    assert_eq!(breakdown.num_payments, DEFAULT_LOAN_TERM_YEARS * 12.0);
}

#[test]
fn after_expense_ceiling_wins_over_the_stated_ceiling() {
    let financing = FinancingTerms {
        max_monthly_payment_after_expenses: Some(2_400.0),
        max_monthly_payment: Some(3_100.0),
        ..FinancingTerms::default()
    };

    let breakdown = estimate(10_000.0, &financing);

    assert_eq!(breakdown.capacity_source, CapacitySource::AfterExpenseCeiling);
    assert_eq!(breakdown.payment_capacity, 2_400.0);
}

#[test]
fn zero_ceilings_are_skipped_rather_than_used() {
    let financing = FinancingTerms {
        max_monthly_payment_after_expenses: Some(0.0),
        max_monthly_payment: Some(3_100.0),
        ..FinancingTerms::default()
    };

    let breakdown = estimate(10_000.0, &financing);

    assert_eq!(breakdown.capacity_source, CapacitySource::StatedCeiling);
    assert_eq!(breakdown.payment_capacity, 3_100.0);
}

#[test]
fn zero_rate_loans_use_the_linear_closed_form() {
    let financing = FinancingTerms {
        max_monthly_payment_after_expenses: Some(2_000.0),
        interest_rate_pct: Some(0.0),
        loan_term_years: Some(10.0),
        ..FinancingTerms::default()
    };

    let breakdown = estimate(10_000.0, &financing);

    assert_eq!(breakdown.loan_amount, 240_000.0);
    assert_eq!(breakdown.max_home_price, 240_000.0);
}

#[test]
fn home_price_is_loan_amount_plus_down_payment() {
    let financing = FinancingTerms {
        down_payment: Some(50_000.0),
        ..FinancingTerms::default()
    };

    let breakdown = estimate(10_000.0, &financing);

    assert_eq!(
        breakdown.max_home_price,
        breakdown.loan_amount + 50_000.0
    );
    assert!(breakdown.max_home_price >= breakdown.down_payment);
}

#[test]
fn thirty_year_default_loan_lands_in_the_expected_range() {
    // 2,800 capacity at 6.5% over 360 payments prices out around 443k.
    let breakdown = estimate(10_000.0, &FinancingTerms::default());

    assert!(breakdown.loan_amount > 430_000.0);
    assert!(breakdown.loan_amount < 455_000.0);
}

#[test]
fn loan_amount_is_never_negative() {
    let financing = FinancingTerms {
        max_monthly_payment_after_expenses: Some(1.0),
        interest_rate_pct: Some(18.0),
        loan_term_years: Some(1.0),
        ..FinancingTerms::default()
    };

    let breakdown = estimate(500.0, &financing);

    assert!(breakdown.loan_amount >= 0.0);
}
