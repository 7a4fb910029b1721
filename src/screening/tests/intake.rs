use super::common::*;
use crate::screening::domain::{
    DebtBreakdown, DebtProfile, RevenueHistory, StatementPeriod,
};
use crate::screening::intake::{borrower_profile, ValidationError};

#[test]
fn intake_rejects_missing_credit_score() {
    let mut application = application();
    application.credit_score = None;

    let err = borrower_profile(&application).expect_err("credit score required");

    assert_eq!(err, ValidationError::MissingCreditScore);
}

#[test]
fn intake_rejects_missing_tenure() {
    let mut application = application();
    application.self_employment = None;

    let err = borrower_profile(&application).expect_err("tenure required");

    assert_eq!(err, ValidationError::MissingSelfEmploymentTenure);
}

#[test]
fn intake_rejects_zero_average_revenue() {
    let mut application = application();
    application.monthly_revenue = flat_revenue(0.0, 12);

    let err = borrower_profile(&application).expect_err("revenue required");

    assert_eq!(err, ValidationError::NoReportedRevenue);
    assert!(err.to_string().contains("required field missing"));
}

#[test]
fn intake_averages_over_the_full_window_even_when_entries_are_short() {
    let mut application = application();
    application.monthly_revenue = flat_revenue(12_000.0, 6);

    let profile = borrower_profile(&application).expect("application validates");

    assert_eq!(profile.average_monthly_revenue, 6_000.0);
}

#[test]
fn intake_ignores_entries_beyond_the_statement_period() {
    let mut application = application();
    application.statement_period = StatementPeriod::TwelveMonths;
    let mut entries = vec![10_000.0; 12];
    entries.extend(vec![50_000.0; 12]);
    application.monthly_revenue = RevenueHistory::from_entries(entries);

    let profile = borrower_profile(&application).expect("application validates");

    assert_eq!(profile.average_monthly_revenue, 10_000.0);
}

#[test]
fn intake_sanitizes_negative_and_non_finite_deposits() {
    let mut application = application();
    application.monthly_revenue =
        RevenueHistory::from_entries(vec![12_000.0, -3_000.0, f64::NAN, 12_000.0]);

    let profile = borrower_profile(&application).expect("application validates");

    assert_eq!(profile.average_monthly_revenue, 2_000.0);
}

#[test]
fn itemized_debt_collapses_to_the_same_total_as_simple_mode() {
    let simple = DebtProfile::Simple { total_monthly: 500.0 };
    let itemized = DebtProfile::Itemized(DebtBreakdown {
        car_loans: 300.0,
        credit_card_debt: 200.0,
        ..DebtBreakdown::default()
    });

    assert_eq!(simple.monthly_total(), itemized.monthly_total());
}

#[test]
fn absent_optional_amounts_default_to_zero_debt() {
    let mut application = application();
    application.debt = DebtProfile::default();

    let profile = borrower_profile(&application).expect("application validates");

    assert_eq!(profile.monthly_debt, 0.0);
}
