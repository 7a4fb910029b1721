use super::common::*;
use crate::screening::report::{
    format_currency, format_percent, month_labels, ApprovalOutlook, AssessmentView,
};
use crate::screening::domain::{LoanType, StatementPeriod};

#[test]
fn outlook_tiers_match_the_display_thresholds() {
    assert_eq!(ApprovalOutlook::from_score(100), ApprovalOutlook::Strong);
    assert_eq!(ApprovalOutlook::from_score(70), ApprovalOutlook::Strong);
    assert_eq!(ApprovalOutlook::from_score(69), ApprovalOutlook::Moderate);
    assert_eq!(ApprovalOutlook::from_score(50), ApprovalOutlook::Moderate);
    assert_eq!(ApprovalOutlook::from_score(49), ApprovalOutlook::Weak);
    assert_eq!(ApprovalOutlook::from_score(0), ApprovalOutlook::Weak);
}

#[test]
fn currency_formatting_groups_thousands() {
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(950.4), "$950");
    assert_eq!(format_currency(10_000.0), "$10,000");
    assert_eq!(format_currency(1_234_567.49), "$1,234,567");
}

#[test]
fn percent_formatting_rounds_to_whole_points() {
    assert_eq!(format_percent(0.2), "20%");
    assert_eq!(format_percent(0.29), "29%");
    assert_eq!(format_percent(0.0), "0%");
}

#[test]
fn month_labels_wrap_into_a_second_year() {
    let labels = month_labels(StatementPeriod::TwentyFourMonths);

    assert_eq!(labels.len(), 24);
    assert_eq!(labels[0], "Jan Y1");
    assert_eq!(labels[11], "Dec Y1");
    assert_eq!(labels[12], "Jan Y2");
    assert_eq!(labels[23], "Dec Y2");
}

#[test]
fn assessment_view_formats_the_three_headline_figures() {
    let outcome = engine().estimate(&application()).expect("valid application");

    let view = AssessmentView::from_outcome(
        &outcome,
        LoanType::Personal,
        StatementPeriod::TwelveMonths,
    );

    assert_eq!(view.approval_score, 92);
    assert_eq!(view.outlook, ApprovalOutlook::Strong);
    assert_eq!(view.outlook_label, "Strong");
    assert_eq!(view.average_monthly_revenue, "$10,000");
    assert_eq!(view.debt_to_income, "20%");
    assert_eq!(view.payment_capacity, "$2,800");
    assert_eq!(view.capacity_source_label, "28% of average revenue");
    assert_eq!(view.components.len(), 4);
    assert!(view.max_home_price.starts_with('$'));
}
