use super::super::domain::{LoanType, StatementPeriod};
use super::super::scoring::{EstimateOutcome, ScoreComponent};
use super::{format_currency, format_percent};
use serde::Serialize;

/// Display posture for a computed approval score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalOutlook {
    Strong,
    Moderate,
    Weak,
}

impl ApprovalOutlook {
    pub const STRONG_FLOOR: u8 = 70;
    pub const MODERATE_FLOOR: u8 = 50;

    pub fn from_score(score: u8) -> Self {
        if score >= Self::STRONG_FLOOR {
            Self::Strong
        } else if score >= Self::MODERATE_FLOOR {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreComponentView {
    pub factor_label: &'static str,
    pub points: u8,
    pub notes: String,
}

impl ScoreComponent {
    pub fn to_view(&self) -> ScoreComponentView {
        ScoreComponentView {
            factor_label: self.factor.label(),
            points: self.points,
            notes: self.notes.clone(),
        }
    }
}

/// Assessment summary with the three headline figures pre-formatted for
/// display surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub loan_type_label: &'static str,
    pub statement_period_label: &'static str,
    pub approval_score: u8,
    pub outlook: ApprovalOutlook,
    pub outlook_label: &'static str,
    pub average_monthly_revenue: String,
    pub max_home_price: String,
    pub debt_to_income: String,
    pub payment_capacity: String,
    pub capacity_source_label: &'static str,
    pub components: Vec<ScoreComponentView>,
}

impl AssessmentView {
    pub fn from_outcome(
        outcome: &EstimateOutcome,
        loan_type: LoanType,
        statement_period: StatementPeriod,
    ) -> Self {
        let outlook = ApprovalOutlook::from_score(outcome.approval_score);

        Self {
            loan_type_label: loan_type.label(),
            statement_period_label: statement_period.label(),
            approval_score: outcome.approval_score,
            outlook,
            outlook_label: outlook.label(),
            average_monthly_revenue: format_currency(outcome.average_monthly_revenue),
            max_home_price: format_currency(outcome.max_home_price),
            debt_to_income: format_percent(outcome.debt_to_income),
            payment_capacity: format_currency(outcome.affordability.payment_capacity),
            capacity_source_label: outcome.affordability.capacity_source.label(),
            components: outcome.components.iter().map(ScoreComponent::to_view).collect(),
        }
    }
}

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Column labels for a statement window, `Jan Y1` through `Dec Y2`.
pub fn month_labels(period: StatementPeriod) -> Vec<String> {
    (0..period.months())
        .map(|index| {
            let month = MONTH_ABBREVIATIONS[index % 12];
            let year = index / 12 + 1;
            format!("{month} Y{year}")
        })
        .collect()
}
