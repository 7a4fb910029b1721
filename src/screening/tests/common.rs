use crate::screening::domain::{
    BorrowerProfile, CreditScoreRange, DebtProfile, FinancingTerms, LoanType,
    MortgageApplication, RevenueHistory, SelfEmploymentTenure, StatementPeriod,
};
use crate::screening::scoring::{EstimationEngine, ScoringRubric};

pub(super) fn flat_revenue(amount: f64, months: usize) -> RevenueHistory {
    RevenueHistory::from_entries(vec![amount; months])
}

/// The worked scenario: 800-850 credit, 3 years self-employed, 12 months of
/// 10,000 deposits, 2,000 simple monthly debt.
pub(super) fn application() -> MortgageApplication {
    MortgageApplication {
        loan_type: LoanType::Personal,
        credit_score: Some(CreditScoreRange::Exceptional),
        self_employment: Some(SelfEmploymentTenure::ThreeYears),
        statement_period: StatementPeriod::TwelveMonths,
        monthly_revenue: flat_revenue(10_000.0, 12),
        debt: DebtProfile::Simple {
            total_monthly: 2_000.0,
        },
        financing: FinancingTerms::default(),
    }
}

pub(super) fn profile(
    credit_score: CreditScoreRange,
    average_monthly_revenue: f64,
    self_employment: SelfEmploymentTenure,
    monthly_debt: f64,
) -> BorrowerProfile {
    BorrowerProfile {
        loan_type: LoanType::Personal,
        credit_score,
        self_employment,
        statement_period: StatementPeriod::TwelveMonths,
        average_monthly_revenue,
        monthly_debt,
        financing: FinancingTerms::default(),
    }
}

pub(super) fn engine() -> EstimationEngine {
    EstimationEngine::new(ScoringRubric::default())
}
