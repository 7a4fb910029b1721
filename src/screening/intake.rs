use super::domain::{BorrowerProfile, MortgageApplication};

/// Validation errors raised while turning an application into a borrower
/// profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field missing: credit score range")]
    MissingCreditScore,
    #[error("required field missing: years of self-employment")]
    MissingSelfEmploymentTenure,
    #[error("required field missing: no revenue reported for the statement period")]
    NoReportedRevenue,
}

/// Aggregate and validate a finished application.
///
/// Optional amounts default to zero; only the three signals the score cannot
/// be computed without are enforced. The whole intake either succeeds or
/// reports one validation error.
pub fn borrower_profile(
    application: &MortgageApplication,
) -> Result<BorrowerProfile, ValidationError> {
    let average_monthly_revenue = application
        .monthly_revenue
        .average_over(application.statement_period);
    let monthly_debt = application.debt.monthly_total();

    let credit_score = application
        .credit_score
        .ok_or(ValidationError::MissingCreditScore)?;
    let self_employment = application
        .self_employment
        .ok_or(ValidationError::MissingSelfEmploymentTenure)?;
    if average_monthly_revenue == 0.0 {
        return Err(ValidationError::NoReportedRevenue);
    }

    Ok(BorrowerProfile {
        loan_type: application.loan_type,
        credit_score,
        self_employment,
        statement_period: application.statement_period,
        average_monthly_revenue,
        monthly_debt,
        financing: application.financing,
    })
}
