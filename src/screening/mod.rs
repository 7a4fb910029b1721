//! Mortgage approval screening: intake validation, additive approval
//! scoring, and affordability estimation for self-employed borrowers.
//!
//! The pipeline is deliberately pure: a [`MortgageApplication`] snapshot goes
//! in, an [`EstimateOutcome`] comes out, and the only failure mode is a
//! [`ValidationError`] when a required signal is missing.

pub mod affordability;
pub mod domain;
pub mod intake;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use affordability::{AffordabilityBreakdown, CapacitySource};
pub use domain::{
    BorrowerProfile, CreditScoreRange, DebtBreakdown, DebtProfile, FinancingTerms, LoanType,
    MortgageApplication, RevenueHistory, SelfEmploymentTenure, StatementPeriod,
    MAX_STATEMENT_MONTHS,
};
pub use intake::{borrower_profile, ValidationError};
pub use report::{ApprovalOutlook, AssessmentView, ScoreComponentView};
pub use scoring::{
    EstimateOutcome, EstimationEngine, PointBand, ScoreComponent, ScoreFactor, ScoringRubric,
};
