mod config;
mod rules;

pub use config::{PointBand, ScoringRubric};

use super::affordability::{self, AffordabilityBreakdown};
use super::domain::{BorrowerProfile, MortgageApplication};
use super::intake::{self, ValidationError};
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric to validated borrower profiles.
pub struct EstimationEngine {
    rubric: ScoringRubric,
}

impl EstimationEngine {
    pub fn new(rubric: ScoringRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &ScoringRubric {
        &self.rubric
    }

    /// Validate, score, and estimate affordability in one call.
    ///
    /// The whole computation either succeeds or reports one validation
    /// error; there is no partial result.
    pub fn estimate(
        &self,
        application: &MortgageApplication,
    ) -> Result<EstimateOutcome, ValidationError> {
        let profile = intake::borrower_profile(application)?;
        Ok(self.estimate_profile(&profile))
    }

    /// Score an already-validated profile. Pure and infallible: identical
    /// profiles yield identical outcomes.
    pub fn estimate_profile(&self, profile: &BorrowerProfile) -> EstimateOutcome {
        let (components, approval_score, debt_to_income) =
            rules::score_profile(profile, &self.rubric);
        let affordability =
            affordability::estimate(profile.average_monthly_revenue, &profile.financing);

        EstimateOutcome {
            approval_score,
            average_monthly_revenue: profile.average_monthly_revenue,
            max_home_price: affordability.max_home_price,
            debt_to_income,
            components,
            affordability,
        }
    }
}

impl Default for EstimationEngine {
    fn default() -> Self {
        Self::new(ScoringRubric::default())
    }
}

/// Factors permitted in the scoring rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    CreditScore,
    AverageRevenue,
    SelfEmploymentTenure,
    DebtToIncome,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::CreditScore => "Credit score",
            ScoreFactor::AverageRevenue => "Average monthly revenue",
            ScoreFactor::SelfEmploymentTenure => "Self-employment tenure",
            ScoreFactor::DebtToIncome => "Debt-to-income ratio",
        }
    }
}

/// Discrete contribution to an approval score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

/// Result snapshot produced by a single estimation call. Has no identity
/// beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateOutcome {
    pub approval_score: u8,
    pub average_monthly_revenue: f64,
    pub max_home_price: f64,
    pub debt_to_income: f64,
    pub components: Vec<ScoreComponent>,
    pub affordability: AffordabilityBreakdown,
}
