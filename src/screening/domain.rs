use serde::{Deserialize, Serialize};

/// Upper bound on how many monthly deposit figures an application may carry.
pub const MAX_STATEMENT_MONTHS: usize = 24;

/// Discrete FICO ranges offered on the intake form.
///
/// The scoring rules consume the numeric representative of each range, so an
/// invalid free-typed score is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditScoreRange {
    Exceptional,
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl CreditScoreRange {
    /// Numeric stand-in for the range used by the scoring bands.
    pub const fn representative(self) -> u16 {
        match self {
            CreditScoreRange::Exceptional => 850,
            CreditScoreRange::VeryGood => 770,
            CreditScoreRange::Good => 705,
            CreditScoreRange::Fair => 625,
            CreditScoreRange::Poor => 550,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CreditScoreRange::Exceptional => "800-850",
            CreditScoreRange::VeryGood => "740-799",
            CreditScoreRange::Good => "670-739",
            CreditScoreRange::Fair => "580-669",
            CreditScoreRange::Poor => "300-579",
        }
    }

    /// Menu order for presentation surfaces, strongest range first.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Exceptional,
            Self::VeryGood,
            Self::Good,
            Self::Fair,
            Self::Poor,
        ]
    }
}

/// Discrete self-employment history lengths offered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfEmploymentTenure {
    SixMonths,
    OneYear,
    EighteenMonths,
    TwoYears,
    ThreeYears,
    FourYears,
    FivePlusYears,
}

impl SelfEmploymentTenure {
    pub fn years(self) -> f64 {
        match self {
            SelfEmploymentTenure::SixMonths => 0.5,
            SelfEmploymentTenure::OneYear => 1.0,
            SelfEmploymentTenure::EighteenMonths => 1.5,
            SelfEmploymentTenure::TwoYears => 2.0,
            SelfEmploymentTenure::ThreeYears => 3.0,
            SelfEmploymentTenure::FourYears => 4.0,
            SelfEmploymentTenure::FivePlusYears => 5.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SelfEmploymentTenure::SixMonths => "6 months",
            SelfEmploymentTenure::OneYear => "1 year",
            SelfEmploymentTenure::EighteenMonths => "1.5 years",
            SelfEmploymentTenure::TwoYears => "2 years",
            SelfEmploymentTenure::ThreeYears => "3 years",
            SelfEmploymentTenure::FourYears => "4 years",
            SelfEmploymentTenure::FivePlusYears => "5+ years",
        }
    }

    pub const fn ordered() -> [Self; 7] {
        [
            Self::SixMonths,
            Self::OneYear,
            Self::EighteenMonths,
            Self::TwoYears,
            Self::ThreeYears,
            Self::FourYears,
            Self::FivePlusYears,
        ]
    }
}

/// Trailing window over which deposits are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementPeriod {
    TwelveMonths,
    TwentyFourMonths,
}

impl StatementPeriod {
    pub const fn months(self) -> usize {
        match self {
            StatementPeriod::TwelveMonths => 12,
            StatementPeriod::TwentyFourMonths => 24,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StatementPeriod::TwelveMonths => "12 months",
            StatementPeriod::TwentyFourMonths => "24 months",
        }
    }
}

impl Default for StatementPeriod {
    fn default() -> Self {
        Self::TwelveMonths
    }
}

/// Kind of property the borrower is financing. Collected and displayed, never
/// scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanType {
    Personal,
    Business,
}

impl LoanType {
    pub const fn label(self) -> &'static str {
        match self {
            LoanType::Personal => "personal",
            LoanType::Business => "business",
        }
    }
}

impl Default for LoanType {
    fn default() -> Self {
        Self::Personal
    }
}

/// Ordered monthly deposit history, oldest month first.
///
/// Construction sanitizes each entry (non-finite or negative deposits count
/// as zero) and discards anything past [`MAX_STATEMENT_MONTHS`]. Serialized
/// as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct RevenueHistory {
    entries: Vec<f64>,
}

impl RevenueHistory {
    pub fn from_entries(raw: impl IntoIterator<Item = f64>) -> Self {
        let entries = raw
            .into_iter()
            .take(MAX_STATEMENT_MONTHS)
            .map(sanitize_amount)
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Arithmetic mean of the first N deposits, N being the statement period.
    /// Months without a reported deposit count as zero.
    pub fn average_over(&self, period: StatementPeriod) -> f64 {
        let window = period.months();
        let total: f64 = self.entries.iter().take(window).sum();
        total / window as f64
    }
}

impl From<Vec<f64>> for RevenueHistory {
    fn from(raw: Vec<f64>) -> Self {
        Self::from_entries(raw)
    }
}

impl From<RevenueHistory> for Vec<f64> {
    fn from(history: RevenueHistory) -> Self {
        history.entries
    }
}

/// Itemized monthly obligations collected in advanced debt mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DebtBreakdown {
    #[serde(default)]
    pub car_loans: f64,
    #[serde(default)]
    pub credit_card_debt: f64,
    #[serde(default)]
    pub student_loans: f64,
    #[serde(default)]
    pub child_support: f64,
    #[serde(default)]
    pub other_mortgages: f64,
    #[serde(default)]
    pub other_loans: f64,
}

impl DebtBreakdown {
    pub fn total(&self) -> f64 {
        sanitize_amount(self.car_loans)
            + sanitize_amount(self.credit_card_debt)
            + sanitize_amount(self.student_loans)
            + sanitize_amount(self.child_support)
            + sanitize_amount(self.other_mortgages)
            + sanitize_amount(self.other_loans)
    }
}

/// Monthly debt reported either as one total or itemized by obligation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtProfile {
    Simple { total_monthly: f64 },
    Itemized(DebtBreakdown),
}

impl DebtProfile {
    /// Collapse either mode to a single monthly figure.
    pub fn monthly_total(&self) -> f64 {
        match self {
            DebtProfile::Simple { total_monthly } => sanitize_amount(*total_monthly),
            DebtProfile::Itemized(breakdown) => breakdown.total(),
        }
    }
}

impl Default for DebtProfile {
    fn default() -> Self {
        Self::Simple { total_monthly: 0.0 }
    }
}

/// Loan-shaping inputs. Absent values resolve through the ordered default
/// rules in [`affordability`](super::affordability).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancingTerms {
    #[serde(default)]
    pub max_monthly_payment_after_expenses: Option<f64>,
    #[serde(default)]
    pub max_monthly_payment: Option<f64>,
    #[serde(default)]
    pub down_payment: Option<f64>,
    #[serde(default)]
    pub interest_rate_pct: Option<f64>,
    #[serde(default)]
    pub loan_term_years: Option<f64>,
}

/// Finished draft handed over by the presentation layer.
///
/// The presentation layer owns the mutable draft state; the estimation core
/// only ever sees this immutable snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MortgageApplication {
    #[serde(default)]
    pub loan_type: LoanType,
    #[serde(default)]
    pub credit_score: Option<CreditScoreRange>,
    #[serde(default)]
    pub self_employment: Option<SelfEmploymentTenure>,
    #[serde(default)]
    pub statement_period: StatementPeriod,
    #[serde(default)]
    pub monthly_revenue: RevenueHistory,
    #[serde(default)]
    pub debt: DebtProfile,
    #[serde(default)]
    pub financing: FinancingTerms,
}

/// Validated, aggregated snapshot consumed by the estimation engine.
///
/// `average_monthly_revenue` is non-zero past intake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    pub loan_type: LoanType,
    pub credit_score: CreditScoreRange,
    pub self_employment: SelfEmploymentTenure,
    pub statement_period: StatementPeriod,
    pub average_monthly_revenue: f64,
    pub monthly_debt: f64,
    pub financing: FinancingTerms,
}

pub(crate) fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
