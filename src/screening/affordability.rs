use super::domain::FinancingTerms;
use serde::{Deserialize, Serialize};

/// Annual interest applied when the application leaves the rate blank.
pub const DEFAULT_INTEREST_RATE_PCT: f64 = 6.5;
/// Term length applied when the application leaves it blank.
pub const DEFAULT_LOAN_TERM_YEARS: f64 = 30.0;
/// Share of average revenue assumed when no payment ceiling is stated.
pub const REVENUE_SHARE: f64 = 0.28;

/// Which rule of the payment-capacity fallback chain produced the figure.
///
/// Resolution order: after-expense ceiling, stated ceiling, revenue share.
/// Non-positive entries are skipped rather than treated as a stated zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacitySource {
    AfterExpenseCeiling,
    StatedCeiling,
    RevenueShare,
}

impl CapacitySource {
    pub const fn label(self) -> &'static str {
        match self {
            CapacitySource::AfterExpenseCeiling => "stated max payment after expenses",
            CapacitySource::StatedCeiling => "stated max monthly payment",
            CapacitySource::RevenueShare => "28% of average revenue",
        }
    }
}

/// Affordability figures derived from a payment capacity via the
/// present-value-of-annuity formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityBreakdown {
    pub payment_capacity: f64,
    pub capacity_source: CapacitySource,
    pub monthly_rate: f64,
    pub num_payments: f64,
    pub loan_amount: f64,
    pub down_payment: f64,
    pub max_home_price: f64,
}

/// Estimate the maximum affordable home price for a given revenue level.
pub fn estimate(average_monthly_revenue: f64, financing: &FinancingTerms) -> AffordabilityBreakdown {
    let (payment_capacity, capacity_source) = resolve_capacity(average_monthly_revenue, financing);

    let monthly_rate =
        financing.interest_rate_pct.unwrap_or(DEFAULT_INTEREST_RATE_PCT) / 100.0 / 12.0;
    let num_payments = financing.loan_term_years.unwrap_or(DEFAULT_LOAN_TERM_YEARS) * 12.0;

    // The annuity closed form divides by the rate; a zero-rate loan reduces
    // to the payment count times the capacity.
    let loan_amount = if monthly_rate == 0.0 {
        payment_capacity * num_payments
    } else {
        payment_capacity * ((1.0 - (1.0 + monthly_rate).powf(-num_payments)) / monthly_rate)
    };

    let down_payment = financing.down_payment.unwrap_or(0.0).max(0.0);

    AffordabilityBreakdown {
        payment_capacity,
        capacity_source,
        monthly_rate,
        num_payments,
        loan_amount,
        down_payment,
        max_home_price: loan_amount + down_payment,
    }
}

fn resolve_capacity(
    average_monthly_revenue: f64,
    financing: &FinancingTerms,
) -> (f64, CapacitySource) {
    let stated = [
        (
            financing.max_monthly_payment_after_expenses,
            CapacitySource::AfterExpenseCeiling,
        ),
        (financing.max_monthly_payment, CapacitySource::StatedCeiling),
    ];

    for (value, source) in stated {
        if let Some(amount) = value {
            if amount.is_finite() && amount > 0.0 {
                return (amount, source);
            }
        }
    }

    (
        average_monthly_revenue * REVENUE_SHARE,
        CapacitySource::RevenueShare,
    )
}
