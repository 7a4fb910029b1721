use super::super::domain::BorrowerProfile;
use super::config::{PointBand, ScoringRubric};
use super::{ScoreComponent, ScoreFactor};

/// First band whose threshold the value meets or exceeds, else the floor.
fn resolve_floor(bands: &[PointBand], value: f64, floor: u8) -> (u8, Option<f64>) {
    for band in bands {
        if value >= band.threshold {
            return (band.points, Some(band.threshold));
        }
    }
    (floor, None)
}

/// Tightest upper bound the ratio stays under. No match scores zero points;
/// ratios at or past the loosest bound are a deliberate cliff, not an error.
fn resolve_ceiling(bands: &[PointBand], ratio: f64) -> (u8, Option<f64>) {
    for band in bands {
        if ratio < band.threshold {
            return (band.points, Some(band.threshold));
        }
    }
    (0, None)
}

pub(crate) fn score_profile(
    profile: &BorrowerProfile,
    rubric: &ScoringRubric,
) -> (Vec<ScoreComponent>, u8, f64) {
    let mut components = Vec::with_capacity(4);
    let mut total: u16 = 0;

    let credit_value = f64::from(profile.credit_score.representative());
    let (points, band) = resolve_floor(&rubric.credit_bands, credit_value, rubric.credit_floor_points);
    components.push(ScoreComponent {
        factor: ScoreFactor::CreditScore,
        points,
        notes: match band {
            Some(threshold) => format!(
                "range {} scores at or above {threshold:.0}",
                profile.credit_score.label()
            ),
            None => format!("range {} falls below every band", profile.credit_score.label()),
        },
    });
    total += u16::from(points);

    let revenue = profile.average_monthly_revenue;
    let (points, band) = resolve_floor(&rubric.revenue_bands, revenue, rubric.revenue_floor_points);
    components.push(ScoreComponent {
        factor: ScoreFactor::AverageRevenue,
        points,
        notes: match band {
            Some(threshold) => format!("average revenue {revenue:.2} at or above {threshold:.0}"),
            None => format!("average revenue {revenue:.2} falls below every band"),
        },
    });
    total += u16::from(points);

    let tenure_years = profile.self_employment.years();
    let (points, band) = resolve_floor(&rubric.tenure_bands, tenure_years, rubric.tenure_floor_points);
    components.push(ScoreComponent {
        factor: ScoreFactor::SelfEmploymentTenure,
        points,
        notes: match band {
            Some(threshold) => {
                format!("{tenure_years:.1} years self-employed at or above {threshold:.0}")
            }
            None => format!("{tenure_years:.1} years self-employed falls below every band"),
        },
    });
    total += u16::from(points);

    // average_monthly_revenue is non-zero past intake.
    let debt_to_income = profile.monthly_debt / profile.average_monthly_revenue;
    let (points, band) = resolve_ceiling(&rubric.debt_ratio_bands, debt_to_income);
    components.push(ScoreComponent {
        factor: ScoreFactor::DebtToIncome,
        points,
        notes: match band {
            Some(bound) => format!("ratio {debt_to_income:.2} under {bound:.2}"),
            None => format!("ratio {debt_to_income:.2} clears no band"),
        },
    });
    total += u16::from(points);

    let approval_score = total.min(u16::from(rubric.score_cap)) as u8;
    (components, approval_score, debt_to_income)
}
