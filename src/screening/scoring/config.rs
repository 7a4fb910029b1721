use serde::{Deserialize, Serialize};

/// One additive tier: `points` are awarded when the observed value clears
/// (or, for ratio bands, stays under) `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointBand {
    pub threshold: f64,
    pub points: u8,
}

impl PointBand {
    pub const fn new(threshold: f64, points: u8) -> Self {
        Self { threshold, points }
    }
}

/// Rubric configuration describing the additive scoring weights.
///
/// Floor bands are first-match with thresholds ordered high to low; the
/// debt-ratio bands are upper bounds ordered tightest first. [`Default`]
/// carries the production weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRubric {
    /// Bands over the representative FICO value.
    pub credit_bands: Vec<PointBand>,
    pub credit_floor_points: u8,
    /// Bands over average monthly revenue.
    pub revenue_bands: Vec<PointBand>,
    pub revenue_floor_points: u8,
    /// Bands over years of self-employment.
    pub tenure_bands: Vec<PointBand>,
    pub tenure_floor_points: u8,
    /// Upper bounds on the debt-to-income ratio. A ratio clearing no band
    /// scores zero points.
    pub debt_ratio_bands: Vec<PointBand>,
    pub score_cap: u8,
}

impl Default for ScoringRubric {
    fn default() -> Self {
        Self {
            credit_bands: vec![
                PointBand::new(800.0, 35),
                PointBand::new(740.0, 30),
                PointBand::new(670.0, 25),
                PointBand::new(580.0, 15),
            ],
            credit_floor_points: 5,
            revenue_bands: vec![
                PointBand::new(15_000.0, 30),
                PointBand::new(10_000.0, 25),
                PointBand::new(5_000.0, 20),
                PointBand::new(3_000.0, 15),
            ],
            revenue_floor_points: 5,
            tenure_bands: vec![
                PointBand::new(3.0, 20),
                PointBand::new(2.0, 15),
                PointBand::new(1.0, 10),
            ],
            tenure_floor_points: 5,
            debt_ratio_bands: vec![
                PointBand::new(0.2, 15),
                PointBand::new(0.3, 12),
                PointBand::new(0.4, 8),
                PointBand::new(0.5, 5),
            ],
            score_cap: 100,
        }
    }
}
