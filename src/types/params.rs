use crate::{
    DEFAULT_DEVIATION_GAIN, DEFAULT_MAX_MULTIPLIER, DEFAULT_MIN_MULTIPLIER,
    DEFAULT_REBATE_THRESHOLD, DEFAULT_SURGE_THRESHOLD, MAX_MULTIPLIER_LIMIT,
    MULTIPLIER_DENOMINATOR,
};

/// Parameters of the deviation-to-multiplier curve.
///
/// Thresholds and clamps are fixed point over `MULTIPLIER_DENOMINATOR`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviationFeeConstants {
    /// The rebate regime begins below this fraction of the moving average.
    pub rebate_threshold: u16,
    /// The surge regime begins above this fraction of the moving average.
    pub surge_threshold: u16,
    /// Multiplier change per 1.0 of deviation ratio beyond a regime bound.
    pub deviation_gain: u32,
    /// Lower clamp of the multiplier.
    pub min_multiplier: u16,
    /// Upper clamp of the multiplier.
    pub max_multiplier: u32,
}

impl DeviationFeeConstants {
    /// Checks that the curve is well formed: the neutral band must contain
    /// 1.0, the clamp range must contain 1.0 and the gain must be non-zero.
    pub fn validate_constants(&self) -> bool {
        if self.rebate_threshold > MULTIPLIER_DENOMINATOR {
            return false;
        }
        if self.surge_threshold < MULTIPLIER_DENOMINATOR {
            return false;
        }
        if self.deviation_gain == 0 {
            return false;
        }
        if self.min_multiplier > MULTIPLIER_DENOMINATOR {
            return false;
        }
        if self.max_multiplier < u32::from(MULTIPLIER_DENOMINATOR) {
            return false;
        }
        if self.max_multiplier > MAX_MULTIPLIER_LIMIT {
            return false;
        }
        true
    }
}

impl Default for DeviationFeeConstants {
    fn default() -> Self {
        Self {
            rebate_threshold: DEFAULT_REBATE_THRESHOLD,
            surge_threshold: DEFAULT_SURGE_THRESHOLD,
            deviation_gain: DEFAULT_DEVIATION_GAIN,
            min_multiplier: DEFAULT_MIN_MULTIPLIER,
            max_multiplier: DEFAULT_MAX_MULTIPLIER,
        }
    }
}
