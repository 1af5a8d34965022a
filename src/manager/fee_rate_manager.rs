use crate::{
    compute_deviation_multiplier, compute_effective_fee_rate, DeviationFeeConstants, ErrorCode,
    FeeDecision, MovingAverageSnapshot, FEE_RATE_HARD_LIMIT,
};

/// Prices one trade from an average snapshot and the instantaneous gas price.
///
/// The manager never mutates the tracker it was built from; a new manager is
/// constructed for every trade so that the whole quote is derived from a
/// single consistent snapshot.
#[derive(Debug)]
pub struct FeeRateManager {
    snapshot: MovingAverageSnapshot,
    gas_price: u128,
    constants: DeviationFeeConstants,
}

impl FeeRateManager {
    pub fn new(
        snapshot: MovingAverageSnapshot,
        gas_price: u128,
        constants: DeviationFeeConstants,
    ) -> Self {
        Self {
            snapshot,
            gas_price,
            constants,
        }
    }

    /// The total clamped fee multiplier for this trade.
    pub fn multiplier(&self) -> u64 {
        compute_deviation_multiplier(self.snapshot.average, self.gas_price, &self.constants)
    }

    /// Applies the multiplier to the pool's base fee rate.
    ///
    /// The base fee rate is supplied by the caller and is not trusted; a value
    /// over `FEE_RATE_HARD_LIMIT` is rejected before any computation.
    pub fn fee_decision(&self, base_fee_rate: u32) -> Result<FeeDecision, ErrorCode> {
        if base_fee_rate > FEE_RATE_HARD_LIMIT {
            return Err(ErrorCode::InvalidBaseFee);
        }

        let multiplier = self.multiplier();
        let effective_fee_rate = compute_effective_fee_rate(base_fee_rate, multiplier);
        Ok(FeeDecision {
            multiplier,
            effective_fee_rate,
        })
    }
}
