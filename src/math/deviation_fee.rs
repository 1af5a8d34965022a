use crate::{DeviationFeeConstants, FEE_RATE_HARD_LIMIT, MULTIPLIER_DENOMINATOR};
use ethnum::U256;

/// Calculate the fee multiplier for a gas price against the moving average
///
/// The regime is decided by cross-multiplication so that no intermediate
/// ratio is truncated before the comparison. The proportional response is
/// computed with a single trailing floor division, then clamped into
/// `[min_multiplier, max_multiplier]`.
///
/// # Parameters
/// - `average`: The current moving average of observed gas prices
/// - `gas_price`: The instantaneous gas price of the triggering transaction
/// - `constants`: The deviation curve parameters
///
/// # Returns
/// - `u64`: The clamped multiplier, fixed point over `MULTIPLIER_DENOMINATOR`
pub fn compute_deviation_multiplier(
    average: u128,
    gas_price: u128,
    constants: &DeviationFeeConstants,
) -> u64 {
    if average == 0 {
        // No reference level to deviate from. A positive price over an empty
        // reference is an unbounded upward deviation.
        if gas_price == 0 {
            return u64::from(MULTIPLIER_DENOMINATOR);
        }
        return u64::from(constants.max_multiplier);
    }

    let scale = u128::from(MULTIPLIER_DENOMINATOR);
    let scaled_gas_price = <U256>::from(gas_price) * <U256>::from(scale);
    let surge_bound = <U256>::from(average) * <U256>::from(constants.surge_threshold);
    let rebate_bound = <U256>::from(average) * <U256>::from(constants.rebate_threshold);
    let deviation_scale = <U256>::from(average) * <U256>::from(scale);

    let unclamped = if scaled_gas_price > surge_bound {
        // congestion surcharge, grows with the excess over the surge bound
        let excess = scaled_gas_price - surge_bound;
        <U256>::from(scale) + <U256>::from(constants.deviation_gain) * excess / deviation_scale
    } else if scaled_gas_price < rebate_bound {
        // congestion rebate, grows with the shortfall under the rebate bound
        let shortfall = rebate_bound - scaled_gas_price;
        <U256>::from(scale)
            .saturating_sub(<U256>::from(constants.deviation_gain) * shortfall / deviation_scale)
    } else {
        <U256>::from(scale)
    };

    let bounded = unclamped
        .max(<U256>::from(constants.min_multiplier))
        .min(<U256>::from(constants.max_multiplier));
    bounded.try_into().unwrap() // safe unwrap
}

/// Calculate the fee rate charged on a trade
///
/// # Parameters
/// - `base_fee_rate`: The pool's configured base fee rate
/// - `multiplier`: The clamped deviation multiplier
///
/// # Returns
/// - `u32`: The effective fee rate, bounded by `FEE_RATE_HARD_LIMIT`
pub fn compute_effective_fee_rate(base_fee_rate: u32, multiplier: u64) -> u32 {
    let effective_fee_rate =
        u128::from(base_fee_rate) * u128::from(multiplier) / u128::from(MULTIPLIER_DENOMINATOR);

    if effective_fee_rate > FEE_RATE_HARD_LIMIT as u128 {
        FEE_RATE_HARD_LIMIT
    } else {
        effective_fee_rate as u32
    }
}
