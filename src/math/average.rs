use ethnum::U256;

/// Calculate the cumulative moving average after one more sample
///
/// The division truncates toward zero, so the stored average is never
/// larger than the exact mean of the history it summarizes.
///
/// # Parameters
/// - `average`: The current moving average
/// - `count`: The number of samples folded into `average`
/// - `observed`: The new gas price sample
///
/// # Returns
/// - `u128`: The moving average over `count + 1` samples
pub fn next_cumulative_average(average: u128, count: u64, observed: u128) -> u128 {
    let numerator = <U256>::from(average) * <U256>::from(count) + <U256>::from(observed);
    let denominator = <U256>::from(count) + 1;

    let quotient = numerator / denominator;
    quotient.try_into().unwrap() // safe unwrap
}
