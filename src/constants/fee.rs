/// The denominator of the fee rate value.
/// Fee rate is represented as hundredths of a basis point.
pub const FEE_RATE_DENOMINATOR: u32 = 1_000_000;

/// The effective fee rate must be controlled by the multiplier clamp, so this is a hard limit for safety.
/// Fee rate is represented as hundredths of a basis point.
pub const FEE_RATE_HARD_LIMIT: u32 = 100_000; // 10%
