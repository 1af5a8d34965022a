/// The denominator of the fee multiplier value.
/// A multiplier equal to the denominator leaves the base fee unchanged.
pub const MULTIPLIER_DENOMINATOR: u16 = 10_000;

/// max_multiplier is a pool-level policy choice, so this is a hard limit for safety.
pub const MAX_MULTIPLIER_LIMIT: u32 = 1_000_000; // 100x

/// The rebate regime begins below this fraction of the moving average.
pub const DEFAULT_REBATE_THRESHOLD: u16 = 9_000; // 0.9x

/// The surge regime begins above this fraction of the moving average.
pub const DEFAULT_SURGE_THRESHOLD: u16 = 11_000; // 1.1x

/// Multiplier change per 1.0 of deviation ratio beyond a regime bound.
pub const DEFAULT_DEVIATION_GAIN: u32 = 10_000;

/// Default lower clamp of the fee multiplier.
pub const DEFAULT_MIN_MULTIPLIER: u16 = 5_000; // 0.5x

/// Default upper clamp of the fee multiplier.
pub const DEFAULT_MAX_MULTIPLIER: u32 = 20_000; // 2x
