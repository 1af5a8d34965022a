/// An atomic read of the moving-average state.
///
/// This pair is the unit the surrounding pool infrastructure persists;
/// `count == 0` denotes a controller that has not been initialized yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovingAverageSnapshot {
    /// Cumulative mean of the observed gas prices, wei per gas unit.
    pub average: u128,
    /// Number of samples folded into `average`.
    pub count: u64,
}
