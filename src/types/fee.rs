/// The priced outcome of a single trade quote.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeDecision {
    /// Fee multiplier, fixed point over `MULTIPLIER_DENOMINATOR`.
    pub multiplier: u64,
    /// Fee rate to charge on the trade, hundredths of a basis point.
    pub effective_fee_rate: u32,
}
