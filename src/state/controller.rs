use crate::{
    DeviationFeeConstants, ErrorCode, FeeDecision, FeeRateManager, GasPriceTracker,
    MovingAverageSnapshot,
};

/// Per-pool dynamic fee controller.
///
/// The controller has exactly two states. It starts uninitialized, holding
/// no average, and becomes active through [`FeeController::initialize`];
/// there is no transition back. Quoting reads a single snapshot and never
/// mutates, recording folds one observation into the average, and both are
/// only legal while active.
///
/// One controller instance belongs to one pool. The pool engine must call
/// `quote_fee` strictly before executing a trade and `record_observation`
/// strictly after, exactly once each. A caller with genuinely concurrent
/// trades wraps the controller in its own per-pool lock; the `&mut self`
/// receivers on the mutating operations keep a shared instance from being
/// updated through a plain reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeController {
    constants: DeviationFeeConstants,
    tracker: Option<GasPriceTracker>,
}

impl FeeController {
    /// Creates an uninitialized controller with the given curve parameters.
    pub fn new(constants: DeviationFeeConstants) -> Result<Self, ErrorCode> {
        if !constants.validate_constants() {
            return Err(ErrorCode::InvalidFeeConstants);
        }
        Ok(Self {
            constants,
            tracker: None,
        })
    }

    /// Creates an uninitialized controller with the default curve parameters.
    pub fn with_default_constants() -> Self {
        Self {
            constants: DeviationFeeConstants::default(),
            tracker: None,
        }
    }

    /// Rebuilds a controller from persisted state.
    ///
    /// A snapshot with `count == 0` yields an uninitialized controller, so a
    /// freshly stored default snapshot round-trips to a fresh controller.
    pub fn from_snapshot(
        constants: DeviationFeeConstants,
        snapshot: MovingAverageSnapshot,
    ) -> Result<Self, ErrorCode> {
        if !constants.validate_constants() {
            return Err(ErrorCode::InvalidFeeConstants);
        }
        let tracker = if snapshot.count == 0 {
            None
        } else {
            Some(GasPriceTracker::from_snapshot(snapshot))
        };
        Ok(Self { constants, tracker })
    }

    /// Seeds the moving average at pool creation, exactly once.
    pub fn initialize(&mut self, initial_gas_price: u128) -> Result<(), ErrorCode> {
        if self.tracker.is_some() {
            return Err(ErrorCode::AlreadyInitialized);
        }
        self.tracker = Some(GasPriceTracker::new(initial_gas_price));
        Ok(())
    }

    /// Prices a trade before it executes.
    ///
    /// The gas price signal is read from the executing transaction's context
    /// by the pool engine and passed in; the controller never fetches it.
    pub fn quote_fee(&self, base_fee_rate: u32, gas_price: u128) -> Result<FeeDecision, ErrorCode> {
        let tracker = self
            .tracker
            .as_ref()
            .ok_or(ErrorCode::InitializationRequired)?;

        let fee_rate_manager = FeeRateManager::new(tracker.snapshot(), gas_price, self.constants);
        fee_rate_manager.fee_decision(base_fee_rate)
    }

    /// Folds the observed gas price into the average after a trade executed.
    pub fn record_observation(&mut self, observed_gas_price: u128) -> Result<(), ErrorCode> {
        let tracker = self
            .tracker
            .as_mut()
            .ok_or(ErrorCode::InitializationRequired)?;
        tracker.record(observed_gas_price)
    }

    /// Diagnostic view of the moving average, `None` until initialized.
    pub fn inspect(&self) -> Option<MovingAverageSnapshot> {
        self.tracker.as_ref().map(GasPriceTracker::snapshot)
    }

    pub fn constants(&self) -> &DeviationFeeConstants {
        &self.constants
    }
}

#[cfg(test)]
mod fee_controller_tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_constants() {
        let constants = DeviationFeeConstants {
            deviation_gain: 0,
            ..Default::default()
        };

        assert_eq!(
            FeeController::new(constants).unwrap_err(),
            ErrorCode::InvalidFeeConstants
        );
    }

    #[test]
    fn test_operations_require_initialization() {
        let mut controller = FeeController::with_default_constants();

        assert_eq!(
            controller.quote_fee(3_000, 10),
            Err(ErrorCode::InitializationRequired)
        );
        assert_eq!(
            controller.record_observation(10),
            Err(ErrorCode::InitializationRequired)
        );
        assert_eq!(controller.inspect(), None);
    }

    #[test]
    fn test_initialize_only_once() {
        let mut controller = FeeController::with_default_constants();

        controller.initialize(10).unwrap();
        let before = controller.inspect();

        assert_eq!(controller.initialize(99), Err(ErrorCode::AlreadyInitialized));
        assert_eq!(controller.inspect(), before);
        assert_eq!(
            controller.inspect(),
            Some(MovingAverageSnapshot {
                average: 10,
                count: 1
            })
        );
    }

    #[test]
    fn test_trade_lifecycle() {
        let mut controller = FeeController::with_default_constants();
        let base_fee_rate = 3_000;

        controller.initialize(10).unwrap();

        // gas at the average, the fee is the base fee
        let first = controller.quote_fee(base_fee_rate, 10).unwrap();
        assert_eq!(first.multiplier, 10_000);
        assert_eq!(first.effective_fee_rate, 3_000);
        controller.record_observation(10).unwrap();
        assert_eq!(
            controller.inspect(),
            Some(MovingAverageSnapshot {
                average: 10,
                count: 2
            })
        );

        // cheap gas, rebated fee
        let second = controller.quote_fee(base_fee_rate, 4).unwrap();
        assert!(second.multiplier < 10_000);
        assert!(second.effective_fee_rate < first.effective_fee_rate);
        controller.record_observation(4).unwrap();
        assert_eq!(
            controller.inspect(),
            Some(MovingAverageSnapshot {
                average: 8,
                count: 3
            })
        );

        // expensive gas, surcharged fee
        let third = controller.quote_fee(base_fee_rate, 12).unwrap();
        assert!(third.multiplier > 10_000);
        assert!(third.effective_fee_rate > first.effective_fee_rate);
        controller.record_observation(12).unwrap();
        assert_eq!(
            controller.inspect(),
            Some(MovingAverageSnapshot {
                average: 9,
                count: 4
            })
        );

        assert!(second.effective_fee_rate < first.effective_fee_rate);
        assert!(first.effective_fee_rate < third.effective_fee_rate);
    }

    #[test]
    fn test_invalid_base_fee_leaves_state_unchanged() {
        let mut controller = FeeController::with_default_constants();
        controller.initialize(10).unwrap();
        let before = controller.inspect();

        assert_eq!(
            controller.quote_fee(crate::FEE_RATE_HARD_LIMIT + 1, 10),
            Err(ErrorCode::InvalidBaseFee)
        );
        assert_eq!(controller.inspect(), before);
    }

    #[test]
    fn test_count_exhaustion_leaves_state_unchanged() {
        let snapshot = MovingAverageSnapshot {
            average: 100,
            count: u64::MAX,
        };
        let mut controller =
            FeeController::from_snapshot(DeviationFeeConstants::default(), snapshot).unwrap();

        assert_eq!(
            controller.record_observation(100),
            Err(ErrorCode::ArithmeticOverflow)
        );
        assert_eq!(controller.inspect(), Some(snapshot));
    }

    #[test]
    fn test_from_snapshot_round_trip() {
        let mut original = FeeController::with_default_constants();
        original.initialize(10).unwrap();
        original.record_observation(10).unwrap();
        original.record_observation(4).unwrap();

        let restored = FeeController::from_snapshot(
            *original.constants(),
            original.inspect().unwrap(),
        )
        .unwrap();

        assert_eq!(restored, original);
        assert_eq!(
            restored.quote_fee(3_000, 12).unwrap(),
            original.quote_fee(3_000, 12).unwrap()
        );
    }

    #[test]
    fn test_from_snapshot_with_empty_count_is_uninitialized() {
        let controller = FeeController::from_snapshot(
            DeviationFeeConstants::default(),
            MovingAverageSnapshot::default(),
        )
        .unwrap();

        assert_eq!(controller.inspect(), None);
        assert_eq!(
            controller.quote_fee(3_000, 10),
            Err(ErrorCode::InitializationRequired)
        );
    }

    #[test]
    fn test_constants_accessor() {
        let constants = DeviationFeeConstants {
            deviation_gain: 20_000,
            ..Default::default()
        };
        let controller = FeeController::new(constants).unwrap();
        assert_eq!(controller.constants(), &constants);
    }
}
