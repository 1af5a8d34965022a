use crate::{next_cumulative_average, ErrorCode, MovingAverageSnapshot};

/// The moving-average state of one pool.
///
/// `average` is the running cumulative mean of every observed gas price and
/// `count` the number of samples behind it. The pair is only ever mutated
/// through [`GasPriceTracker::record`], one sample at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GasPriceTracker {
    average: u128,
    count: u64,
}

impl GasPriceTracker {
    /// Seeds the average with the gas price of the initializing transaction.
    pub fn new(initial_gas_price: u128) -> Self {
        Self {
            average: initial_gas_price,
            count: 1,
        }
    }

    pub(crate) fn from_snapshot(snapshot: MovingAverageSnapshot) -> Self {
        Self {
            average: snapshot.average,
            count: snapshot.count,
        }
    }

    /// Folds one observed gas price into the running average.
    ///
    /// Both new values are computed before either field is assigned, so a
    /// failed call leaves the state untouched. Exhausting the sample counter
    /// fails with `ArithmeticOverflow` instead of silently wrapping, since a
    /// wrapped count would corrupt every later average.
    pub fn record(&mut self, observed_gas_price: u128) -> Result<(), ErrorCode> {
        let next_count = self
            .count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        let next_average = next_cumulative_average(self.average, self.count, observed_gas_price);

        self.average = next_average;
        self.count = next_count;
        Ok(())
    }

    pub fn average(&self) -> u128 {
        self.average
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Read-only view of the current state, no side effects.
    pub fn snapshot(&self) -> MovingAverageSnapshot {
        MovingAverageSnapshot {
            average: self.average,
            count: self.count,
        }
    }
}
