// Positional access to the trade log
// Negative positions count from the end; slices clamp to the log bounds

use crate::portfolio::ledger::{Amount, Portfolio, PortfolioError};

/// A `start:stop:step` selection over the trade log
///
/// Unset bounds default to the whole log in the direction of `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeSlice {
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
}

impl Default for TradeSlice {
    fn default() -> Self {
        Self {
            start: None,
            stop: None,
            step: 1,
        }
    }
}

impl TradeSlice {
    /// Select every trade, front to back
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `start..stop` with a step of one
    pub fn range(start: isize, stop: isize) -> Self {
        Self::new().with_start(start).with_stop(stop)
    }

    /// Select every trade, back to front
    pub fn reversed() -> Self {
        Self::new().with_step(-1)
    }

    pub fn with_start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_stop(mut self, stop: isize) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    /// Resolve to concrete indices into a log of `len` trades
    fn indices(&self, len: usize) -> Result<Vec<usize>, PortfolioError> {
        if self.step == 0 {
            return Err(PortfolioError::InvalidSliceStep);
        }

        let len = len as isize;
        let mut indices = Vec::new();

        if self.step > 0 {
            let start = self.start.map_or(0, |s| clamp_forward(s, len));
            let stop = self.stop.map_or(len, |s| clamp_forward(s, len));
            let mut next = Some(start);
            while let Some(i) = next.filter(|&i| i < stop) {
                indices.push(i as usize);
                next = i.checked_add(self.step);
            }
        } else {
            let start = self.start.map_or(len - 1, |s| clamp_backward(s, len));
            let stop = self.stop.map_or(-1, |s| clamp_backward(s, len));
            let mut next = Some(start);
            while let Some(i) = next.filter(|&i| i > stop) {
                indices.push(i as usize);
                next = i.checked_add(self.step);
            }
        }

        Ok(indices)
    }
}

/// Clamp a bound into `0..=len` for forward walks
fn clamp_forward(bound: isize, len: isize) -> isize {
    if bound < 0 {
        (bound + len).max(0)
    } else {
        bound.min(len)
    }
}

/// Clamp a bound into `-1..len` for backward walks
fn clamp_backward(bound: isize, len: isize) -> isize {
    if bound < 0 {
        (bound + len).max(-1)
    } else {
        bound.min(len - 1)
    }
}

impl Portfolio {
    /// Get the trade at `position`, where `-1` is the most recent trade
    pub fn trade_at(&self, position: isize) -> Result<Amount, PortfolioError> {
        let len = self.len();
        let resolved = if position < 0 {
            position.checked_add(len as isize)
        } else {
            Some(position)
        };

        resolved
            .filter(|&i| i >= 0)
            .and_then(|i| self.get(i as usize))
            .ok_or(PortfolioError::IndexOutOfRange { position, len })
    }

    /// Copy out the trades selected by `slice`
    pub fn slice(&self, slice: TradeSlice) -> Result<Vec<Amount>, PortfolioError> {
        let trades = self.trades();
        Ok(slice
            .indices(trades.len())?
            .into_iter()
            .map(|i| trades[i])
            .collect())
    }

    /// The trade log in reverse insertion order, leaving the log untouched
    pub fn reversed_trades(&self) -> Vec<Amount> {
        self.iter().rev().copied().collect()
    }
}
