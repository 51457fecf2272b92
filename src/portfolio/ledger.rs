// Portfolio ledger - balance tracking, ordering and merging

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use thiserror::Error;
use tracing::{debug, warn};

/// A signed trade delta or a balance
pub type Amount = i64;

/// Errors that can occur during portfolio operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Invalid amount: expected an integer, got {0:?}")]
    InvalidAmount(String),

    #[error("Insufficient balance: cannot sell {requested}, balance {balance}")]
    InsufficientBalance { balance: Amount, requested: Amount },

    #[error("Trade index {position} out of range for {len} trades")]
    IndexOutOfRange { position: isize, len: usize },

    #[error("Slice step cannot be zero")]
    InvalidSliceStep,

    #[error("Invalid order: {0:?}")]
    InvalidOrder(String),

    #[error("Balance would overflow")]
    BalanceOverflow,

    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<PortfolioError>,
    },
}

/// The Portfolio - a labelled starting amount plus an append-only trade log
///
/// Equality and ordering look at the balance only: two portfolios with
/// different labels and histories but the same balance compare equal.
#[derive(Clone)]
pub struct Portfolio {
    /// Identifying tag, usually the asset name
    label: String,
    /// Balance offset fixed at construction; merged portfolios may start
    /// outside the `Amount` range
    starting_amount: i128,
    /// Signed deltas in insertion order (positive = buy, negative = sell)
    trades: Vec<Amount>,
}

impl Portfolio {
    /// Create an empty portfolio with a zero starting amount
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_starting_amount(label, 0)
    }

    /// Create an empty portfolio with the given starting amount
    pub fn with_starting_amount(label: impl Into<String>, starting_amount: Amount) -> Self {
        Self {
            label: label.into(),
            starting_amount: i128::from(starting_amount),
            trades: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn starting_amount(&self) -> i128 {
        self.starting_amount
    }

    /// The full trade log in insertion order
    pub fn trades(&self) -> &[Amount] {
        &self.trades
    }

    // ========================================================================
    // TRADING
    // ========================================================================

    /// Record a buy of `amount`
    pub fn buy(&mut self, amount: Amount) -> Result<(), PortfolioError> {
        let balance = to_amount(self.exact_balance() + i128::from(amount))?;

        self.trades.push(amount);
        debug!(label = %self.label, amount, balance, "buy recorded");
        Ok(())
    }

    /// Record a sell of `amount`, refusing to take the balance below zero
    pub fn sell(&mut self, amount: Amount) -> Result<(), PortfolioError> {
        let prospective = self.exact_balance() - i128::from(amount);

        if prospective < 0 {
            let balance = self.balance();
            warn!(label = %self.label, balance, requested = amount, "sell rejected");
            return Err(PortfolioError::InsufficientBalance {
                balance,
                requested: amount,
            });
        }

        let balance = to_amount(prospective)?;
        let delta = amount.checked_neg().ok_or(PortfolioError::BalanceOverflow)?;
        self.trades.push(delta);
        debug!(label = %self.label, amount, balance, "sell recorded");
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Starting amount plus the sum of all trades, recomputed on every call
    pub fn balance(&self) -> Amount {
        // buy, sell and merge refuse any change that leaves this range
        let exact = self.exact_balance();
        Amount::try_from(exact).unwrap_or(if exact < 0 { Amount::MIN } else { Amount::MAX })
    }

    fn exact_balance(&self) -> i128 {
        self.trades
            .iter()
            .fold(self.starting_amount, |acc, trade| acc + i128::from(*trade))
    }

    /// Number of recorded trades
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Iterate over trades in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Amount> {
        self.trades.iter()
    }

    /// Get the trade at a non-negative index
    pub fn get(&self, index: usize) -> Option<Amount> {
        self.trades.get(index).copied()
    }

    // ========================================================================
    // MERGING
    // ========================================================================

    /// Combine two portfolios into a new one
    ///
    /// Labels are joined with `&`, starting amounts are summed, and the trades
    /// of `self` then `other` are appended with their recorded values, as if
    /// each were bought. Only the combined balance has to fit in `Amount`.
    pub fn merge(&self, other: &Portfolio) -> Result<Portfolio, PortfolioError> {
        let balance = self
            .balance()
            .checked_add(other.balance())
            .ok_or(PortfolioError::BalanceOverflow)?;

        let mut trades = Vec::with_capacity(self.len() + other.len());
        trades.extend(self.iter().chain(other.iter()).copied());
        let merged = Portfolio {
            label: format!("{}&{}", self.label, other.label),
            starting_amount: self.starting_amount + other.starting_amount,
            trades,
        };

        debug!(label = %merged.label, trades = merged.len(), balance, "portfolios merged");
        Ok(merged)
    }
}

fn to_amount(value: i128) -> Result<Amount, PortfolioError> {
    Amount::try_from(value).map_err(|_| PortfolioError::BalanceOverflow)
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Portfolio for {} with starting amount: {}",
            self.label, self.starting_amount
        )
    }
}

impl fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Portfolio({}, {})", self.label, self.starting_amount)
    }
}

impl PartialEq for Portfolio {
    fn eq(&self, other: &Self) -> bool {
        self.balance() == other.balance()
    }
}

impl Eq for Portfolio {}

impl PartialOrd for Portfolio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Portfolio {
    fn cmp(&self, other: &Self) -> Ordering {
        self.balance().cmp(&other.balance())
    }
}

impl Add<&Portfolio> for &Portfolio {
    type Output = Result<Portfolio, PortfolioError>;

    fn add(self, other: &Portfolio) -> Self::Output {
        self.merge(other)
    }
}

impl<'a> IntoIterator for &'a Portfolio {
    type Item = &'a Amount;
    type IntoIter = std::slice::Iter<'a, Amount>;

    fn into_iter(self) -> Self::IntoIter {
        self.trades.iter()
    }
}
