// Trade orders from untyped input (scripts, CLI arguments)

use crate::portfolio::ledger::{Amount, Portfolio, PortfolioError};
use std::fmt;
use std::str::FromStr;

/// A single buy or sell instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TradeOrder {
    Buy(Amount),
    Sell(Amount),
}

/// Parse an integer amount, rejecting anything else (`12.5`, `ten`, ...)
pub fn parse_amount(raw: &str) -> Result<Amount, PortfolioError> {
    raw.trim()
        .parse::<Amount>()
        .map_err(|_| PortfolioError::InvalidAmount(raw.trim().to_string()))
}

impl TradeOrder {
    pub fn amount(&self) -> Amount {
        match self {
            TradeOrder::Buy(amount) | TradeOrder::Sell(amount) => *amount,
        }
    }

    /// Parse a script with one order per line
    ///
    /// Blank lines and lines starting with `#` are skipped. Errors carry the
    /// 1-based line number.
    pub fn parse_script(text: &str) -> Result<Vec<TradeOrder>, PortfolioError> {
        text.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .map(|(line_no, line)| {
                line.parse().map_err(|e| PortfolioError::AtLine {
                    line: line_no,
                    source: Box::new(e),
                })
            })
            .collect()
    }
}

impl FromStr for TradeOrder {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (side, raw_amount) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(side), Some(amount), None) => (side, amount),
            _ => return Err(PortfolioError::InvalidOrder(s.trim().to_string())),
        };

        let order: fn(Amount) -> TradeOrder = match side.to_ascii_lowercase().as_str() {
            "buy" => TradeOrder::Buy,
            "sell" => TradeOrder::Sell,
            _ => return Err(PortfolioError::InvalidOrder(s.trim().to_string())),
        };
        Ok(order(parse_amount(raw_amount)?))
    }
}

impl fmt::Display for TradeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeOrder::Buy(amount) => write!(f, "buy {}", amount),
            TradeOrder::Sell(amount) => write!(f, "sell {}", amount),
        }
    }
}

impl Portfolio {
    /// Apply an order through [`Portfolio::buy`] or [`Portfolio::sell`]
    pub fn apply(&mut self, order: TradeOrder) -> Result<(), PortfolioError> {
        match order {
            TradeOrder::Buy(amount) => self.buy(amount),
            TradeOrder::Sell(amount) => self.sell(amount),
        }
    }
}
