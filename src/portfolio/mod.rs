// Portfolio module - THE LEDGER
// Starting amount plus an ordered log of signed trades

mod ledger;
mod order;
mod position;

pub use ledger::{Amount, Portfolio, PortfolioError};
pub use order::{parse_amount, TradeOrder};
pub use position::TradeSlice;
