// Coinfolio - a small in-memory portfolio ledger
//
// A portfolio tracks a starting amount and an append-only log of signed
// trades. Balances are derived on demand; portfolios compare and merge by
// balance, and trades can be exported to a flat text file.

pub mod export;
pub mod portfolio;

pub use export::{ExportConfig, ExportError, TradeExporter, DEFAULT_EXPORT_FILE};
pub use portfolio::{parse_amount, Amount, Portfolio, PortfolioError, TradeOrder, TradeSlice};
