// Export module - FLAT-FILE TRADE EXPORT
// Writes the trade log one value per line, closing the file on every path

mod writer;

pub use writer::{ExportConfig, ExportError, TradeExporter, DEFAULT_EXPORT_FILE};
