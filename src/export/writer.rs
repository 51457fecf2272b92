// Trade exporter - scoped file handle around a line-per-trade writer

use crate::portfolio::Portfolio;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name used when no export path is configured
pub const DEFAULT_EXPORT_FILE: &str = "trades.txt";

/// Errors from exporting trades
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write trades: {0}")]
    Write(#[from] io::Error),
}

/// Configuration for trade export
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Destination file, truncated on every export
    pub path: PathBuf,
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination file
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

/// Writes a portfolio's trades to a flat text file
#[derive(Clone, Debug, Default)]
pub struct TradeExporter {
    config: ExportConfig,
}

impl TradeExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Export every trade, returning the number of lines written
    ///
    /// The file is created or truncated, and is closed when this call returns
    /// whether or not the write succeeded.
    pub fn export(&self, portfolio: &Portfolio) -> Result<usize, ExportError> {
        let file = File::create(&self.config.path).map_err(|source| ExportError::Open {
            path: self.config.path.clone(),
            source,
        })?;

        let written = Self::write_trades(portfolio, BufWriter::new(file))?;
        info!(
            label = portfolio.label(),
            path = %self.config.path.display(),
            trades = written,
            "trades exported"
        );
        Ok(written)
    }

    /// Write one trade per line (`{trade}\n`) in insertion order
    pub fn write_trades<W: Write>(portfolio: &Portfolio, mut out: W) -> Result<usize, ExportError> {
        for trade in portfolio {
            writeln!(out, "{}", trade)?;
        }
        out.flush()?;
        Ok(portfolio.len())
    }
}

impl Portfolio {
    /// Export trades to `trades.txt` in the working directory
    pub fn export_trades(&self) -> Result<usize, ExportError> {
        TradeExporter::default().export(self)
    }
}
