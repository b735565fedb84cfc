//! Runtime configuration for the command-line front end.

use std::path::{Path, PathBuf};

use anyhow::Context;
use rgbcal_core::{CalibrationCircle, MapperOptions};

/// Environment variable naming a JSON table that replaces the built-in one.
pub const TABLE_ENV: &str = "RGBCAL_TABLE";

/// Resolved configuration: which table to load and how to map with it.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// External table file. `None` selects the built-in measurements.
    pub table: Option<PathBuf>,
    pub options: MapperOptions,
}

impl CliConfig {
    /// Combine command-line flags with the environment.
    ///
    /// `--table` wins over `RGBCAL_TABLE`. Options come from `--options`
    /// when given, otherwise the stock-firmware defaults.
    pub fn resolve(table: Option<PathBuf>, options: Option<&Path>) -> anyhow::Result<Self> {
        let table = table.or_else(|| std::env::var_os(TABLE_ENV).map(PathBuf::from));
        let options = match options {
            Some(path) => load_options(path)?,
            None => MapperOptions::default(),
        };
        Ok(Self { table, options })
    }

    /// Load the configured table, or copy the built-in one.
    pub fn load_circle(&self) -> anyhow::Result<CalibrationCircle> {
        match &self.table {
            Some(path) => CalibrationCircle::load(path)
                .with_context(|| format!("loading calibration table {}", path.display())),
            None => Ok(CalibrationCircle::builtin().clone()),
        }
    }

    /// Human-readable name of the table source.
    pub fn table_label(&self) -> String {
        match &self.table {
            Some(path) => path.display().to_string(),
            None => "built-in (Yeelight Bedside Lamp 2)".to_string(),
        }
    }
}

fn load_options(path: &Path) -> anyhow::Result<MapperOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading mapper options {}", path.display()))?;
    let options = serde_json::from_str(&text)
        .with_context(|| format!("parsing mapper options {}", path.display()))?;
    tracing::info!("loaded mapper options from {}", path.display());
    Ok(options)
}
