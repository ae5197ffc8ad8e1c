use clap::Parser;

use crate::config::MatrixConfig;
use crate::domain::model::{CountingMode, TripleTable};
use crate::utils::error::{MatrixError, Result};

#[derive(Debug, Clone, Parser)]
#[command(name = "psychomatrix")]
#[command(about = "Computes a psychomatrix from a birth date and renders it as a PNG card")]
pub struct CliConfig {
    /// Display name shown on the card
    #[arg(long)]
    pub name: String,

    /// Birth date, strict (01.11.1998) or free text (1 листопада 1998)
    #[arg(long)]
    pub date: String,

    #[arg(long, default_value = "./matrix.png")]
    pub output: String,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Count only the base date digits, without the additional numbers
    #[arg(long)]
    pub base_only: bool,

    /// Derived-indicator triple table: v1 (canonical) or v2 (alternate)
    #[arg(long)]
    pub triples: Option<String>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Print the full numeric result bundle as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// File config (or defaults) with the command-line overrides applied.
    pub fn matrix_config(&self) -> Result<MatrixConfig> {
        let mut config = match &self.config {
            Some(path) => MatrixConfig::from_file(path)?,
            None => MatrixConfig::default(),
        };

        if self.base_only {
            config.engine.counting = CountingMode::BaseOnly;
        }
        if let Some(table) = &self.triples {
            config.engine.triples = match table.as_str() {
                "v1" => TripleTable::V1,
                "v2" => TripleTable::V2,
                other => {
                    return Err(MatrixError::ConfigError {
                        field: "triples".to_string(),
                        message: format!("unknown triple table {:?} (expected v1 or v2)", other),
                    })
                }
            };
        }
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }

        Ok(config)
    }
}
