use crate::config::toml_config::NamingConfig;
use crate::core::{CodeKind, ConfigProvider, RescatterCategory};
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "truth-names")]
#[command(about = "Decode Monte Carlo truth codes into readable names")]
pub struct CliConfig {
    /// Table to decode against: particle, status, origin, ccnc, mode, interaction, rescattering
    pub kind: CodeKind,

    /// Raw codes to decode
    #[arg(required = true, allow_negative_numbers = true)]
    pub codes: Vec<i32>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Rescattering category, overrides the configuration file
    #[arg(long)]
    pub category: Option<RescatterCategory>,

    /// Print JSON instead of one line per code
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,

    #[arg(skip)]
    #[serde(skip)]
    pub file_config: NamingConfig,
}

impl CliConfig {
    /// Loads `--config` if given; command-line flags keep precedence.
    pub fn load_file_config(&mut self) -> Result<()> {
        if let Some(path) = &self.config {
            tracing::info!("Loading configuration from: {}", path);
            let config = NamingConfig::from_file(path)?;
            config.validate()?;
            self.file_config = config;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn default_rescatter_category(&self) -> RescatterCategory {
        self.category
            .unwrap_or_else(|| self.file_config.default_rescatter_category())
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.file_config.output_format()
        }
    }
}
