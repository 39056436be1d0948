pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::Theme;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "neuro-menu")]
#[command(about = "Generate golden-triangle restaurant menus as printable pages")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory the rendered files are written to
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    /// Tint items by layout zone and annotate them
    #[arg(long, global = true)]
    pub heatmap: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a new menu for a theme and render it
    Generate {
        #[arg(short, long, value_enum, default_value_t = Theme::default())]
        theme: Theme,
    },
    /// Render the saved menu (or a menu JSON file) without calling the provider
    Render {
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List the available themes
    Themes,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file (if any) and applies CLI overrides on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(output_path) = &self.output_path {
            config.output.output_path = output_path.clone();
        }
        if self.heatmap {
            config.layout.heatmap = true;
        }
        config.apply_env_credentials();

        Ok(config)
    }
}
