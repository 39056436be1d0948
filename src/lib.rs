pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::providers::GeminiProvider;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::MenuEngine, state::MenuState};
pub use utils::error::{MenuError, Result};
