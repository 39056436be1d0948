use crate::core::ConfigProvider;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const VALID_FORMATS: [&str; 2] = ["html", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub provider: ProviderSection,
    pub output: OutputSection,
    pub layout: LayoutSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ProviderSection {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_seconds: Some(60),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            output_formats: VALID_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSection {
    pub heatmap: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MenuError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            MenuError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Fills a missing API key from the environment.
    pub fn apply_env_credentials(&mut self) {
        let unresolved = match self.provider.api_key.as_deref() {
            None => true,
            Some(key) => key.trim().is_empty() || key.starts_with("${"),
        };
        if unresolved {
            self.provider.api_key = ["GEMINI_API_KEY", "API_KEY"]
                .iter()
                .find_map(|name| std::env::var(name).ok())
                .filter(|key| !key.trim().is_empty());
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("provider.endpoint", &self.provider.endpoint)?;
        crate::utils::validation::validate_non_empty_string("provider.model", &self.provider.model)?;

        if let Some(timeout) = self.provider.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "provider.timeout_seconds",
                timeout,
                1,
            )?;
        }

        crate::utils::validation::validate_path("output.output_path", &self.output.output_path)?;

        if self.output.output_formats.is_empty() {
            return Err(MenuError::ConfigValidationError {
                field: "output.output_formats".to_string(),
                message: "At least one output format is required".to_string(),
            });
        }
        for format in &self.output.output_formats {
            if !VALID_FORMATS.contains(&format.as_str()) {
                return Err(MenuError::InvalidConfigValueError {
                    field: "output.output_formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        VALID_FORMATS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> Vec<OutputFormat> {
        self.output
            .output_formats
            .iter()
            .filter_map(|f| match f.as_str() {
                "html" => Some(OutputFormat::Html),
                "json" => Some(OutputFormat::Json),
                _ => None,
            })
            .collect()
    }

    fn heatmap(&self) -> bool {
        self.layout.heatmap
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
