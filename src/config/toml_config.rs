use crate::core::{ConfigProvider, RescatterCategory};
use crate::domain::model::OutputFormat;
use crate::utils::error::{NamesError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingConfig {
    pub rescattering: Option<RescatteringConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RescatteringConfig {
    pub default_category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl NamingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NamesError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NamesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESCATTER_CATEGORY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    fn category_setting(&self) -> Option<&str> {
        self.rescattering
            .as_ref()
            .and_then(|section| section.default_category.as_deref())
    }

    fn format_setting(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|section| section.format.as_deref())
    }
}

impl Validate for NamingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(category) = self.category_setting() {
            validate_non_empty_string("rescattering.default_category", category)?;
            category
                .parse::<RescatterCategory>()
                .map_err(|_| NamesError::InvalidConfigValueError {
                    field: "rescattering.default_category".to_string(),
                    value: category.to_string(),
                    reason: format!("Allowed values: {}", RescatterCategory::NAMES.join(", ")),
                })?;
        }
        if let Some(format) = self.format_setting() {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }
        Ok(())
    }
}

impl ConfigProvider for NamingConfig {
    fn default_rescatter_category(&self) -> RescatterCategory {
        match self.category_setting().map(str::parse::<RescatterCategory>) {
            Some(Ok(category)) => category,
            Some(Err(e)) => {
                tracing::warn!("{}, using {}", e, RescatterCategory::default());
                RescatterCategory::default()
            }
            None => RescatterCategory::default(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        match self.format_setting().map(|format| format.trim().to_ascii_lowercase()) {
            Some(format) if format == "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}
