use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::core::controller::{FormSettings, DEFAULT_SUBJECT, DEFAULT_SUBJECTS};
use crate::core::render::DEFAULT_LOADING_MESSAGE;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_one_of, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub subjects: Option<Vec<String>>,
    pub default_subject: Option<String>,
    pub loading_message: Option<String>,
}

impl PlannerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PLANNER_HOST})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn endpoint(&self) -> &str {
        &self.service.endpoint
    }

    pub fn form_settings(&self) -> FormSettings {
        let defaults = FormSettings::default();
        FormSettings {
            subjects: self.form.subjects.clone().unwrap_or(defaults.subjects),
            default_subject: self
                .form
                .default_subject
                .clone()
                .unwrap_or(defaults.default_subject),
            loading_message: self
                .form
                .loading_message
                .clone()
                .unwrap_or(defaults.loading_message),
        }
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.endpoint", &self.service.endpoint)?;

        let settings = self.form_settings();
        validate_non_empty_list("form.subjects", &settings.subjects)?;
        validate_one_of(
            "form.default_subject",
            &settings.default_subject,
            &settings.subjects,
        )?;
        validate_non_empty_string("form.loading_message", &settings.loading_message)?;

        Ok(())
    }
}
