use crate::api::generate_content::SOURCE_PATH;
use crate::core::invoker::InvokerConfig;
use crate::utils::error::{FunctionError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// Deployment manifest for a function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub function: FunctionConfig,
    pub runtime: Option<RuntimeConfig>,
    pub response: Option<ResponseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionConfig {
    pub name: String,
    pub source: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub timeout_seconds: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseConfig {
    pub expose_errors: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FunctionError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置；環境變數只在字串值內替換，不影響 TOML 結構
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parse_error = |e: toml::de::Error| FunctionError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        };

        let mut table: toml::Table = toml::from_str(content).map_err(parse_error)?;
        for (_, value) in table.iter_mut() {
            substitute_env_vars(value);
        }

        toml::Value::Table(table).try_into().map_err(parse_error)
    }

    pub fn source(&self) -> &str {
        self.function.source.as_deref().unwrap_or(SOURCE_PATH)
    }

    pub fn timeout_seconds(&self) -> u32 {
        self.runtime
            .as_ref()
            .and_then(|r| r.timeout_seconds)
            .unwrap_or(10)
    }

    pub fn expose_errors(&self) -> bool {
        self.response
            .as_ref()
            .and_then(|r| r.expose_errors)
            .unwrap_or(false)
    }

    pub fn invoker_config(&self) -> InvokerConfig {
        InvokerConfig {
            function_name: self.function.name.clone(),
            expose_errors: self.expose_errors(),
            timeout: Some(Duration::from_secs(u64::from(self.timeout_seconds()))),
        }
    }
}

/// 替換環境變數 (例如 ${API_KEY})；未設定的變數保留原樣
fn substitute_env_vars(value: &mut toml::Value) {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();

    match value {
        toml::Value::String(s) => {
            let re = ENV_VAR.get_or_init(|| {
                Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static regex is valid")
            });
            let replaced = re.replace_all(s, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            });
            *s = replaced.into_owned();
        }
        toml::Value::Array(items) => items.iter_mut().for_each(substitute_env_vars),
        toml::Value::Table(table) => table.iter_mut().for_each(|(_, v)| substitute_env_vars(v)),
        _ => {}
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_function_name("function.name", &self.function.name)?;
        validate_path("function.source", self.source())?;
        crate::core::route::route_for_path(self.source())?;

        validate_range("runtime.timeout_seconds", self.timeout_seconds(), 1, 900)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_manifest() {
        let config = TomlConfig::from_toml_str(
            r#"
[function]
name = "generate-content"
"#,
        )
        .unwrap();

        assert_eq!(config.source(), "api/generate-content.rs");
        assert_eq!(config.timeout_seconds(), 10);
        assert!(!config.expose_errors());
        assert_eq!(
            config.invoker_config().timeout,
            Some(Duration::from_secs(10))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_manifest() {
        let toml_content = r#"
[function]
name = "generate-content"
source = "api/generate-content.js"
description = "HTTP entry point"

[runtime]
timeout_seconds = 30

[response]
expose_errors = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let invoker_config = config.invoker_config();
        assert!(invoker_config.expose_errors);
        assert_eq!(invoker_config.timeout, Some(Duration::from_secs(30)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GC_TEST_FUNCTION_NAME", "content-from-env");

        let config = TomlConfig::from_toml_str(
            r#"
[function]
name = "${GC_TEST_FUNCTION_NAME}"
"#,
        )
        .unwrap();
        assert_eq!(config.function.name, "content-from-env");

        std::env::remove_var("GC_TEST_FUNCTION_NAME");
    }

    #[test]
    fn test_env_value_cannot_inject_keys() {
        std::env::set_var(
            "GC_TEST_DESCRIPTION",
            "quoted \" text\n[response]\nexpose_errors = true",
        );

        let config = TomlConfig::from_toml_str(
            r#"
[function]
name = "generate-content"
description = "${GC_TEST_DESCRIPTION}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.function.description.as_deref(),
            Some("quoted \" text\n[response]\nexpose_errors = true")
        );
        assert!(config.response.is_none());
        assert!(!config.expose_errors());

        std::env::remove_var("GC_TEST_DESCRIPTION");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[function]
name = "${GC_TEST_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.function.name, "${GC_TEST_SURELY_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[function]
name = "generate-content"
source = "handlers/generate-content.js"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[function]
name = "generate-content"

[runtime]
timeout_seconds = 3600
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_function_section_fails_to_parse() {
        assert!(TomlConfig::from_toml_str("[runtime]\ntimeout_seconds = 5\n").is_err());
        assert!(TomlConfig::from_toml_str("garbage = [").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[function]\nname = \"file-test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.function.name, "file-test");
    }
}
