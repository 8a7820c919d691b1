use crate::config::ColorMode;
use crate::utils::error::{PoacError, Result};
use crate::utils::validation::{validate_exclusive, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub term: Option<TermConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermConfig {
    pub color: Option<String>,
    pub verbose: Option<bool>,
    pub quiet: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, |key| std::env::var(key).ok())
    }

    pub fn from_file_with<P, F>(path: P, env: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(&path).map_err(PoacError::IoError)?;
        Self::from_toml_str_with(&content, env)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |key| std::env::var(key).ok())
    }

    /// Parses `content` after replacing `${VAR}` with values from `env`.
    /// Unset variables are left as written.
    pub fn from_toml_str_with<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed = substitute_env_vars(content, env)?;
        Ok(toml::from_str(&processed)?)
    }

    pub fn color(&self) -> Option<&str> {
        self.term.as_ref().and_then(|t| t.color.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.term.as_ref().and_then(|t| t.verbose).unwrap_or(false)
    }

    pub fn quiet(&self) -> bool {
        self.term.as_ref().and_then(|t| t.quiet).unwrap_or(false)
    }
}

fn substitute_env_vars<F>(content: &str, env: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PoacError::ConfigError {
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        env(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.into_owned())
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(color) = self.color() {
            ColorMode::parse("term.color", color)?;
        }
        validate_exclusive(("term.verbose", self.verbose()), ("term.quiet", self.quiet()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_term_section() {
        let toml_content = r#"
[term]
color = "never"
verbose = true
"#;

        let config = TomlConfig::from_toml_str_with(toml_content, no_env).unwrap();
        assert_eq!(config.color(), Some("never"));
        assert!(config.verbose());
        assert!(!config.quiet());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = TomlConfig::from_toml_str_with("", no_env).unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.color(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        let toml_content = r#"
[term]
color = "${POAC_TEST_COLOR}"
"#;

        let env = |key: &str| (key == "POAC_TEST_COLOR").then(|| "always".to_string());
        let config = TomlConfig::from_toml_str_with(toml_content, env).unwrap();
        assert_eq!(config.color(), Some("always"));
    }

    #[test]
    fn test_unset_var_is_kept_and_rejected() {
        let toml_content = r#"
[term]
color = "${POAC_UNSET}"
"#;

        let config = TomlConfig::from_toml_str_with(toml_content, no_env).unwrap();
        assert_eq!(config.color(), Some("${POAC_UNSET}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[term]
verbose = true
quiet = true
"#;

        let config = TomlConfig::from_toml_str_with(toml_content, no_env).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str_with("[term\ncolor = ", no_env).unwrap_err();
        assert!(matches!(err, PoacError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[term]\ncolor = \"always\"\nquiet = true\n")
            .unwrap();

        let config = TomlConfig::from_file_with(temp_file.path(), no_env).unwrap();
        assert_eq!(config.color(), Some("always"));
        assert!(config.quiet());
    }
}
