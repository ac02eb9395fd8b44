use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure for dietplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Generation provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// UI display configuration
    #[serde(default)]
    pub ui: UIConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Model identifier to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Temperature setting
    pub temperature: Option<f32>,

    /// Cap on generated output tokens
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Enable colorful output
    #[serde(default = "default_colorful")]
    pub colorful: bool,
}

fn default_model() -> String {
    "gemini-1.5-pro-latest".to_string()
}
fn default_colorful() -> bool {
    true
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            model: default_model(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl Default for UIConfig {
    fn default() -> Self {
        UIConfig {
            colorful: default_colorful(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderConfig::default(),
            ui: UIConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Load configuration from command line argument or default locations
    pub fn load(config_path: &Option<String>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::from_file(path);
        }

        let default_paths = vec![
            "dietplan.toml",
            ".dietplan.toml",
            "~/.config/dietplan/config.toml",
        ];

        for path in default_paths {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                match Self::from_file(expanded_path.as_ref()) {
                    Ok(config) => return Ok(config),
                    Err(e) => eprintln!("Warning: Failed to load config from {}: {}", path, e),
                }
            }
        }

        // Return default config if no file found
        Ok(Self::default())
    }
}

/// Resolve the generative-service API key from the environment. Both
/// names the original deployment accepted are honored.
pub fn api_key() -> Result<String> {
    env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("GOOGLE_API_KEY"))
        .context("GEMINI_API_KEY or GOOGLE_API_KEY environment variable not set")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_without_a_file() {
        let config = Config::default();
        assert_eq!(config.provider.model, "gemini-1.5-pro-latest");
        assert_eq!(config.provider.temperature, None);
        assert!(config.ui.colorful);
    }

    #[test]
    fn toml_overrides_parse() {
        let config: Config = toml::from_str(
            r#"
            [provider]
            model = "gemini-1.5-flash-latest"
            temperature = 0.4
            max_output_tokens = 4096

            [ui]
            colorful = false
            "#,
        )
        .unwrap();
        assert_eq!(config.provider.model, "gemini-1.5-flash-latest");
        assert_eq!(config.provider.temperature, Some(0.4));
        assert_eq!(config.provider.max_output_tokens, Some(4096));
        assert!(!config.ui.colorful);
    }

    // Sole test touching these variables, so no env races with the
    // rest of the suite.
    #[test]
    fn api_key_requires_env_and_prefers_gemini() {
        unsafe {
            env::remove_var("GEMINI_API_KEY");
            env::remove_var("GOOGLE_API_KEY");
        }
        let err = api_key().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));

        unsafe { env::set_var("GOOGLE_API_KEY", "google-key") };
        assert_eq!(api_key().unwrap(), "google-key");

        unsafe { env::set_var("GEMINI_API_KEY", "gemini-key") };
        assert_eq!(api_key().unwrap(), "gemini-key");

        unsafe {
            env::remove_var("GEMINI_API_KEY");
            env::remove_var("GOOGLE_API_KEY");
        }
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("[ui]\ncolorful = false\n").unwrap();
        assert_eq!(config.provider.model, "gemini-1.5-pro-latest");
        assert!(!config.ui.colorful);
    }
}
