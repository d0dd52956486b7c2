use crate::prompt::SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Generation backend connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Yandex Cloud folder (catalog) id, part of the model URI
    #[serde(default)]
    pub folder_id: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_backend_timeout_secs")]
    pub timeout_secs: u64,
    /// Empty string disables the system message
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

fn default_api_url() -> String {
    "https://llm.api.cloud.yandex.net/foundationModels/v1/completion".into()
}

fn default_model() -> String {
    "yandexgpt/latest".into()
}

fn default_temperature() -> f64 {
    0.5
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_backend_timeout_secs() -> u64 {
    60
}

fn default_system_prompt() -> String {
    SYSTEM_PROMPT.into()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            folder_id: String::new(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_backend_timeout_secs(),
            system_prompt: default_system_prompt(),
        }
    }
}

impl BackendConfig {
    /// `gpt://{folder_id}/{model}`
    pub fn model_uri(&self) -> String {
        format!("gpt://{}/{}", self.folder_id, self.model)
    }

    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref() {
            None | Some("") => "(not set)".into(),
            Some(key) if key.chars().count() <= 8 => "****".into(),
            Some(key) => {
                let head: String = key.chars().take(4).collect();
                format!("{head}****")
            }
        }
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.masked_api_key())
            .field("folder_id", &self.folder_id)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .field("system_prompt_chars", &self.system_prompt.chars().count())
            .finish()
    }
}

/// Card rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_render_timeout_secs")]
    pub timeout_secs: u64,
    /// Chrome/Chromium binary; autodetected when unset
    #[serde(default)]
    pub chrome_executable: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub no_sandbox: bool,
    /// Extra `*.html` card templates, addressed by file stem
    #[serde(default)]
    pub templates_dir: Option<String>,
}

fn default_render_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_render_timeout_secs(),
            chrome_executable: None,
            no_sandbox: true,
            templates_dir: None,
        }
    }
}

impl RenderConfig {
    /// `templates_dir` with a leading `~` expanded.
    pub fn resolved_templates_dir(&self) -> Option<PathBuf> {
        let raw = self.templates_dir.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        Some(PathBuf::from(shellexpand::tilde(raw).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_yandex() {
        let config = Config::default();
        assert!(config.backend.api_url.ends_with("/foundationModels/v1/completion"));
        assert_eq!(config.backend.model, "yandexgpt/latest");
        assert_eq!(config.backend.max_tokens, 2000);
        assert_eq!(config.render.timeout_secs, 30);
        assert!(config.render.no_sandbox);
    }

    #[test]
    fn model_uri_combines_folder_and_model() {
        let backend = BackendConfig {
            folder_id: "b1gabc".into(),
            ..BackendConfig::default()
        };
        assert_eq!(backend.model_uri(), "gpt://b1gabc/yandexgpt/latest");
    }

    #[test]
    fn debug_output_masks_api_key() {
        let backend = BackendConfig {
            api_key: Some("AQVNsecretsecretsecret".into()),
            ..BackendConfig::default()
        };
        let debug = format!("{backend:?}");
        assert!(debug.contains("AQVN****"));
        assert!(!debug.contains("secretsecret"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            folder_id = "b1gabc"
            temperature = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.folder_id, "b1gabc");
        assert!((config.backend.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.backend.timeout_secs, 60);
        assert_eq!(config.render.timeout_secs, 30);
    }

    #[test]
    fn templates_dir_expands_tilde() {
        let render = RenderConfig {
            templates_dir: Some("~/cards".into()),
            ..RenderConfig::default()
        };
        let resolved = render.resolved_templates_dir().unwrap();
        assert!(!resolved.to_string_lossy().starts_with('~'));
        assert!(resolved.ends_with("cards"));

        let blank = RenderConfig {
            templates_dir: Some("  ".into()),
            ..RenderConfig::default()
        };
        assert!(blank.resolved_templates_dir().is_none());
    }
}
