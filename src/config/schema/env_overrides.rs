use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("POSTCRAFT_API_KEY").or_else(|_| std::env::var("YANDEXGPT_API_KEY"))
            && !key.is_empty()
        {
            self.backend.api_key = Some(key);
        }

        if let Ok(folder) =
            std::env::var("POSTCRAFT_FOLDER_ID").or_else(|_| std::env::var("YANDEXGPT_CATALOG_ID"))
            && !folder.is_empty()
        {
            self.backend.folder_id = folder;
        }

        if let Ok(model) = std::env::var("POSTCRAFT_MODEL")
            && !model.is_empty()
        {
            self.backend.model = model;
        }

        if let Ok(temp_str) = std::env::var("POSTCRAFT_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=1.0).contains(&temp)
        {
            self.backend.temperature = temp;
        }

        if let Ok(secs_str) = std::env::var("POSTCRAFT_TIMEOUT_SECS")
            && let Ok(secs) = secs_str.parse::<u64>()
            && secs > 0
        {
            self.backend.timeout_secs = secs;
        }

        if let Ok(chrome) = std::env::var("POSTCRAFT_CHROME")
            && !chrome.is_empty()
        {
            self.render.chrome_executable = Some(PathBuf::from(chrome));
        }
    }
}
