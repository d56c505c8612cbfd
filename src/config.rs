use crate::error::{CrmError, Result};
use nailist_crm_common::BackendConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const URL_ENV: &str = "SUPABASE_URL";
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    /// フォントの保存先（省略時は web-wasm/public/fonts）
    #[serde(default)]
    pub font_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CrmError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("nailist-crm").join("config.json"))
    }

    /// 接続設定（環境変数を優先）
    pub fn backend_config(&self) -> Result<BackendConfig> {
        self.backend_config_with(std::env::var(URL_ENV).ok(), std::env::var(ANON_KEY_ENV).ok())
    }

    pub fn backend_config_with(
        &self,
        env_url: Option<String>,
        env_key: Option<String>,
    ) -> Result<BackendConfig> {
        let url = env_url.or_else(|| self.supabase_url.clone());
        let key = env_key.or_else(|| self.supabase_anon_key.clone());
        if url.is_none() || key.is_none() {
            return Err(CrmError::MissingBackendConfig);
        }
        Ok(BackendConfig::new(url.as_deref(), key.as_deref())?)
    }

    pub fn font_dir(&self) -> PathBuf {
        self.font_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("web-wasm").join("public").join("fonts"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_stored_values() {
        let config = Config {
            supabase_url: Some("https://stored.supabase.co".into()),
            supabase_anon_key: Some("stored-key".into()),
            font_dir: None,
        };
        let backend = config
            .backend_config_with(Some("https://env.supabase.co".into()), None)
            .expect("設定解決失敗");
        assert_eq!(backend.url, "https://env.supabase.co");
        assert_eq!(backend.anon_key, "stored-key");
    }

    #[test]
    fn test_missing_values_are_fatal() {
        let config = Config::default();
        let result = config.backend_config_with(None, Some("key".into()));
        assert!(matches!(result, Err(CrmError::MissingBackendConfig)));
    }

    #[test]
    fn test_default_font_dir() {
        assert_eq!(Config::default().font_dir(), PathBuf::from("web-wasm/public/fonts"));
    }
}
