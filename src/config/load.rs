use crate::config::types::{Config, UserSettings, VideoExtensionTable};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 編譯時嵌入的副檔名白名單（不需要外部檔案）
const VIDEO_EXTENSION_TABLE_JSON: &str = include_str!("../data/video_extension_table.json");

impl Config {
    pub fn new() -> Result<Self> {
        let video_extensions = Self::load_embedded_extension_table()?;
        let settings = Self::load_settings().unwrap_or_default();

        Ok(Self {
            video_extensions,
            settings,
        })
    }

    fn load_settings() -> Result<UserSettings> {
        let path = Path::new("settings.json");
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("無法讀取設定檔: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("無法解析設定檔: {}", path.display()))
    }

    /// 從編譯時嵌入的 JSON 載入副檔名白名單
    fn load_embedded_extension_table() -> Result<VideoExtensionTable> {
        serde_json::from_str(VIDEO_EXTENSION_TABLE_JSON).context("無法解析嵌入的副檔名白名單")
    }
}
