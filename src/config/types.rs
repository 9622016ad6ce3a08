use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 最近使用路徑的保留數量
pub const MAX_RECENT_PATHS: usize = 5;

/// 影片副檔名白名單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoExtensionTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: Vec<String>,
}

impl Default for VideoExtensionTable {
    fn default() -> Self {
        Self {
            video_file: [".mp4", ".mov", ".mkv", ".webm"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl VideoExtensionTable {
    #[must_use]
    pub fn extensions_set(&self) -> HashSet<String> {
        self.video_file
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect()
    }

    #[must_use]
    pub fn is_video_file(&self, path: &Path) -> bool {
        let extensions = self.extensions_set();
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&format!(".{}", ext.to_lowercase())))
    }
}

/// 資產輸出資料夾名稱（相對於輸出根目錄）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub thumbnail_dir: String,
    pub preview_dir: String,
    pub sprite_dir: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            thumbnail_dir: "thumbnails".to_string(),
            preview_dir: "previews".to_string(),
            sprite_dir: "sprites".to_string(),
        }
    }
}

/// 使用者設定，儲存於工作目錄的 settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 同時處理的影片數量上限（每個 worker 佔用一個外部編碼程序）
    pub worker_count: usize,
    pub output: OutputSettings,
    pub recent_paths: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            worker_count: 2,
            output: OutputSettings::default(),
            recent_paths: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub video_extensions: VideoExtensionTable,
    pub settings: UserSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_allow_list() {
        let table = VideoExtensionTable::default();
        assert!(table.is_video_file(&PathBuf::from("/videos/movie.mp4")));
        assert!(table.is_video_file(&PathBuf::from("/videos/clip.WebM")));
        assert!(table.is_video_file(&PathBuf::from("/videos/a.b.MKV")));
        assert!(!table.is_video_file(&PathBuf::from("/videos/movie.avi")));
        assert!(!table.is_video_file(&PathBuf::from("/videos/no_extension")));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: UserSettings = serde_json::from_str(r#"{"worker_count": 4}"#).unwrap();
        assert_eq!(settings.worker_count, 4);
        assert_eq!(settings.output.thumbnail_dir, "thumbnails");
        assert!(settings.recent_paths.is_empty());
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = UserSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: UserSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.worker_count, settings.worker_count);
        assert_eq!(back.output.sprite_dir, "sprites");
    }
}
