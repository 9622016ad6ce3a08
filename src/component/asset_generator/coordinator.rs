use super::preview::generate_preview;
use super::report::{AssetStatus, FileAssetReport};
use super::sprite::generate_sprites;
use super::thumbnail::generate_thumbnail;
use crate::config::OutputSettings;
use crate::tools::{CommandLogger, ensure_directory_exists, get_video_duration};
use anyhow::Result;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// 三種資產的確定性輸出路徑
///
/// 路徑只由影片檔名 stem 與資產種類決定，是冪等檢查成立的前提
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub thumbnail: PathBuf,
    pub preview: PathBuf,
    pub sprite_pattern: PathBuf,
    pub sprite_first_frame: PathBuf,
}

/// 資產協調器
///
/// 對單一影片驅動三個生成器，確保每種資產至多生成一次。
/// 不持有生成呼叫以外的狀態，檔案系統即是「已生成」的唯一紀錄，
/// 因此程序可安全重啟。同檔案的並行 ensure 呼叫可能重做相同工作，
/// 結果收斂到同一份資產；嚴格的 at-most-once 由呼叫端自行加鎖
#[derive(Clone)]
pub struct AssetCoordinator {
    thumbnail_dir: PathBuf,
    preview_dir: PathBuf,
    sprite_dir: PathBuf,
    logger: CommandLogger,
}

impl AssetCoordinator {
    #[must_use]
    pub fn new(output_root: &Path, output: &OutputSettings, logger: CommandLogger) -> Self {
        Self {
            thumbnail_dir: output_root.join(&output.thumbnail_dir),
            preview_dir: output_root.join(&output.preview_dir),
            sprite_dir: output_root.join(&output.sprite_dir),
            logger,
        }
    }

    fn video_stem(video: &Path) -> String {
        video
            .file_stem()
            .map_or_else(|| "video".to_string(), |s| s.to_string_lossy().into_owned())
    }

    /// 由影片路徑推導三種資產的輸出路徑（純函式，不碰檔案系統）
    #[must_use]
    pub fn asset_paths(&self, video: &Path) -> AssetPaths {
        let stem = Self::video_stem(video);
        AssetPaths {
            thumbnail: self.thumbnail_dir.join(format!("{stem}.jpg")),
            preview: self.preview_dir.join(format!("{stem}.mp4")),
            sprite_pattern: self.sprite_dir.join(format!("{stem}_%03d.jpg")),
            sprite_first_frame: self.sprite_dir.join(format!("{stem}_001.jpg")),
        }
    }

    /// 查詢資產就緒狀態，只做存在檢查、無副作用
    #[must_use]
    pub fn assets_ready(&self, video: &Path) -> AssetStatus {
        let paths = self.asset_paths(video);
        AssetStatus {
            thumbnail_ready: paths.thumbnail.exists(),
            preview_ready: paths.preview.exists(),
            sprite_ready: paths.sprite_first_frame.exists(),
        }
    }

    /// 確保影片的三種資產都存在，缺少的才生成
    ///
    /// 工具層的失敗記在各自的結果裡，不會中斷其他資產；
    /// 只有輸出資料夾建立失敗會回傳 Err
    pub fn ensure_assets(&self, video: &Path) -> Result<FileAssetReport> {
        let paths = self.asset_paths(video);

        ensure_directory_exists(&self.thumbnail_dir)?;
        ensure_directory_exists(&self.preview_dir)?;
        ensure_directory_exists(&self.sprite_dir)?;

        // 三個生成器共用同一次時長探測
        let duration = get_video_duration(video);
        if duration <= 0.0 {
            warn!("無法取得影片時長，使用保守參數: {}", video.display());
        }

        info!("確保資產: {} (時長 {duration:.1}s)", video.display());

        let results = vec![
            generate_thumbnail(video, &paths.thumbnail, duration, None, &self.logger),
            generate_preview(video, &paths.preview, duration, None, &self.logger),
            generate_sprites(
                video,
                &paths.sprite_pattern,
                &paths.sprite_first_frame,
                duration,
                None,
                &self.logger,
            ),
        ];

        Ok(FileAssetReport {
            video_path: video.to_path_buf(),
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator(root: &Path) -> AssetCoordinator {
        let logger = CommandLogger::open(&root.join("ffmpeg.log")).unwrap();
        AssetCoordinator::new(root, &OutputSettings::default(), logger)
    }

    #[test]
    fn test_asset_paths_are_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let coordinator = coordinator(dir.path());

        let video = dir.path().join("videos/family_trip.mp4");
        let first = coordinator.asset_paths(&video);
        let second = coordinator.asset_paths(&video);

        assert_eq!(first.thumbnail, second.thumbnail);
        assert_eq!(
            first.thumbnail,
            dir.path().join("thumbnails/family_trip.jpg")
        );
        assert_eq!(first.preview, dir.path().join("previews/family_trip.mp4"));
        assert_eq!(
            first.sprite_pattern,
            dir.path().join("sprites/family_trip_%03d.jpg")
        );
        assert_eq!(
            first.sprite_first_frame,
            dir.path().join("sprites/family_trip_001.jpg")
        );
    }

    #[test]
    fn test_stem_keeps_inner_dots() {
        let dir = tempfile::tempdir().unwrap();
        let coordinator = coordinator(dir.path());

        let paths = coordinator.asset_paths(Path::new("/v/trip.2024.summer.mkv"));
        assert_eq!(
            paths.thumbnail,
            dir.path().join("thumbnails/trip.2024.summer.jpg")
        );
    }

    #[test]
    fn test_assets_ready_reflects_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let coordinator = coordinator(dir.path());
        let video = Path::new("/v/movie.mp4");

        let status = coordinator.assets_ready(video);
        assert!(!status.thumbnail_ready);
        assert!(!status.all_ready());

        let paths = coordinator.asset_paths(video);
        std::fs::create_dir_all(paths.thumbnail.parent().unwrap()).unwrap();
        std::fs::write(&paths.thumbnail, "jpg").unwrap();

        let status = coordinator.assets_ready(video);
        assert!(status.thumbnail_ready);
        assert!(!status.preview_ready);
    }
}
