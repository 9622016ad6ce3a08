use super::ffmpeg_command::sprite_command;
use super::planner::sprite_interval;
use super::report::{ArtifactKind, ArtifactResult};
use crate::tools::{CommandLogger, ensure_directory_exists, run_with_fallback};
use log::{debug, error, warn};
use std::path::Path;

/// 產生時間軸快照序列：固定間隔取樣、縮至 160 寬
///
/// 輸出為 `{stem}_001.jpg` 起跳的編號序列（image2 預設從 1 開始），
/// 以第一張是否存在作為冪等閘門；`interval_override` 可繞過自動推導
pub fn generate_sprites(
    video: &Path,
    output_pattern: &Path,
    first_frame: &Path,
    duration: f64,
    interval_override: Option<f64>,
    logger: &CommandLogger,
) -> ArtifactResult {
    let label = format!("SPRITES {}", video.display());

    if first_frame.exists() {
        debug!("時間軸快照已存在，跳過: {}", first_frame.display());
        return ArtifactResult::skipped(ArtifactKind::Sprite, output_pattern.to_path_buf(), label);
    }

    if let Some(parent) = output_pattern.parent() {
        if let Err(e) = ensure_directory_exists(parent) {
            warn!("無法建立快照輸出資料夾: {e}");
            return ArtifactResult {
                kind: ArtifactKind::Sprite,
                output_path: output_pattern.to_path_buf(),
                succeeded: false,
                used_fallback: false,
                skipped: false,
                label,
            };
        }
    }

    let interval = interval_override.unwrap_or_else(|| sprite_interval(duration));
    let commands = sprite_command(video, output_pattern, interval);
    let outcome = run_with_fallback(&commands.gpu, &commands.cpu, &label, logger);

    if !outcome.succeeded {
        error!("時間軸快照生成失敗: {}", video.display());
    }

    ArtifactResult {
        kind: ArtifactKind::Sprite,
        output_path: output_pattern.to_path_buf(),
        succeeded: outcome.succeeded,
        used_fallback: outcome.used_fallback,
        skipped: false,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_gates_regeneration() {
        let dir = tempfile::tempdir().unwrap();
        let sprite_dir = dir.path().join("sprites");
        std::fs::create_dir_all(&sprite_dir).unwrap();

        let first = sprite_dir.join("movie_001.jpg");
        std::fs::write(&first, "jpg").unwrap();

        let logger = CommandLogger::open(&dir.path().join("ffmpeg.log")).unwrap();
        let result = generate_sprites(
            &dir.path().join("movie.mp4"),
            &sprite_dir.join("movie_%03d.jpg"),
            &first,
            45.0,
            None,
            &logger,
        );

        assert!(result.succeeded);
        assert!(result.skipped);
        assert_eq!(result.kind, ArtifactKind::Sprite);
    }
}
