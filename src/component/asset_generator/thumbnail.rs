use super::ffmpeg_command::thumbnail_command;
use super::planner::thumbnail_timestamp;
use super::report::{ArtifactKind, ArtifactResult};
use crate::tools::{CommandLogger, run_with_fallback};
use log::{debug, error};
use std::path::Path;

/// 產生海報縮圖：於推導出的時間點擷取單一畫面
///
/// 輸出已存在時直接跳過；`timestamp_override` 可繞過自動推導
pub fn generate_thumbnail(
    video: &Path,
    output: &Path,
    duration: f64,
    timestamp_override: Option<&str>,
    logger: &CommandLogger,
) -> ArtifactResult {
    let label = format!("THUMBNAIL {}", video.display());

    if output.exists() {
        debug!("縮圖已存在，跳過: {}", output.display());
        return ArtifactResult::skipped(ArtifactKind::Thumbnail, output.to_path_buf(), label);
    }

    let timestamp =
        timestamp_override.map_or_else(|| thumbnail_timestamp(duration), ToString::to_string);
    let commands = thumbnail_command(video, output, &timestamp);
    let outcome = run_with_fallback(&commands.gpu, &commands.cpu, &label, logger);

    if !outcome.succeeded {
        error!("縮圖生成失敗: {}", video.display());
    }

    ArtifactResult {
        kind: ArtifactKind::Thumbnail,
        output_path: output.to_path_buf(),
        succeeded: outcome.succeeded,
        used_fallback: outcome.used_fallback,
        skipped: false,
        label,
    }
}
