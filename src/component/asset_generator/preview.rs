use super::ffmpeg_command::preview_command;
use super::planner::{PreviewWindow, preview_window};
use super::report::{ArtifactKind, ArtifactResult};
use crate::tools::{CommandLogger, run_with_fallback};
use log::{debug, error};
use std::path::Path;

/// 產生短預覽片段：時間區段內重新編碼、去除音訊
///
/// 輸出已存在時直接跳過；`window_override` 可繞過自動推導
pub fn generate_preview(
    video: &Path,
    output: &Path,
    duration: f64,
    window_override: Option<PreviewWindow>,
    logger: &CommandLogger,
) -> ArtifactResult {
    let label = format!("PREVIEW {}", video.display());

    if output.exists() {
        debug!("預覽已存在，跳過: {}", output.display());
        return ArtifactResult::skipped(ArtifactKind::Preview, output.to_path_buf(), label);
    }

    let window = window_override.unwrap_or_else(|| preview_window(duration));
    let commands = preview_command(video, output, &window);
    let outcome = run_with_fallback(&commands.gpu, &commands.cpu, &label, logger);

    if !outcome.succeeded {
        error!("預覽生成失敗: {}", video.display());
    }

    ArtifactResult {
        kind: ArtifactKind::Preview,
        output_path: output.to_path_buf(),
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
    fn test_existing_output_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("movie.mp4");
        std::fs::write(&output, "mp4").unwrap();

        let logger = CommandLogger::open(&dir.path().join("ffmpeg.log")).unwrap();
        let result = generate_preview(
            &dir.path().join("source/movie.mp4"),
            &output,
            120.0,
            None,
            &logger,
        );

        assert!(result.succeeded);
        assert!(result.skipped);
        assert_eq!(result.kind, ArtifactKind::Preview);
    }
}
