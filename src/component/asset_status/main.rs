use crate::component::asset_generator::AssetCoordinator;
use crate::config::Config;
use crate::tools::{
    CommandLogger, MediaMetadata, probe_metadata, scan_video_files, validate_directory_exists,
};
use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一影片的狀態列
struct StatusRow {
    file_name: String,
    metadata: MediaMetadata,
    thumbnail_ready: bool,
    preview_ready: bool,
    sprite_ready: bool,
}

/// 資產狀態檢查器
///
/// 逐檔探測中繼資料並檢查三種資產是否就緒；
/// 只讀取，不觸發任何生成
pub struct AssetStatusChecker {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl AssetStatusChecker {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 資產狀態與中繼資料 ===").cyan().bold());

        let input_path: String = Input::new()
            .with_prompt("請輸入影片資料夾路徑")
            .interact_text()?;
        let input_dir = PathBuf::from(input_path.trim());
        validate_directory_exists(&input_dir)?;

        let output_path: String = Input::new()
            .with_prompt("請輸入資產輸出根目錄")
            .interact_text()?;
        let output_root = PathBuf::from(output_path.trim());
        validate_directory_exists(&output_root)?;

        println!("{}", style("掃描影片檔案中...").dim());
        let video_files = scan_video_files(&input_dir, &self.config.video_extensions)?;

        if video_files.is_empty() {
            println!("{}", style("找不到任何影片檔案").yellow());
            return Ok(());
        }

        let logger = CommandLogger::open(&output_root.join("ffmpeg.log"))
            .context("無法開啟診斷紀錄")?;
        let coordinator =
            AssetCoordinator::new(&output_root, &self.config.settings.output, logger.clone());

        let progress_bar = ProgressBar::new(video_files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("探測中繼資料...");

        let mut rows = Vec::with_capacity(video_files.len());
        for file in &video_files {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                progress_bar.abandon_with_message("操作已中斷");
                warn!("狀態檢查被中斷");
                break;
            }

            let status = coordinator.assets_ready(&file.path);
            let metadata = probe_metadata(&file.path, &logger);

            rows.push(StatusRow {
                file_name: file
                    .path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
                metadata,
                thumbnail_ready: status.thumbnail_ready,
                preview_ready: status.preview_ready,
                sprite_ready: status.sprite_ready,
            });
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        self.print_report(&rows);

        Ok(())
    }

    fn print_report(&self, rows: &[StatusRow]) {
        println!();

        for row in rows {
            let meta = &row.metadata;
            let duration = meta
                .duration_seconds
                .map_or_else(|| "未知".to_string(), |d| format!("{d:.1}s"));
            let resolution = match (meta.width, meta.height) {
                (Some(w), Some(h)) => format!("{w}x{h}"),
                _ => "?".to_string(),
            };
            let codec = meta.codec_name.as_deref().unwrap_or("未知");
            let size = meta.size_bytes.map_or_else(
                || "?".to_string(),
                |b| format!("{:.1} MB", b as f64 / 1024.0 / 1024.0),
            );
            let bit_rate = meta.bit_rate_bps.map_or_else(
                || "?".to_string(),
                |b| format!("{} kbps", b / 1000),
            );

            println!("{}", style(&row.file_name).bold());
            println!("  {duration} | {resolution} | {codec} | {size} | {bit_rate}");
            println!(
                "  縮圖 {}  預覽 {}  快照 {}",
                ready_mark(row.thumbnail_ready),
                ready_mark(row.preview_ready),
                ready_mark(row.sprite_ready),
            );
        }

        let all_ready = rows
            .iter()
            .filter(|r| r.thumbnail_ready && r.preview_ready && r.sprite_ready)
            .count();

        println!();
        println!(
            "{}",
            style(format!("{all_ready}/{} 個影片資產齊全", rows.len())).cyan()
        );

        info!("狀態檢查完成 - 齊全: {all_ready}/{}", rows.len());
    }
}

fn ready_mark(ready: bool) -> console::StyledObject<&'static str> {
    if ready {
        style("✓").green()
    } else {
        style("✗").red()
    }
}
