use super::batch_scheduler::{AssetTask, BatchScheduler, TaskStatus};
use super::coordinator::AssetCoordinator;
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::tools::{
    CommandLogger, ensure_directory_exists, scan_video_files, validate_directory_exists,
};
use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 診斷紀錄檔名，固定放在輸出根目錄
const DIAGNOSTIC_LOG_NAME: &str = "ffmpeg.log";

/// 瀏覽資產生成器
///
/// 流程：
/// A. 掃描影片資料夾（副檔名白名單）
/// B. 建立協調器與共用診斷紀錄
/// C. 有界工作池逐檔生成縮圖／預覽／時間軸快照
/// D. 統計摘要
pub struct AssetGenerator {
    config: Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl AssetGenerator {
    pub const fn new(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style("=== 影片瀏覽資產生成 ===").cyan().bold());

        let input_path = self.prompt_input_path()?;
        let input_dir = PathBuf::from(&input_path);
        validate_directory_exists(&input_dir)?;

        let output_path = self.prompt_output_path()?;
        let output_root = PathBuf::from(&output_path);
        ensure_directory_exists(&output_root)?;

        self.remember_input_path(&input_path);

        println!("{}", style("掃描影片檔案中...").dim());
        let video_files = scan_video_files(&input_dir, &self.config.video_extensions)?;

        if video_files.is_empty() {
            println!("{}", style("找不到任何影片檔案").yellow());
            return Ok(());
        }

        println!(
            "{}",
            style(format!(
                "找到 {} 個影片檔案，依檔案大小排序（由小到大）",
                video_files.len()
            ))
            .green()
        );

        for (index, file) in video_files.iter().enumerate() {
            let size_mb = file.size as f64 / 1024.0 / 1024.0;
            let duration = file
                .duration_seconds
                .map_or_else(|| "時長未知".to_string(), |d| format!("{d:.1}s"));
            println!(
                "  {}. {} ({size_mb:.2} MB, {duration})",
                index + 1,
                file.path.file_name().unwrap_or_default().to_string_lossy(),
            );
        }

        let logger = CommandLogger::open(&output_root.join(DIAGNOSTIC_LOG_NAME))
            .context("無法建立診斷紀錄")?;
        let coordinator =
            AssetCoordinator::new(&output_root, &self.config.settings.output, logger);

        println!();
        println!(
            "{}",
            style(format!(
                "開始生成資產（worker 數: {}）...",
                self.config.settings.worker_count
            ))
            .cyan()
        );

        let mut scheduler = BatchScheduler::new(
            coordinator,
            video_files,
            self.config.settings.worker_count,
            Arc::clone(&self.shutdown_signal),
        );
        scheduler.run();

        self.print_summary(scheduler.tasks());

        Ok(())
    }

    fn prompt_input_path(&self) -> Result<String> {
        let mut prompt = Input::new().with_prompt("請輸入影片資料夾路徑");

        // 預設帶入上次使用的路徑
        if let Some(recent) = self.config.settings.recent_paths.first() {
            prompt = prompt.default(recent.clone());
        }

        let path: String = prompt.interact_text()?;
        Ok(path.trim().to_string())
    }

    fn prompt_output_path(&self) -> Result<String> {
        let path: String = Input::new()
            .with_prompt("請輸入資產輸出根目錄")
            .interact_text()?;
        Ok(path.trim().to_string())
    }

    fn remember_input_path(&self, path: &str) {
        let mut settings = self.config.settings.clone();
        add_recent_path(&mut settings, path);
        if let Err(e) = save_settings(&settings) {
            warn!("無法儲存最近使用路徑: {e}");
        }
    }

    fn print_summary(&self, tasks: &[AssetTask]) {
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let failed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Failed)
            .count();
        let pending = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .count();

        let mut generated = 0;
        let mut skipped = 0;
        let mut fallbacks = 0;
        for report in tasks.iter().filter_map(|t| t.report.as_ref()) {
            generated += report.generated_count();
            skipped += report.skipped_count();
            fallbacks += report.fallback_count();
        }

        println!();
        println!("{}", style("=== 資產生成摘要 ===").cyan().bold());
        println!("  總計: {} 個影片", tasks.len());
        println!("  完成: {} 個", style(completed).green());

        if failed > 0 {
            println!("  失敗: {} 個", style(failed).red());
        }
        if pending > 0 {
            println!("  未處理（中斷）: {} 個", style(pending).yellow());
        }

        println!("  資產: 生成 {generated}、跳過 {skipped}（已存在）");
        if fallbacks > 0 {
            println!(
                "  {}",
                style(format!("其中 {fallbacks} 個資產改用 CPU 路徑完成")).dim()
            );
        }

        info!(
            "資產生成完成 - 完成: {completed}, 失敗: {failed}, 生成: {generated}, 跳過: {skipped}"
        );
    }
}
