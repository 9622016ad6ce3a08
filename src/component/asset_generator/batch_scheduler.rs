use super::coordinator::AssetCoordinator;
use super::report::FileAssetReport;
use crate::tools::{CpuMonitor, VideoFileInfo};
use anyhow::Result;
use log::{error, info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// 單一影片的資產生成任務
#[derive(Debug)]
pub struct AssetTask {
    pub video_path: PathBuf,
    pub status: TaskStatus,
    pub report: Option<FileAssetReport>,
    pub error_message: Option<String>,
}

impl AssetTask {
    fn new(video: VideoFileInfo) -> Self {
        Self {
            video_path: video.path,
            status: TaskStatus::Pending,
            report: None,
            error_message: None,
        }
    }
}

struct RunningWorker {
    handle: JoinHandle<Result<FileAssetReport>>,
    task_index: usize,
}

/// 有界工作池排程器
///
/// 每個 worker 將一部影片的三種資產依序做完才接下一部；
/// 併發上限由設定的 worker 數與 CPU 使用率門檻共同決定。
/// 收到中斷信號後不再排入新任務，進行中的外部程序跑到結束為止
pub struct BatchScheduler {
    coordinator: AssetCoordinator,
    tasks: Vec<AssetTask>,
    running: Vec<RunningWorker>,
    cpu_monitor: CpuMonitor,
    worker_limit: usize,
    shutdown_signal: Arc<AtomicBool>,
}

impl BatchScheduler {
    #[must_use]
    pub fn new(
        coordinator: AssetCoordinator,
        video_files: Vec<VideoFileInfo>,
        worker_limit: usize,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        let tasks = video_files.into_iter().map(AssetTask::new).collect();

        Self {
            coordinator,
            tasks,
            running: Vec::new(),
            cpu_monitor: CpuMonitor::default(),
            worker_limit: worker_limit.max(1),
            shutdown_signal,
        }
    }

    pub fn run(&mut self) {
        info!("開始資產生成任務，共 {} 個檔案", self.tasks.len());

        while !self.is_all_done() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                self.drain_running();
                return;
            }

            self.collect_finished_workers();
            self.spawn_workers_if_possible();
            self.print_status();

            thread::sleep(Duration::from_millis(500));
        }

        info!("所有資產生成任務已完成");
    }

    fn is_all_done(&self) -> bool {
        self.tasks
            .iter()
            .all(|t| matches!(t.status, TaskStatus::Completed | TaskStatus::Failed))
            && self.running.is_empty()
    }

    fn spawn_workers_if_possible(&mut self) {
        while self.running.len() < self.worker_limit {
            // 至少讓一個 worker 工作，避免高 CPU 時整批卡死
            if !self.running.is_empty() && !self.cpu_monitor.can_spawn_new_task() {
                break;
            }

            let Some(task_index) = self
                .tasks
                .iter()
                .position(|t| t.status == TaskStatus::Pending)
            else {
                break;
            };

            let task = &mut self.tasks[task_index];
            task.status = TaskStatus::Running;

            info!("開始處理: {}", task.video_path.display());

            let coordinator = self.coordinator.clone();
            let video_path = task.video_path.clone();
            let handle = thread::spawn(move || coordinator.ensure_assets(&video_path));

            self.running.push(RunningWorker { handle, task_index });
        }
    }

    fn collect_finished_workers(&mut self) {
        let mut index = 0;
        while index < self.running.len() {
            if self.running[index].handle.is_finished() {
                let worker = self.running.swap_remove(index);
                Self::record_worker_result(&mut self.tasks[worker.task_index], worker.handle);
            } else {
                index += 1;
            }
        }
    }

    fn record_worker_result(task: &mut AssetTask, handle: JoinHandle<Result<FileAssetReport>>) {
        match handle.join() {
            Ok(Ok(report)) => {
                if report.all_succeeded() {
                    task.status = TaskStatus::Completed;
                    info!(
                        "資產就緒: {} (生成 {}、跳過 {})",
                        task.video_path.display(),
                        report.generated_count(),
                        report.skipped_count()
                    );
                } else {
                    task.status = TaskStatus::Failed;
                    error!(
                        "部分資產生成失敗: {} ({} 個失敗)",
                        task.video_path.display(),
                        report.failed_count()
                    );
                }
                task.report = Some(report);
            }
            Ok(Err(e)) => {
                task.status = TaskStatus::Failed;
                task.error_message = Some(e.to_string());
                error!("資產生成失敗 {}: {e}", task.video_path.display());
            }
            Err(_) => {
                task.status = TaskStatus::Failed;
                task.error_message = Some("worker 執行緒異常結束".to_string());
                error!("worker 執行緒異常結束: {}", task.video_path.display());
            }
        }
    }

    /// 中斷後等待進行中的 worker 收尾；外部程序沒有取消機制
    fn drain_running(&mut self) {
        warn!(
            "收到中斷信號，等待 {} 個進行中的任務完成...",
            self.running.len()
        );

        let workers: Vec<RunningWorker> = self.running.drain(..).collect();
        for worker in workers {
            Self::record_worker_result(&mut self.tasks[worker.task_index], worker.handle);
        }
    }

    fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    fn print_status(&mut self) {
        println!(
            "\r\x1b[K[狀態] 等待: {} | 執行中: {} | 完成: {} | 失敗: {} | CPU: {:.1}%",
            self.count(TaskStatus::Pending),
            self.running.len(),
            self.count(TaskStatus::Completed),
            self.count(TaskStatus::Failed),
            self.cpu_monitor.current_usage()
        );
    }

    #[must_use]
    pub fn tasks(&self) -> &[AssetTask] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputSettings;
    use crate::tools::CommandLogger;

    #[test]
    fn test_empty_task_list_finishes_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let logger = CommandLogger::open(&dir.path().join("ffmpeg.log")).unwrap();
        let coordinator =
            AssetCoordinator::new(dir.path(), &OutputSettings::default(), logger);

        let mut scheduler = BatchScheduler::new(
            coordinator,
            Vec::new(),
            2,
            Arc::new(AtomicBool::new(false)),
        );
        scheduler.run();

        assert!(scheduler.tasks().is_empty());
    }

    #[test]
    fn test_worker_limit_has_floor_of_one() {
        let dir = tempfile::tempdir().unwrap();
        let logger = CommandLogger::open(&dir.path().join("ffmpeg.log")).unwrap();
        let coordinator =
            AssetCoordinator::new(dir.path(), &OutputSettings::default(), logger);

        let scheduler = BatchScheduler::new(
            coordinator,
            Vec::new(),
            0,
            Arc::new(AtomicBool::new(false)),
        );
        assert_eq!(scheduler.worker_limit, 1);
    }
}
