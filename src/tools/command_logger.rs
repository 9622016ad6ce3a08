use crate::tools::ProcessOutput;
use anyhow::{Context, Result};
use log::warn;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 共用的指令診斷紀錄
///
/// 開啟一次、附加模式、永不截斷；每個區塊在鎖內一次寫入並 flush，
/// 多個 worker 同時記錄時區塊不會互相穿插
#[derive(Clone)]
pub struct CommandLogger {
    file: Arc<Mutex<File>>,
}

impl CommandLogger {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("無法開啟診斷紀錄檔: {}", path.display()))?;

        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }

    /// 附加一個帶標籤的輸出區塊
    ///
    /// 寫入失敗只記錄警告，不影響呼叫端的生成流程
    pub fn record(&self, label: &str, output: &ProcessOutput) {
        let block = format!("\n[{label}]\n{}{}\n", output.stdout, output.stderr);

        let Ok(mut file) = self.file.lock() else {
            warn!("診斷紀錄鎖已失效，略過區塊: {label}");
            return;
        };

        if let Err(e) = file.write_all(block.as_bytes()).and_then(|()| file.flush()) {
            warn!("無法寫入診斷紀錄 [{label}]: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &str, stderr: &str) -> ProcessOutput {
        ProcessOutput {
            exit_code: Some(0),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_record_appends_labeled_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ffmpeg.log");

        let logger = CommandLogger::open(&path).unwrap();
        logger.record("THUMBNAIL a.mp4 (GPU)", &output("out-a", "err-a"));
        logger.record("THUMBNAIL a.mp4 (CPU)", &output("", "err-b"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n[THUMBNAIL a.mp4 (GPU)]\nout-aerr-a\n"));
        assert!(content.contains("\n[THUMBNAIL a.mp4 (CPU)]\nerr-b\n"));
    }

    #[test]
    fn test_reopen_does_not_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ffmpeg.log");

        CommandLogger::open(&path)
            .unwrap()
            .record("FIRST", &output("one", ""));
        CommandLogger::open(&path)
            .unwrap()
            .record("SECOND", &output("two", ""));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[FIRST]"));
        assert!(content.contains("[SECOND]"));
    }
}
