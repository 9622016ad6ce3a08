use crate::tools::{CommandLogger, ProcessOutput, run_command};
use log::{info, warn};

/// 兩段式執行的最終結果
#[derive(Debug, Clone, Copy)]
pub struct AttemptOutcome {
    pub succeeded: bool,
    pub used_fallback: bool,
}

/// 判斷 GPU 嘗試是否失敗
///
/// 除了結束碼外，也檢查 stderr 是否含 "error" 字樣（不分大小寫）；
/// 部分 GPU 編碼器會以結束碼 0 夾帶錯誤訊息。啟發式集中在這裡，
/// 之後若外部工具的錯誤回報結構化，只需改這一個函式
#[must_use]
pub fn attempt_failed(output: &ProcessOutput) -> bool {
    !output.success() || output.stderr.to_lowercase().contains("error")
}

/// 先執行 GPU 指令，偵測到失敗時改以 CPU 指令重試一次
///
/// GPU 路徑依環境而定（驅動、編解碼器），只能是效能最佳化而非硬性依賴。
/// CPU 的結果即為最終結果，成敗以結束碼為準，沒有第三次嘗試
pub fn run_with_fallback(
    gpu_args: &[String],
    cpu_args: &[String],
    label: &str,
    logger: &CommandLogger,
) -> AttemptOutcome {
    let gpu_failed = match run_command(gpu_args) {
        Ok(output) => {
            logger.record(&format!("{label} (GPU)"), &output);
            attempt_failed(&output)
        }
        Err(e) => {
            warn!("{label} GPU 指令無法啟動: {e}");
            true
        }
    };

    if !gpu_failed {
        return AttemptOutcome {
            succeeded: true,
            used_fallback: false,
        };
    }

    info!("{label} GPU 路徑失敗，改用 CPU 重試");

    let succeeded = match run_command(cpu_args) {
        Ok(output) => {
            logger.record(&format!("{label} (CPU)"), &output);
            output.success()
        }
        Err(e) => {
            warn!("{label} CPU 指令無法啟動: {e}");
            false
        }
    };

    AttemptOutcome {
        succeeded,
        used_fallback: true,
    }
}
