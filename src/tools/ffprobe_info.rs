use crate::tools::{CommandLogger, run_command};
use log::{debug, warn};
use serde::Deserialize;
use std::path::Path;

/// 單一影片的串流與容器中繼資料快照
///
/// 每次探測都重新產生，不在此層快取。任何欄位都可能缺漏，
/// 呼叫端必須能在缺漏狀態下安全降級
#[derive(Debug, Clone, Default)]
pub struct MediaMetadata {
    pub duration_seconds: Option<f64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub codec_name: Option<String>,
    pub size_bytes: Option<u64>,
    pub bit_rate_bps: Option<u64>,
}

impl MediaMetadata {
    /// 時長未知時回傳 0，供參數推導的降級分支使用
    #[must_use]
    pub fn duration_or_zero(&self) -> f64 {
        self.duration_seconds.unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct FormatInfo {
    duration: Option<String>,
    size: Option<String>,
    bit_rate: Option<String>,
}

#[derive(Deserialize)]
struct StreamInfo {
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<String>,
    codec_name: Option<String>,
}

/// 使用 ffprobe 取得結構化中繼資料
///
/// 只讀取第一條視訊串流與容器層欄位，原始輸出記錄到診斷紀錄。
/// 工具失敗或輸出無法解析時回傳空的 `MediaMetadata`，絕不中斷呼叫端
pub fn probe_metadata(path: &Path, logger: &CommandLogger) -> MediaMetadata {
    let args: Vec<String> = [
        "ffprobe",
        "-v",
        "error",
        "-select_streams",
        "v:0",
        "-show_entries",
        "stream=width,height,duration,codec_name",
        "-show_entries",
        "format=duration,size,bit_rate",
        "-of",
        "json",
    ]
    .iter()
    .map(ToString::to_string)
    .chain(std::iter::once(path.to_string_lossy().into_owned()))
    .collect();

    let output = match run_command(&args) {
        Ok(output) => output,
        Err(e) => {
            warn!("無法執行 ffprobe: {e}");
            return MediaMetadata::default();
        }
    };

    logger.record(&format!("METADATA {}", path.display()), &output);

    parse_probe_output(&output.stdout)
}

fn parse_probe_output(stdout: &str) -> MediaMetadata {
    let Ok(probe) = serde_json::from_str::<FfprobeOutput>(stdout) else {
        warn!("ffprobe 輸出無法解析，回傳空中繼資料");
        return MediaMetadata::default();
    };

    let stream = probe.streams.as_ref().and_then(|streams| streams.first());
    let format = probe.format.as_ref();

    // 時長以容器層為準，缺漏時退回串流層
    let duration_seconds = format
        .and_then(|f| f.duration.as_deref())
        .or_else(|| stream.and_then(|s| s.duration.as_deref()))
        .and_then(|d| d.parse::<f64>().ok());

    MediaMetadata {
        duration_seconds,
        width: stream.and_then(|s| s.width),
        height: stream.and_then(|s| s.height),
        codec_name: stream.and_then(|s| s.codec_name.clone()),
        size_bytes: format
            .and_then(|f| f.size.as_deref())
            .and_then(|v| v.parse().ok()),
        bit_rate_bps: format
            .and_then(|f| f.bit_rate.as_deref())
            .and_then(|v| v.parse().ok()),
    }
}

/// 只取得影片時長（秒）
///
/// 取不到時回傳 0，供各生成器在探測失敗時仍能繼續
#[must_use]
pub fn get_video_duration(path: &Path) -> f64 {
    let args: Vec<String> = [
        "ffprobe",
        "-v",
        "error",
        "-show_entries",
        "format=duration",
        "-of",
        "csv=p=0",
    ]
    .iter()
    .map(ToString::to_string)
    .chain(std::iter::once(path.to_string_lossy().into_owned()))
    .collect();

    match run_command(&args) {
        Ok(output) => output.stdout.trim().parse::<f64>().unwrap_or(0.0),
        Err(e) => {
            debug!("無法執行 ffprobe 取得時長: {e}");
            0.0
        }
    }
}
