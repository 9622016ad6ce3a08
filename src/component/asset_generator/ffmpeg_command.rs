use super::planner::PreviewWindow;
use std::path::Path;

/// 同一目標的 GPU / CPU 指令組
///
/// 兩者輸出必須等價；GPU 版本只是加上 CUDA 硬體路徑的效能最佳化
#[derive(Debug, Clone)]
pub struct CommandPair {
    pub gpu: Vec<String>,
    pub cpu: Vec<String>,
}

fn arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn to_args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

/// 縮圖：於指定時間點擷取單一畫面存成 JPG
#[must_use]
pub fn thumbnail_command(video: &Path, output: &Path, timestamp: &str) -> CommandPair {
    let video = arg(video);
    let output = arg(output);

    CommandPair {
        gpu: to_args(&[
            "ffmpeg", "-y", "-hwaccel", "cuda", "-ss", timestamp, "-i", &video, "-vframes", "1",
            "-q:v", "2", &output,
        ]),
        cpu: to_args(&[
            "ffmpeg", "-y", "-ss", timestamp, "-i", &video, "-vframes", "1", "-q:v", "2", &output,
        ]),
    }
}

/// 預覽片段：時間區段內重新編碼並去除音訊
///
/// GPU 走 NVENC，CPU 走 libx264，preset 相同
#[must_use]
pub fn preview_command(video: &Path, output: &Path, window: &PreviewWindow) -> CommandPair {
    let video = arg(video);
    let output = arg(output);

    CommandPair {
        gpu: to_args(&[
            "ffmpeg",
            "-y",
            "-hwaccel",
            "cuda",
            "-ss",
            &window.start,
            "-t",
            &window.duration,
            "-i",
            &video,
            "-c:v",
            "h264_nvenc",
            "-preset",
            "fast",
            "-an",
            &output,
        ]),
        cpu: to_args(&[
            "ffmpeg",
            "-y",
            "-ss",
            &window.start,
            "-t",
            &window.duration,
            "-i",
            &video,
            "-c:v",
            "libx264",
            "-preset",
            "fast",
            "-an",
            &output,
        ]),
    }
}

/// 時間軸快照：固定間隔取樣、縮至 160 寬、輸出編號影像序列
#[must_use]
pub fn sprite_command(video: &Path, output_pattern: &Path, interval: f64) -> CommandPair {
    let video = arg(video);
    let pattern = arg(output_pattern);
    let filter = format!("fps=1/{interval},scale=160:-1");

    CommandPair {
        gpu: to_args(&[
            "ffmpeg",
            "-y",
            "-hwaccel",
            "cuda",
            "-i",
            &video,
            "-vf",
            &filter,
            "-qscale:v",
            "2",
            &pattern,
        ]),
        cpu: to_args(&[
            "ffmpeg", "-y", "-i", &video, "-vf", &filter, "-qscale:v", "2", &pattern,
        ]),
    }
}
