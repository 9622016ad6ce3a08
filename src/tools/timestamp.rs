/// 將秒數轉換為零填補的 `HH:MM:SS.mmm` 字串
///
/// ffmpeg 的 `-ss` 參數接受此格式，毫秒固定三位
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;
    format!("{hours:02}:{minutes:02}:{secs:06.3}")
}
