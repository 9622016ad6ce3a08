use crate::tools::format_timestamp;

/// 預覽片段的起點與長度，皆為可直接餵給 ffmpeg 的參數字串
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewWindow {
    pub start: String,
    pub duration: String,
}

/// 依影片時長推導安全的縮圖擷取時間點
///
/// 時長未知時固定取第 1 秒。已知時取 10% 處並夾在 [1, 10] 秒之間；
/// 若落點達到或超過片尾，退回 `max(0.5, duration - 1)`，
/// 確保 seek 點一定落在可播放範圍內
#[must_use]
pub fn thumbnail_timestamp(duration: f64) -> String {
    if duration <= 0.0 {
        return "00:00:01".to_string();
    }

    let mut safe_time = (duration * 0.1).clamp(1.0, 10.0);
    if safe_time >= duration {
        safe_time = (duration - 1.0).max(0.5);
    }

    format_timestamp(safe_time)
}

/// 依影片時長推導預覽片段的起點與長度
///
/// 時長未知時從 0 秒開始固定剪 3 秒。已知時起點取 10% 處夾在
/// [1, 5] 秒，超出片尾則歸零；長度取剩餘片長的 80%，
/// 上限 5 秒、下限 1 秒，捨去到整數秒
#[must_use]
pub fn preview_window(duration: f64) -> PreviewWindow {
    if duration <= 0.0 {
        return PreviewWindow {
            start: "00:00:00".to_string(),
            duration: "3".to_string(),
        };
    }

    let mut start_time = (duration * 0.1).clamp(1.0, 5.0);
    if start_time >= duration {
        start_time = 0.0;
    }

    let remaining = duration - start_time;
    let clip_seconds = (remaining * 0.8).clamp(1.0, 5.0).trunc() as u32;

    PreviewWindow {
        start: format_timestamp(start_time),
        duration: clip_seconds.to_string(),
    }
}

/// 時間軸快照的擷取間隔（秒）
///
/// 短片用較密的間隔：30 秒以下取 duration/10（約 10 張，下限 1 秒），
/// 30～60 秒取 3 秒，其餘維持預設 5 秒；時長未知時也用預設值
#[must_use]
pub fn sprite_interval(duration: f64) -> f64 {
    if duration <= 0.0 {
        return 5.0;
    }

    if duration < 30.0 {
        (duration / 10.0).max(1.0)
    } else if duration < 60.0 {
        3.0
    } else {
        5.0
    }
}
