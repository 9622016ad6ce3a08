use crate::config::VideoExtensionTable;
use crate::tools::get_video_duration;
use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 待處理的影片檔案
///
/// 身分以絕對路徑為準；掃描後在生成請求期間視為不可變
#[derive(Debug, Clone)]
pub struct VideoFileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub duration_seconds: Option<f64>,
}

/// 掃描資料夾中符合副檔名白名單的影片，依檔案大小排序（由小到大）
///
/// 時長以 ffprobe 平行探測，取不到時留空
pub fn scan_video_files(
    directory: &Path,
    extensions: &VideoExtensionTable,
) -> Result<Vec<VideoFileInfo>> {
    let mut video_files: Vec<VideoFileInfo> = WalkDir::new(directory)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| extensions.is_video_file(entry.path()))
        .par_bridge()
        .filter_map(|entry| {
            let metadata = entry.metadata().ok()?;
            let duration = get_video_duration(entry.path());

            Some(VideoFileInfo {
                path: entry.into_path(),
                size: metadata.len(),
                duration_seconds: (duration > 0.0).then_some(duration),
            })
        })
        .collect();

    video_files.sort_by_key(|file| file.size);
    Ok(video_files)
}
