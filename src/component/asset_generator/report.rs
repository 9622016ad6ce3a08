use std::fmt;
use std::path::PathBuf;

/// 資產種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Thumbnail,
    Preview,
    Sprite,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Thumbnail => "縮圖",
            Self::Preview => "預覽",
            Self::Sprite => "時間軸快照",
        };
        write!(f, "{name}")
    }
}

/// 單一資產的生成結果
///
/// 只存活於一次生成呼叫，不做持久化；細節都在診斷紀錄裡
#[derive(Debug, Clone)]
pub struct ArtifactResult {
    pub kind: ArtifactKind,
    pub output_path: PathBuf,
    pub succeeded: bool,
    pub used_fallback: bool,
    pub skipped: bool,
    pub label: String,
}

impl ArtifactResult {
    /// 輸出已存在、未做任何工作的結果
    #[must_use]
    pub fn skipped(kind: ArtifactKind, output_path: PathBuf, label: String) -> Self {
        Self {
            kind,
            output_path,
            succeeded: true,
            used_fallback: false,
            skipped: true,
            label,
        }
    }
}

/// 單一影片的資產生成報告
#[derive(Debug, Clone)]
pub struct FileAssetReport {
    pub video_path: PathBuf,
    pub results: Vec<ArtifactResult>,
}

impl FileAssetReport {
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }

    #[must_use]
    pub fn generated_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.succeeded && !r.skipped)
            .count()
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.results.iter().filter(|r| r.skipped).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded).count()
    }

    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.succeeded && r.used_fallback)
            .count()
    }
}

/// 資產就緒狀態（僅檢查檔案存在，無副作用）
#[derive(Debug, Clone, Copy)]
pub struct AssetStatus {
    pub thumbnail_ready: bool,
    pub preview_ready: bool,
    pub sprite_ready: bool,
}

impl AssetStatus {
    #[must_use]
    pub fn all_ready(self) -> bool {
        self.thumbnail_ready && self.preview_ready && self.sprite_ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(succeeded: bool, skipped: bool, used_fallback: bool) -> ArtifactResult {
        ArtifactResult {
            kind: ArtifactKind::Thumbnail,
            output_path: PathBuf::from("/t/a.jpg"),
            succeeded,
            used_fallback,
            skipped,
            label: "THUMBNAIL /v/a.mp4".to_string(),
        }
    }

    #[test]
    fn test_report_counters() {
        let report = FileAssetReport {
            video_path: PathBuf::from("/v/a.mp4"),
            results: vec![
                result(true, false, false),
                result(true, true, false),
                result(false, false, true),
            ],
        };

        assert!(!report.all_succeeded());
        assert_eq!(report.generated_count(), 1);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.fallback_count(), 0);
    }

    #[test]
    fn test_fallback_counts_only_successes() {
        let report = FileAssetReport {
            video_path: PathBuf::from("/v/a.mp4"),
            results: vec![result(true, false, true), result(false, false, true)],
        };
        assert_eq!(report.fallback_count(), 1);
    }

    #[test]
    fn test_status_all_ready() {
        let status = AssetStatus {
            thumbnail_ready: true,
            preview_ready: true,
            sprite_ready: false,
        };
        assert!(!status.all_ready());
    }
}
