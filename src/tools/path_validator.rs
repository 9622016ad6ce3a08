use anyhow::{Context, Result, bail};
use std::path::Path;

/// 驗證路徑存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 建立資料夾（含父層），已存在時不動作
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("無法建立資料夾: {}", path.display()))?;
    }
    Ok(())
}
