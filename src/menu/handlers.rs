use crate::component::{AssetGenerator, AssetStatusChecker};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_asset_generator(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    // 重新載入設定，套用選單裡剛存檔的變更
    let config = Config::new()?;
    let generator = AssetGenerator::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = generator.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_asset_status(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    let config = Config::new()?;
    let checker = AssetStatusChecker::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = checker.run() {
        eprintln!("{} {}", style("錯誤:").red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
