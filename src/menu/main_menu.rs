use crate::config::save::save_settings;
use crate::config::types::Config;
use crate::menu::handlers::{run_asset_generator, run_asset_status};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &mut Config,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style("=== 影片瀏覽資產工具 ===").cyan().bold());
    println!("{}", style("(按 ESC 離開)").dim());

    let options = vec![
        "生成瀏覽資產（縮圖／預覽／時間軸快照）",
        "檢查資產狀態與中繼資料",
        "設定",
        "離開",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("請選擇功能")
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match selection {
        Some(0) => {
            run_asset_generator(term, shutdown_signal)?;
            Ok(true)
        }
        Some(1) => {
            run_asset_status(term, shutdown_signal)?;
            Ok(true)
        }
        Some(2) => {
            show_settings_menu(term, config)?;
            Ok(true)
        }
        Some(3) | None => Ok(false), // ESC pressed - exit
        _ => unreachable!(),
    }
}

/// 設定選單
fn show_settings_menu(term: &Term, config: &mut Config) -> Result<()> {
    term.clear_screen()?;

    println!("{}", style("=== 設定 ===").cyan().bold());
    println!("{}", style("(按 ESC 返回)").dim());

    // 顯示當前設定
    println!(
        "\n{} {}",
        style("目前 worker 數:").dim(),
        config.settings.worker_count
    );
    println!();

    let worker_choices: [usize; 6] = [1, 2, 3, 4, 6, 8];
    let items: Vec<String> = worker_choices
        .iter()
        .map(|n| format!("{n} 個 worker"))
        .collect();

    let default_index = worker_choices
        .iter()
        .position(|&n| n == config.settings.worker_count)
        .unwrap_or(1);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("同時處理的影片數量（每個 worker 佔用一個編碼程序）")
        .items(&items)
        .default(default_index)
        .interact_on_opt(term)?;

    // ESC pressed - return without saving
    let Some(selection) = selection else {
        return Ok(());
    };

    let selected_count = worker_choices[selection];

    if selected_count != config.settings.worker_count {
        config.settings.worker_count = selected_count;
        save_settings(&config.settings)?;
        println!(
            "\n{} worker 數 = {}",
            style("設定已儲存:").green(),
            selected_count
        );
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    Ok(())
}
