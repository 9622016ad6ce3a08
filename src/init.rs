use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

/// 運作紀錄檔名（與 ffmpeg 診斷紀錄分開）
const LOG_FILE: &str = "auto_asset_generate.log";

/// 初始化 log 輸出
///
/// 預設等級 info，可用 RUST_LOG 覆寫；輸出導向工作目錄的紀錄檔，
/// 避免干擾互動式選單。檔案開不起來時退回 stderr
pub fn init() {
    let env = Env::default().default_filter_or("info");
    let mut builder = Builder::from_env(env);

    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("無法開啟紀錄檔 {LOG_FILE}: {e}");
        }
    }

    builder.init();
}
