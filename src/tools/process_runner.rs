use anyhow::{Context, Result, bail};
use std::process::Command;

/// 外部指令的完整執行結果
///
/// 非零結束碼是可檢視的正常狀態，不視為錯誤；
/// 兩個輸出串流都完整擷取（此處的輸出是短的診斷文字，不是媒體資料）
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// 執行外部指令並等待結束
///
/// 只有在子程序無法啟動時回傳 Err；內容不做任何解讀
pub fn run_command(args: &[String]) -> Result<ProcessOutput> {
    let Some((program, rest)) = args.split_first() else {
        bail!("指令不可為空");
    };

    let output = Command::new(program)
        .args(rest)
        .output()
        .with_context(|| format!("無法執行指令: {program}"))?;

    Ok(ProcessOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
