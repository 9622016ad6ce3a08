mod command_logger;
mod cpu_monitor;
mod fallback_runner;
mod ffprobe_info;
mod path_validator;
mod process_runner;
mod timestamp;
mod video_scanner;

pub use command_logger::CommandLogger;
pub use cpu_monitor::CpuMonitor;
pub use fallback_runner::{AttemptOutcome, attempt_failed, run_with_fallback};
pub use ffprobe_info::{MediaMetadata, get_video_duration, probe_metadata};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use process_runner::{ProcessOutput, run_command};
pub use timestamp::format_timestamp;
pub use video_scanner::{VideoFileInfo, scan_video_files};
