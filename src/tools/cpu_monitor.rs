use std::thread;
use std::time::Duration;
use sysinfo::System;

/// CPU 使用率門檻
///
/// 排程器在使用率超過門檻時暫停排入新任務，
/// 避免外部編碼程序把機器吃滿
pub struct CpuMonitor {
    pub system: System,
    usage_threshold: f32,
}

impl CpuMonitor {
    #[must_use]
    pub fn new(usage_threshold: f32) -> Self {
        // sysinfo 需要兩次取樣間隔才有有效的使用率
        let mut system = System::new_all();
        system.refresh_cpu_all();
        thread::sleep(Duration::from_millis(200));
        system.refresh_cpu_all();
        Self {
            system,
            usage_threshold,
        }
    }

    pub fn current_usage(&mut self) -> f32 {
        self.system.refresh_cpu_all();
        self.system.global_cpu_usage()
    }

    pub fn can_spawn_new_task(&mut self) -> bool {
        self.current_usage() < self.usage_threshold
    }
}

impl Default for CpuMonitor {
    fn default() -> Self {
        Self::new(90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_stored() {
        let monitor = CpuMonitor::new(75.0);
        assert!((monitor.usage_threshold - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_usage_is_a_percentage() {
        let mut monitor = CpuMonitor::default();
        let usage = monitor.current_usage();
        assert!((0.0..=100.0).contains(&usage));
    }
}
