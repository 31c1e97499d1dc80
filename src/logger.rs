use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// File-backed logger behind the `log` facade.
///
/// One log file per launcher run, named with the start timestamp, under
/// `<game dir>/logs/`.
pub struct FileLogger {
    log_file: PathBuf,
}

impl FileLogger {
    /// Install the logger as the global `log` backend.
    pub fn init(game_dir: &Path) -> Result<(), String> {
        let log_dir = game_dir.join("logs");
        fs::create_dir_all(&log_dir).map_err(|e| format!("Failed to create log dir: {}", e))?;

        let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let log_file = log_dir.join(format!("nimbus_{}.log", timestamp));

        let logger = FileLogger {
            log_file: log_file.clone(),
        };
        logger.write_line(Level::Info, "Nimbus launcher initialized");
        logger.write_line(Level::Info, &format!("Log file: {}", log_file.display()));

        log::set_boxed_logger(Box::new(logger)).map_err(|e| e.to_string())?;
        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }

    fn write_line(&self, level: Level, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let log_line = format!("[{}] [{}] {}\n", timestamp, level, message);

        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
        {
            let _ = file.write_all(log_line.as_bytes());
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.write_line(record.level(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}
