//! Rolling Logger
//!
//! `log` backend with a bounded in-memory history. Each record is formatted
//! once, pushed into a ring buffer (oldest dropped first) and handed to a
//! sink, e.g. the browser console.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// One captured record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Monotonic per-logger counter, survives eviction
    pub seq: u64,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.target, self.message)
    }
}

/// Receives every entry that passes the level filter
pub type Sink = Box<dyn Fn(&LogEntry) + Send + Sync>;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Entries kept in memory
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 200,
            level: LevelFilter::Info,
        }
    }
}

struct Buffer {
    entries: VecDeque<LogEntry>,
    next_seq: u64,
}

pub struct RollingLogger {
    config: LoggerConfig,
    buffer: Mutex<Buffer>,
    sink: Sink,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig, sink: Sink) -> Self {
        Self {
            buffer: Mutex::new(Buffer {
                entries: VecDeque::with_capacity(config.capacity),
                next_seq: 0,
            }),
            config,
            sink,
        }
    }

    /// Buffered entries, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.entries.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().entries.iter().cloned().collect(),
        }
    }

    fn push(&self, entry: LogEntry) {
        if self.config.capacity == 0 {
            return;
        }
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buffer.entries.len() >= self.config.capacity {
            buffer.entries.pop_front();
        }
        buffer.entries.push_back(entry);
    }

    fn next_seq(&self) -> u64 {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        let seq = buffer.next_seq;
        buffer.next_seq += 1;
        seq
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.config.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            seq: self.next_seq(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        (self.sink)(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install as the global logger.
///
/// The logger is leaked so it lives as long as the program, like any `log` backend.
pub fn init(config: LoggerConfig, sink: Sink) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = config.level;
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(config, sink)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn record_at<'a>(level: Level, args: fmt::Arguments<'a>) -> Record<'a> {
        Record::builder().level(level).target("test").args(args).build()
    }

    fn capturing(config: LoggerConfig) -> (RollingLogger, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = seen.clone();
        let logger = RollingLogger::new(
            config,
            Box::new(move |entry| sink_seen.lock().unwrap().push(entry.to_string())),
        );
        (logger, seen)
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let (logger, _) = capturing(LoggerConfig { capacity: 2, level: LevelFilter::Trace });

        for i in 0..3 {
            logger.log(&record_at(Level::Info, format_args!("message {}", i)));
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "message 1");
        assert_eq!(recent[0].seq, 1);
        assert_eq!(recent[1].message, "message 2");
    }

    #[test]
    fn test_level_filter_applies_to_sink_and_buffer() {
        let (logger, seen) = capturing(LoggerConfig { capacity: 10, level: LevelFilter::Warn });

        logger.log(&record_at(Level::Debug, format_args!("noise")));
        logger.log(&record_at(Level::Warn, format_args!("careful")));

        assert_eq!(seen.lock().unwrap().as_slice(), ["[WARN] test: careful"]);
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_zero_capacity_still_forwards() {
        let (logger, seen) = capturing(LoggerConfig { capacity: 0, level: LevelFilter::Info });

        logger.log(&record_at(Level::Error, format_args!("boom")));

        assert!(logger.recent().is_empty());
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    // Only test in this binary that installs the global logger
    #[test]
    fn test_init_returns_installed_logger() {
        let logger = init(LoggerConfig::default(), Box::new(|_| {})).expect("logger already set");

        log::info!(target: "orders", "loaded {} orders", 3);
        log::debug!("filtered out");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].to_string(), "[INFO] orders: loaded 3 orders");
        assert!(init(LoggerConfig::default(), Box::new(|_| {})).is_err());
    }
}
