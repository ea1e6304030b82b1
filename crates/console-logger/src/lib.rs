//! Console Logger
//!
//! `log` backend for the app. Lines look like
//! `[12:03:44.120] [FoodOrder] WARN food_order_core::screens::handoff: ...`
//! and go to the browser console on wasm32, stderr elsewhere. Each logger also
//! keeps its most recent lines in a fixed-size ring (`ConsoleLogger::recent_lines`).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the ring buffer
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-capacity line buffer; the oldest line is dropped first
#[derive(Debug)]
pub struct RecentLines {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RecentLines {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    recent: Mutex<RecentLines>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            recent: Mutex::new(RecentLines::new(capacity)),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        match self.recent.lock() {
            Ok(recent) => recent.snapshot(),
            Err(poisoned) => poisoned.into_inner().snapshot(),
        }
    }
}

/// One formatted log line
pub fn format_line(now: DateTime<Local>, app_name: &str, level: Level, target: &str, args: &fmt::Arguments<'_>) -> String {
    format!("[{}] [{}] {} {}: {}", now.format("%H:%M:%S%.3f"), app_name, level, target, args)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(Local::now(), &self.app_name, record.level(), record.target(), record.args());
        write_line(record.level(), &line);
        match self.recent.lock() {
            Ok(mut recent) => recent.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already installed.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
