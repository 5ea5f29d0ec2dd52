//! Browser Glue
//!
//! Blocking dialogs, API location, console logging and the log history.

use std::sync::OnceLock;

use log::{Level, LevelFilter};
use pedidos_core::{ApiConfig, Prompt};
use rolling_logger::{LogEntry, LoggerConfig, RollingLogger};
use wasm_bindgen::JsValue;

static LOGGER: OnceLock<&'static RollingLogger> = OnceLock::new();

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// `PEDIDOS_API_BASE` at build time, else `{origin}/api`
pub fn api_config() -> ApiConfig {
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    ApiConfig::resolve(option_env!("PEDIDOS_API_BASE"), origin.as_deref())
}

fn console_sink(entry: &LogEntry) {
    let line = JsValue::from_str(&entry.to_string());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        _ => web_sys::console::log_1(&line),
    }
}

pub fn init_logging() {
    let config = LoggerConfig {
        level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        ..LoggerConfig::default()
    };
    match rolling_logger::init(config, Box::new(console_sink)) {
        Ok(logger) => {
            let _ = LOGGER.set(logger);
        }
        Err(_) => web_sys::console::warn_1(&JsValue::from_str("logger already installed")),
    }
}

/// Entries still in the logger's ring buffer, oldest first
pub fn recent_logs() -> Vec<LogEntry> {
    LOGGER.get().map(|logger| logger.recent()).unwrap_or_default()
}
