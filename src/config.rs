//! Runtime Configuration
//!
//! Read from the page query string, e.g. `?level=2&log=debug&hint_ms=3000`.
//! Bad values fall back to the defaults and are reported as warnings.

use log::LevelFilter;

/// Default time a hint stays on screen
const DEFAULT_HINT_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Zero-based index of the first level to play
    pub start_level: usize,
    pub log_level: LevelFilter,
    pub hint_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_level: 0,
            log_level: LevelFilter::Info,
            hint_timeout_ms: DEFAULT_HINT_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Parse a query string (leading `?` optional).
    /// Returns the config plus one warning per ignored parameter.
    pub fn from_query(query: &str) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")));

        for (key, value) in pairs {
            match key {
                // 1-based in the URL
                "level" => match value.parse::<usize>() {
                    Ok(level) if level >= 1 => config.start_level = level - 1,
                    _ => warnings.push(format!("ignoring level={value:?}, expected a number from 1")),
                },
                "log" => match value.parse::<LevelFilter>() {
                    Ok(level) => config.log_level = level,
                    Err(_) => warnings.push(format!("ignoring log={value:?}, expected off/error/warn/info/debug/trace")),
                },
                "hint_ms" => match value.parse::<u32>() {
                    Ok(ms) => config.hint_timeout_ms = ms,
                    Err(_) => warnings.push(format!("ignoring hint_ms={value:?}, expected milliseconds")),
                },
                other => warnings.push(format!("unknown parameter {other:?}")),
            }
        }

        (config, warnings)
    }

    /// Config for the current page
    pub fn from_location() -> (Self, Vec<String>) {
        let search = web_sys::window()
            .and_then(|win| win.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}
