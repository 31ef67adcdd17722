//! Logging configuration from environment variables

use std::path::PathBuf;

/// Log file name inside [`DebugConfig::log_dir`]; rotated daily.
pub const LOG_FILE_NAME: &str = "paza-terminal.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "terminal=debug,lib_wallet=debug,info")
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self { log_dir: PathBuf::from("logs"), log_level: "info".to_string() }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `PAZA_LOG_DIR`: log directory (default `logs`)
    /// - `RUST_LOG`, then `LOG_LEVEL`: filter directive (default `info`)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            log_dir: non_empty("PAZA_LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: non_empty("RUST_LOG")
                .or_else(|| non_empty("LOG_LEVEL"))
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DebugConfig::from_lookup(lookup(&[]));
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs/paza-terminal.log"));
    }

    #[test]
    fn test_rust_log_wins_over_log_level() {
        let config = DebugConfig::from_lookup(lookup(&[("RUST_LOG", "debug"), ("LOG_LEVEL", "warn")]));
        assert_eq!(config.log_level, "debug");
        assert!(config.is_debug_enabled());

        let config = DebugConfig::from_lookup(lookup(&[("RUST_LOG", " "), ("LOG_LEVEL", "warn")]));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_log_dir_override() {
        let config = DebugConfig::from_lookup(lookup(&[("PAZA_LOG_DIR", "/tmp/paza")]));
        assert_eq!(config.log_file(), PathBuf::from("/tmp/paza/paza-terminal.log"));
    }
}
