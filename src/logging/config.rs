use std::env;

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Custom log directory path (overrides auto-detection)
    pub custom_log_dir: Option<String>,

    /// Filter for console output (default: "spoken_math=info,tower_http=warn")
    pub console_log_level: String,

    /// Filter for the application log file (default: "debug")
    pub file_log_level: String,

    /// Write a JSON application log file (default: false)
    pub file_enabled: bool,

    /// Console format: "json", "pretty", or "compact" (default: "compact")
    pub format: LogFormat,

    /// Log slow requests over threshold (default: true)
    pub log_slow_requests: bool,

    /// Slow request threshold in milliseconds (default: 1000)
    pub slow_request_threshold_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            custom_log_dir: None,
            console_log_level: "spoken_math=info,tower_http=warn".to_string(),
            file_log_level: "debug".to_string(),
            file_enabled: false,
            format: LogFormat::Compact,
            log_slow_requests: true,
            slow_request_threshold_ms: 1000,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("SPOKEN_MATH_LOG_DIR") {
            config.custom_log_dir = Some(dir);
        }

        if let Ok(level) = env::var("RUST_LOG") {
            config.console_log_level = level;
        }

        if let Ok(level) = env::var("SPOKEN_MATH_FILE_LOG_LEVEL") {
            config.file_log_level = level;
        }

        if let Ok(val) = env::var("LOG_FILE_ENABLED") {
            config.file_enabled = val.to_lowercase() == "true";
        }

        if let Ok(format_str) = env::var("LOG_FORMAT") {
            config.format = LogFormat::parse(&format_str);
        }

        if let Ok(val) = env::var("LOG_SLOW_REQUESTS") {
            config.log_slow_requests = val.to_lowercase() == "true";
        }

        if let Ok(val) = env::var("LOG_SLOW_REQUEST_THRESHOLD_MS") {
            if let Ok(threshold) = val.parse() {
                config.slow_request_threshold_ms = threshold;
            }
        }

        config
    }
}
