use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_LOG_FILE: &str = "poem_debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Geometry and palette for the selection wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelConfig {
    pub segment_count: usize,
    pub radius: f64,
    pub center: f64,
    pub palette: Vec<String>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            segment_count: 34,
            radius: 200.0,
            center: 210.0,
            palette: ["#c9a969", "#fce5ad", "#E6B325", "#f0e6d2"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// Pauses between an answer and its follow-up state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizTimings {
    pub correct_delay: Duration,
    pub incorrect_delay: Duration,
    pub close_grace: Duration,
}

impl Default for QuizTimings {
    fn default() -> Self {
        Self {
            correct_delay: Duration::from_millis(1500),
            incorrect_delay: Duration::from_millis(1000),
            close_grace: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub wheel: WheelConfig,
    pub quiz: QuizTimings,
    pub log_file: PathBuf,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wheel: WheelConfig::default(),
            quiz: QuizTimings::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, with `POEM_LOG` and `POEM_LOG_FILE` overriding the log settings.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = lookup("POEM_LOG")
            && !filter.trim().is_empty()
        {
            config.log_filter = filter;
        }
        if let Some(path) = lookup("POEM_LOG_FILE")
            && !path.trim().is_empty()
        {
            config.log_file = PathBuf::from(path);
        }
        config
    }
}
