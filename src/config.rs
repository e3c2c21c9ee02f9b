use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ScheduleError, ScheduleResult};

pub const GENERATE_SCHEDULE_PATH: &str = "/api/generate-schedule";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HTML_OUT: &str = "jadwal.html";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub html_out: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            html_out: PathBuf::from(DEFAULT_HTML_OUT),
        }
    }
}

impl Config {
    pub fn from_env() -> ScheduleResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ScheduleResult<Self> {
        let mut config = Config::default();

        if let Some(url) = lookup("SCHEDULE_API_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup("SCHEDULE_API_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                ScheduleError::Config(format!("SCHEDULE_API_TIMEOUT_SECS={raw:?}: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = lookup("SCHEDULE_HTML_OUT").filter(|v| !v.trim().is_empty()) {
            config.html_out = PathBuf::from(path);
        }

        Ok(config)
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GENERATE_SCHEDULE_PATH)
    }
}
