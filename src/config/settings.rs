use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const DEFAULT_BIND: &str = "0.0.0.0:8888";
const DEFAULT_RELAY_TIMEOUT_MS: u64 = 1500;
const DEFAULT_TARGETS: [(&str, &str); 2] = [
    ("user1", "http://192.168.50.35"),
    ("user2", "http://192.168.50.36"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub bind: Option<String>,
    #[serde(default)]
    pub profiles_file: Option<PathBuf>,
    #[serde(default)]
    pub relay_timeout_ms: Option<u64>,
    #[serde(default)]
    pub targets: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub devices: Option<BTreeMap<String, String>>,
}

impl Settings {
    pub fn bind(&self) -> String {
        self.bind
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    pub fn relay_timeout(&self) -> AppResult<Duration> {
        match self.relay_timeout_ms {
            Some(0) => Err(AppError::Config(
                "relay_timeout_ms must be greater than 0".to_string(),
            )),
            Some(ms) => Ok(Duration::from_millis(ms)),
            None => Ok(Duration::from_millis(DEFAULT_RELAY_TIMEOUT_MS)),
        }
    }

    /// Selector to device base URL used by `/trigger`.
    pub fn targets(&self) -> BTreeMap<String, String> {
        self.targets.clone().unwrap_or_else(|| {
            DEFAULT_TARGETS
                .iter()
                .map(|(selector, url)| (selector.to_string(), url.to_string()))
                .collect()
        })
    }

    /// Devices polled by the dashboard. Falls back to the relay targets.
    pub fn devices(&self) -> BTreeMap<String, String> {
        self.devices.clone().unwrap_or_else(|| self.targets())
    }
}

pub fn load(path: &Path) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Config(format!("invalid settings file {}: {err}", path.display()))
    })
}
