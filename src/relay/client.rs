use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::task::JoinSet;
use tracing::{debug, warn};
use url::Url;

use crate::config::Settings;
use crate::error::{AppError, AppResult};

const DEVICE_STATUS_PATH: &str = "status";

/// Sends macro triggers to devices and polls their status.
///
/// One attempt per call, bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    targets: BTreeMap<String, String>,
    devices: BTreeMap<String, String>,
}

impl RelayClient {
    pub fn new(
        targets: BTreeMap<String, String>,
        devices: BTreeMap<String, String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            targets,
            devices,
        })
    }

    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        Self::new(
            settings.targets(),
            settings.devices(),
            settings.relay_timeout()?,
        )
    }

    pub fn target_url(&self, selector: &str) -> AppResult<&str> {
        self.targets
            .get(selector)
            .map(String::as_str)
            .ok_or_else(|| {
                let known = self.targets.keys().cloned().collect::<Vec<_>>().join(", ");
                AppError::InvalidInput(format!(
                    "unknown user `{selector}`; expected one of: {known}"
                ))
            })
    }

    pub async fn trigger(&self, macro_key: &str, selector: &str) -> AppResult<()> {
        let base = self.target_url(selector)?;
        let url = device_url(base, macro_key)?;

        let response = self.http.get(url.clone()).send().await.map_err(|err| {
            warn!(%url, error = %err, "macro trigger failed");
            AppError::Relay(format!("failed to reach device at {url}: {err}"))
        })?;

        let status = response.status();
        debug!(%url, %status, "macro triggered");
        if !status.is_success() {
            return Err(map_device_status(&url, status));
        }

        Ok(())
    }

    /// Status of every configured device. A failing device yields
    /// `{"error": ...}` in its slot instead of failing the whole call.
    pub async fn dashboard(&self) -> BTreeMap<String, Value> {
        let mut tasks = JoinSet::new();
        for (device, base) in &self.devices {
            let http = self.http.clone();
            let device = device.clone();
            let base = base.clone();
            tasks.spawn(async move {
                let status = fetch_status(&http, &base).await;
                (device, status)
            });
        }

        let mut out = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((device, Ok(status))) => {
                    out.insert(device, status);
                }
                Ok((device, Err(err))) => {
                    warn!(device = %device, error = %err, "device status unavailable");
                    out.insert(device, json!({ "error": err.to_string() }));
                }
                Err(err) => warn!(error = %err, "device status task aborted"),
            }
        }

        // Keep every device visible even if its task never reported back.
        for device in self.devices.keys() {
            out.entry(device.clone())
                .or_insert_with(|| json!({ "error": "status task aborted" }));
        }

        out
    }
}

async fn fetch_status(http: &Client, base: &str) -> AppResult<Value> {
    let url = device_url(base, DEVICE_STATUS_PATH)?;
    let response = http
        .get(url.clone())
        .send()
        .await
        .map_err(|err| AppError::Relay(format!("failed to reach device at {url}: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(map_device_status(&url, status));
    }

    response
        .json()
        .await
        .map_err(|err| AppError::Relay(format!("device at {url} sent invalid status: {err}")))
}

/// `base` with `segment` appended as one percent-encoded path segment.
fn device_url(base: &str, segment: &str) -> AppResult<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| AppError::Config(format!("device url `{base}` cannot take a path")))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

fn map_device_status(url: &Url, status: StatusCode) -> AppError {
    AppError::Relay(format!("device at {url} responded with {status}"))
}
