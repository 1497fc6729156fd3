use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::FetchError;

// Library callers get no preview output unless they opt in.
static SILENT: AtomicBool = AtomicBool::new(true);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

pub fn is_silent() -> bool {
    SILENT.load(Ordering::Relaxed)
}

fn log_output(msg: String) {
    if !is_silent() {
        eprintln!("{}", msg);
    }
}

/// Render the curl command equivalent to a plain GET of `url`.
pub fn curl_preview(url: &str) -> String {
    let parts = [
        Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
        format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()),
        format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)),
    ];
    parts.join(" ")
}

/// Core HTTP GET used by the user fetcher.
///
/// The endpoint is appended to the base URL as-is. Any non-2xx status is
/// reported as `FetchError::HttpStatus` without reading the body.
pub async fn get_json(
    client: &reqwest::Client,
    api_base_url: &str,
    endpoint: &str,
) -> Result<Value, FetchError> {
    let url = format!("{}{}", api_base_url, endpoint);
    log_output(format!("Request:\n{}", curl_preview(&url)));

    let resp = client.get(&url).send().await?;

    let status = resp.status();
    tracing::debug!(%url, status = status.as_u16(), "GET completed");
    if !status.is_success() {
        return Err(FetchError::HttpStatus { status: status.as_u16() });
    }

    let body = resp.bytes().await?;
    let payload: Value = serde_json::from_slice(&body)?;

    let json_str = serde_json::to_string(&payload).unwrap_or_else(|_| format!("{:?}", payload));
    log_output(format!("Response:\n{}", Paint::new(json_str).rgb(100, 100, 100)));

    Ok(payload)
}
