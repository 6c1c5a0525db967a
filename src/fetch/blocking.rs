use anyhow::{Context, Result};
use indicatif::{HumanBytes, HumanDuration, ProgressBar};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::COOKIE;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use url::Url;

use crate::fetch::Session;

/// Status and verbatim body of an input request.
#[derive(Debug)]
pub struct FetchedInput {
    pub status: StatusCode,
    pub body: String,
}

/// Blocking client with no request timeout; a slow server is waited for.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(None)
        .build()
        .context("Could not build HTTP client")
}

pub fn fetch_input(
    client: &Client,
    url: Url,
    session: Option<&Session>,
    bar: &ProgressBar,
) -> Result<FetchedInput> {
    let start_time = Instant::now();
    bar.set_message(format!("Requesting {}", url));
    log::debug!("GET {} (session token present: {})", url, session.is_some());

    let mut request = client.get(url.clone());
    if let Some(session) = session {
        request = request.header(COOKIE, session.cookie());
    }
    let response = request
        .send()
        .with_context(|| format!("Request to {} failed", url))?;
    let status = response.status();
    log::debug!("{} responded with {}", url, status);

    let body = response
        .text()
        .with_context(|| format!("Could not read response body from {}", url))?;
    bar.finish_with_message(format!(
        "Received {} in {}.",
        HumanBytes(body.len() as u64),
        HumanDuration(start_time.elapsed())
    ));
    Ok(FetchedInput { status, body })
}

/// Writes `body` to `path`, replacing any previous content. The parent
/// directory has to exist already.
pub fn write_input(path: &Path, body: &str) -> Result<u64> {
    let mut dest = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("Could not open '{}' for writing", path.display()))?;
    dest.write_all(body.as_bytes())
        .with_context(|| format!("Could not write to '{}'", path.display()))?;
    dest.sync_all()?;
    log::debug!("Wrote {} bytes to '{}'", body.len(), path.display());
    Ok(body.len() as u64)
}
