use crate::fetch::utils::{build_input_path, build_input_url, hash_input};
use crate::fetch::{BASE_URL, Session, YEAR, build_client, fetch_input, write_input};
use anyhow::{Context, bail};
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Downloads an Advent of Code puzzle input into `<day>/src/input.txt`.
#[derive(Parser)]
#[command(version, about, long_about=None)]
pub struct Cli {
    /// Day to fetch; digits select the puzzle, the full value names the directory
    #[arg(long)]
    day: String,
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        let session = Session::from_env()?;
        if session.is_none() {
            log::warn!("SESSION is not set, sending an unauthenticated request");
        }
        let base = Url::parse(BASE_URL)?;
        let cwd = env::current_dir().context("Could not determine the working directory")?;

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        download_day(&self.day, session.as_ref(), &base, &cwd, bar)?;
        Ok(())
    }
}

/// Fetches the input for `day` from `base` and stores it under `root`.
/// Non-2xx bodies are still written before the status is reported as an error.
fn download_day(
    day: &str,
    session: Option<&Session>,
    base: &Url,
    root: &Path,
    bar: ProgressBar,
) -> anyhow::Result<PathBuf> {
    let url = build_input_url(base, YEAR, day)?;
    let path = build_input_path(root, day);

    let client = build_client()?;
    let fetched = fetch_input(&client, url.clone(), session, &bar)
        .inspect_err(|_| bar.abandon_with_message("Request failed."))?;

    let written = write_input(&path, &fetched.body)?;
    if !fetched.status.is_success() {
        eprintln!(
            "{}",
            format!("Server answered {}; the response was saved as-is.", fetched.status).yellow()
        );
        bail!("Unexpected status {} for {}", fetched.status, url);
    }

    println!(
        "Input downloaded to {} ({}); SHA256: {}.",
        path.display().to_string().green(),
        indicatif::HumanBytes(written),
        hex::encode(hash_input(&fetched.body))
    );
    Ok(path)
}
