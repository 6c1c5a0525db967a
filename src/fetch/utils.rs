use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use url::Url;

/// Keeps only the ASCII digits of `day`, in order. `"day07"` becomes `"07"`.
/// Other Unicode digits (`'٣'`, `'²'`) are dropped, not passed on to the URL.
pub fn day_number(day: &str) -> String {
    day.chars().filter(char::is_ascii_digit).collect()
}

pub fn build_input_url(base: &Url, year: u16, day: &str) -> Result<Url> {
    let path = format!("{}/day/{}/input", year, day_number(day));
    base.join(&path)
        .with_context(|| format!("Could not build input URL from '{}' and '{}'", base, path))
}

/// `<root>/<day>/src/input.txt`. The day is used as given, prefixes included.
pub fn build_input_path(root: &Path, day: &str) -> PathBuf {
    root.join(day).join("src").join("input.txt")
}

/// SHA-256 of the input exactly as it was written to disk.
pub fn hash_input(body: &str) -> [u8; 32] {
    Sha256::digest(body.as_bytes()).into()
}
