mod blocking;
mod session;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_server;

pub use blocking::{build_client, fetch_input, write_input};
pub use session::Session;

/// Puzzle site every input is fetched from.
pub const BASE_URL: &str = "https://adventofcode.com/";

/// Event year the inputs belong to.
pub const YEAR: u16 = 2025;

/// Environment variable holding the session token.
pub const SESSION_VAR: &str = "SESSION";
