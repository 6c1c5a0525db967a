use anyhow::{Result, bail};
use std::env::{self, VarError};
use std::fmt;

/// Session cookie value used to authenticate against the puzzle site.
#[derive(Clone, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Reads the token from `SESSION`. An unset variable is not an error.
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_var(super::SESSION_VAR)
    }

    pub fn from_var(name: &str) -> Result<Option<Self>> {
        match env::var(name) {
            Ok(token) => Ok(Some(Self::new(token))),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => {
                bail!("Environment variable {} is not valid unicode", name)
            }
        }
    }

    pub fn cookie(&self) -> String {
        format!("session={}", self.0)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(***)")
    }
}
