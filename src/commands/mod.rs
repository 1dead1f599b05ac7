//! Console command implementations
//!
//! This module drives a [`Repository`] from user input and prints the results.
//! Commands are organized into two categories following Git's architecture:
//!
//! - `plumbing`: Low-level commands for direct object inspection (hash-object, cat-file)
//! - `porcelain`: User-facing commands for version control workflows (add, commit, log, etc.)
//!
//! `script` parses the line-based command language and `demo` replays an example session.

pub mod demo;
pub mod plumbing;
pub mod porcelain;
pub mod script;

use crate::areas::repository::{Clock, Repository};
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;
use std::io::Write;

/// Display options shared by every command
#[derive(Debug, Clone, Copy, new)]
pub struct SessionOptions {
    /// Number of characters shown for abbreviated IDs
    pub abbrev: usize,
    /// Echo each script line before running it
    pub echo: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            abbrev: crate::artifacts::objects::SHORT_OBJECT_ID_LENGTH,
            echo: false,
        }
    }
}

/// One repository together with the place its output goes
pub struct Session {
    repository: Repository,
    writer: Box<dyn Write>,
    options: SessionOptions,
}

impl Session {
    pub fn new(repository: Repository, writer: Box<dyn Write>, options: SessionOptions) -> Self {
        Session {
            repository,
            writer,
            options,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Turn a repository result into an optional value
    ///
    /// Usage errors are printed and swallowed so a script can carry on. Integrity
    /// violations are returned, since continuing on a broken repository is pointless.
    fn recover<T>(&mut self, result: crate::errors::Result<T>) -> anyhow::Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.is_integrity_violation() => {
                Err(error).context("repository integrity violated")
            }
            Err(error) => {
                self.report(&error)?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, error: &RepositoryError) -> anyhow::Result<()> {
        writeln!(self.writer, "Error: {error}")?;
        Ok(())
    }
}

/// Parse a commit date the way `GIT_AUTHOR_DATE` is parsed
///
/// Accepts RFC 2822, `%Y-%m-%d %H:%M:%S %z` or raw seconds since the epoch.
pub fn parse_commit_date(date: &str) -> anyhow::Result<i64> {
    if let Ok(seconds) = date.trim().parse::<i64>() {
        return Ok(seconds);
    }

    chrono::DateTime::parse_from_rfc2822(date)
        .or_else(|_| chrono::DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z"))
        .map(|datetime| datetime.timestamp())
        .with_context(|| format!("invalid commit date: {date}"))
}

/// Clock that stamps every commit with the same time
pub fn fixed_clock(timestamp: i64) -> Clock {
    Box::new(move || timestamp)
}
