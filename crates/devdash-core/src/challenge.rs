//! Weekly challenge rotation.
//!
//! The catalog (`challenges.json`) is externally authored and read-only
//! at runtime. Selection is a pure function of the date and the
//! catalog, recomputed on every access: ISO week number modulo catalog
//! length. Editing the catalog immediately changes which challenge the
//! current week shows.

use chrono::{Datelike, NaiveDate};
use indoc::indoc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result, ValidationError};
use crate::storage::{self, store};

/// A read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Challenge title; also the key in the completed set
    pub title: String,

    /// What to build or practice
    pub description: String,

    /// Learning track, e.g. "Backend" or "Data"
    pub track: String,

    /// Optional further-reading URL; empty when none
    #[serde(default)]
    pub resource_link: String,
}

/// Path of the catalog document inside the data directory.
pub fn catalog_path() -> Result<PathBuf> {
    Ok(storage::data_dir()?.join("challenges.json"))
}

/// Load the catalog, surfacing missing-file and parse failures so the
/// caller can show them instead of silently rotating through nothing.
pub fn load_catalog() -> Result<Vec<Challenge>> {
    load_catalog_from(&catalog_path()?)
}

/// Load the catalog from an explicit path.
pub fn load_catalog_from(path: &Path) -> Result<Vec<Challenge>> {
    store::load(path)
}

/// Select this week's challenge: ISO week number of `today` modulo the
/// catalog length.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyCollection`] for an empty catalog.
pub fn select(today: NaiveDate, catalog: &[Challenge]) -> Result<&Challenge, ValidationError> {
    if catalog.is_empty() {
        return Err(ValidationError::EmptyCollection("challenge catalog".into()));
    }
    let week = today.iso_week().week() as usize;
    Ok(&catalog[week % catalog.len()])
}

/// Fixed-field plain-text rendering of a challenge, for download.
pub fn export_text(challenge: &Challenge) -> String {
    format!(
        "Title: {}\nDescription: {}\nTrack: {}\nLink: {}",
        challenge.title, challenge.description, challenge.track, challenge.resource_link
    )
}

const STARTER_CATALOG: &str = indoc! {r#"
    [
      {
        "title": "Build a CLI tool",
        "description": "Write a small command-line utility that solves a problem you hit this week, with --help and at least one test.",
        "track": "Tooling",
        "resource_link": "https://rust-cli.github.io/book/"
      },
      {
        "title": "Ship a REST endpoint",
        "description": "Expose one resource over HTTP with create and list operations, and document the request/response shapes.",
        "track": "Backend",
        "resource_link": ""
      },
      {
        "title": "Profile something slow",
        "description": "Take any program you own, measure where the time goes, and make one change backed by the numbers.",
        "track": "Performance",
        "resource_link": ""
      },
      {
        "title": "Write a parser",
        "description": "Parse a small real-world format (CSV dialect, log lines, a config file) into typed records with error reporting.",
        "track": "Foundations",
        "resource_link": ""
      },
      {
        "title": "Automate a chore",
        "description": "Script away a manual task you did more than twice this month and schedule or alias it.",
        "track": "Tooling",
        "resource_link": ""
      }
    ]
"#};

/// Write the bundled starter catalog so a fresh install has something
/// to rotate through. Refuses to overwrite an existing catalog.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn write_starter_catalog(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(CoreError::Custom(format!(
            "catalog already exists at {}",
            path.display()
        )));
    }
    std::fs::write(path, STARTER_CATALOG)?;
    Ok(())
}
