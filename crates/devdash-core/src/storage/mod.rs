mod config;
pub mod store;

pub use config::Config;
pub use store::{load, load_or_default, save};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/devdash[-dev]/` based on DEVDASH_ENV.
///
/// Set DEVDASH_ENV=dev to use the development data directory, or
/// DEVDASH_DATA_DIR to point at an explicit directory (tests use this
/// with scratch dirs).
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the data directory fails.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DEVDASH_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DEVDASH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("devdash-dev")
    } else {
        base_dir.join("devdash")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
