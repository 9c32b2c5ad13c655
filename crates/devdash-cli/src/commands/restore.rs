//! Restore-from-backup command.
//!
//! Accepts an arbitrary JSON document and replaces the stored profile
//! wholesale, without schema validation. A parse failure is surfaced
//! and existing state is left untouched.

use devdash_core::UserProfile;
use std::path::Path;

pub fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(file)?;
    UserProfile::restore(&raw)?;
    println!("✅ Progress restored!");
    Ok(())
}
