//! The singleton user profile document.
//!
//! `user_data.json` holds the streak counter, the last check-in date,
//! the weekly goal list and the completed-challenge set. Every field
//! carries a serde default so partially-shaped documents (including
//! ones restored from an arbitrary upload) load leniently instead of
//! failing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::goals::Goal;
use crate::storage::{self, store};
use crate::streak;

/// The user profile, persisted as `user_data.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Consecutive check-in days; always >= 0, reset to 1 on a gap
    #[serde(default)]
    pub streak: u32,

    /// Date of the last check-in, serialized as `YYYY-MM-DD`
    #[serde(default)]
    pub last_checkin: Option<NaiveDate>,

    /// Weekly goals, in insertion order
    #[serde(default)]
    pub weekly_goals: Vec<Goal>,

    /// Reserved by the on-disk format; not read by any current flow
    #[serde(default)]
    pub projects: Vec<serde_json::Value>,

    /// Titles of completed challenges; each title appears at most once
    #[serde(default)]
    pub completed_challenges: Vec<String>,
}

impl UserProfile {
    fn path() -> Result<PathBuf> {
        Ok(storage::data_dir()?.join("user_data.json"))
    }

    /// Load the stored profile, or zero/empty defaults when the
    /// document is missing or malformed.
    ///
    /// # Errors
    ///
    /// Returns an error only if the data directory cannot be resolved.
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::path()?))
    }

    /// Load from an explicit path. Missing or malformed documents
    /// default silently.
    pub fn load_from(path: &Path) -> Self {
        store::load_or_default(path)
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        store::save(path, self)
    }

    /// Run the daily check-in for `today`. Returns true when the
    /// profile changed and needs saving; a repeated check-in on the
    /// same calendar day is a no-op.
    pub fn check_in(&mut self, today: NaiveDate) -> bool {
        if self.last_checkin == Some(today) {
            return false;
        }
        let (streak, checked) = streak::advance(today, self.last_checkin, self.streak);
        self.streak = streak;
        self.last_checkin = Some(checked);
        true
    }

    /// Add a challenge title to the completed set. Idempotent; returns
    /// true when the title was newly added.
    pub fn mark_challenge_complete(&mut self, title: &str) -> bool {
        if self.completed_challenges.iter().any(|t| t == title) {
            return false;
        }
        self.completed_challenges.push(title.to_string());
        true
    }

    /// Replace the stored profile wholesale with an arbitrary JSON
    /// document. No schema validation: the raw value is persisted
    /// as-is and later loads apply per-field defaults.
    ///
    /// # Errors
    ///
    /// Parse failures are surfaced and existing state is untouched.
    pub fn restore(raw: &str) -> Result<serde_json::Value> {
        Self::restore_at(&Self::path()?, raw)
    }

    /// Restore to an explicit path.
    pub fn restore_at(path: &Path, raw: &str) -> Result<serde_json::Value> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        store::save(path, &value)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn missing_document_loads_zeroed_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let profile = UserProfile::load_from(&dir.path().join("user_data.json"));
        assert_eq!(profile.streak, 0);
        assert!(profile.last_checkin.is_none());
        assert!(profile.weekly_goals.is_empty());
        assert!(profile.completed_challenges.is_empty());
    }

    #[test]
    fn partial_document_loads_with_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        std::fs::write(&path, r#"{"streak": 3, "last_checkin": "2024-03-10"}"#).unwrap();
        let profile = UserProfile::load_from(&path);
        assert_eq!(profile.streak, 3);
        assert_eq!(profile.last_checkin, Some(day(2024, 3, 10)));
        assert!(profile.weekly_goals.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        let mut profile = UserProfile::default();
        profile.check_in(day(2024, 3, 10));
        profile.mark_challenge_complete("Build a CLI tool");
        profile.save_to(&path).unwrap();

        let loaded = UserProfile::load_from(&path);
        assert_eq!(loaded, profile);
    }

    #[test]
    fn check_in_is_guarded_by_stored_date() {
        let mut profile = UserProfile::default();
        let today = day(2024, 3, 10);
        assert!(profile.check_in(today));
        assert_eq!(profile.streak, 1);
        // Re-render on the same day: no change, nothing to save.
        assert!(!profile.check_in(today));
        assert_eq!(profile.streak, 1);
        assert!(profile.check_in(today + Days::new(1)));
        assert_eq!(profile.streak, 2);
    }

    #[test]
    fn mark_challenge_complete_is_idempotent() {
        let mut profile = UserProfile::default();
        assert!(profile.mark_challenge_complete("Build a REST API"));
        assert!(!profile.mark_challenge_complete("Build a REST API"));
        assert_eq!(profile.completed_challenges.len(), 1);
    }

    #[test]
    fn restore_replaces_document_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        UserProfile::default().save_to(&path).unwrap();

        // Arbitrary shape, no schema validation.
        UserProfile::restore_at(&path, r#"{"streak": 9, "mystery": true}"#).unwrap();
        let profile = UserProfile::load_from(&path);
        assert_eq!(profile.streak, 9);
        assert!(profile.last_checkin.is_none());
    }

    #[test]
    fn restore_surfaces_parse_failure_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");
        let mut original = UserProfile::default();
        original.check_in(day(2024, 3, 10));
        original.save_to(&path).unwrap();

        let result = UserProfile::restore_at(&path, "{definitely not json");
        assert!(result.is_err());
        assert_eq!(UserProfile::load_from(&path), original);
    }
}
