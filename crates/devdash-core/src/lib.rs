//! # DevDash Core Library
//!
//! This library provides the core logic for DevDash, a single-user,
//! locally-persisted developer dashboard. It follows a CLI-first
//! philosophy: every operation is available from the standalone CLI
//! binary, and any richer frontend is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Storage**: flat JSON documents under `~/.config/devdash/`, plus
//!   a TOML application config
//! - **Profile**: the singleton user document (streak, check-in date,
//!   weekly goals, completed challenges)
//! - **Streak**: pure day-over-day streak arithmetic
//! - **Challenge**: deterministic weekly-challenge rotation driven by
//!   the ISO week number
//! - **Portfolio**: project records with stable ids, three render
//!   layouts and two export formats
//!
//! All documents are read at the start of an action and written back
//! immediately after a mutation. There is no locking: the store is
//! single-writer by design.

pub mod challenge;
pub mod error;
pub mod goals;
pub mod portfolio;
pub mod profile;
pub mod quotes;
pub mod storage;
pub mod streak;

pub use challenge::Challenge;
pub use error::{CoreError, Result, StoreError, ValidationError};
pub use goals::Goal;
pub use portfolio::{Layout, Project, Status};
pub use profile::UserProfile;
pub use storage::Config;
