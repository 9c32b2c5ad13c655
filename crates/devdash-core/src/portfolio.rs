//! Portfolio project CRUD, rendering and exports.
//!
//! Projects live in `portfolio.json`, an ordered sequence independent
//! of the user profile. Insertion order is display order; the only
//! reordering operation is deletion. Every record carries a stable id
//! assigned at creation, so callers address updates and deletes by id
//! instead of by a position that a concurrent render pass may have
//! invalidated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::storage::{self, store};

/// Project status. A free-standing field, not a workflow: every
/// transition between the three states is permitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl Status {
    /// Parse one of the three display strings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] for anything else.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "In Progress" => Ok(Status::InProgress),
            "Done" => Ok(Status::Done),
            "On Hold" => Ok(Status::OnHold),
            other => Err(ValidationError::InvalidValue {
                field: "status".into(),
                message: format!(
                    "expected one of \"In Progress\", \"Done\", \"On Hold\", got \"{other}\""
                ),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "In Progress",
            Status::Done => "Done",
            Status::OnHold => "On Hold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A portfolio project record.
///
/// `status` is optional at rest and defaults to `In Progress` when
/// absent; legacy records without an `id` are assigned one on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable opaque identifier, assigned at creation
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Project title (required)
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Technologies used, kept as one comma-separated string
    #[serde(default)]
    pub tech: String,

    /// GitHub or live-demo URL; empty when none
    #[serde(default)]
    pub link: String,

    /// Current status
    #[serde(default)]
    pub status: Status,
}

/// Field values for create and update operations. Status is handled
/// separately: creation always starts at `In Progress`.
#[derive(Debug, Clone, Default)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub link: String,
}

/// One of the three presentational projections of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Compact resume bullet per project
    Resume,
    /// Expandable-list shape: title line plus indented detail lines
    List,
    /// Bordered card block
    Card,
}

impl Layout {
    /// Parse a layout name (`resume`, `list`, `card`).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] for anything else.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "resume" => Ok(Layout::Resume),
            "list" => Ok(Layout::List),
            "card" => Ok(Layout::Card),
            other => Err(ValidationError::InvalidValue {
                field: "layout".into(),
                message: format!("expected one of \"resume\", \"list\", \"card\", got \"{other}\""),
            }),
        }
    }
}

/// Path of the portfolio document inside the data directory.
pub fn path() -> Result<PathBuf> {
    Ok(storage::data_dir()?.join("portfolio.json"))
}

/// Load the portfolio, or an empty sequence when the document is
/// missing or malformed.
pub fn load() -> Result<Vec<Project>> {
    Ok(load_from(&path()?))
}

/// Load from an explicit path.
pub fn load_from(path: &Path) -> Vec<Project> {
    store::load_or_default(path)
}

/// Persist to the data directory.
pub fn save(projects: &[Project]) -> Result<()> {
    save_to(&path()?, projects)
}

/// Persist to an explicit path.
pub fn save_to(path: &Path, projects: &[Project]) -> Result<()> {
    store::save(path, &projects)
}

/// Append a new project. Title is required (non-empty after trimming);
/// status starts at `In Progress`. Returns the new record's id.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when the title is empty;
/// nothing is appended.
pub fn create(projects: &mut Vec<Project>, fields: ProjectFields) -> Result<Uuid, ValidationError> {
    if fields.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".into()));
    }
    let id = Uuid::new_v4();
    projects.push(Project {
        id,
        title: fields.title,
        description: fields.description,
        tech: fields.tech,
        link: fields.link,
        status: Status::InProgress,
    });
    Ok(id)
}

/// Wholesale-replace the record at `index`, preserving its id.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfBounds`] for an invalid index; the
/// sequence is left unchanged.
pub fn update(
    projects: &mut [Project],
    index: usize,
    fields: ProjectFields,
    status: Status,
) -> Result<(), ValidationError> {
    let len = projects.len();
    let slot = projects.get_mut(index).ok_or(ValidationError::OutOfBounds {
        collection: "portfolio".into(),
        index,
        len,
    })?;
    *slot = Project {
        id: slot.id,
        title: fields.title,
        description: fields.description,
        tech: fields.tech,
        link: fields.link,
        status,
    };
    Ok(())
}

/// Remove and return the record at `index`.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfBounds`] for an invalid index; the
/// sequence is left unchanged.
pub fn delete(projects: &mut Vec<Project>, index: usize) -> Result<Project, ValidationError> {
    if index >= projects.len() {
        return Err(ValidationError::OutOfBounds {
            collection: "portfolio".into(),
            index,
            len: projects.len(),
        });
    }
    Ok(projects.remove(index))
}

/// Resolve a record id to its current position.
pub fn position_of(projects: &[Project], id: Uuid) -> Option<usize> {
    projects.iter().position(|p| p.id == id)
}

/// Pure projection of the list into one of the three layouts. No state
/// change; an empty portfolio renders a placeholder line.
pub fn render(projects: &[Project], layout: Layout) -> String {
    if projects.is_empty() {
        return "No projects added yet.".to_string();
    }
    let blocks: Vec<String> = projects
        .iter()
        .map(|proj| match layout {
            Layout::Resume => render_resume(proj),
            Layout::List => render_list(proj),
            Layout::Card => render_card(proj),
        })
        .collect();
    blocks.join("\n")
}

fn render_resume(proj: &Project) -> String {
    let mut block = format!(
        "- **{}**  ({})\n  {}\n  _Tech:_ `{}`",
        proj.title, proj.status, proj.description, proj.tech
    );
    if !proj.link.is_empty() {
        block.push_str(&format!("\n  🔗 {}", proj.link));
    }
    block.push('\n');
    block
}

fn render_list(proj: &Project) -> String {
    let mut block = format!(
        "📌 {}\n   {}\n   Tech Used: `{}`\n   Status: {}",
        proj.title, proj.description, proj.tech, proj.status
    );
    if !proj.link.is_empty() {
        block.push_str(&format!("\n   🔗 {}", proj.link));
    }
    block.push('\n');
    block
}

fn render_card(proj: &Project) -> String {
    let mut block = String::new();
    block.push_str("+----------------------------------------+\n");
    block.push_str(&format!("| {} ({})\n", proj.title, proj.status));
    block.push_str(&format!("| {}\n", proj.description));
    block.push_str(&format!("| Tech: `{}`\n", proj.tech));
    if !proj.link.is_empty() {
        block.push_str(&format!("| 🔗 {}\n", proj.link));
    }
    block.push_str("+----------------------------------------+\n");
    block
}

/// Canonical structured export: pretty-printed JSON with stable key
/// order (struct declaration order). Re-parsing reconstructs an
/// identical sequence.
pub fn export_json(projects: &[Project]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&projects)?)
}

/// Human-readable export: per project, four lines then a blank line.
pub fn export_text(projects: &[Project]) -> String {
    let mut out = String::new();
    for proj in projects {
        out.push_str(&format!("{} ({})\n", proj.title, proj.status));
        out.push_str(&format!("{}\n", proj.description));
        out.push_str(&format!("Tech: {}\n", proj.tech));
        out.push_str(&format!("Link: {}\n\n", proj.link));
    }
    out
}
