//! Portfolio project commands for CLI.

use clap::Subcommand;
use devdash_core::portfolio::{self, Layout, ProjectFields, Status};
use devdash_core::Config;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum PortfolioAction {
    /// Add a new project (status starts at "In Progress")
    Add {
        /// Project title
        title: String,
        /// Project description
        #[arg(long, default_value = "")]
        description: String,
        /// Technologies used (comma-separated)
        #[arg(long, default_value = "")]
        tech: String,
        /// Link to GitHub or live demo
        #[arg(long, default_value = "")]
        link: String,
    },
    /// Render the portfolio in one of three layouts
    List {
        /// Layout: resume, list or card (default from config)
        #[arg(long)]
        layout: Option<String>,
        /// Dump raw records (with ids) as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Replace a project's fields
    Update {
        /// Project id (see `portfolio list --json`)
        id: Uuid,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New technologies
        #[arg(long)]
        tech: Option<String>,
        /// New link
        #[arg(long)]
        link: Option<String>,
        /// New status: "In Progress", "Done" or "On Hold"
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a project
    Delete {
        /// Project id
        id: Uuid,
    },
    /// Export the portfolio
    Export {
        /// Format: json or text
        #[arg(long, default_value = "json")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn resolve(projects: &[portfolio::Project], id: Uuid) -> Result<usize, Box<dyn std::error::Error>> {
    portfolio::position_of(projects, id).ok_or_else(|| format!("no project with id {id}").into())
}

pub fn run(action: PortfolioAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut projects = portfolio::load()?;

    match action {
        PortfolioAction::Add {
            title,
            description,
            tech,
            link,
        } => {
            let id = portfolio::create(
                &mut projects,
                ProjectFields {
                    title,
                    description,
                    tech,
                    link,
                },
            )?;
            portfolio::save(&projects)?;
            println!("Project added to portfolio: {id}");
        }
        PortfolioAction::List { layout, json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else {
                let name = layout.unwrap_or_else(|| Config::load_or_default().ui.default_layout);
                let layout = Layout::parse(&name)?;
                println!("{}", portfolio::render(&projects, layout));
            }
        }
        PortfolioAction::Update {
            id,
            title,
            description,
            tech,
            link,
            status,
        } => {
            let index = resolve(&projects, id)?;
            let current = &projects[index];
            let fields = ProjectFields {
                title: title.unwrap_or_else(|| current.title.clone()),
                description: description.unwrap_or_else(|| current.description.clone()),
                tech: tech.unwrap_or_else(|| current.tech.clone()),
                link: link.unwrap_or_else(|| current.link.clone()),
            };
            let status = match status {
                Some(s) => Status::parse(&s)?,
                None => current.status,
            };
            portfolio::update(&mut projects, index, fields, status)?;
            portfolio::save(&projects)?;
            println!("Changes saved!");
        }
        PortfolioAction::Delete { id } => {
            let index = resolve(&projects, id)?;
            let removed = portfolio::delete(&mut projects, index)?;
            portfolio::save(&projects)?;
            println!("Project deleted: {}", removed.title);
        }
        PortfolioAction::Export { format, out } => {
            let body = match format.as_str() {
                "json" => portfolio::export_json(&projects)?,
                "text" => portfolio::export_text(&projects),
                other => return Err(format!("unknown export format: {other}").into()),
            };
            match out {
                Some(path) => {
                    std::fs::write(&path, &body)?;
                    println!("Portfolio written to {}", path.display());
                }
                None => print!("{body}"),
            }
        }
    }
    Ok(())
}
