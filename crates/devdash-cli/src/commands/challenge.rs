//! Weekly challenge commands for CLI.

use chrono::Local;
use clap::Subcommand;
use devdash_core::{challenge, UserProfile};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// Show this week's challenge
    Show,
    /// Mark this week's challenge as complete
    Complete,
    /// Export this week's challenge as plain text
    Export {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a starter challenge catalog
    InitCatalog,
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChallengeAction::Show => {
            let catalog = challenge::load_catalog()?;
            let profile = UserProfile::load()?;
            let today = Local::now().date_naive();
            let current = challenge::select(today, &catalog)?;

            println!("🚀 {}", current.title);
            println!("{}", current.description);
            println!("Track: {}", current.track);
            if !current.resource_link.is_empty() {
                println!("📘 Resource: {}", current.resource_link);
            }
            if profile
                .completed_challenges
                .iter()
                .any(|t| t == &current.title)
            {
                println!("✅ Already completed.");
            }
            if !profile.completed_challenges.is_empty() {
                println!();
                println!("Completed challenges:");
                for title in &profile.completed_challenges {
                    println!("  - {title}");
                }
            }
        }
        ChallengeAction::Complete => {
            let catalog = challenge::load_catalog()?;
            let today = Local::now().date_naive();
            let current = challenge::select(today, &catalog)?.clone();

            let mut profile = UserProfile::load()?;
            if profile.mark_challenge_complete(&current.title) {
                profile.save()?;
                println!("Challenge marked as complete!");
            } else {
                println!("Already marked complete.");
            }
        }
        ChallengeAction::Export { out } => {
            let catalog = challenge::load_catalog()?;
            let today = Local::now().date_naive();
            let current = challenge::select(today, &catalog)?;
            let text = challenge::export_text(current);
            match out {
                Some(path) => {
                    std::fs::write(&path, &text)?;
                    println!("Challenge written to {}", path.display());
                }
                None => println!("{text}"),
            }
        }
        ChallengeAction::InitCatalog => {
            let path = challenge::catalog_path()?;
            challenge::write_starter_catalog(&path)?;
            println!("Starter catalog written to {}", path.display());
        }
    }
    Ok(())
}
