//! Weekly goal commands for CLI.

use clap::Subcommand;
use devdash_core::goals;
use devdash_core::UserProfile;

#[derive(Subcommand)]
pub enum GoalAction {
    /// Add a goal for this week
    Add {
        /// Goal text
        text: String,
    },
    /// List goals in insertion order
    List,
    /// Mark a goal as done
    Done {
        /// Goal index as shown by `goal list`
        index: usize,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut profile = UserProfile::load()?;

    match action {
        GoalAction::Add { text } => {
            goals::add(&mut profile.weekly_goals, &text)?;
            profile.save()?;
            println!("Goal added.");
        }
        GoalAction::List => {
            if profile.weekly_goals.is_empty() {
                println!("No goals set for this week.");
            } else {
                println!("{}", goals::render(&profile.weekly_goals));
            }
        }
        GoalAction::Done { index } => {
            goals::complete(&mut profile.weekly_goals, index)?;
            profile.save()?;
            println!("✅ {}", profile.weekly_goals[index].goal);
        }
    }
    Ok(())
}
