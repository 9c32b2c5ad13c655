//! Daily check-in command.

use chrono::Local;
use devdash_core::{quotes, Config, UserProfile};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut profile = UserProfile::load()?;
    let today = Local::now().date_naive();

    if let Some(quote) = quotes::pick(&config.motivation.quotes) {
        println!("💡 {quote}");
    }

    // At most one streak update per calendar day, guarded by the
    // stored check-in date so it survives restarts.
    if profile.check_in(today) {
        profile.save()?;
    }

    println!("🔥 Current Streak: {} day(s)", profile.streak);
    Ok(())
}
