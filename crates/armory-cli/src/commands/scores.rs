//! Leaderboard commands.

use anyhow::{Result, bail};
use armory::Armory;

pub fn record(armory: &mut Armory, app: &str, score: i64) -> Result<()> {
    if app.trim().is_empty() {
        bail!("App name must not be empty");
    }
    armory.high_score(app, score);
    println!("Recorded {} for {}", score, app);
    Ok(())
}

pub fn list(armory: &Armory) -> Result<()> {
    let entries = armory.high_score_entries();
    if entries.is_empty() {
        println!("No scores yet.");
        return Ok(());
    }

    for (rank, entry) in entries.iter().enumerate() {
        println!("{:>3}. {:<20} {:>8}", rank + 1, entry.app, entry.score);
    }
    Ok(())
}
