//! Status command.

use anyhow::Result;
use armory::{Armory, MIN_REVIEWS_PER_DAY};

pub fn run(armory: &Armory) -> Result<()> {
    let player = armory.player();
    let reviewed = armory
        .passages()
        .iter()
        .filter(|p| armory.is_passage_reviewed_today(p))
        .count();

    println!("Gems:      {}", player.gems());
    println!(
        "Passages:  {} ({} reviewed {}+ times today)",
        armory.passages().len(),
        reviewed,
        MIN_REVIEWS_PER_DAY
    );
    println!(
        "Task:      {}",
        if armory.task_eligible() {
            "reward available"
        } else {
            "review a passage to unlock rewards"
        }
    );
    println!("Scores:    {} apps", armory.leaderboard().len());
    match armory.store().dir() {
        Some(dir) => println!("Save dir:  {}", dir.display()),
        None => println!("Save dir:  (none, progress is not saved)"),
    }
    Ok(())
}
