//! Task rewards and armor.

use anyhow::{Result, bail};
use armory::{ArmorPiece, Armory, MAX_ARMOR_LEVEL};

pub fn task(armory: &mut Armory, difficulty: i32) -> Result<()> {
    if !armory.task_eligible() {
        bail!("No reward available: review one of your passages first, or come back tomorrow");
    }

    let gems = armory.complete_task(difficulty);
    if gems == 0 {
        bail!("Difficulty must be between 1 and 5");
    }
    println!("+{} gems (total {})", gems, armory.player().gems());
    Ok(())
}

pub fn armor(armory: &Armory) -> Result<()> {
    for piece in ArmorPiece::all() {
        println!(
            "{:<30} {:>2}/{}",
            piece.title(),
            armory.armor_level(piece),
            MAX_ARMOR_LEVEL
        );
    }
    println!("Gems: {}", armory.player().gems());
    Ok(())
}

pub fn upgrade(armory: &mut Armory, piece: ArmorPiece) -> Result<()> {
    let level = armory.upgrade_armor(piece)?;
    println!(
        "{} is now level {} ({} gems left)",
        piece.title(),
        level,
        armory.player().gems()
    );
    Ok(())
}
