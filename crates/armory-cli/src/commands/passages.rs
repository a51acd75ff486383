//! Passage commands: list, add, remove, review and read.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use armory::Armory;

use super::parse_reference;

pub fn list(armory: &Armory) -> Result<()> {
    if armory.passages().is_empty() {
        println!("No passages yet. Add one with `armory add John 3:16`.");
        return Ok(());
    }

    for (offset, passage) in armory.passages().iter().enumerate() {
        let mark = if armory.is_passage_reviewed_today(passage) {
            "*"
        } else {
            " "
        };
        println!("{:>3} {} {}", offset, mark, passage);
    }
    Ok(())
}

pub fn add(armory: &mut Armory, reference: &[String]) -> Result<()> {
    let passage = parse_reference(reference)?;
    println!("Added {}", passage);
    armory.add_passage(passage);
    Ok(())
}

pub fn remove(armory: &mut Armory, offsets: &[usize]) -> Result<()> {
    let removed = armory.remove_passages(offsets);
    println!("Removed {} passage(s)", removed);
    Ok(())
}

pub fn review(armory: &mut Armory, reference: &[String]) -> Result<()> {
    let passage = parse_reference(reference)?;
    if !armory.passages().contains(&passage) {
        bail!("{} is not in your passage list", passage);
    }

    armory.review_passage(&passage);
    let today = armory.reviews_today(&passage);
    println!("Reviewed {} ({} today)", passage, today);
    Ok(())
}

pub fn read(armory: &Armory, reference: &[String], wait_secs: u64) -> Result<()> {
    let passage = parse_reference(reference)?;

    let deadline = Instant::now() + Duration::from_secs(wait_secs);
    while !armory.is_loaded() && armory.text().is_pending() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(20));
    }
    if !armory.is_loaded() {
        bail!("{} text is not available", armory.text().translation());
    }

    match armory.passage_text(&passage) {
        Some(text) => {
            println!("{} ({})", passage, armory.text().translation());
            println!("{}", text);
            Ok(())
        }
        None => bail!("{} not found in {}", passage, armory.text().translation()),
    }
}
