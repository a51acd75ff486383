mod cli;
mod commands;

use anyhow::Result;
use armory::{
    Armory, ArmoryConfig, FixedDir, InMemorySource, JsonDirSource, Leaderboard, PlatformDirs,
    Player, Unresolved,
};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "armory=debug" } else { "armory=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let mut armory = open(&cli);
    debug!("Translation: {}", armory.text().translation());

    match cli.command {
        Command::Status => commands::status::run(&armory),
        Command::Passages => commands::passages::list(&armory),
        Command::Add { reference } => commands::passages::add(&mut armory, &reference),
        Command::Remove { offsets } => commands::passages::remove(&mut armory, &offsets),
        Command::Review { reference } => commands::passages::review(&mut armory, &reference),
        Command::Read {
            reference,
            wait_secs,
        } => commands::passages::read(&armory, &reference, wait_secs),
        Command::Task { difficulty } => commands::play::task(&mut armory, difficulty),
        Command::Armor => commands::play::armor(&armory),
        Command::Upgrade { piece } => commands::play::upgrade(&mut armory, piece),
        Command::Score { app, score } => commands::scores::record(&mut armory, &app, score),
        Command::Leaderboard => commands::scores::list(&armory),
    }
}

fn open(cli: &Cli) -> Armory {
    let mut builder = ArmoryConfig::builder().translation(cli.translation);

    builder = if cli.ephemeral {
        builder.resolver(Unresolved)
    } else if let Some(dir) = &cli.data_dir {
        builder.resolver(FixedDir::new(dir))
    } else {
        builder.resolver(PlatformDirs)
    };

    builder = match &cli.text_dir {
        Some(dir) => builder.source(JsonDirSource::new(dir)),
        None => builder.source(InMemorySource::armor_of_god()),
    };

    Armory::with_config(Player::new(), Leaderboard::new(), builder.build())
}
