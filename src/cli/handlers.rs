use std::path::PathBuf;

use crate::cli::commands::{Cli, Commands, KindFilter, LsArgs};
use crate::cli::output;
use crate::io::archive::{Archive, load_archive};
use crate::model::CardKind;
use crate::model::settings::Settings;

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let archive = load_archive_from(cli.archive_dir.as_deref())?;

    match cli.command {
        Some(Commands::Ls(args)) => cmd_ls(&archive, args, json),
        Some(Commands::Settings) => cmd_settings(&archive, json),
        None => unreachable!("main launches the TUI when no subcommand is given"),
    }
}

fn load_archive_from(dir: Option<&str>) -> Result<Archive, Box<dyn std::error::Error>> {
    let root = match dir {
        Some(d) => PathBuf::from(d),
        None => std::env::current_dir()?,
    };
    Ok(load_archive(&root)?)
}

fn cmd_ls(archive: &Archive, args: LsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let cards: Vec<_> = archive
        .cards
        .iter()
        .filter(|c| match args.kind {
            Some(KindFilter::Folders) => c.kind == CardKind::Folder,
            Some(KindFilter::Documents) => c.kind == CardKind::Document,
            None => true,
        })
        .collect();

    if json {
        let listing = output::cards_to_json(&archive.name(), &cards);
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        output::print_cards(&archive.name(), &cards);
    }
    Ok(())
}

fn cmd_settings(archive: &Archive, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_config(&archive.config);
    if json {
        let flags = output::settings_to_json(&settings);
        println!("{}", serde_json::to_string_pretty(&flags)?);
    } else {
        output::print_settings(&settings);
    }
    Ok(())
}
