use clap::Parser;
use docket::cli::commands::Cli;
use docket::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let archive_dir = cli.archive_dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = docket::tui::run(archive_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
