use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "dkt", about = concat!("[=] docket v", env!("CARGO_PKG_VERSION"), " - your archive at a glance"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different archive directory
    #[arg(short = 'C', long = "archive-dir", global = true)]
    pub archive_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List folders and documents in the archive
    Ls(LsArgs),
    /// Show the effective display and feature flags
    Settings,
}

#[derive(Args)]
pub struct LsArgs {
    /// Only list entries of one kind
    #[arg(long, value_enum)]
    pub kind: Option<KindFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    Folders,
    Documents,
}
