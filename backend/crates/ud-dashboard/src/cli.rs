use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ud")]
#[command(about = "User dashboard client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server URL (defaults to client.api_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
