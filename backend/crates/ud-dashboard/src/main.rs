//! ud - user dashboard client
//!
//! # Examples
//!
//! ```bash
//! # Interactive dashboard
//! ud
//!
//! # One-shot commands (JSON output)
//! ud list --pretty
//! ud add --name Ada --email ada@x.io
//! ud update <id> --email ada@y.io
//! ud delete-many <id> <id>
//! ```

use ud_dashboard::{Client, Dashboard, cli::Cli, commands::Commands, logger, shell};

use ud_core::NewUser;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ud_config::Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(log_dir) = log_file.as_ref().and_then(|path| path.parent())
        && let Err(e) = std::fs::create_dir_all(log_dir)
    {
        eprintln!("Error creating log directory {}: {}", log_dir.display(), e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = logger::initialize(config.logging.level, log_file) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Explicit flag > config
    let server_url = cli.server.unwrap_or(config.client.api_url);
    let client = match Client::new(
        &server_url,
        Duration::from_secs(config.client.timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            let mut dashboard = Dashboard::new(client);
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let mut output = std::io::stdout();

            return match shell::run(&mut dashboard, input, &mut output).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            };
        }
        Commands::List => client.list_users().await,
        Commands::Add { name, email } => client.create_user(&NewUser::new(name, email)).await,
        Commands::Update { id, name, email } => {
            client
                .update_user(&id, name.as_deref(), email.as_deref())
                .await
        }
        Commands::Delete { id } => client.delete_user(&id).await,
        Commands::DeleteMany { ids } => client.delete_users(&ids).await,
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
