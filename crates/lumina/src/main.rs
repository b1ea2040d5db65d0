//! Lumina CLI binary.
//!
//! This binary provides command-line access to the reading list:
//! - Launch the TUI to browse and manage the shelf
//! - Add, list, and remove books from scripts

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_add, handle_list, handle_remove, launch_tui};

    // Pick up GEMINI_API_KEY from a .env file if one is present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command; the TUI is the default surface
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            launch_tui().await?;
        }

        Commands::Add { title, author } => {
            handle_add(&title, &author).await?;
        }

        Commands::List { format } => {
            handle_list(format).await?;
        }

        Commands::Remove { id } => {
            handle_remove(id).await?;
        }
    }

    Ok(())
}
