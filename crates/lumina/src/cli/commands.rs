//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

/// Lumina - AI-assisted reading list with a terminal interface
#[derive(Parser, Debug)]
#[command(name = "lumina")]
#[command(about = "AI-assisted reading list with a terminal interface", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (launches the TUI when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the terminal user interface
    Tui,

    /// Add a book and wait for its insight
    Add {
        /// Book title
        title: String,

        /// Book author
        author: String,
    },

    /// List the books on the shelf, newest first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Remove a book by id
    Remove {
        /// Id of the book to remove
        id: Uuid,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::parse_from(["lumina"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from(["lumina", "add", "Dune", "Frank Herbert"]);
        match cli.command {
            Some(Commands::Add { title, author }) => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Frank Herbert");
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::parse_from(["lumina", "list", "--format", "json"]);
        match cli.command {
            Some(Commands::List { format }) => assert!(matches!(format, OutputFormat::Json)),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_parse_remove_requires_uuid() {
        assert!(Cli::try_parse_from(["lumina", "remove", "not-a-uuid"]).is_err());

        let cli = Cli::parse_from(["lumina", "remove", "1f0f7a3a-8c2e-4f11-9d8a-2d4b9a8f6c01"]);
        match cli.command {
            Some(Commands::Remove { id }) => {
                assert_eq!(id.to_string(), "1f0f7a3a-8c2e-4f11-9d8a-2d4b9a8f6c01");
            }
            _ => panic!("expected remove command"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["lumina", "--verbose", "list"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["lumina", "list", "--verbose"]);
        assert!(cli.verbose);
    }
}
