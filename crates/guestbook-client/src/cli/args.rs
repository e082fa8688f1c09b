//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

/// Guestbook - read and sign a guestbook backed by a GraphQL API
#[derive(Parser, Debug)]
#[command(name = "guestbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries, newest first
    List(ListArgs),

    /// Create a new entry
    Create(CreateArgs),
}

/// Arguments for the list command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Twitter handle of the author
    #[arg(short, long)]
    pub twitter_handle: String,

    /// Story text
    #[arg(short, long)]
    pub story: String,

    /// Print the response body exactly as returned
    #[arg(long)]
    pub raw: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create() {
        let cli = Cli::parse_from([
            "guestbook",
            "create",
            "--twitter-handle",
            "alice",
            "--story",
            "hello",
        ]);

        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.twitter_handle, "alice");
                assert_eq!(args.story, "hello");
                assert!(!args.raw);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["guestbook", "list", "--json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List(ListArgs { json: true })));
    }
}
