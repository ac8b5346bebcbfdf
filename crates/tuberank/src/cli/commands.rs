//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tuberank::VideoCategory;

/// Generate YouTube titles, descriptions, keywords and thumbnail ideas.
#[derive(Debug, Parser)]
#[command(name = "tuberank", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The requested command, defaulting to the terminal UI.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}

/// Available subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Open the interactive terminal UI
    Tui,

    /// Generate once and print the result as JSON
    Generate {
        /// Video idea
        #[arg(short, long)]
        topic: String,

        /// Target audience
        #[arg(short, long, default_value = "")]
        audience: String,

        /// Category key, see `tuberank categories`
        #[arg(short, long, default_value = "tech", value_parser = parse_category)]
        category: VideoCategory,
    },

    /// List category keys and labels
    Categories,
}

fn parse_category(value: &str) -> Result<VideoCategory, String> {
    value
        .parse::<VideoCategory>()
        .map_err(|_| format!("unknown category '{}'; run `tuberank categories`", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tuberank"]).unwrap();
        assert_eq!(cli.command(), Commands::Tui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn generate_parses_all_fields() {
        let cli = Cli::try_parse_from([
            "tuberank",
            "generate",
            "--topic",
            "مراجعة هاتف",
            "--audience",
            "الشباب",
            "--category",
            "Gaming",
            "--config",
            "/tmp/tuberank.toml",
        ])
        .unwrap();

        assert_eq!(
            cli.command(),
            Commands::Generate {
                topic: "مراجعة هاتف".to_string(),
                audience: "الشباب".to_string(),
                category: VideoCategory::Gaming,
            }
        );
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/tuberank.toml")));
    }

    #[test]
    fn generate_defaults_to_tech_and_empty_audience() {
        let cli = Cli::try_parse_from(["tuberank", "generate", "-t", "idea"]).unwrap();
        match cli.command() {
            Commands::Generate {
                audience, category, ..
            } => {
                assert!(audience.is_empty());
                assert_eq!(category, VideoCategory::Tech);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = Cli::try_parse_from(["tuberank", "generate", "-t", "idea", "-c", "cats"]);
        assert!(result.is_err());
    }

    #[test]
    fn categories_takes_no_arguments() {
        let cli = Cli::try_parse_from(["tuberank", "categories"]).unwrap();
        assert_eq!(cli.command(), Commands::Categories);
        assert!(Cli::try_parse_from(["tuberank", "categories", "extra"]).is_err());
    }

    #[test]
    fn generate_requires_topic() {
        assert!(Cli::try_parse_from(["tuberank", "generate"]).is_err());
    }
}
