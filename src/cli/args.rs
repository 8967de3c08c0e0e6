use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "composite-pricing")]
#[command(about = "Price products and nested boxes of products through one interface")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price an iPhone, an iPad and a box holding both
    Demo,
    /// Price every entry of a catalog file
    Quote {
        /// Catalog JSON file
        file: PathBuf,
        /// List only top-level entries
        #[arg(long)]
        flat: bool,
        /// Print the quote as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a catalog file without pricing it
    Check {
        /// Catalog JSON file
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_command() {
        let args = Args::try_parse_from(["composite-pricing", "-v", "quote", "store.json", "--flat"])
            .unwrap();
        assert!(args.verbose);
        match args.command {
            Commands::Quote { file, flat, json } => {
                assert_eq!(file, PathBuf::from("store.json"));
                assert!(flat);
                assert!(!json);
            }
            _ => panic!("expected quote command"),
        }
    }

    #[test]
    fn test_check_requires_file() {
        assert!(Args::try_parse_from(["composite-pricing", "check"]).is_err());
    }
}
