//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chronicle - compose narrative journals from dated photos and notes
#[derive(Parser, Debug)]
#[command(name = "chronicle")]
#[command(about = "Compose narrative journals from dated photos and notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose a journal from a JSON file of dated content items
    Compose {
        /// Path to a JSON array of dated items (timestamp, kind, content,
        /// source_url). Image items must already carry their captions.
        #[arg(long)]
        items: PathBuf,

        /// Model override for this composition
        #[arg(long)]
        model: Option<String>,
    },

    /// Caption an image with the vision model
    Describe {
        /// Public URL of the image
        url: String,
    },
}
