//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gesture Recognizer - match captured strokes against template shapes
#[derive(Parser, Debug)]
#[command(name = "gesture-rec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recognize a captured stroke against a template library
    Recognize {
        /// Stroke file (JSON) to recognize
        stroke: PathBuf,

        /// Template library file (JSON)
        #[arg(short, long)]
        templates: PathBuf,
    },

    /// List the templates in a library
    Templates {
        /// Template library file (JSON)
        library: PathBuf,

        /// Show detailed information
        #[arg(short, long)]
        detailed: bool,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the template library directory
    pub fn templates_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".gesture_recognizer").join("templates"))
            .unwrap_or_else(|| PathBuf::from("templates"))
    }
}
