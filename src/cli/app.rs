use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bookshelf: personal library catalog manager
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Personal library catalog manager")]
#[command(
    long_about = "Bookshelf loads a catalog of books from a comma-separated file and lets you add, edit, remove and query them interactively, with summary statistics and text charts. Changes live in memory only."
)]
pub struct Cli {
    /// Command to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load (overrides `data_file` from settings)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Settings file path (automatically discovered from bookshelf.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive numbered menu
    Shell,

    /// Show every book in the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Total number of copies across all books
    Total,

    /// Genre(s) with the most copies
    Genre,

    /// Books by an author (exact match)
    Author {
        /// Author name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Books published in a year (exact match)
    Year {
        /// Publication year as written in the catalog
        year: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a text chart of copies per category
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Shell => "shell",
            Commands::List { .. } => "list",
            Commands::Total => "total",
            Commands::Genre => "genre",
            Commands::Author { .. } => "author",
            Commands::Year { .. } => "year",
            Commands::Chart { .. } => "chart",
        }
    }

    /// Check if this command reads from stdin
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Shell)
    }
}

/// Chart kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Share of copies per genre
    Genres,
    /// Copies per publication year
    Years,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
