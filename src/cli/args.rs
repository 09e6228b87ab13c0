//! CLI argument structures
//!
//! This module defines the command-line interface of datepoll.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Create Framadate date polls from compact day and time expressions
#[derive(Parser)]
#[command(name = "datepoll")]
#[command(about = "datepoll - Create date polls from expressions like \"mo-fr\" and \"14:00,18:00\"", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to <config dir>/datepoll/config.toml)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a date poll
    #[command(name = "create")]
    Create {
        /// Days to offer, e.g. "mo-fr", "sa,su" or "2024-05-01"
        days: String,

        /// Times to offer on each day, e.g. "14:00,18:00" or "19"
        times: String,

        /// Organizer name
        #[arg(long)]
        name: Option<String>,

        /// Poll title
        #[arg(long)]
        title: Option<String>,

        /// Organizer email
        #[arg(long)]
        email: Option<String>,

        /// Poll description
        #[arg(long)]
        description: Option<String>,

        /// Base URL of the Framadate installation
        #[arg(long, value_name = "URL")]
        framadate: Option<String>,

        /// Print the expanded date-times without creating a poll
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete a poll through its admin URL
    #[command(name = "delete")]
    Delete {
        /// Admin URL printed when the poll was created
        admin_url: String,
    },
}
