use std::path::PathBuf;

use clap::{Parser, Subcommand};

use promo_console::StatusFilter;

#[derive(Parser, Debug)]
#[command(
    name = "promo-console",
    version,
    about = "Promotion console: browse and publish promotions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List stored promotions
    List {
        /// Status to show ("all", "active", "paused", ...)
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show the detail view of one promotion
    Show {
        /// Promotion id, e.g. PRM-2024-001
        id: String,
    },
    /// Print the default wizard draft as JSON
    Draft,
    /// Publish a wizard draft
    Publish {
        /// Draft JSON file; the default draft is used when omitted
        #[arg(long)]
        draft: Option<PathBuf>,
    },
}
