//! CLI argument definitions for Waypoint.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use waypoint_core::models::Timeframe;

/// Waypoint - track career paths, timeframe goals and weekly reviews.
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(author, version, about = "Track career paths, timeframe goals and weekly reviews", long_about = None)]
pub struct Cli {
    /// Print JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Tracker snapshot file. Overrides the configured location.
    #[arg(long, global = true, env = "WAYPOINT_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory holding config.json. Defaults to the platform config dir.
    #[arg(long, global = true, env = "WAYPOINT_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Tracker(TrackerCommands),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Commands that operate on the tracker snapshot.
#[derive(Subcommand, Debug)]
pub enum TrackerCommands {
    /// Overall progress, per-path progress and open monthly goals
    Dashboard,

    /// Career path management
    Path {
        #[command(subcommand)]
        command: PathCommands,
    },

    /// Goal management
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },

    /// Weekly reviews
    Review {
        #[command(subcommand)]
        command: ReviewCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum PathCommands {
    /// List career paths with their progress
    List,

    /// Show one path with its goals grouped by timeframe
    Show {
        /// Career path ID
        id: String,
    },

    /// Create a career path
    Add {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,

        #[arg(short, long)]
        motivation: Option<String>,

        /// Presentation color tag
        #[arg(long, default_value = "bg-indigo-500")]
        color: String,

        /// Presentation image reference
        #[arg(long, default_value = "")]
        image: String,
    },

    /// Change fields of a career path
    Update {
        /// Career path ID
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long, conflicts_with = "clear_motivation")]
        motivation: Option<String>,

        /// Remove the motivation
        #[arg(long)]
        clear_motivation: bool,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        image: Option<String>,
    },

    /// Delete a career path and all of its goals
    Delete {
        /// Career path ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List goals, optionally filtered
    List {
        /// Only goals of this career path
        #[arg(short, long)]
        path: Option<String>,

        /// Only goals of this timeframe (5y, 1y, 6m, monthly)
        #[arg(long)]
        timeframe: Option<Timeframe>,

        /// Only completed goals
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Only open goals
        #[arg(long)]
        pending: bool,
    },

    /// Create a goal under a career path
    Add {
        /// Owning career path ID
        #[arg(short, long)]
        path: String,

        #[arg(short, long)]
        title: String,

        /// 5y, 1y, 6m or monthly
        #[arg(long, default_value = "monthly")]
        timeframe: Timeframe,

        /// Coarser goal this one supports
        #[arg(long)]
        parent: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<jiff::civil::Date>,
    },

    /// Flip a goal between open and completed
    Toggle {
        /// Goal ID
        id: String,
    },

    /// Change fields of a goal
    Update {
        /// Goal ID
        id: String,

        /// Move the goal to another career path
        #[arg(short, long)]
        path: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        timeframe: Option<Timeframe>,

        #[arg(long, conflicts_with = "clear_parent")]
        parent: Option<String>,

        #[arg(long)]
        clear_parent: bool,

        /// Due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<jiff::civil::Date>,

        #[arg(long)]
        clear_due: bool,

        /// Set completion explicitly (true or false)
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// List weekly reviews, oldest first
    List,

    /// Log a weekly review; captures the currently completed goals
    Add {
        /// Reflection on the week
        #[arg(short, long)]
        summary: String,

        /// Priority for the coming week (repeatable)
        #[arg(short, long = "priority")]
        priorities: Vec<String>,

        /// Start of the reviewed week (RFC 3339). Defaults to now.
        #[arg(long)]
        week_start: Option<jiff::Timestamp>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Store the tracker snapshot at a different file
    SetDataFile { path: PathBuf },

    /// Default log filter when RUST_LOG is unset (e.g. "info")
    SetLogFilter { filter: String },
}
