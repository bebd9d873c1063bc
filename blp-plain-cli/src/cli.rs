//! Root CLI structure for blp-plain

use crate::commands::convert::{BatchArgs, ConvertArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blp-plain")]
#[command(about = "Convert images into uncompressed BLP2 textures", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single image into a BLP file
    Convert(ConvertArgs),

    /// Convert every image matching the given patterns
    Batch(BatchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
