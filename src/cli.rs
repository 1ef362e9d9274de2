use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::tree::GlyphPolicy;

/// Folder Structure - Render a directory tree as text
#[derive(Parser, Debug)]
#[command(name = "folder-structure")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the folder structure of a directory to a text file
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the man page
    Man,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Parent folder to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output file (default: <folder>_structure.txt on the Desktop)
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Folders to ignore entirely (comma-separated, repeatable)
    #[arg(short, long, value_name = "NAMES")]
    pub skip: Vec<String>,

    /// Folders to ignore the contents of (comma-separated, repeatable)
    #[arg(short = 'S', long, value_name = "NAMES")]
    pub skip_contents: Vec<String>,

    /// Branch glyph policy (overrides the config file)
    #[arg(long, value_enum, value_name = "POLICY")]
    pub glyphs: Option<GlyphPolicy>,
}
