use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::pages;

#[derive(Debug, Parser)]
#[command(
    name = "pagegrep",
    about = "Keyword search over digitized books with page and chapter \
             attribution"
)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search books for a keyword
    Search(SearchArgs),
    /// Interactive session: enter a keyword, then inspect match contexts
    Repl(ReplArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The keyword to look up (case-insensitive substring)
    pub keyword: String,

    /// Book files to search
    pub files: Vec<PathBuf>,

    /// Also search every book file under this directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the context of result N after the table
    #[arg(long, value_name = "N")]
    pub context: Option<usize>,

    /// Maximum forward jump between consecutive page markers
    #[arg(long, default_value_t = pages::DEFAULT_MAX_JUMP)]
    pub max_jump: u32,
}

// -- Repl --

#[derive(Debug, Parser)]
pub struct ReplArgs {
    /// Book files to search
    pub files: Vec<PathBuf>,

    /// Also search every book file under this directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Maximum forward jump between consecutive page markers
    #[arg(long, default_value_t = pages::DEFAULT_MAX_JUMP)]
    pub max_jump: u32,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "pagegrep",
            &mut std::io::stdout(),
        );
    }
}
