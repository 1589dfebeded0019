use clap::{Args, Parser, Subcommand};

/// Command-line arguments for gitsub
#[derive(Parser, Debug, Clone)]
#[command(name = "gitsub")]
#[command(about = "Clone only the subdirectories you need from a remote Git repository")]
#[command(long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sparse-clone one or more directories of a repository
    ///
    /// Either `<repo-url> <dir> [dir...]` or a single GitHub tree/blob URL
    /// such as `https://github.com/owner/repo/tree/main/src/lib`
    Clone(CloneArgs),
}

/// Arguments for the `clone` subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct CloneArgs {
    /// Repository URL followed by directories, or one GitHub tree/blob URL
    #[arg(value_name = "URL_OR_DIR", required = true, num_args = 1..)]
    pub targets: Vec<String>,

    /// Branch to check out (default: main, or the branch in a GitHub URL)
    #[arg(short, long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Output directory (default: repository name)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Print the git commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,
}
