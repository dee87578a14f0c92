use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// classweave - post-compilation class file processing pipeline
#[derive(Parser, Debug)]
#[command(name = "classweave")]
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
    /// Run the cleanup phase against a target directory
    Clean(CleanArgs),

    /// List registered cleanup providers
    Providers,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Directory of compiled class files to clean
    pub target: Option<PathBuf>,

    /// Auxiliary search path entry (can be specified multiple times)
    #[arg(short = 'p', long = "classpath", value_name = "PATH")]
    pub classpath: Vec<PathBuf>,

    /// Provider property as key=value (can be specified multiple times)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", value_parser = parse_property)]
    pub define: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_property(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
