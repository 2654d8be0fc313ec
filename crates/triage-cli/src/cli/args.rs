use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Screen free text for mental-health concern categories through an LLM oracle"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Screen a text against the full category catalog
    Screen(ScreenArgs),
    /// List the screening categories in catalog order
    Categories,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScreenArgs {
    /// Text to screen. Reads stdin when neither TEXT nor --file is given.
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Engine configuration file; defaults apply when the file is absent
    #[arg(long, default_value = "triage.yaml")]
    pub config: PathBuf,

    /// Override the configured oracle-failure policy
    #[arg(long, value_enum)]
    pub on_error: Option<OnErrorArg>,

    /// Override the configured in-flight call bound (sequential when unset)
    #[arg(long)]
    pub parallel: Option<usize>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Oracle API key; prefer the environment variable
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnErrorArg {
    FailFast,
    SubstituteIndeterminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
