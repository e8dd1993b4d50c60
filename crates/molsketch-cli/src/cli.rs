use clap::{Args, Parser, Subcommand};
use molsketch::engine::config::Layer;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Molsketch Developers",
    version,
    about = "Molsketch CLI - Lays out 2D molecular diagrams with bonds, lone pairs, oxidation states and partial charges.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a structure as an SVG diagram.
    Render(RenderArgs),
    /// Compute the layout of a structure and write it as JSON.
    Layout(LayoutArgs),
    /// Report data-quality issues in a structure document.
    Check(CheckArgs),
}

/// Selects the structure document and, optionally, one structure inside it.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the structure document (.json or .toml).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Identifier of the structure to use when the document holds several.
    #[arg(long = "id", value_name = "ID")]
    pub structure_id: Option<String>,
}

/// Layer and configuration options shared by the drawing commands.
#[derive(Args, Debug, Clone, Default)]
pub struct DrawingArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show a layer (bonds, oxidation, charges, lone-pairs). Can be repeated or comma-separated.
    #[arg(long, value_name = "LAYER", value_delimiter = ',')]
    pub show: Vec<Layer>,

    /// Hide a layer. Applied after --show and --all-layers.
    #[arg(long, value_name = "LAYER", value_delimiter = ',')]
    pub hide: Vec<Layer>,

    /// Show every layer.
    #[arg(short = 'a', long)]
    pub all_layers: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S geometry.unit-scale=40
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path for the SVG output. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub drawing: DrawingArgs,
}

/// Arguments for the `layout` subcommand.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Path for the JSON output. Writes to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,

    #[command(flatten)]
    pub drawing: DrawingArgs,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the structure document (.json or .toml).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Only check the structure with this identifier. Checks all when omitted.
    #[arg(long = "id", value_name = "ID")]
    pub structure_id: Option<String>,

    /// Treat warnings as failures.
    #[arg(long)]
    pub strict: bool,
}
