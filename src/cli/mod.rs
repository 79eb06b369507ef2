pub mod kinds;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "qmltags",
    version,
    about = "Generate ctags for QML components, their functions and properties",
    long_about = "Generate ctags for QML components, their functions and properties.\n\n\
                  Run in the top level of a QML project to tag every '.qml' file below it,\n\
                  or pass the files to tag:\n\n    \
                  qmltags MyComponent.qml buttons/MyButton.qml",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// QML file path(s) to generate tags from (default: every .qml file below
    /// the current directory)
    #[arg(value_name = "FILEPATH")]
    pub filepaths: Vec<PathBuf>,

    /// Path of the output tags file
    #[arg(short, long)]
    pub output_filepath: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Format of the summary printed after writing
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Skip tags for `function` definitions
    #[arg(long)]
    pub no_methods: bool,

    /// Skip tags for `property` declarations
    #[arg(long)]
    pub no_properties: bool,

    /// Keep running and regenerate the tags file when sources change
    #[arg(short, long)]
    pub watch: bool,

    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default .qmltagsrc.toml
    Init,
    /// List the tag kinds written to the tags file
    Kinds,
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
