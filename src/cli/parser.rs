use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for pixels2moodistory
/// Convert a Pixels JSON export into a CSV file importable by Moodistory
#[derive(Parser, Debug)]
#[command(
    name = "pixels2moodistory",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a JSON file exported from the Pixels app to a CSV file that can be imported into Moodistory",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub convert: ConvertArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// The file path to the JSON file (prompted for when omitted)
    #[arg(value_name = "JSON_FILE_PATH")]
    pub json_file_path: Option<String>,

    /// The default time for the entries in the format HH:MM:SS
    #[arg(value_name = "TIME")]
    pub time: Option<String>,

    /// Text written when a day's notes are blank
    #[arg(long = "placeholder", value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Allow the CSV to overwrite the source file (for `.csv` sources)
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
