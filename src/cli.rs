use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Lines matching this query are returned. The query may be a plain
    /// string or a regular expression.
    #[clap(short, long)]
    pub query: Option<String>,

    /// Reuse saved options identified by this key. An explicit --query
    /// overrides the preset's stored query.
    #[clap(short = 'S', long = "saved-key")]
    pub saved_key: Option<String>,

    /// Decode all files with the given encoding (UTF-8 by default).
    #[clap(short, long)]
    pub encoding: Option<String>,

    /// Glob pattern selecting the files to search; `**` recurses.
    #[clap(short, long, default_value = "./*.*")]
    pub target: String,

    /// Save the resolved options under this key for later reuse with -S.
    #[clap(short, long)]
    pub save: Option<String>,

    /// Ignore this many characters at the head of every line before
    /// matching and display.
    #[clap(short = 'i', long = "ignore-linehead", default_value_t = 8)]
    pub ignore_linehead: usize,

    /// Show only the names of files containing a match.
    #[clap(short = 'g', long, default_value_t = false)]
    pub show_only_filename: bool,

    /// Show all saved presets and exit.
    #[clap(long, default_value_t = false)]
    pub list: bool,

    #[clap(long, default_value_t = false)]
    pub verbose: bool,

    #[clap(long, value_parser)]
    pub log: Option<PathBuf>,
}
