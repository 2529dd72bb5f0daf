// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Per-site registration error box plots from registration pipeline logs.
///
/// Every file in DIRECTORY whose name starts with a known site prefix is
/// read, its transform block decoded and reduced to rotation and
/// translation errors, and the translation errors are drawn per site.
#[derive(Parser, Debug, Clone)]
#[command(author, version = crate::crate_version(), about, long_about = None)]
pub struct Args {
    /// Directory holding the registration logs
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Directory the figures and exports are written to
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Also write per-file results and per-site summaries as CSV
    #[arg(long)]
    pub csv: bool,

    /// Also draw the rotation error box plot
    #[arg(long)]
    pub rotation: bool,

    /// Skip malformed or unreadable logs instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Do not draw any figure
    #[arg(long)]
    pub no_plot: bool,
}

impl Args {
    /// Stem used to name output files, taken from the input directory.
    pub fn root_name(&self) -> String {
        self.directory
            .canonicalize()
            .ok()
            .as_deref()
            .unwrap_or(self.directory.as_path())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "registration".to_string())
    }
}


// src/cli.rs
