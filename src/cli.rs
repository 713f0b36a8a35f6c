// Command-line surface.
//
// Grounded on original_source/src/main.c's getopt flag table (-s, -i, -r,
// -d, -x, -o, -l), translated to `clap`'s derive API — the pack's dominant
// CLI crate. Directory-enumeration mode mirrors main.c's `-d` handling:
// every file under the directory matching the input extension becomes an
// input; files whose derived output already exists are warned about, not
// treated as an error.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{PruneConfig, DEFAULT_GROWTH_INCREMENT, DEFAULT_INITIAL_CAPACITY};
use crate::error::PruneError;

#[derive(Debug, Parser)]
#[command(
    name = "dnsbl-prune",
    about = "Prune DNS block-list CSV files by collapsing domains already covered by a stronger or shorter entry"
)]
pub struct Cli {
    /// Input files to process. Mutually exclusive with --dir.
    pub files: Vec<PathBuf>,

    /// Read every file matching --input-ext from this directory instead of
    /// taking file arguments.
    #[arg(short, long, value_name = "DIR", conflicts_with = "files")]
    pub dir: Option<PathBuf>,

    /// Extension of input files, used both as a directory-mode filter and
    /// as the suffix stripped from output path derivation.
    #[arg(short = 'x', long = "input-ext", default_value = ".fat")]
    pub input_ext: String,

    /// Extension appended to derive each output path.
    #[arg(short = 'o', long = "output-ext", default_value = ".txt")]
    pub output_ext: String,

    /// Suppress progress/diagnostic output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Override the initial per-file surviving-line vector capacity.
    #[arg(short = 'i', long)]
    pub initial_capacity: Option<usize>,

    /// Override the per-file surviving-line vector growth increment.
    #[arg(short = 'r', long)]
    pub growth_increment: Option<usize>,

    /// Reuse one assembly buffer across files during emission. Mutually
    /// exclusive with --parallel-emit.
    #[arg(short = 'b', long)]
    pub shared_buffer: bool,

    /// Fan emission out across worker threads, one per file.
    #[arg(long, conflicts_with = "shared_buffer")]
    pub parallel_emit: bool,

    /// Append diagnostics and progress to this file instead of stderr.
    #[arg(short = 'l', long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Result<PruneConfig, PruneError> {
        let input_files = if let Some(dir) = &self.dir {
            enumerate_directory(dir, &self.input_ext, &self.output_ext)?
        } else {
            self.files
        };

        Ok(PruneConfig {
            input_files,
            input_ext: self.input_ext,
            output_ext: self.output_ext,
            initial_capacity: self.initial_capacity.unwrap_or(DEFAULT_INITIAL_CAPACITY),
            growth_increment: self.growth_increment.unwrap_or(DEFAULT_GROWTH_INCREMENT),
            shared_buffer: self.shared_buffer,
            parallel_emit: self.parallel_emit,
            silent: self.quiet,
            log_file: self.log_file,
            ..PruneConfig::default()
        })
    }
}

fn enumerate_directory(
    dir: &PathBuf,
    input_ext: &str,
    output_ext: &str,
) -> Result<Vec<PathBuf>, PruneError> {
    let entries = std::fs::read_dir(dir).map_err(|e| PruneError::io(dir.clone(), e))?;
    let ext = input_ext.trim_start_matches('.');

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PruneError::io(dir.clone(), e))?;
        let path = entry.path();
        if path.extension() == Some(OsStr::new(ext)) {
            let output_path = crate::context::derive_output_path(&path, output_ext);
            if output_path.exists() {
                log::warn!(
                    "{} already exists and will be overwritten",
                    output_path.display()
                );
            }
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
