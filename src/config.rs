// Operational surface the CLI hands to the pipeline.
//
// Grounded on original_source/include/inputargs.h (input_args_t): buffer
// size overrides, shared-buffer toggle, silent flag, log destination,
// extensions. Generalized into a plain struct built by `cli.rs` and
// consumed by `pipeline.rs`, per spec.md §6.

use std::path::PathBuf;

use crate::error::PruneError;
use crate::line_reader::{LineReaderConfig, DEFAULT_MAX_LINE_LEN, DEFAULT_PAGE_SIZE};

/// Initial capacity for a file's surviving-line vector, absent an override.
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;
/// Growth increment for a file's surviving-line vector, absent an override.
pub const DEFAULT_GROWTH_INCREMENT: usize = 64;

#[derive(Debug, Clone)]
pub struct PruneConfig {
    pub input_files: Vec<PathBuf>,
    pub input_ext: String,
    pub output_ext: String,
    pub initial_capacity: usize,
    pub growth_increment: usize,
    pub shared_buffer: bool,
    pub parallel_emit: bool,
    pub silent: bool,
    pub log_file: Option<PathBuf>,
    pub line_reader: LineReaderConfig,
}

impl Default for PruneConfig {
    fn default() -> PruneConfig {
        PruneConfig {
            input_files: Vec::new(),
            input_ext: ".fat".to_string(),
            output_ext: ".txt".to_string(),
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_increment: DEFAULT_GROWTH_INCREMENT,
            shared_buffer: false,
            parallel_emit: false,
            silent: false,
            log_file: None,
            line_reader: LineReaderConfig {
                page_size: DEFAULT_PAGE_SIZE,
                max_line_len: DEFAULT_MAX_LINE_LEN,
            },
        }
    }
}

impl PruneConfig {
    /// Validates cross-field constraints not expressible in the type alone.
    pub fn validate(&self) -> Result<(), PruneError> {
        if self.input_files.is_empty() {
            return Err(PruneError::InvalidConfig {
                reason: "no input files given".to_string(),
            });
        }
        if !self.input_ext.starts_with('.') {
            return Err(PruneError::InvalidConfig {
                reason: format!("input extension {:?} must start with '.'", self.input_ext),
            });
        }
        if !self.output_ext.starts_with('.') {
            return Err(PruneError::InvalidConfig {
                reason: format!("output extension {:?} must start with '.'", self.output_ext),
            });
        }
        if self.shared_buffer && self.parallel_emit {
            return Err(PruneError::InvalidConfig {
                reason: "--shared-buffer and --parallel-emit are mutually exclusive".to_string(),
            });
        }
        Ok(())
    }
}
