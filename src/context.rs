// Per-input-file bookkeeping: paths, open handles, carry-over set.
//
// Grounded on original_source/include/pfb_context.h (pfb_context_t) and
// pfb_prune.c's outputfilename()/pfb_open_context()/pfb_close_context().
// Output path derivation replaces everything from the last `.` in the input
// path with the configured output extension; a path with no `.` anywhere
// just gets the extension appended — exactly what outputfilename() does,
// regardless of what the configured input extension happens to be.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::PruneError;
use crate::trie::FileId;

pub fn derive_output_path(input: &Path, output_ext: &str) -> PathBuf {
    let s = input.to_string_lossy();
    let cut = s.rfind('.').unwrap_or(s.len());
    let mut out = String::with_capacity(cut + output_ext.len());
    out.push_str(&s[..cut]);
    out.push_str(output_ext);
    PathBuf::from(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContextState {
    Unopened,
    Open,
    Closed,
}

/// Owns one input file's identity and its lazily-opened handles. Reopening
/// after `close()` is rejected — the state machine is monotonic.
pub struct FileContext {
    pub id: FileId,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    state: ContextState,
}

impl FileContext {
    pub fn new(id: FileId, input_path: PathBuf, output_ext: &str) -> FileContext {
        let output_path = derive_output_path(&input_path, output_ext);
        FileContext {
            id,
            input_path,
            output_path,
            state: ContextState::Unopened,
        }
    }

    pub fn open_input(&mut self) -> Result<File, PruneError> {
        self.transition_to_open()?;
        File::open(&self.input_path).map_err(|e| PruneError::io(self.input_path.clone(), e))
    }

    /// Opens (creating/truncating) the output file for the emission pass.
    pub fn create_output(&mut self) -> Result<File, PruneError> {
        self.transition_to_open()?;
        File::create(&self.output_path).map_err(|e| PruneError::io(self.output_path.clone(), e))
    }

    fn transition_to_open(&mut self) -> Result<(), PruneError> {
        match self.state {
            ContextState::Closed => Err(PruneError::InvalidConfig {
                reason: format!("{} reopened after close", self.input_path.display()),
            }),
            ContextState::Unopened | ContextState::Open => {
                self.state = ContextState::Open;
                Ok(())
            }
        }
    }

    pub fn close(&mut self) {
        self.state = ContextState::Closed;
    }
}
