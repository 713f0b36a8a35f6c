// Streams logical lines out of a byte source.
//
// Grounded on original_source/src/rw_pfb_csv.c (read_pfb_line, load_LineData):
// a fixed-size page buffer is refilled from the reader; a line-assembly
// buffer accumulates bytes up to the next CR/LF run. Runs of CR/LF between
// lines collapse into a single separator and never produce an empty line —
// a blank line does not consume a line number. Lines longer than the
// configured ceiling are truncated with a warning; the remainder up to the
// next terminator is discarded. The final line of input without a trailing
// terminator is still emitted if non-empty.
//
// `read_selected_lines` is the "selective mode" used during emission
// (spec.md §4.1 / §4.5): given an ascending sequence of line numbers of
// interest, only those lines are materialized into the assembly buffer —
// everything else is scanned for its terminator and skipped without being
// copied anywhere.

use std::cell::Cell;
use std::io::{self, Read};
use std::rc::Rc;

use crate::core::scanner::find_terminator;

/// Default page size used to refill from the underlying reader.
pub const DEFAULT_PAGE_SIZE: usize = 4096;
/// Default ceiling on a single logical line's length before truncation.
pub const DEFAULT_MAX_LINE_LEN: usize = 2048;

/// What the per-line callback asks the reader to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy)]
pub struct LineReaderConfig {
    pub page_size: usize,
    pub max_line_len: usize,
}

impl Default for LineReaderConfig {
    fn default() -> Self {
        LineReaderConfig {
            page_size: DEFAULT_PAGE_SIZE,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

/// Append `chunk` to `assembly`, truncating at `max_len` and warning once per
/// line when truncation first occurs.
fn append_with_ceiling(assembly: &mut Vec<u8>, chunk: &[u8], max_len: usize, warned: &mut bool) {
    if assembly.len() >= max_len {
        if !*warned {
            log::warn!(
                "line exceeds {} byte ceiling; truncating remainder",
                max_len
            );
            *warned = true;
        }
        return;
    }

    let remaining = max_len - assembly.len();
    if chunk.len() <= remaining {
        assembly.extend_from_slice(chunk);
    } else {
        assembly.extend_from_slice(&chunk[..remaining]);
        log::warn!(
            "line exceeds {} byte ceiling; truncating remainder",
            max_len
        );
        *warned = true;
    }
}

/// Shared scan loop. `want(line_number)` decides whether the upcoming line
/// (1-based) should be materialized into `assembly` before `on_line` fires;
/// when it returns false the line's bytes are scanned for their terminator
/// but never copied. Returns the number of logical lines encountered.
fn scan_lines<R: Read>(
    mut reader: R,
    config: &LineReaderConfig,
    mut want: impl FnMut(u64) -> bool,
    mut on_line: impl FnMut(&[u8], u64) -> LineOutcome,
) -> io::Result<u64> {
    let mut page = vec![0u8; config.page_size.max(1)];
    let mut assembly: Vec<u8> = Vec::new();
    let mut truncated_warned = false;
    let mut line_number: u64 = 0;

    loop {
        let n = reader.read(&mut page)?;
        if n == 0 {
            break;
        }

        let mut pos = 0;
        while pos < n {
            match find_terminator(&page[pos..n]) {
                Some(rel) => {
                    let term_pos = pos + rel;
                    if want(line_number + 1) {
                        append_with_ceiling(
                            &mut assembly,
                            &page[pos..term_pos],
                            config.max_line_len,
                            &mut truncated_warned,
                        );
                    } else if term_pos > pos {
                        // Not of interest: length still matters for whether
                        // this counts as a non-blank line, but none of the
                        // bytes are copied anywhere.
                        assembly.push(0);
                    }

                    pos = term_pos;
                    // collapse the run of CR/LF into a single separator
                    while pos < n && (page[pos] == b'\r' || page[pos] == b'\n') {
                        pos += 1;
                    }

                    if !assembly.is_empty() {
                        line_number += 1;
                        let interested = assembly.iter().any(|&b| b != 0) || want(line_number);
                        let outcome = if interested {
                            on_line(&assembly, line_number)
                        } else {
                            LineOutcome::Continue
                        };
                        assembly.clear();
                        truncated_warned = false;
                        if outcome == LineOutcome::Stop {
                            return Ok(line_number);
                        }
                    }
                }
                None => {
                    if want(line_number + 1) {
                        append_with_ceiling(
                            &mut assembly,
                            &page[pos..n],
                            config.max_line_len,
                            &mut truncated_warned,
                        );
                    } else if n > pos {
                        assembly.push(0);
                    }
                    pos = n;
                }
            }
        }
    }

    if !assembly.is_empty() {
        line_number += 1;
        on_line(&assembly, line_number);
    }

    Ok(line_number)
}

/// Invoke `on_line` once per logical line, numbered from 1. Blank runs of
/// CR/LF never advance the line counter or trigger the callback.
pub fn for_each_line<R: Read>(
    reader: R,
    config: &LineReaderConfig,
    mut on_line: impl FnMut(&[u8], u64) -> LineOutcome,
) -> io::Result<u64> {
    scan_lines(reader, config, |_| true, |bytes, n| on_line(bytes, n))
}

/// Selective mode: `targets` yields ascending, strictly-positive line numbers
/// of interest. Only those lines are materialized and passed to `on_line`;
/// everything else is skipped without allocation. Reading stops as soon as
/// the target iterator is exhausted or `on_line` returns `LineOutcome::Stop`.
pub fn read_selected_lines<R: Read>(
    reader: R,
    config: &LineReaderConfig,
    mut targets: impl Iterator<Item = u64>,
    mut on_line: impl FnMut(&[u8], u64) -> LineOutcome,
) -> io::Result<()> {
    let first = targets.next();
    if first.is_none() {
        return Ok(());
    }
    // Shared by both closures below: `next_target` is `Option<u64>`, which
    // is `Copy`, so two closures capturing it independently (one `move`,
    // one not) would each get their own copy — mutations made inside the
    // `move` callback would never be visible to the plain `want` closure.
    // A `Rc<Cell<_>>` gives both closures a handle to the same cell.
    let next_target = Rc::new(Cell::new(first));

    let want_target = Rc::clone(&next_target);
    let callback_target = Rc::clone(&next_target);

    scan_lines(
        reader,
        config,
        move |line_number| want_target.get() == Some(line_number),
        move |bytes, line_number| {
            if callback_target.get() == Some(line_number) {
                let outcome = on_line(bytes, line_number);
                callback_target.set(targets.next());
                if callback_target.get().is_none() {
                    return LineOutcome::Stop;
                }
                outcome
            } else {
                LineOutcome::Continue
            }
        },
    )?;

    Ok(())
}
