// Re-reads each input file once, in selective mode, writing survivors (trie
// winners plus carry-over passthrough lines) to the output file in ascending
// original line-number order.
//
// Grounded on original_source/src/pfb_prune.c (pfb_write_csv,
// write_pfb_csv_callback) and rw_pfb_csv.c's selective-read contract, here
// realized as `line_reader::read_selected_lines`.

use std::io::{BufWriter, Write};

use crate::consolidate::PerFileLines;
use crate::context::FileContext;
use crate::error::PruneError;
use crate::line_reader::{read_selected_lines, LineOutcome, LineReaderConfig};

/// Re-read `ctx.input_path`, writing every line named in `lines` to
/// `ctx.output_path`, each followed by a single `\n`. Lines are written in
/// the order `lines` is sorted (ascending).
pub fn emit_file(
    ctx: &mut FileContext,
    lines: &PerFileLines,
    config: &LineReaderConfig,
    silent: bool,
) -> Result<(), PruneError> {
    let targets = lines.as_slice();
    if targets.is_empty() {
        // Still produce an (empty) output file so the file count matches.
        ctx.create_output()?;
        ctx.close();
        if !silent {
            log::info!("WRITE: {} (0 lines)", ctx.output_path.display());
        }
        return Ok(());
    }

    let input = ctx.open_input()?;
    let output = ctx.create_output()?;
    let mut writer = BufWriter::new(output);
    let input_path = ctx.input_path.clone();

    let mut io_err: Option<std::io::Error> = None;
    read_selected_lines(input, config, targets.iter().copied(), |bytes, _line| {
        if let Err(e) = writer.write_all(bytes).and_then(|_| writer.write_all(b"\n")) {
            io_err = Some(e);
            return LineOutcome::Stop;
        }
        LineOutcome::Continue
    })
    .map_err(|e| PruneError::io(input_path.clone(), e))?;

    if let Some(e) = io_err {
        return Err(PruneError::io(ctx.output_path.clone(), e));
    }

    writer
        .flush()
        .map_err(|e| PruneError::io(ctx.output_path.clone(), e))?;
    ctx.close();

    if !silent {
        log::info!(
            "WRITE: {} ({} lines)",
            ctx.output_path.display(),
            targets.len()
        );
    }
    Ok(())
}
