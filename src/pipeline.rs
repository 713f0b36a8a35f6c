// Top-level orchestration: ingest every file into one shared trie, drain it,
// then emit survivors back out to each file's output.
//
// Grounded on original_source/src/main.c's sequencing
// (pfb_init_contexts → read every file → pfb_consolidate → pfb_write_csv →
// pfb_free_contexts).

use std::collections::HashMap;

use crate::config::PruneConfig;
use crate::consolidate::{consolidate, CarryOverSet, PerFileLines};
use crate::context::FileContext;
use crate::csv_line::CsvLine;
use crate::emit::emit_file;
use crate::error::PruneError;
use crate::label::{label_bytes, split_labels};
use crate::line_reader::{for_each_line, LineOutcome};
use crate::strength::MatchStrength;
use crate::trie::{DomainRecord, DomainTrie, FileId};

#[derive(Debug, Default)]
pub struct PipelineReport {
    pub files_processed: usize,
    pub malformed_lines: u64,
    pub rejected_domains: u64,
}

pub fn run(config: &PruneConfig) -> Result<PipelineReport, PruneError> {
    config.validate()?;

    let mut contexts: Vec<FileContext> = config
        .input_files
        .iter()
        .enumerate()
        .map(|(i, path)| FileContext::new(FileId(i as u32), path.clone(), &config.output_ext))
        .collect();

    let mut trie = DomainTrie::new();
    let mut carry_over: HashMap<FileId, CarryOverSet> = HashMap::new();
    let mut report = PipelineReport::default();

    for ctx in &mut contexts {
        ingest_file(ctx, config, &mut trie, &mut carry_over, &mut report)?;
    }

    let per_file = consolidate_with_capacity(trie, carry_over, contexts.len() as u32, config);

    emit_all(&mut contexts, &per_file, config)?;

    report.files_processed = contexts.len();
    Ok(report)
}

fn consolidate_with_capacity(
    trie: DomainTrie,
    carry_over: HashMap<FileId, CarryOverSet>,
    file_count: u32,
    config: &PruneConfig,
) -> Vec<PerFileLines> {
    // growth_increment (spec.md §6's realloc-size override) has no
    // distinct effect beyond what Vec's own amortized growth already
    // provides past the initial allocation.
    consolidate(trie, carry_over, file_count, config.initial_capacity)
}

fn emit_all(
    contexts: &mut [FileContext],
    per_file: &[PerFileLines],
    config: &PruneConfig,
) -> Result<(), PruneError> {
    if config.parallel_emit {
        use rayon::prelude::*;
        contexts
            .par_iter_mut()
            .zip(per_file.par_iter())
            .try_for_each(|(ctx, lines)| emit_file(ctx, lines, &config.line_reader, config.silent))
    } else {
        for (ctx, lines) in contexts.iter_mut().zip(per_file.iter()) {
            emit_file(ctx, lines, &config.line_reader, config.silent)?;
        }
        Ok(())
    }
}

fn ingest_file(
    ctx: &mut FileContext,
    config: &PruneConfig,
    trie: &mut DomainTrie,
    carry_over: &mut HashMap<FileId, CarryOverSet>,
    report: &mut PipelineReport,
) -> Result<(), PruneError> {
    let input = ctx.open_input()?;
    let file_id = ctx.id;
    let input_path = ctx.input_path.clone();

    let mut malformed = 0u64;
    let mut rejected = 0u64;

    let lines_read = for_each_line(input, &config.line_reader, |bytes, line_number| {
        let csv = CsvLine::parse(bytes);
        let strength = MatchStrength::from_field(csv.strength_field());

        match strength {
            MatchStrength::Regex => {
                carry_over.entry(file_id).or_default().push(line_number);
            }
            MatchStrength::Bogus => {
                malformed += 1;
                log::warn!(
                    "{}:{}: malformed match-strength field",
                    input_path.display(),
                    line_number
                );
            }
            MatchStrength::NotSet => {}
            MatchStrength::Weak | MatchStrength::Full => {
                match csv.domain().filter(|d| !d.is_empty()) {
                    None => {
                        rejected += 1;
                        log::warn!(
                            "{}:{}: domain field missing or empty",
                            input_path.display(),
                            line_number
                        );
                    }
                    Some(domain) => match split_labels(domain) {
                        None => {
                            rejected += 1;
                            log::warn!(
                                "{}:{}: domain rejected by label splitter",
                                input_path.display(),
                                line_number
                            );
                        }
                        Some(labels) => {
                            let keys: Vec<Box<[u8]>> = labels
                                .iter()
                                .map(|l| label_bytes(domain, *l).into())
                                .collect();
                            let record = DomainRecord {
                                domain: domain.into(),
                                file: file_id,
                                line: line_number,
                                strength,
                            };
                            if let Err(e) = trie.insert(&keys, record) {
                                log::debug!(
                                    "{}:{}: {}",
                                    input_path.display(),
                                    line_number,
                                    e
                                );
                            }
                        }
                    },
                }
            }
        }

        LineOutcome::Continue
    })
    .map_err(|e| PruneError::io(input_path.clone(), e))?;

    if !config.silent {
        log::info!(
            "READ: {} ({} lines, {} malformed, {} rejected)",
            input_path.display(),
            lines_read,
            malformed,
            rejected
        );
    }

    report.malformed_lines += malformed;
    report.rejected_domains += rejected;
    Ok(())
}
