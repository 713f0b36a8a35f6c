// Drains the trie into per-file, ascending line-number vectors and merges
// in each file's carry-over (REGEX passthrough) lines.
//
// Grounded on original_source/src/pfb_prune.c (pfb_consolidate,
// collect_DomainInfo, transfer_carry_over, sort_LineNumbers): transfer every
// surviving record out of the trie into a flat per-file array, append the
// file's carry-over line numbers, then sort each array ascending.

use std::collections::HashMap;

use crate::trie::{DomainTrie, FileId};

/// Line numbers of REGEX (passthrough) lines for one input file, in
/// encounter order until merged.
#[derive(Debug, Default)]
pub struct CarryOverSet {
    lines: Vec<u64>,
}

impl CarryOverSet {
    pub fn push(&mut self, line: u64) {
        debug_assert!(line > 0);
        self.lines.push(line);
    }
}

/// Sorted, ascending, deduplicated-by-construction line numbers to emit for
/// one input file.
#[derive(Debug, Default)]
pub struct PerFileLines {
    lines: Vec<u64>,
}

impl PerFileLines {
    pub fn new(lines: Vec<u64>) -> PerFileLines {
        PerFileLines { lines }
    }

    fn with_capacity(capacity: usize) -> PerFileLines {
        PerFileLines {
            lines: Vec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.lines
    }
}

/// Drain `trie`, merge in `carry_over`, and produce one sorted
/// [`PerFileLines`] per `FileId` in `0..file_count`.
///
/// `initial_capacity` pre-sizes each file's line vector; past that, growth
/// falls back to `Vec`'s own amortized doubling rather than the
/// original's manual `growth_increment` reallocation step.
pub fn consolidate(
    trie: DomainTrie,
    mut carry_over: HashMap<FileId, CarryOverSet>,
    file_count: u32,
    initial_capacity: usize,
) -> Vec<PerFileLines> {
    let mut per_file: Vec<PerFileLines> = (0..file_count)
        .map(|_| PerFileLines::with_capacity(initial_capacity))
        .collect();

    for record in trie.drain_records() {
        let idx = record.file.0 as usize;
        if let Some(bucket) = per_file.get_mut(idx) {
            bucket.lines.push(record.line);
        }
    }

    for (file, carry) in carry_over.drain() {
        let idx = file.0 as usize;
        if let Some(bucket) = per_file.get_mut(idx) {
            bucket.lines.extend(carry.lines);
        }
    }

    for bucket in &mut per_file {
        bucket.lines.sort_unstable();
    }

    per_file
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::MatchStrength;
    use crate::trie::DomainRecord;

    fn keys(labels: &[&str]) -> Vec<Box<[u8]>> {
        labels.iter().map(|s| s.as_bytes().into()).collect()
    }

    #[test]
    fn merges_trie_survivors_and_carry_over_sorted() {
        let mut trie = DomainTrie::new();
        trie.insert(
            &keys(&["com", "a"]),
            DomainRecord {
                domain: b"a.com"[..].into(),
                file: FileId(0),
                line: 5,
                strength: MatchStrength::Weak,
            },
        )
        .unwrap();
        trie.insert(
            &keys(&["com", "b"]),
            DomainRecord {
                domain: b"b.com"[..].into(),
                file: FileId(0),
                line: 2,
                strength: MatchStrength::Weak,
            },
        )
        .unwrap();

        let mut carry_over = HashMap::new();
        let mut co = CarryOverSet::default();
        co.push(3);
        carry_over.insert(FileId(0), co);

        let result = consolidate(trie, carry_over, 1, 64);
        assert_eq!(result[0].as_slice(), &[2, 3, 5]);
    }

    #[test]
    fn files_without_survivors_are_empty() {
        let trie = DomainTrie::new();
        let result = consolidate(trie, HashMap::new(), 2, 64);
        assert!(result[0].as_slice().is_empty());
        assert!(result[1].as_slice().is_empty());
    }
}
