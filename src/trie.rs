// The label-wise domain trie with match-strength subsumption.
//
// Grounded on original_source/src/domaintree.c (insert_Domain,
// ctor_DomainTree, transfer_DomainInfo, free_DomainTree). Children are kept
// in a `HashMap<Box<[u8]>, TrieNode>` per level rather than the original's
// bespoke hash table (the teacher's core/strategy modules lean on
// `std::collections::HashMap` throughout rather than hand-rolling one).
//
// Descent is iterative, not recursive: the original walks labels with
// per-label recursion and no depth guard. A domain here is bounded by its
// own label count, but an adversarial input with thousands of labels in one
// field should not be able to blow the call stack, so both insertion and
// the consolidation drain walk with an explicit loop/stack instead.

use std::collections::HashMap;

use crate::error::PruneError;
use crate::strength::MatchStrength;

/// Identifies which input file a record originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

/// The terminal payload stored at a trie node.
#[derive(Debug, Clone)]
pub struct DomainRecord {
    pub domain: Box<[u8]>,
    pub file: FileId,
    pub line: u64,
    pub strength: MatchStrength,
}

#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<Box<[u8]>, TrieNode>,
    record: Option<DomainRecord>,
}

impl TrieNode {
    fn leaf(record: DomainRecord) -> TrieNode {
        TrieNode {
            children: HashMap::new(),
            record: Some(record),
        }
    }

    fn empty() -> TrieNode {
        TrieNode {
            children: HashMap::new(),
            record: None,
        }
    }
}

/// Outcome of a single insertion attempt, useful for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Replaced,
    SkippedDominated,
    SkippedDuplicate,
}

#[derive(Debug, Default)]
pub struct DomainTrie {
    root: HashMap<Box<[u8]>, TrieNode>,
}

/// Build a fresh chain of singleton nodes for the remaining labels, with
/// `record` installed on the deepest one.
fn build_chain(remaining: &[Box<[u8]>], record: DomainRecord) -> TrieNode {
    let mut node = TrieNode::leaf(record);
    for key in remaining.iter().rev() {
        let mut parent = TrieNode::empty();
        parent.children.insert(key.clone(), node);
        node = parent;
    }
    node
}

impl DomainTrie {
    pub fn new() -> DomainTrie {
        DomainTrie::default()
    }

    /// Insert a domain record, keyed by its TLD-first label sequence.
    ///
    /// Preconditions enforced here: `strength` must be `Weak` or `Full`, and
    /// `keys` must be non-empty. Both violations are refused with
    /// `PruneError::TrieRejection`.
    pub fn insert(
        &mut self,
        keys: &[Box<[u8]>],
        record: DomainRecord,
    ) -> Result<InsertOutcome, PruneError> {
        if !record.strength.is_insertable() {
            return Err(PruneError::TrieRejection {
                reason: format!("strength {:?} is not insertable", record.strength),
            });
        }
        if keys.is_empty() {
            return Err(PruneError::TrieRejection {
                reason: "domain has no labels".to_string(),
            });
        }

        let n = keys.len();
        let mut map = &mut self.root;

        for i in 0..n {
            let is_last = i == n - 1;

            use std::collections::hash_map::Entry;
            match map.entry(keys[i].clone()) {
                Entry::Vacant(v) => {
                    let node = build_chain(&keys[i + 1..], record);
                    v.insert(node);
                    return Ok(InsertOutcome::Inserted);
                }
                Entry::Occupied(o) => {
                    let node = o.into_mut();

                    if let Some(existing) = node.record.as_ref() {
                        if existing.strength == MatchStrength::Full {
                            return Ok(InsertOutcome::SkippedDominated);
                        }

                        if is_last {
                            return if record.strength > existing.strength {
                                node.children.clear();
                                node.record = Some(record);
                                Ok(InsertOutcome::Replaced)
                            } else {
                                Ok(InsertOutcome::SkippedDuplicate)
                            };
                        }
                        // WEAK record, inbound strictly deeper: descend,
                        // keeping this node's own record in place.
                    } else if is_last {
                        if record.strength == MatchStrength::Full {
                            node.children.clear();
                        }
                        node.record = Some(record);
                        return Ok(InsertOutcome::Inserted);
                    }

                    map = &mut node.children;
                }
            }
        }

        unreachable!("label count checked non-empty above")
    }

    /// Destructively drain every surviving record out of the trie,
    /// depth-first. Order among siblings is unspecified.
    pub fn drain_records(mut self) -> Vec<DomainRecord> {
        let mut out = Vec::new();
        let mut stack: Vec<TrieNode> = Vec::new();

        for (_, node) in self.root.drain() {
            stack.push(node);
        }

        while let Some(mut node) = stack.pop() {
            for (_, child) in node.children.drain() {
                stack.push(child);
            }
            if let Some(record) = node.record.take() {
                out.push(record);
            }
        }

        out
    }
}
