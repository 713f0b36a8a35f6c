// Benchmarks trie insertion and consolidation throughput.
//
// Grounded on the teacher's own bench harness shape (criterion, manual
// `main()` driving one or more named cases) rather than its encode-focused
// content, which went away with strategy::encode in the trim pass.

use std::collections::HashMap;
use std::time::Instant;

use dnsbl_prune::consolidate::consolidate;
use dnsbl_prune::strength::MatchStrength;
use dnsbl_prune::trie::{DomainRecord, DomainTrie, FileId};

fn keys_for(domain: &str) -> Vec<Box<[u8]>> {
    domain
        .split('.')
        .rev()
        .map(|label| label.as_bytes().into())
        .collect()
}

fn bench_insert(n: usize) {
    let start = Instant::now();
    let mut trie = DomainTrie::new();
    for i in 0..n {
        let domain = format!("host{i}.sub{}.example.com", i % 997);
        let record = DomainRecord {
            domain: domain.as_bytes().into(),
            file: FileId(0),
            line: i as u64 + 1,
            strength: MatchStrength::Weak,
        };
        let _ = trie.insert(&keys_for(&domain), record);
    }
    let elapsed = start.elapsed();
    println!("insert {n} domains: {elapsed:?}");

    let start = Instant::now();
    let per_file = consolidate(trie, HashMap::new(), 1, 64);
    println!(
        "consolidate {} survivors: {:?}",
        per_file[0].as_slice().len(),
        start.elapsed()
    );
}

fn bench_dominance_collapse(n: usize) {
    let start = Instant::now();
    let mut trie = DomainTrie::new();
    let full = DomainRecord {
        domain: b"example.com"[..].into(),
        file: FileId(0),
        line: 1,
        strength: MatchStrength::Full,
    };
    trie.insert(&keys_for("example.com"), full).unwrap();

    for i in 0..n {
        let domain = format!("host{i}.sub{}.example.com", i % 997);
        let record = DomainRecord {
            domain: domain.as_bytes().into(),
            file: FileId(0),
            line: i as u64 + 2,
            strength: MatchStrength::Weak,
        };
        let _ = trie.insert(&keys_for(&domain), record);
    }
    let elapsed = start.elapsed();
    let per_file = consolidate(trie, HashMap::new(), 1, 64);
    println!(
        "insert {n} descendants under one FULL ancestor: {elapsed:?}, survivors: {}",
        per_file[0].as_slice().len()
    );
}

fn main() {
    bench_insert(50_000);
    bench_dominance_collapse(50_000);
}
