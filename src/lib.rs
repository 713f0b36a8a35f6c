// dnsbl-prune: collapse domains already covered by a stronger or shorter
// entry out of DNS block-list CSV files, preserving passthrough lines and
// each file's original ordering.

pub mod cli;
pub mod config;
pub mod consolidate;
pub mod context;
pub mod core;
pub mod csv_line;
pub mod emit;
pub mod error;
pub mod label;
pub mod line_reader;
pub mod pipeline;
pub mod strength;
pub mod trie;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;
