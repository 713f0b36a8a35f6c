// Core byte-level primitives shared by the line reader and field splitter.

pub mod scanner;

pub use scanner::*;
