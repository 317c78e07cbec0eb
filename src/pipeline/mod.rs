//! Collaborators around the pure transform: where rows come from, how
//! pairs are grouped, and the harness that runs map, shuffle and reduce.

pub mod driver;
pub mod grouper;
pub mod reader;
pub mod sample;

pub use driver::{transpose_lines, RunStats, TransposeRun, Transposer};
pub use grouper::{Grouper, KeyGrouper, ShuffledGrouper};
pub use reader::{InputReader, LineReader, MemoryReader};
pub use sample::{sample_table, SAMPLE_ROWS};
