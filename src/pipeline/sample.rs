//! Built-in demonstration table

use crate::transpose::InputRecord;

/// Four rows of race results, header first
pub const SAMPLE_ROWS: [&str; 4] = [
    "Name,Time,Score",
    "Dan,68,20",
    "Suse,42,40",
    "Tracy,50,38",
];

/// The demonstration table as input records numbered from zero
pub fn sample_table() -> Vec<InputRecord> {
    SAMPLE_ROWS
        .iter()
        .enumerate()
        .map(|(index, text)| InputRecord::new(index, *text))
        .collect()
}
