//! Records flowing between the mapper, the shuffle and the reducer

use serde::{Deserialize, Serialize};

/// One row of the source table, as produced by an input reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub index: usize,
    pub text: String,
}

impl InputRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// A cell's text together with the row it came from
///
/// The row index is what lets the reducer restore ordering after the
/// shuffle has thrown it away.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellDescriptor {
    pub original_row_index: usize,
    pub content: String,
}

impl CellDescriptor {
    pub fn new(original_row_index: usize, content: impl Into<String>) -> Self {
        Self {
            original_row_index,
            content: content.into(),
        }
    }
}

/// Mapper output: a cell keyed by its original column index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedPair {
    pub key: usize,
    pub value: CellDescriptor,
}

/// Every cell emitted for one column, in no particular order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub key: usize,
    pub members: Vec<CellDescriptor>,
}

impl Group {
    pub fn new(key: usize, members: Vec<CellDescriptor>) -> Self {
        Self { key, members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// One line of the transposed table; `index` is the original column index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub index: usize,
    pub text: String,
}

impl OutputRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}
