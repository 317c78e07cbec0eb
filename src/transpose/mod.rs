//! Pure map/shuffle/reduce functions for transposing a delimited table
//!
//! Row `r`, column `c` of the input becomes row `c`, column `r` of the
//! output. The mapper turns every cell into a pair keyed by its column,
//! the shuffle groups pairs by that key, and the reducer puts each group
//! back into row order. None of these functions hold state or do I/O.

pub mod map;
pub mod reduce;
pub mod shuffle;
pub mod types;

pub use map::{map, map_record, DELIMITER};
pub use reduce::{reduce, reduce_group, reduce_padded, SizingPolicy};
pub use shuffle::group_by_key;
pub use types::{CellDescriptor, EmittedPair, Group, InputRecord, OutputRecord};
