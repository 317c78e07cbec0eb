//! The reducer: rebuild one transposed line from an unordered group

use super::map::DELIMITER;
use super::types::{CellDescriptor, Group, OutputRecord};
use crate::error::{PivotError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How long a reconstructed line is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SizingPolicy {
    /// Only as long as the highest row index present in the group.
    /// Rows missing at the end of a column contribute no trailing fields.
    #[default]
    Sparse,
    /// Exactly `total_rows` fields, holes filled with empty fields
    Padded { total_rows: usize },
}

/// Reassemble one column of the source table into an output line
///
/// Each member is placed at its `original_row_index`. Rows with no member
/// below the highest index present become empty fields; nothing is added
/// after the highest index. Member order does not affect the result. If
/// two members claim the same row the later one wins; use
/// [`reduce_group`] to reject that instead.
///
/// # Examples
///
/// ```
/// use csv_pivot::transpose::{reduce, CellDescriptor};
///
/// let members = vec![
///     CellDescriptor::new(3, "Tracy"),
///     CellDescriptor::new(0, "Name"),
///     CellDescriptor::new(2, "Suse"),
///     CellDescriptor::new(1, "Dan"),
/// ];
/// assert_eq!(reduce(0, &members).text, "Name,Dan,Suse,Tracy");
/// ```
pub fn reduce(column_key: usize, members: &[CellDescriptor]) -> OutputRecord {
    // TODO: the sparse width silently drops trailing short rows; switch the
    // default to Padded once callers always know the row count.
    let width = sparse_width(members);

    OutputRecord::new(column_key, join_slots(&place(members, width)))
}

/// One past the highest row index among `members`
fn sparse_width(members: &[CellDescriptor]) -> usize {
    members
        .iter()
        .map(|m| m.original_row_index.saturating_add(1))
        .max()
        .unwrap_or(0)
}

/// Reassemble a column padded to an explicit row count
///
/// Fails when a member sits at or beyond `total_rows`.
pub fn reduce_padded(
    column_key: usize,
    members: &[CellDescriptor],
    total_rows: usize,
) -> Result<OutputRecord> {
    if let Some(m) = members.iter().find(|m| m.original_row_index >= total_rows) {
        return Err(PivotError::row_out_of_range(
            column_key,
            m.original_row_index,
            total_rows,
        ));
    }

    Ok(OutputRecord::new(
        column_key,
        join_slots(&place(members, total_rows)),
    ))
}

/// Checked reduction of a group produced by a shuffle collaborator
///
/// Rejects groups that could not have come from a correct shuffle: a
/// group without members, or two cells for the same row.
pub fn reduce_group(group: &Group, policy: SizingPolicy) -> Result<OutputRecord> {
    if group.is_empty() {
        return Err(PivotError::empty_group(group.key));
    }

    let mut seen = HashSet::with_capacity(group.len());
    for member in &group.members {
        if !seen.insert(member.original_row_index) {
            return Err(PivotError::duplicate_row(
                group.key,
                member.original_row_index,
            ));
        }
    }

    match policy {
        SizingPolicy::Sparse => Ok(reduce(group.key, &group.members)),
        SizingPolicy::Padded { total_rows } => {
            reduce_padded(group.key, &group.members, total_rows)
        }
    }
}

fn place(members: &[CellDescriptor], width: usize) -> Vec<Option<&str>> {
    let mut slots = vec![None; width];
    for member in members {
        if let Some(slot) = slots.get_mut(member.original_row_index) {
            *slot = Some(member.content.as_str());
        }
    }
    slots
}

fn join_slots(slots: &[Option<&str>]) -> String {
    let mut line = String::new();
    for (i, slot) in slots.iter().enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(slot.unwrap_or_default());
    }
    line
}
