//! The shuffle stage: collect mapper output into per-column groups

use super::types::{EmittedPair, Group};
use std::collections::BTreeMap;

/// Group emitted pairs by key
///
/// Every pair lands in exactly one group. Groups come back in ascending
/// key order and members keep their arrival order, but the reducer does
/// not depend on either.
///
/// # Examples
///
/// ```
/// use csv_pivot::transpose::{group_by_key, map};
///
/// let mut pairs = map(0, "a,b");
/// pairs.extend(map(1, "c"));
///
/// let groups = group_by_key(pairs);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].members.len(), 2);
/// assert_eq!(groups[1].members.len(), 1);
/// ```
pub fn group_by_key(pairs: impl IntoIterator<Item = EmittedPair>) -> Vec<Group> {
    let mut groups: BTreeMap<usize, Vec<_>> = BTreeMap::new();
    for pair in pairs {
        groups.entry(pair.key).or_default().push(pair.value);
    }

    groups
        .into_iter()
        .map(|(key, members)| Group::new(key, members))
        .collect()
}
