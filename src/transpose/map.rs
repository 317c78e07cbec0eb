//! The mapper: one row in, one keyed cell per field out

use super::types::{CellDescriptor, EmittedPair, InputRecord};

/// Field separator for both input and output lines
///
/// Splitting is literal. Quoting and escaping are not recognised, so a
/// field containing a comma is split into several cells.
pub const DELIMITER: char = ',';

/// Split a row into cells keyed by their column position
///
/// A row with `c` cells yields exactly `c` pairs with keys `0..c`, each
/// remembering `row_index`. An empty row still has one (empty) cell.
///
/// # Examples
///
/// ```
/// use csv_pivot::transpose::map;
///
/// let pairs = map(1, "Dan,68,20");
/// assert_eq!(pairs.len(), 3);
/// assert_eq!(pairs[2].key, 2);
/// assert_eq!(pairs[2].value.original_row_index, 1);
/// assert_eq!(pairs[2].value.content, "20");
/// ```
pub fn map(row_index: usize, row_text: &str) -> Vec<EmittedPair> {
    row_text
        .split(DELIMITER)
        .enumerate()
        .map(|(column, cell)| EmittedPair {
            key: column,
            value: CellDescriptor::new(row_index, cell),
        })
        .collect()
}

/// Map an input record
pub fn map_record(record: &InputRecord) -> Vec<EmittedPair> {
    map(record.index, &record.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_header_row() {
        let pairs = map(0, "Name,Time,Score");
        let keys: Vec<usize> = pairs.iter().map(|p| p.key).collect();
        let cells: Vec<&str> = pairs.iter().map(|p| p.value.content.as_str()).collect();

        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(cells, vec!["Name", "Time", "Score"]);
        assert!(pairs.iter().all(|p| p.value.original_row_index == 0));
    }

    #[test]
    fn test_map_empty_line_yields_one_empty_cell() {
        let pairs = map(5, "");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].key, 0);
        assert_eq!(pairs[0].value, CellDescriptor::new(5, ""));
    }

    #[test]
    fn test_map_keeps_empty_fields() {
        let pairs = map(2, "a,,c,");
        let cells: Vec<&str> = pairs.iter().map(|p| p.value.content.as_str()).collect();
        assert_eq!(cells, vec!["a", "", "c", ""]);
    }

    #[test]
    fn test_map_does_not_honour_quotes() {
        // The quoted comma still splits the field
        let pairs = map(0, "\"Smith, J\",42");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].value.content, "\"Smith");
        assert_eq!(pairs[1].value.content, " J\"");
    }

    #[test]
    fn test_map_record_uses_record_index() {
        let record = InputRecord::new(7, "x,y");
        let pairs = map_record(&record);
        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| p.value.original_row_index == 7));
    }
}
