//! Grouping of fragments into visual rows.
//!
//! Rows are clustered on the y axis only. The first fragment seen at a given
//! height becomes the row's anchor and later fragments within the tolerance
//! join it, so grouping depends on the order the text layer emits fragments.

use std::cmp::Ordering;

use crate::layout::fragment::{Row, TextFragment};

/// Group fragments into rows in reading order (top of page first).
///
/// # Arguments
///
/// * `fragments` - The page's fragments, in text-layer order
/// * `tolerance` - Maximum (exclusive) y distance to a row's anchor
///
/// # Examples
///
/// ```
/// use routine_extract::layout::{group_rows, TextFragment};
///
/// let fragments = vec![
///     TextFragment::new("Room", 120.0, 698.0),
///     TextFragment::new("Day", 10.0, 700.0),
///     TextFragment::new("MON", 10.0, 680.0),
/// ];
///
/// let rows = group_rows(fragments, 5.0);
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].text(), "Day Room");
/// ```
pub fn group_rows(fragments: Vec<TextFragment>, tolerance: f32) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();

    for fragment in fragments {
        match rows
            .iter_mut()
            .find(|row| (row.y - fragment.y).abs() < tolerance)
        {
            Some(row) => row.fragments.push(fragment),
            None => {
                let mut row = Row::new(fragment.y);
                row.fragments.push(fragment);
                rows.push(row);
            },
        }
    }

    for row in &mut rows {
        row.fragments
            .sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    }

    rows.sort_by(|a, b| b.y.partial_cmp(&a.y).unwrap_or(Ordering::Equal));
    rows
}
