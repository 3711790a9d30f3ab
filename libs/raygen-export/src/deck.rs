//! # Deck Writer
//!
//! Emits records as the solver's array-literal text block.

use crate::record::PoseRecord;
use glam::DVec2;

/// Rough rendered size of one record, used to pre-size the buffer.
const RECORD_SIZE_HINT: usize = 48;

/// Builds records for a sequence of sample points.
pub fn deck_from_points(points: &[DVec2]) -> Vec<PoseRecord> {
    points.iter().map(|p| PoseRecord::new(*p)).collect()
}

/// Renders records into the deck envelope.
///
/// The deck opens with `[` on the same line as the first record, carries
/// one `<x> <y> 0 0 0 1;` line per record, and closes with `];` directly
/// after the last record's newline, with no trailing newline. An empty
/// record list produces the bare envelope `[];`.
///
/// The whole block is appended into a single pre-sized buffer in one
/// pass.
///
/// # Example
///
/// ```rust
/// use raygen_export::{write_deck, PoseRecord};
///
/// let records = vec![PoseRecord::from_xy(15.0, 0.0)];
/// assert_eq!(write_deck(&records), "[15 0 0 0 0 1;\n];");
/// ```
pub fn write_deck(records: &[PoseRecord]) -> String {
    let mut deck = String::with_capacity(records.len() * RECORD_SIZE_HINT + 3);
    deck.push('[');
    for record in records {
        deck.push_str(&record.to_string());
        deck.push('\n');
    }
    deck.push_str("];");
    deck
}
