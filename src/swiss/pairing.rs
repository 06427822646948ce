use log::warn;

use super::types::{Pairing, RankingRow};

/// Pair neighbours in the ranked table: first with second, third with fourth.
///
/// An odd number of rows produces no pairings at all, not a bye.
pub fn pair_adjacent(rows: &[RankingRow]) -> Vec<Pairing> {
    if rows.len() % 2 != 0 {
        warn!(
            "Cannot pair an odd number of players ({}), returning no pairings",
            rows.len()
        );
        return Vec::new();
    }

    rows.chunks_exact(2)
        .map(|pair| Pairing::from_rows(&pair[0], &pair[1]))
        .collect()
}
