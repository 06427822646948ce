use super::types::{RankingOrder, RankingRow};

/// Decide whether the leaders are tied closely enough to re-rank by win ratio.
///
/// The check only looks at the first two rows: both must have the same,
/// nonzero number of wins. Tables with fewer than two players never qualify.
pub fn needs_tie_break(rows: &[RankingRow]) -> bool {
    match rows {
        [first, second, ..] => first.wins != 0 && first.wins == second.wins,
        _ => false,
    }
}

/// The order a second read should use after looking at the base ranking,
/// or `None` when the base ranking already stands.
pub fn follow_up_order(base: &[RankingRow]) -> Option<RankingOrder> {
    needs_tie_break(base).then_some(RankingOrder::WinRatio)
}
