pub mod pairing;
pub mod standings;
pub mod types;

pub use pairing::pair_adjacent;
pub use standings::{follow_up_order, needs_tie_break};
pub use types::{Pairing, PlayerId, RankingOrder, RankingRow};
