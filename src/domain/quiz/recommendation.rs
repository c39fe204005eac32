//! Recommendation produced from a score tally.

use serde::Serialize;

use super::{ScoreTally, StreamTag};

/// Every stream holding the top score, plus the full tally.
///
/// # Invariants
///
/// - `leaders` is non-empty and every leader is present in `tally`
/// - `leaders` is ordered by the catalog's stream declaration order, so
///   `primary()` is a deterministic tie-break
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    leaders: Vec<StreamTag>,
    top_score: u64,
    tally: ScoreTally,
}

impl Recommendation {
    pub(super) fn new(leaders: Vec<StreamTag>, top_score: u64, tally: ScoreTally) -> Self {
        debug_assert!(!leaders.is_empty());
        Self {
            leaders,
            top_score,
            tally,
        }
    }

    /// All streams tied at the top score.
    pub fn leaders(&self) -> &[StreamTag] {
        &self.leaders
    }

    /// The first-declared leader.
    pub fn primary(&self) -> &StreamTag {
        &self.leaders[0]
    }

    pub fn top_score(&self) -> u64 {
        self.top_score
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    pub fn is_tie(&self) -> bool {
        self.leaders.len() > 1
    }

    pub fn contains(&self, tag: &StreamTag) -> bool {
        self.leaders.contains(tag)
    }
}
