//! Running per-stream score totals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::StreamTag;

/// Accumulated points per stream.
///
/// A stream appears only once a selected option has scored it. Entry order
/// carries no meaning. Totals are `u64` so summing `u32` option weights
/// never clamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTally {
    scores: HashMap<StreamTag, u64>,
}

impl ScoreTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a tally with `points` added to `tag`'s running total.
    pub fn with_points(mut self, tag: &StreamTag, points: u32) -> Self {
        *self.scores.entry(tag.clone()).or_insert(0) += u64::from(points);
        self
    }

    pub fn score(&self, tag: &StreamTag) -> Option<u64> {
        self.scores.get(tag).copied()
    }

    /// Sum of all entries.
    pub fn total(&self) -> u64 {
        self.scores.values().sum()
    }

    pub fn max_score(&self) -> Option<u64> {
        self.scores.values().copied().max()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StreamTag, u64)> {
        self.scores.iter().map(|(tag, &score)| (tag, score))
    }
}

impl FromIterator<(StreamTag, u32)> for ScoreTally {
    fn from_iter<I: IntoIterator<Item = (StreamTag, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tally, (tag, points)| tally.with_points(&tag, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tally = ScoreTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.max_score(), None);
    }

    #[test]
    fn absent_tag_is_initialized_to_points() {
        let tally = ScoreTally::new().with_points(&StreamTag::arts(), 2);
        assert_eq!(tally.score(&StreamTag::arts()), Some(2));
        assert_eq!(tally.score(&StreamTag::science()), None);
    }

    #[test]
    fn repeated_tag_accumulates() {
        let tally = ScoreTally::new()
            .with_points(&StreamTag::science(), 3)
            .with_points(&StreamTag::science(), 2);
        assert_eq!(tally.score(&StreamTag::science()), Some(5));
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn zero_points_still_creates_entry() {
        let tally = ScoreTally::new().with_points(&StreamTag::commerce(), 0);
        assert_eq!(tally.score(&StreamTag::commerce()), Some(0));
        assert!(!tally.is_empty());
    }

    #[test]
    fn collects_duplicates_by_summing() {
        let tally: ScoreTally = [
            (StreamTag::arts(), 3),
            (StreamTag::vocational(), 6),
            (StreamTag::arts(), 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.score(&StreamTag::arts()), Some(6));
        assert_eq!(tally.total(), 12);
    }

    #[test]
    fn large_weights_are_not_clamped() {
        let tally = ScoreTally::new()
            .with_points(&StreamTag::science(), u32::MAX)
            .with_points(&StreamTag::science(), 5);

        assert_eq!(tally.score(&StreamTag::science()), Some(u64::from(u32::MAX) + 5));
        assert_eq!(tally.total(), 4_294_967_300);
    }

    #[test]
    fn serializes_as_flat_map() {
        let tally = ScoreTally::new().with_points(&StreamTag::science(), 12);
        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(json, serde_json::json!({ "science": 12 }));
    }
}
