//! Markers and per-marker data storage.
//!
//! ## Marker
//!
//! The two symbols a cell can hold, which double as player identities.
//! X always opens a game.
//!
//! ## Score
//!
//! Cumulative win counts indexed by `Marker`. Survives board resets.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A player symbol: X or O.
///
/// Defaults to X, the opening marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[default]
    X,
    O,
}

impl Marker {
    /// Both markers, in turn order.
    pub const ALL: [Marker; 2] = [Marker::X, Marker::O];

    /// The marker that opens every game.
    pub const FIRST: Marker = Marker::X;

    /// Get the other marker.
    ///
    /// ```
    /// use rust_ttt::core::Marker;
    ///
    /// assert_eq!(Marker::X.opponent(), Marker::O);
    /// assert_eq!(Marker::O.opponent(), Marker::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Dense index (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Marker::X => 0,
            Marker::O => 1,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => f.write_str("X"),
            Marker::O => f.write_str("O"),
        }
    }
}

/// Win counts per marker.
///
/// Values only ever grow by one per win, and go back to zero only
/// through `reset`.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Marker, Score};
///
/// let mut score = Score::new();
/// score.record_win(Marker::O);
///
/// assert_eq!(score[Marker::X], 0);
/// assert_eq!(score[Marker::O], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

impl Score {
    /// Create a zeroed score.
    #[must_use]
    pub const fn new() -> Self {
        Self { x: 0, o: 0 }
    }

    /// Get a marker's win count.
    #[must_use]
    pub fn get(&self, marker: Marker) -> u32 {
        self[marker]
    }

    /// Add one win for `marker`.
    pub fn record_win(&mut self, marker: Marker) {
        self[marker] = self[marker].saturating_add(1);
    }

    /// Zero both counts.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total games won by either side.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.x.saturating_add(self.o)
    }

    /// Iterate over (Marker, wins) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Marker, u32)> + '_ {
        Marker::ALL.into_iter().map(|m| (m, self.get(m)))
    }
}

impl Index<Marker> for Score {
    type Output = u32;

    fn index(&self, marker: Marker) -> &Self::Output {
        match marker {
            Marker::X => &self.x,
            Marker::O => &self.o,
        }
    }
}

impl IndexMut<Marker> for Score {
    fn index_mut(&mut self, marker: Marker) -> &mut Self::Output {
        match marker {
            Marker::X => &mut self.x,
            Marker::O => &mut self.o,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {} | O: {}", self[Marker::X], self[Marker::O])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_basics() {
        assert_eq!(Marker::X.index(), 0);
        assert_eq!(Marker::O.index(), 1);
        assert_eq!(format!("{}", Marker::X), "X");
        assert_eq!(Marker::FIRST, Marker::X);
    }

    #[test]
    fn test_opponent_is_involution() {
        for m in Marker::ALL {
            assert_ne!(m.opponent(), m);
            assert_eq!(m.opponent().opponent(), m);
        }
    }

    #[test]
    fn test_score_new_is_zero() {
        let score = Score::new();
        assert_eq!(score[Marker::X], 0);
        assert_eq!(score[Marker::O], 0);
        assert_eq!(score.total(), 0);
        assert_eq!(score, Score::default());
    }

    #[test]
    fn test_score_record_and_reset() {
        let mut score = Score::new();
        score.record_win(Marker::X);
        score.record_win(Marker::X);
        score.record_win(Marker::O);

        assert_eq!(score.get(Marker::X), 2);
        assert_eq!(score.get(Marker::O), 1);
        assert_eq!(score.total(), 3);

        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_score_saturates() {
        let mut score = Score::new();
        score[Marker::X] = u32::MAX;
        score[Marker::O] = 1;

        score.record_win(Marker::X);
        assert_eq!(score[Marker::X], u32::MAX);
        assert_eq!(score.total(), u32::MAX);
    }

    #[test]
    fn test_score_iter() {
        let mut score = Score::new();
        score[Marker::O] = 4;

        let pairs: Vec<_> = score.iter().collect();
        assert_eq!(pairs, vec![(Marker::X, 0), (Marker::O, 4)]);
    }

    #[test]
    fn test_score_display() {
        let mut score = Score::new();
        score.record_win(Marker::X);
        assert_eq!(score.to_string(), "X: 1 | O: 0");
    }

    #[test]
    fn test_score_json_keys_are_markers() {
        let mut score = Score::new();
        score.record_win(Marker::X);
        assert_eq!(serde_json::to_string(&score).unwrap(), r#"{"X":1,"O":0}"#);
    }

    #[test]
    fn test_score_serialization() {
        let mut score = Score::new();
        score.record_win(Marker::O);
        let json = serde_json::to_string(&score).unwrap();
        let deserialized: Score = serde_json::from_str(&json).unwrap();
        assert_eq!(score, deserialized);
    }
}
