use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many recent rounds a player's profile keeps for handicap purposes.
pub const WINDOW_CAPACITY: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// Total strokes for the round. Absent when the round record is
    /// incomplete; such rounds still occupy a window slot.
    pub score: Option<i64>,
    /// Total par for the round, same optionality as `score`.
    pub par: Option<i64>,
    pub course: String,
    pub date: NaiveDate,
}

impl RoundResult {
    #[must_use]
    pub fn new(score: i64, par: i64, course: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            score: Some(score),
            par: Some(par),
            course: course.into(),
            date,
        }
    }

    #[must_use]
    pub fn diff(&self) -> Option<i64> {
        Some(self.score? - self.par?)
    }
}

/// A player's recent rounds, newest first. The window is a raw history
/// buffer: entries are never reordered, deduplicated, or validated here.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct RecentWindow {
    rounds: Vec<RoundResult>,
}

impl RecentWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a window from rounds already ordered newest first, keeping
    /// at most the first `WINDOW_CAPACITY` entries.
    #[must_use]
    pub fn from_rounds(mut rounds: Vec<RoundResult>) -> Self {
        rounds.truncate(WINDOW_CAPACITY);
        Self { rounds }
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
