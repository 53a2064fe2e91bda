use chrono::NaiveDate;

use crate::hdcp::engine::{self, MIN_VALID_ROUNDS};
use crate::model::{RecentWindow, RoundResult};

#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    /// How many of the most recent rounds fed this point.
    pub rounds_counted: usize,
    pub index: f64,
    /// Date of the oldest round inside the prefix.
    pub date: NaiveDate,
}

/// Growing-prefix handicap trend: one candidate point per prefix length
/// from `min(5, len)` up to the full window, newest-first prefixes,
/// skipping lengths where no index is computable. Not a moving average:
/// later points always see strictly more rounds.
#[derive(Clone, Debug)]
pub struct TrendIter<'a> {
    rounds: &'a [RoundResult],
    next_len: usize,
}

#[must_use]
pub fn trend(window: &RecentWindow) -> TrendIter<'_> {
    let rounds = window.rounds();
    TrendIter {
        rounds,
        next_len: MIN_VALID_ROUNDS.min(rounds.len()),
    }
}

impl Iterator for TrendIter<'_> {
    type Item = TrendPoint;

    fn next(&mut self) -> Option<TrendPoint> {
        while self.next_len <= self.rounds.len() && !self.rounds.is_empty() {
            let len = self.next_len;
            self.next_len += 1;

            let prefix = RecentWindow::from_rounds(self.rounds[..len].to_vec());
            if let Some(index) = engine::compute_index(&prefix) {
                return Some(TrendPoint {
                    rounds_counted: len,
                    index,
                    date: self.rounds[len - 1].date,
                });
            }
        }
        None
    }
}
