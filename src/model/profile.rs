use serde::{Deserialize, Serialize};

use crate::hdcp::engine;
use crate::model::round::{RecentWindow, RoundResult};

/// Aggregates cached alongside the window. All of them are defined over
/// the *current* window contents, not all-time history, so truncation of
/// the window moves them too.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProfileStats {
    pub handicap: Option<f64>,
    pub total_rounds: i64,
    pub best_score: Option<i64>,
    pub avg_score: Option<f64>,
}

impl ProfileStats {
    #[must_use]
    pub fn from_window(window: &RecentWindow) -> Self {
        let sane_scores: Vec<i64> = window
            .rounds()
            .iter()
            .filter(|round| engine::passes_sanity_filter(round))
            .filter_map(|round| round.score)
            .collect();

        let best_score = sane_scores.iter().copied().min();
        let avg_score = if sane_scores.is_empty() {
            None
        } else {
            let mean = sane_scores.iter().sum::<i64>() as f64 / sane_scores.len() as f64;
            Some(engine::round_to_tenth(mean))
        };

        Self {
            handicap: engine::compute_index(window),
            total_rounds: window.len() as i64,
            best_score,
            avg_score,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub window: RecentWindow,
    pub stats: ProfileStats,
}

impl PlayerProfile {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            window: RecentWindow::new(),
            stats: ProfileStats::default(),
        }
    }

    /// The "round complete" mutation: window prepend-and-truncate plus a
    /// full stats recompute, as one step. Nothing else writes the window.
    pub fn apply_round(&mut self, result: RoundResult) {
        self.window = engine::record_round(&self.window, result);
        self.stats = ProfileStats::from_window(&self.window);
    }

    /// All-or-nothing history wipe: the window and every cached stat go
    /// together. A cleared window with a stale index is a bug.
    pub fn reset(&mut self) {
        self.window = RecentWindow::new();
        self.stats = ProfileStats::default();
    }
}
