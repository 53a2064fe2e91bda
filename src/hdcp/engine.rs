use std::ops::RangeInclusive;

use crate::model::{RecentWindow, RoundResult, WINDOW_CAPACITY};

/// Fewest sanity-filtered rounds before an index is computable.
pub const MIN_VALID_ROUNDS: usize = 5;

const SCORE_RANGE: RangeInclusive<i64> = 18..=200;
const PAR_RANGE: RangeInclusive<i64> = 18..=100;
const INDEX_RANGE: RangeInclusive<f64> = -30.0..=50.0;

/// A round participates in the handicap computation only when both score
/// and par are present and plausible for a full disc-golf round.
#[must_use]
pub fn passes_sanity_filter(round: &RoundResult) -> bool {
    match (round.score, round.par) {
        (Some(score), Some(par)) => SCORE_RANGE.contains(&score) && PAR_RANGE.contains(&par),
        _ => false,
    }
}

#[must_use]
pub fn valid_diffs(window: &RecentWindow) -> Vec<f64> {
    window
        .rounds()
        .iter()
        .take(WINDOW_CAPACITY)
        .filter(|round| passes_sanity_filter(round))
        .filter_map(|round| round.diff())
        .map(|diff| diff as f64)
        .collect()
}

/// Rounds in the window that survive the sanity filter. Callers use this
/// to tell "no data" apart from "not enough rounds yet".
#[must_use]
pub fn valid_count(window: &RecentWindow) -> usize {
    window
        .rounds()
        .iter()
        .take(WINDOW_CAPACITY)
        .filter(|round| passes_sanity_filter(round))
        .count()
}

/// Mean strokes-over-par across the sanity-filtered window, rounded to one
/// decimal. `None` when fewer than `MIN_VALID_ROUNDS` rounds survive the
/// filter, or when the rounded mean lands outside the plausible index
/// range (corrupted window data).
#[must_use]
pub fn compute_index(window: &RecentWindow) -> Option<f64> {
    let diffs = valid_diffs(window);
    if diffs.len() < MIN_VALID_ROUNDS {
        return None;
    }

    let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
    let rounded = round_to_tenth(mean);
    if rounded.is_nan() || !INDEX_RANGE.contains(&rounded) {
        return None;
    }
    Some(rounded)
}

#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Prepend-and-truncate insertion. The new result always lands at the
/// front; anything past `WINDOW_CAPACITY` falls off. No validation here,
/// the sanity filter applies at computation time only.
#[must_use]
pub fn record_round(window: &RecentWindow, result: RoundResult) -> RecentWindow {
    let mut rounds = Vec::with_capacity(window.len() + 1);
    rounds.push(result);
    rounds.extend(window.rounds().iter().cloned());
    RecentWindow::from_rounds(rounds)
}
