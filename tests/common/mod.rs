// Shared fixtures; not every test binary uses every helper.
#![allow(dead_code)]

use chrono::NaiveDate;
use rusty_discs::db::SqliteStore;
use rusty_discs::model::{RecentWindow, RoundResult};

pub fn setup_test_store() -> SqliteStore {
    SqliteStore::open(":memory:").expect("in-memory sqlite should open")
}

pub fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, n).expect("valid day of june")
}

/// A sane 18-hole round `diff` strokes over (or under) a par of 54.
pub fn round_with_diff(diff: i64, n: u32) -> RoundResult {
    RoundResult::new(54 + diff, 54, "Meadow Ridge", day(n))
}

/// Window ordered newest first: `diffs[0]` is the most recent round and
/// gets the earliest day number, matching the slice order.
pub fn window_from_diffs(diffs: &[i64]) -> RecentWindow {
    let rounds = diffs
        .iter()
        .enumerate()
        .map(|(i, &diff)| round_with_diff(diff, (i as u32 % 28) + 1))
        .collect();
    RecentWindow::from_rounds(rounds)
}
