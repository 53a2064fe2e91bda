mod common;

use common::{day, window_from_diffs};
use rusty_discs::hdcp::trend::{TrendPoint, trend};
use rusty_discs::model::{RecentWindow, RoundResult};

#[test]
fn test5_eight_rounds_yield_four_growing_prefixes() {
    let window = window_from_diffs(&[1, 2, 1, 3, 2, 1, 2, 3]);
    let points: Vec<TrendPoint> = trend(&window).collect();

    assert_eq!(points.len(), 4);
    let lengths: Vec<usize> = points.iter().map(|p| p.rounds_counted).collect();
    assert_eq!(lengths, vec![5, 6, 7, 8]);

    // each point is stamped with the oldest round inside its prefix
    assert_eq!(points[0].date, day(5));
    assert_eq!(points[3].date, day(8));

    // prefix of 5: mean of [1,2,1,3,2] = 1.8
    assert!((points[0].index - 1.8).abs() < f64::EPSILON);
}

#[test]
fn test5_trend_is_restartable() {
    let window = window_from_diffs(&[1, 2, 1, 3, 2, 1]);
    let first: Vec<TrendPoint> = trend(&window).collect();
    let second: Vec<TrendPoint> = trend(&window).collect();
    assert_eq!(first, second);
}

#[test]
fn test5_uncomputable_prefixes_are_skipped() {
    // Six rounds, but the second-newest is junk: the 5-round prefix only
    // has 4 valid rounds, so the trend starts at the full window.
    let mut rounds: Vec<RoundResult> = window_from_diffs(&[1, 2, 1, 3, 2]).rounds().to_vec();
    rounds.insert(1, RoundResult::new(10, 54, "Meadow Ridge", day(9)));
    let window = RecentWindow::from_rounds(rounds);
    assert_eq!(window.len(), 6);

    let points: Vec<TrendPoint> = trend(&window).collect();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].rounds_counted, 6);
    assert!((points[0].index - 1.8).abs() < f64::EPSILON);
}

#[test]
fn test5_short_or_empty_windows_yield_no_points() {
    assert_eq!(trend(&RecentWindow::new()).count(), 0);

    let window = window_from_diffs(&[1, 2, 3]);
    assert_eq!(trend(&window).count(), 0);
}
