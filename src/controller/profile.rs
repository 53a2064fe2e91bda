use ahash::RandomState;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::db::SqliteStore;
use crate::error::AppError;
use crate::hdcp::allowance::{Allowance, recommended_allowance};
use crate::hdcp::display::display_index;
use crate::hdcp::engine;
use crate::hdcp::tier::SkillTier;
use crate::hdcp::trend::{TrendPoint, trend};
use crate::model::{PlayerProfile, RoundResult};

#[derive(Debug)]
pub struct ProfileReport {
    pub profile: PlayerProfile,
    pub tier: SkillTier,
    pub display: String,
    pub trend: Vec<TrendPoint>,
    pub courses: Vec<CourseSummary>,
}

#[derive(Debug)]
pub struct CourseSummary {
    pub course: String,
    pub rounds_played: usize,
    pub best_score: Option<i64>,
}

pub struct MatchupReport {
    pub player_a: PlayerProfile,
    pub player_b: PlayerProfile,
    pub allowance: Allowance,
}

/// Records one completed round and returns the refreshed profile. A round
/// that fails the sanity filter is still stored (the window is a raw
/// history buffer) but flagged here, since it will be excluded from every
/// index computation.
///
/// # Errors
///
/// Will return `Err` if the database write fails.
pub fn record_round(
    store: &mut SqliteStore,
    player: &str,
    round: &RoundResult,
) -> Result<PlayerProfile, AppError> {
    if !engine::passes_sanity_filter(round) {
        eprintln!(
            "warning: round for {player} on {} has missing or implausible score/par and will not count toward the handicap",
            round.date
        );
    }
    store.record_round(player, round)
}

/// # Errors
///
/// Will return `Err` if the player is unknown or the database read fails.
pub fn report(store: &SqliteStore, player: &str) -> Result<ProfileReport, AppError> {
    let profile = store
        .load_profile(player)?
        .ok_or_else(|| AppError::NotFound(format!("player '{player}'")))?;

    let tier = SkillTier::from_index(profile.stats.handicap);
    let display = display_index(profile.stats.handicap, &profile.window);
    let trend_points: Vec<TrendPoint> = trend(&profile.window).collect();
    let courses = summarize_courses(&profile);

    Ok(ProfileReport {
        profile,
        tier,
        display,
        trend: trend_points,
        courses,
    })
}

fn summarize_courses(profile: &PlayerProfile) -> Vec<CourseSummary> {
    let mut by_course: HashMap<String, Vec<&RoundResult>, RandomState> = HashMap::default();
    for round in profile.window.rounds() {
        by_course
            .entry(round.course.clone())
            .or_default()
            .push(round);
    }

    let mut summaries: Vec<CourseSummary> = by_course
        .into_iter()
        .map(|(course, rounds)| {
            let best_score = rounds
                .iter()
                .filter(|round| engine::passes_sanity_filter(round))
                .filter_map(|round| round.score)
                .min();
            CourseSummary {
                course,
                rounds_played: rounds.len(),
                best_score,
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.rounds_played
            .cmp(&a.rounds_played)
            .then_with(|| a.course.cmp(&b.course))
    });
    summaries
}

/// # Errors
///
/// Will return `Err` if either player is unknown or the database read
/// fails.
pub fn matchup(
    store: &SqliteStore,
    player_a: &str,
    player_b: &str,
) -> Result<MatchupReport, AppError> {
    let a = store
        .load_profile(player_a)?
        .ok_or_else(|| AppError::NotFound(format!("player '{player_a}'")))?;
    let b = store
        .load_profile(player_b)?
        .ok_or_else(|| AppError::NotFound(format!("player '{player_b}'")))?;

    let allowance = recommended_allowance(a.stats.handicap, b.stats.handicap);
    Ok(MatchupReport {
        player_a: a,
        player_b: b,
        allowance,
    })
}

/// # Errors
///
/// Will return `Err` if the player is unknown or the reset transaction
/// fails.
pub fn reset(store: &mut SqliteStore, player: &str) -> Result<(), AppError> {
    store.reset_player(player)
}

#[derive(Deserialize)]
struct ImportRound {
    player: String,
    course: String,
    score: Option<i64>,
    par: Option<i64>,
    date: NaiveDate,
}

/// Replays a validated rounds file through the normal record path, oldest
/// entry first, so the windows end up ordered exactly as if the rounds
/// had been recorded live.
///
/// # Errors
///
/// Will return `Err` if the json does not match the expected shape or a
/// database write fails.
pub fn import_rounds(store: &mut SqliteStore, json: &Value) -> Result<usize, AppError> {
    let entries: Vec<ImportRound> = serde_json::from_value(json.clone())?;

    let mut imported = 0;
    for entry in &entries {
        let round = RoundResult {
            score: entry.score,
            par: entry.par,
            course: entry.course.clone(),
            date: entry.date,
        };
        record_round(store, &entry.player, &round)?;
        imported += 1;
    }
    Ok(imported)
}
