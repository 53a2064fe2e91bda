use std::fmt::Write as _;

use crate::controller::profile::{MatchupReport, ProfileReport};
use crate::db::PlayerListing;
use crate::hdcp::allowance::{Allowance, MatchSide};
use crate::hdcp::display::{NO_DATA_PLACEHOLDER, display_index, format_index};

#[must_use]
pub fn render_report(report: &ProfileReport) -> String {
    let mut out = String::new();
    let stats = &report.profile.stats;

    let _ = writeln!(out, "{}", report.profile.name);
    let _ = writeln!(
        out,
        "  HDCP: {:<10} tier: {} - {}",
        report.display,
        report.tier.label(),
        report.tier.description()
    );
    let _ = writeln!(out, "  rounds in window: {}", stats.total_rounds);
    if let Some(best) = stats.best_score {
        let _ = writeln!(out, "  best score: {best}");
    }
    if let Some(avg) = stats.avg_score {
        let _ = writeln!(out, "  avg score: {avg:.1}");
    }

    if !report.courses.is_empty() {
        let _ = writeln!(out, "  courses:");
        for course in &report.courses {
            let best = course
                .best_score
                .map_or_else(|| "-".to_string(), |b| b.to_string());
            let _ = writeln!(
                out,
                "    {:<20} {:>2} rounds, best {}",
                course.course, course.rounds_played, best
            );
        }
    }

    if !report.trend.is_empty() {
        let _ = writeln!(out, "  trend:");
        for point in &report.trend {
            let _ = writeln!(
                out,
                "    {:>2} rounds  {:<6} (back to {})",
                point.rounds_counted,
                format_index(point.index),
                point.date
            );
        }
    }

    out
}

#[must_use]
pub fn render_matchup(report: &MatchupReport) -> String {
    let header = format!(
        "{} ({}) vs {} ({})",
        report.player_a.name,
        display_index(report.player_a.stats.handicap, &report.player_a.window),
        report.player_b.name,
        display_index(report.player_b.stats.handicap, &report.player_b.window),
    );

    let detail = match &report.allowance {
        Allowance::Strokes { recipient, .. } => {
            let name = match recipient {
                MatchSide::PlayerA => &report.player_a.name,
                MatchSide::PlayerB => &report.player_b.name,
            };
            format!("{name} receives {}", report.allowance.message())
        }
        _ => report.allowance.message(),
    };

    format!("{header}\n{detail}")
}

#[must_use]
pub fn render_players(listings: &[PlayerListing]) -> String {
    if listings.is_empty() {
        return "no players recorded yet".to_string();
    }

    let mut out = String::new();
    for listing in listings {
        let hdcp = listing
            .handicap
            .map_or_else(|| NO_DATA_PLACEHOLDER.to_string(), format_index);
        let _ = writeln!(
            out,
            "{:<20} HDCP {:<6} {:>2} rounds",
            listing.name, hdcp, listing.total_rounds
        );
    }
    out
}
