use crate::hdcp::engine::{self, MIN_VALID_ROUNDS};
use crate::model::RecentWindow;

pub const NO_DATA_PLACEHOLDER: &str = "--";

/// Index text for score views. A computable index gets an explicit sign
/// (`"+1"`, `"+2.5"`); zero and negatives print as-is. When the index is
/// null the window decides between "no data yet" and "still computing".
#[must_use]
pub fn display_index(index: Option<f64>, window: &RecentWindow) -> String {
    if let Some(value) = index {
        return format_index(value);
    }

    let valid = engine::valid_count(window);
    if valid == 0 || valid >= MIN_VALID_ROUNDS {
        // Enough rounds but still no index means the final bound rejected
        // the computation; that reads as unrecoverable, not "computing".
        NO_DATA_PLACEHOLDER.to_string()
    } else {
        let needed = MIN_VALID_ROUNDS - valid;
        let plural = if needed == 1 { "" } else { "s" };
        format!("computing, {needed} more round{plural} needed")
    }
}

/// Trailing `.0` is trimmed, so a 1.0 index renders as `"+1"`.
#[must_use]
pub fn format_index(value: f64) -> String {
    // covers negative zero too
    if value == 0.0 {
        return "0".to_string();
    }
    let whole = (value * 10.0).round() % 10.0 == 0.0;
    let text = if whole {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    };
    if value > 0.0 { format!("+{text}") } else { text }
}
