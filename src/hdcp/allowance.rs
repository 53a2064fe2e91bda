/// Which of the two compared players a recommendation refers to, in
/// argument order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchSide {
    PlayerA,
    PlayerB,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Allowance {
    /// One or both players have no computable index yet.
    InsufficientData,
    /// Rounded index gap of zero; play it straight up.
    Even,
    /// The weaker player (higher index) receives whole strokes. `gap`
    /// keeps the unrounded absolute difference for display.
    Strokes {
        recipient: MatchSide,
        strokes: i64,
        gap: f64,
    },
}

impl Allowance {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Allowance::InsufficientData => {
                "not enough rated rounds to recommend an allowance".to_string()
            }
            Allowance::Even => "evenly matched, no handicap needed".to_string(),
            Allowance::Strokes { strokes, gap, .. } => {
                let plural = if *strokes == 1 { "" } else { "s" };
                format!("{strokes} stroke{plural} of allowance (index gap {gap:.1})")
            }
        }
    }
}

/// Two-player stroke allowance from a pair of nullable indexes. Symmetric
/// in everything but which side is named as recipient.
#[must_use]
pub fn recommended_allowance(index_a: Option<f64>, index_b: Option<f64>) -> Allowance {
    let (Some(a), Some(b)) = (index_a, index_b) else {
        return Allowance::InsufficientData;
    };

    let gap = (a - b).abs();
    let strokes = gap.round() as i64;
    if strokes == 0 {
        return Allowance::Even;
    }

    // Higher index means more strokes over par on average, so that side
    // gets the strokes.
    let recipient = if a > b {
        MatchSide::PlayerA
    } else {
        MatchSide::PlayerB
    };
    Allowance::Strokes {
        recipient,
        strokes,
        gap,
    }
}
