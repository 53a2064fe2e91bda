use serde::{Deserialize, Serialize};

/// Coarse skill classification derived from the handicap index. Stateless,
/// recomputed on demand; the label/color/description triplets are fixed
/// presentation data.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillTier {
    Pro,
    Advanced,
    Intermediate,
    Beginner,
    Novice,
    Unrated,
}

impl SkillTier {
    /// Band edges are inclusive on the upper side; first match wins.
    #[must_use]
    pub fn from_index(index: Option<f64>) -> Self {
        let Some(index) = index else {
            return SkillTier::Unrated;
        };
        if index <= 0.0 {
            SkillTier::Pro
        } else if index <= 3.0 {
            SkillTier::Advanced
        } else if index <= 6.0 {
            SkillTier::Intermediate
        } else if index <= 10.0 {
            SkillTier::Beginner
        } else {
            SkillTier::Novice
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SkillTier::Pro => "Pro",
            SkillTier::Advanced => "Advanced",
            SkillTier::Intermediate => "Intermediate",
            SkillTier::Beginner => "Beginner",
            SkillTier::Novice => "Novice",
            SkillTier::Unrated => "Unrated",
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            SkillTier::Pro => "#FFB300",
            SkillTier::Advanced => "#43A047",
            SkillTier::Intermediate => "#1E88E5",
            SkillTier::Beginner => "#FB8C00",
            SkillTier::Novice => "#8E24AA",
            SkillTier::Unrated => "#9E9E9E",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            SkillTier::Pro => "Shoots at or under par on average",
            SkillTier::Advanced => "Within 3 strokes of par on average",
            SkillTier::Intermediate => "Within 6 strokes of par on average",
            SkillTier::Beginner => "Within 10 strokes of par on average",
            SkillTier::Novice => "More than 10 strokes over par on average",
            SkillTier::Unrated => "Not enough recorded rounds to rate",
        }
    }
}
