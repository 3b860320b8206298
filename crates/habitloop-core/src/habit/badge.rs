//! Achievement badge tiers.

use serde::{Deserialize, Serialize};

/// Achievement tier awarded for the current streak length.
///
/// Tiers depend on the live streak only, so a badge is lost again when
/// the streak resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Beginner,
    OnFire,
    Committed,
    Champion,
    Legend,
}

impl Badge {
    /// Highest tier whose threshold the streak meets.
    pub fn for_streak(streak: u32) -> Self {
        if streak >= 30 {
            Badge::Legend
        } else if streak >= 14 {
            Badge::Champion
        } else if streak >= 7 {
            Badge::Committed
        } else if streak >= 3 {
            Badge::OnFire
        } else {
            Badge::Beginner
        }
    }

    /// Display label with the tier emoji.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Legend => "🥇 Legend",
            Badge::Champion => "🥈 Champion",
            Badge::Committed => "🥉 Committed",
            Badge::OnFire => "🔥 On fire",
            Badge::Beginner => "🎯 Beginner",
        }
    }
}
