use crate::{
    constants::{
        INNER_CIRCLE_RADIUS, ODI_FIRST_POWERPLAY_OVERS, ODI_SECOND_POWERPLAY_OVERS,
        T20_POWERPLAY_OVERS, UNRESTRICTED_OUTSIDE,
    },
    types::{MatchFormat, Positions},
};
use std::fmt;

/// Format and progress of the innings being set for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchContext {
    pub format: MatchFormat,
    pub overs_completed: u32,
}

impl MatchContext {
    /// Overs are ignored (stored as 0) for formats without restrictions by over
    pub fn new(format: MatchFormat, overs_completed: u32) -> Self {
        let overs_completed = if format.uses_overs() {
            overs_completed
        } else {
            0
        };
        Self {
            format,
            overs_completed,
        }
    }

    pub fn max_allowed_outside(&self) -> usize {
        max_allowed_outside_circle(&self.format, self.overs_completed)
    }
}

/// Fielders allowed outside the inner circle.
///
/// Overs are taken as given; no clamping to the innings length.
pub fn max_allowed_outside_circle(format: &MatchFormat, overs_completed: u32) -> usize {
    match format {
        MatchFormat::T20 => {
            if overs_completed <= T20_POWERPLAY_OVERS {
                2
            } else {
                5
            }
        }
        MatchFormat::Odi => {
            if overs_completed <= ODI_FIRST_POWERPLAY_OVERS {
                2
            } else if overs_completed <= ODI_SECOND_POWERPLAY_OVERS {
                4
            } else {
                5
            }
        }
        MatchFormat::Test | MatchFormat::Other(_) => UNRESTRICTED_OUTSIDE,
    }
}

/// Fielders strictly beyond `inner_radius` (on the line counts as inside)
pub fn count_outside(positions: &Positions, inner_radius: f64) -> usize {
    positions
        .values()
        .filter(|p| p.distance() > inner_radius)
        .count()
}

/// Names of the fielders counted by [`count_outside`]
pub fn outside_fielders(positions: &Positions, inner_radius: f64) -> Vec<&str> {
    positions
        .iter()
        .filter(|(_, p)| p.distance() > inner_radius)
        .map(|(name, _)| name.as_str())
        .collect()
}

/// Legality of a field setup
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub outside_count: usize,
    pub max_allowed: usize,
    pub is_legal: bool,
    pub format: MatchFormat,
    pub inner_radius: f64,
}

impl Verdict {
    pub fn banner(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_legal {
            write!(f, "✅ Fielding setup follows {} rules.", self.format)
        } else {
            write!(
                f,
                "⚠️ {} fielders outside {}-yard circle! Allowed: {}",
                self.outside_count, self.inner_radius, self.max_allowed
            )
        }
    }
}

/// Check against the standard 30-yard circle
pub fn validate(positions: &Positions, format: &MatchFormat, overs_completed: u32) -> Verdict {
    validate_with_radius(
        positions,
        &MatchContext::new(format.clone(), overs_completed),
        INNER_CIRCLE_RADIUS,
    )
}

pub fn validate_with_radius(
    positions: &Positions,
    context: &MatchContext,
    inner_radius: f64,
) -> Verdict {
    let outside_count = count_outside(positions, inner_radius);
    let max_allowed = context.max_allowed_outside();
    Verdict {
        outside_count,
        max_allowed,
        is_legal: outside_count <= max_allowed,
        format: context.format.clone(),
        inner_radius,
    }
}
