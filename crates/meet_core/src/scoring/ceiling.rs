//! Optimistic ceilings and mathematical elimination.
//!
//! The ceiling is one-sided and non-simultaneous: it assumes the team takes
//! every point it can from every remaining unit while rivals stay frozen.
//! "Not eliminated" therefore proves nothing; "eliminated" is certain.

use serde::{Deserialize, Serialize};

use super::points::top_k_points;
use super::standings::Standings;
use super::{remaining_units, RemainingUnit};
use crate::models::MeetSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCeiling {
    pub team: String,
    pub current: u32,
    /// Current score plus the best-case haul from every remaining unit.
    pub ceiling: u32,
    /// True iff even the ceiling cannot reach the best rival's banked score.
    pub eliminated: bool,
}

/// Ceiling and elimination flag for every team in the snapshot, ordered by
/// ceiling descending then team name.
pub fn compute_ceilings(snapshot: &MeetSnapshot, standings: &Standings) -> Vec<TeamCeiling> {
    let units = remaining_units(snapshot);

    let mut rows: Vec<TeamCeiling> = snapshot
        .teams()
        .into_iter()
        .map(|team| {
            let current = standings.get(&team);
            let ceiling = current + max_remaining_points(&team, &units, snapshot);
            let eliminated = ceiling < standings.best_excluding(&team);
            TeamCeiling { team, current, ceiling, eliminated }
        })
        .collect();

    rows.sort_by(|a, b| b.ceiling.cmp(&a.ceiling).then_with(|| a.team.cmp(&b.team)));
    rows
}

/// Best-case points a team can still extract. Each unit contributes the top
/// `k` table values for the team's `k` entrants, capped at the eight scoring
/// slots; an incomplete combined group contributes once for the whole group.
fn max_remaining_points(
    team: &str,
    units: &[RemainingUnit<'_>],
    snapshot: &MeetSnapshot,
) -> u32 {
    units
        .iter()
        .map(|unit| {
            let entrants =
                unit.team_entrant_counts(snapshot).get(team).copied().unwrap_or(0);
            top_k_points(entrants)
        })
        .sum()
}
