//! The analytics layers: locked standings, optimistic ceilings, seed
//! projections, leverage ranking, win-probability simulation, and scenario
//! evaluation. Every layer is a pure function over one immutable snapshot.

pub mod ceiling;
pub mod leverage;
pub mod points;
pub mod projection;
pub mod scenario;
pub mod simulation;
pub mod standings;

pub use ceiling::{compute_ceilings, TeamCeiling};
pub use leverage::{rank_leverage, LeverageEntry};
pub use points::{points_for_place, top_k_points, MAX_EVENT_POINTS, PLACE_POINTS};
pub use projection::{project_scores, projected_unit_points};
pub use scenario::{evaluate_scenario, PlacementOverride, ScenarioBaseline, ScenarioConfig};
pub use simulation::{
    simulate_win_probabilities, CancelToken, SimulationConfig, WinProbabilities,
    DEFAULT_TRIALS,
};
pub use standings::{compute_standings, Standings};

use std::collections::BTreeMap;

use crate::models::{
    CombinedEventGroup, Discipline, DisciplineCategory, EventId, MeetEvent, MeetSnapshot,
};

/// A unit of the meet that can still move the team standings: an
/// individual/relay final not yet completed, or a combined group that is
/// not yet complete (the group scores atomically, so it counts as one unit
/// regardless of how many sub-events remain).
#[derive(Debug, Clone, Copy)]
pub enum RemainingUnit<'a> {
    Event(&'a MeetEvent),
    Group(&'a CombinedEventGroup),
}

impl<'a> RemainingUnit<'a> {
    pub fn id(&self) -> &'a EventId {
        match *self {
            RemainingUnit::Event(e) => &e.id,
            RemainingUnit::Group(g) => &g.id,
        }
    }

    pub fn discipline(&self) -> Discipline {
        match self {
            RemainingUnit::Event(e) => e.discipline,
            RemainingUnit::Group(g) => g.discipline,
        }
    }

    pub fn category(&self) -> DisciplineCategory {
        self.discipline().category()
    }

    /// Entrant counts per team, from the start list (events) or the
    /// standings field (groups). Missing start lists fall back to results.
    pub fn team_entrant_counts(&self, snapshot: &MeetSnapshot) -> BTreeMap<String, usize> {
        match self {
            RemainingUnit::Event(e) => e.team_entrant_counts(),
            RemainingUnit::Group(g) => g.team_entrant_counts(snapshot),
        }
    }
}

/// All units still able to score, in deterministic snapshot order: events
/// first (as listed), then incomplete combined groups.
pub fn remaining_units(snapshot: &MeetSnapshot) -> Vec<RemainingUnit<'_>> {
    let mut units: Vec<RemainingUnit<'_>> =
        snapshot.remaining_finals().map(RemainingUnit::Event).collect();
    units.extend(
        snapshot
            .combined_groups
            .iter()
            .filter(|g| !g.is_complete(snapshot))
            .map(RemainingUnit::Group),
    );
    units
}
