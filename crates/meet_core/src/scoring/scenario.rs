//! What-if evaluation: recompute team scores under a caller-supplied
//! outcome for one or more remaining units, with every untouched unit
//! contributing per a chosen baseline. Pure function, no caches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::points::{points_for_place, top_k_points};
use super::projection::projected_unit_points;
use super::standings::Standings;
use super::{remaining_units, RemainingUnit};
use crate::error::{Result, ScoringError};
use crate::models::{Entrant, EventId, MeetSnapshot, SeasonRankings};

/// How untouched remaining units contribute to the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioBaseline {
    /// Each team's optimistic per-unit maximum (non-simultaneous, like the
    /// ceiling).
    Ceiling,
    /// Seed-order projected points.
    Projection,
}

/// A hypothetical finishing order for one remaining unit, best first;
/// position `i` takes place `i + 1` and scores by the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementOverride {
    pub unit: EventId,
    pub order: Vec<Entrant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub overrides: Vec<PlacementOverride>,
    pub baseline: ScenarioBaseline,
}

/// Evaluate the scenario: current score + overridden outcomes +
/// baseline contributions for everything else. Overriding a unit that is
/// not remaining (unknown, or already completed) is a configuration error.
pub fn evaluate_scenario(
    snapshot: &MeetSnapshot,
    rankings: &SeasonRankings,
    standings: &Standings,
    config: &ScenarioConfig,
) -> Result<BTreeMap<String, u32>> {
    let units = remaining_units(snapshot);

    let mut overrides: BTreeMap<&EventId, &PlacementOverride> = BTreeMap::new();
    for over in &config.overrides {
        if !units.iter().any(|u| u.id() == &over.unit) {
            return Err(ScoringError::InvalidConfig(format!(
                "override targets {}, which is not a remaining scorable unit",
                over.unit
            )));
        }
        if overrides.insert(&over.unit, over).is_some() {
            return Err(ScoringError::InvalidConfig(format!(
                "unit {} is overridden more than once",
                over.unit
            )));
        }
    }

    let mut totals: BTreeMap<String, u32> =
        standings.iter().map(|(t, p)| (t.to_string(), p)).collect();

    for unit in &units {
        let contribution = match overrides.get(unit.id()) {
            Some(over) => override_points(over),
            None => baseline_points(unit, snapshot, rankings, config.baseline),
        };
        for (team, pts) in contribution {
            *totals.entry(team).or_insert(0) += pts;
        }
    }

    Ok(totals)
}

fn override_points(over: &PlacementOverride) -> BTreeMap<String, u32> {
    let mut points = BTreeMap::new();
    for (i, entrant) in over.order.iter().enumerate() {
        let pts = points_for_place(Some((i + 1) as u32));
        if pts > 0 {
            *points.entry(entrant.team().to_string()).or_insert(0) += pts;
        }
    }
    points
}

fn baseline_points(
    unit: &RemainingUnit<'_>,
    snapshot: &MeetSnapshot,
    rankings: &SeasonRankings,
    baseline: ScenarioBaseline,
) -> BTreeMap<String, u32> {
    match baseline {
        ScenarioBaseline::Projection => projected_unit_points(unit, snapshot, rankings),
        ScenarioBaseline::Ceiling => unit
            .team_entrant_counts(snapshot)
            .into_iter()
            .map(|(team, k)| (team, top_k_points(k)))
            .collect(),
    }
}
