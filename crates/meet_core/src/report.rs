//! Structured output records for presentation and notification consumers.
//!
//! No formatting concerns here: every field is a plain value. The three
//! "points possible" notions stay separate — `ceiling` (optimistic,
//! non-simultaneous), `projected` (deterministic seed-based), and
//! `win_probability` (joint, stochastic) — and callers choose which to show.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{IntegrityWarning, MeetSnapshot, SeasonRankings};
use crate::scoring::{
    compute_ceilings, compute_standings, project_scores, rank_leverage,
    simulate_win_probabilities, LeverageEntry, SimulationConfig,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    pub team: String,
    pub current: u32,
    pub ceiling: u32,
    pub eliminated: bool,
    pub projected: u32,
    pub win_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetReport {
    pub meet_name: String,
    pub snapshot_version: u64,
    pub captured_at: DateTime<Utc>,
    /// Ordered by projected score descending, team name on ties.
    pub teams: Vec<TeamReport>,
    /// Remaining units, most leveraged first.
    pub leverage: Vec<LeverageEntry>,
    pub simulation_trials: u32,
    pub simulation_seed: u64,
    pub warnings: Vec<IntegrityWarning>,
}

/// Run every analytics layer over one snapshot.
pub fn run_full_analysis(
    snapshot: &MeetSnapshot,
    rankings: &SeasonRankings,
    simulation: &SimulationConfig,
) -> Result<MeetReport> {
    let warnings = snapshot.integrity_warnings();
    for warning in &warnings {
        warn!("snapshot v{}: {}", snapshot.version, warning);
    }

    let standings = compute_standings(snapshot);
    let ceilings = compute_ceilings(snapshot, &standings);
    let projected = project_scores(snapshot, rankings, &standings);
    let leverage = rank_leverage(snapshot, &standings);
    let win = simulate_win_probabilities(snapshot, rankings, &standings, simulation)?;

    let mut teams: Vec<TeamReport> = ceilings
        .into_iter()
        .map(|row| {
            let projected = projected.get(&row.team).copied().unwrap_or(row.current);
            TeamReport {
                win_probability: win.get(&row.team),
                projected,
                current: row.current,
                ceiling: row.ceiling,
                eliminated: row.eliminated,
                team: row.team,
            }
        })
        .collect();
    teams.sort_by(|a, b| b.projected.cmp(&a.projected).then_with(|| a.team.cmp(&b.team)));

    Ok(MeetReport {
        meet_name: snapshot.meet_name.clone(),
        snapshot_version: snapshot.version,
        captured_at: snapshot.captured_at,
        teams,
        leverage,
        simulation_trials: win.trials,
        simulation_seed: win.seed,
        warnings,
    })
}
