//! Monte Carlo win probabilities for the team race.
//!
//! Each trial draws a finishing order for every remaining unit by
//! Plackett-Luce sampling over geometric seed-rank strengths (the Gumbel-max
//! trick: perturb each entrant's log-strength with Gumbel noise and sort).
//! The strength decay per discipline category comes from the calibration
//! table. A combined group is one unit, so a single draw produces one
//! coherent order for the whole group.
//!
//! Trials are independent: each derives its own `ChaCha8Rng` from the base
//! seed and its global trial index, so a fixed seed and snapshot reproduce
//! bit-identical probabilities no matter how rayon schedules the shards.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gumbel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::points::points_for_place;
use super::projection::seed_order;
use super::standings::Standings;
use super::remaining_units;
use crate::calibration::CalibrationTable;
use crate::error::{Result, ScoringError};
use crate::models::{MeetSnapshot, SeasonRankings};

pub const DEFAULT_TRIALS: u32 = 10_000;

const TRIALS_PER_SHARD: u32 = 256;

/// Splitting constant for deriving per-trial streams from the base seed.
const SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;

/// Cooperative cancellation handle. Cancelling discards the whole run; a
/// partial tally is never surfaced as a probability. Callers wanting a
/// timeout cancel from a timer.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub trials: u32,
    /// Fixed seed for reproducible runs; `None` draws one from the thread
    /// RNG, making the run deterministic only in the report's echoed seed.
    pub seed: Option<u64>,
    pub calibration: CalibrationTable,
    pub cancel: CancelToken,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            trials: DEFAULT_TRIALS,
            seed: None,
            calibration: CalibrationTable::default(),
            cancel: CancelToken::new(),
        }
    }
}

impl SimulationConfig {
    /// Reject unusable configuration eagerly, never silently default it.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(ScoringError::InvalidConfig(
                "trial count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-team win probabilities plus the run parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinProbabilities {
    pub trials: u32,
    /// The seed actually used (echoed back for unseeded runs).
    pub seed: u64,
    probabilities: BTreeMap<String, f64>,
}

impl WinProbabilities {
    pub fn get(&self, team: &str) -> f64 {
        self.probabilities.get(team).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(t, p)| (t.as_str(), *p))
    }

    pub fn into_map(self) -> BTreeMap<String, f64> {
        self.probabilities
    }
}

/// One remaining unit prepared for sampling: the team index of each entrant
/// in seed order, plus the category's log strength decay.
struct SimUnit {
    entrant_teams: Vec<usize>,
    log_decay: f64,
}

/// Run the simulation. Ties for a trial's win split credit `1/n` among the
/// tied leaders, so probabilities always sum to 1 (within float tolerance).
pub fn simulate_win_probabilities(
    snapshot: &MeetSnapshot,
    rankings: &SeasonRankings,
    standings: &Standings,
    config: &SimulationConfig,
) -> Result<WinProbabilities> {
    config.validate()?;
    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());

    let teams: Vec<String> = snapshot.teams().into_iter().collect();
    if teams.is_empty() {
        return Ok(WinProbabilities {
            trials: config.trials,
            seed: base_seed,
            probabilities: BTreeMap::new(),
        });
    }
    let team_index: BTreeMap<&str, usize> =
        teams.iter().enumerate().map(|(i, t)| (t.as_str(), i)).collect();
    let base_scores: Vec<u32> = teams.iter().map(|t| standings.get(t)).collect();

    let units: Vec<SimUnit> = remaining_units(snapshot)
        .iter()
        .filter_map(|unit| {
            let entrant_teams: Vec<usize> = seed_order(unit, snapshot, rankings)
                .iter()
                .map(|entrant| team_index[entrant.team()])
                .collect();
            if entrant_teams.is_empty() {
                return None;
            }
            let decay = config.calibration.decay(unit.category());
            Some(SimUnit { entrant_teams, log_decay: decay.ln() })
        })
        .collect();

    // Nothing left to run: the current leaders share the win outright.
    if units.is_empty() {
        return Ok(WinProbabilities {
            trials: config.trials,
            seed: base_seed,
            probabilities: settled_probabilities(&teams, &base_scores),
        });
    }

    debug!(
        "simulating {} trials over {} remaining units, seed {}",
        config.trials,
        units.len(),
        base_seed
    );

    let shard_count = config.trials.div_ceil(TRIALS_PER_SHARD);
    let shard_tallies: Vec<Vec<f64>> = (0..shard_count)
        .into_par_iter()
        .map(|shard| -> Result<Vec<f64>> {
            if config.cancel.is_cancelled() {
                return Err(ScoringError::Cancelled);
            }
            let start = shard * TRIALS_PER_SHARD;
            let end = (start + TRIALS_PER_SHARD).min(config.trials);
            let mut tally = vec![0.0_f64; teams.len()];
            let mut totals = vec![0_u32; teams.len()];
            for trial in start..end {
                let mut rng = ChaCha8Rng::seed_from_u64(
                    base_seed ^ (u64::from(trial) + 1).wrapping_mul(SEED_MIX),
                );
                totals.copy_from_slice(&base_scores);
                for unit in &units {
                    run_unit(unit, &mut totals, &mut rng);
                }
                credit_winners(&totals, &mut tally);
            }
            Ok(tally)
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;

    // Merge in shard order so the floating-point sums are reproducible.
    let mut tally = vec![0.0_f64; teams.len()];
    for shard in &shard_tallies {
        for (sum, part) in tally.iter_mut().zip(shard) {
            *sum += part;
        }
    }

    let trials = f64::from(config.trials);
    let probabilities = teams
        .iter()
        .zip(&tally)
        .map(|(team, wins)| (team.clone(), wins / trials))
        .collect();

    Ok(WinProbabilities { trials: config.trials, seed: base_seed, probabilities })
}

/// Draw one finishing order for a unit and bank its points.
fn run_unit(unit: &SimUnit, totals: &mut [u32], rng: &mut ChaCha8Rng) {
    let gumbel = Gumbel::new(0.0, 1.0).expect("unit-scale Gumbel is valid");
    let mut keys: Vec<(f64, usize)> = unit
        .entrant_teams
        .iter()
        .enumerate()
        .map(|(rank, &team)| {
            let log_strength = rank as f64 * unit.log_decay;
            (log_strength + gumbel.sample(rng), team)
        })
        .collect();
    // Highest perturbed strength finishes first (Gumbel-max = Plackett-Luce).
    keys.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (place0, (_, team)) in keys.iter().enumerate().take(super::points::SCORING_DEPTH) {
        totals[*team] += points_for_place(Some(place0 as u32 + 1));
    }
}

fn credit_winners(totals: &[u32], tally: &mut [f64]) {
    let best = totals.iter().copied().max().unwrap_or(0);
    let leaders: Vec<usize> =
        totals.iter().enumerate().filter(|(_, &t)| t == best).map(|(i, _)| i).collect();
    let credit = 1.0 / leaders.len() as f64;
    for i in leaders {
        tally[i] += credit;
    }
}

fn settled_probabilities(teams: &[String], scores: &[u32]) -> BTreeMap<String, f64> {
    let best = scores.iter().copied().max().unwrap_or(0);
    let leaders = scores.iter().filter(|&&s| s == best).count();
    teams
        .iter()
        .zip(scores)
        .map(|(team, &score)| {
            let p = if score == best { 1.0 / leaders as f64 } else { 0.0 };
            (team.clone(), p)
        })
        .collect()
}
