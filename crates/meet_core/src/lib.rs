//! # meet_core - Team-Scoring Analytics for Track & Field Championships
//!
//! Turns an immutable snapshot of a multi-day championship (events, results,
//! start lists, season rankings) into per-team scoring analytics:
//!
//! - current locked score (completed finals + complete combined events)
//! - optimistic ceiling and mathematical elimination
//! - deterministic seed-based projection
//! - leverage ranking of the remaining events
//! - Monte Carlo win probability (bit-reproducible under a fixed seed)
//! - scenario evaluation under caller-supplied hypothetical outcomes
//!
//! Everything except the simulator is a pure deterministic function of the
//! snapshot; the simulator is deterministic exactly when a seed is supplied.

pub mod api;
pub mod calibration;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod scoring;

pub use api::{analyze_meet_json, AnalysisRequest, AnalysisResponse};
pub use calibration::CalibrationTable;
pub use error::{Result, ScoringError};
pub use models::{
    Athlete, CombinedEventGroup, Discipline, DisciplineCategory, Entrant, EventId, EventKind,
    EventResult, EventRound, EventStatus, Gender, IntegrityWarning, Mark, MeetEvent,
    MeetSnapshot, SeasonRankingEntry, SeasonRankings, SeedMark, SeedSource, StartListEntry,
    Team,
};
pub use report::{run_full_analysis, MeetReport, TeamReport};
pub use scoring::{
    compute_ceilings, compute_standings, evaluate_scenario, points_for_place, project_scores,
    rank_leverage, simulate_win_probabilities, CancelToken, LeverageEntry, PlacementOverride,
    ScenarioBaseline, ScenarioConfig, SimulationConfig, Standings, TeamCeiling,
    WinProbabilities,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
