//! Start-list entries and results. Points are always derived from the
//! published place, never stored alongside it.

use serde::{Deserialize, Serialize};

use super::mark::Mark;

/// Someone who can appear on a start list: a named athlete, or a relay squad
/// which belongs to the team as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrant {
    Athlete { name: String, team: String },
    Relay { team: String },
}

impl Entrant {
    pub fn athlete(name: impl Into<String>, team: impl Into<String>) -> Self {
        Entrant::Athlete { name: name.into(), team: team.into() }
    }

    pub fn relay(team: impl Into<String>) -> Self {
        Entrant::Relay { team: team.into() }
    }

    pub fn team(&self) -> &str {
        match self {
            Entrant::Athlete { team, .. } => team,
            Entrant::Relay { team } => team,
        }
    }

    /// Athlete name, or the team name for a relay squad.
    pub fn label(&self) -> &str {
        match self {
            Entrant::Athlete { name, .. } => name,
            Entrant::Relay { team } => team,
        }
    }

    pub fn athlete_name(&self) -> Option<&str> {
        match self {
            Entrant::Athlete { name, .. } => Some(name),
            Entrant::Relay { .. } => None,
        }
    }
}

/// Where a start-list seed mark came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    PrelimResult,
    SeasonBest,
    TeamSeed,
}

/// A seed mark together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedMark {
    pub mark: Mark,
    pub source: SeedSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartListEntry {
    pub entrant: Entrant,
    /// Absent when the provider published a bare name. The entrant still
    /// counts toward ceilings; it just cannot be seeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedMark>,
}

impl StartListEntry {
    pub fn new(entrant: Entrant, seed: Option<SeedMark>) -> Self {
        StartListEntry { entrant, seed }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResult {
    pub entrant: Entrant,
    /// Official place; `None` for DNS/DNF/DQ rows.
    pub place: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
}
