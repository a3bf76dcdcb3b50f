//! Event taxonomy: discipline, round, status, and kind are exhaustive tagged
//! variants so round/status logic is testable without any ingestion detail.

use serde::{Deserialize, Serialize};

use super::entry::{EventResult, StartListEntry};

/// Stable identifier for an event within one meet (the results provider's
/// event code, e.g. "002").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventRound {
    Prelim,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Scheduled,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Individual,
    Relay,
    /// One discipline inside a pentathlon/heptathlon. Never scores on its own.
    CombinedSubEvent,
    /// The cumulative standings of a combined event; the only place its
    /// placements (and therefore team points) come from.
    CombinedStandings,
}

/// Natural ordering of marks within an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkOrdering {
    /// Track: lower time wins.
    AscendingTime,
    /// Field: longer/higher measurement wins.
    DescendingMeasure,
}

/// Discipline categories sharing a seeding rule and a placement-variance
/// profile. Sprint and Hurdles finals are seeded off the prelim; everything
/// else runs off season-best marks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineCategory {
    Sprint,
    Hurdles,
    MiddleDistance,
    Distance,
    Jump,
    Throw,
    Relay,
    Combined,
}

impl DisciplineCategory {
    pub const ALL: [DisciplineCategory; 8] = [
        DisciplineCategory::Sprint,
        DisciplineCategory::Hurdles,
        DisciplineCategory::MiddleDistance,
        DisciplineCategory::Distance,
        DisciplineCategory::Jump,
        DisciplineCategory::Throw,
        DisciplineCategory::Relay,
        DisciplineCategory::Combined,
    ];

    /// Whether a final in this category takes its effective seed from a
    /// completed prelim rather than the season best.
    pub fn seeds_from_prelim(&self) -> bool {
        matches!(self, DisciplineCategory::Sprint | DisciplineCategory::Hurdles)
    }
}

/// The indoor championship program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    #[serde(rename = "60m")]
    Sprint60,
    #[serde(rename = "200m")]
    Sprint200,
    #[serde(rename = "400m")]
    Sprint400,
    #[serde(rename = "60m Hurdles")]
    Hurdles60,
    #[serde(rename = "800m")]
    Run800,
    #[serde(rename = "Mile")]
    Mile,
    #[serde(rename = "3000m")]
    Run3000,
    #[serde(rename = "5000m")]
    Run5000,
    #[serde(rename = "4x400m Relay")]
    Relay4x400,
    #[serde(rename = "Distance Medley Relay")]
    DistanceMedleyRelay,
    #[serde(rename = "High Jump")]
    HighJump,
    #[serde(rename = "Pole Vault")]
    PoleVault,
    #[serde(rename = "Long Jump")]
    LongJump,
    #[serde(rename = "Triple Jump")]
    TripleJump,
    #[serde(rename = "Shot Put")]
    ShotPut,
    #[serde(rename = "Weight Throw")]
    WeightThrow,
    #[serde(rename = "Pentathlon")]
    Pentathlon,
    #[serde(rename = "Heptathlon")]
    Heptathlon,
}

impl Discipline {
    pub fn category(&self) -> DisciplineCategory {
        match self {
            Discipline::Sprint60 | Discipline::Sprint200 | Discipline::Sprint400 => {
                DisciplineCategory::Sprint
            }
            Discipline::Hurdles60 => DisciplineCategory::Hurdles,
            Discipline::Run800 | Discipline::Mile => DisciplineCategory::MiddleDistance,
            Discipline::Run3000 | Discipline::Run5000 => DisciplineCategory::Distance,
            Discipline::Relay4x400 | Discipline::DistanceMedleyRelay => DisciplineCategory::Relay,
            Discipline::HighJump
            | Discipline::PoleVault
            | Discipline::LongJump
            | Discipline::TripleJump => DisciplineCategory::Jump,
            Discipline::ShotPut | Discipline::WeightThrow => DisciplineCategory::Throw,
            Discipline::Pentathlon | Discipline::Heptathlon => DisciplineCategory::Combined,
        }
    }

    pub fn ordering(&self) -> MarkOrdering {
        match self.category() {
            DisciplineCategory::Jump | DisciplineCategory::Throw => {
                MarkOrdering::DescendingMeasure
            }
            // Combined standings rank by cumulative points, which live
            // results publish per place; the ordering is unused there.
            _ => MarkOrdering::AscendingTime,
        }
    }

    /// Canonical display name (matches the serde rename).
    pub fn code(&self) -> &'static str {
        match self {
            Discipline::Sprint60 => "60m",
            Discipline::Sprint200 => "200m",
            Discipline::Sprint400 => "400m",
            Discipline::Hurdles60 => "60m Hurdles",
            Discipline::Run800 => "800m",
            Discipline::Mile => "Mile",
            Discipline::Run3000 => "3000m",
            Discipline::Run5000 => "5000m",
            Discipline::Relay4x400 => "4x400m Relay",
            Discipline::DistanceMedleyRelay => "Distance Medley Relay",
            Discipline::HighJump => "High Jump",
            Discipline::PoleVault => "Pole Vault",
            Discipline::LongJump => "Long Jump",
            Discipline::TripleJump => "Triple Jump",
            Discipline::ShotPut => "Shot Put",
            Discipline::WeightThrow => "Weight Throw",
            Discipline::Pentathlon => "Pentathlon",
            Discipline::Heptathlon => "Heptathlon",
        }
    }

    pub fn is_combined(&self) -> bool {
        self.category() == DisciplineCategory::Combined
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One scheduled/run event of the meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetEvent {
    pub id: EventId,
    pub discipline: Discipline,
    pub gender: Gender,
    pub round: EventRound,
    pub kind: EventKind,
    pub status: EventStatus,
    /// Published start list; empty until the provider posts it.
    #[serde(default)]
    pub entries: Vec<StartListEntry>,
    /// Published results; empty until marks come in.
    #[serde(default)]
    pub results: Vec<EventResult>,
    /// Schedule metadata straight off the meet index page.
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub start_time: String,
}

impl MeetEvent {
    /// Whether this event scores directly into the team standings once
    /// completed. Combined sub-events and standings pages score through
    /// their group, prelims never score.
    pub fn is_scorable_final(&self) -> bool {
        self.round == EventRound::Final
            && matches!(self.kind, EventKind::Individual | EventKind::Relay)
    }

    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }

    /// Teams with at least one entrant on the start list, with entrant
    /// counts. Falls back to the results list when no start list was
    /// published.
    pub fn team_entrant_counts(&self) -> std::collections::BTreeMap<String, usize> {
        let mut counts = std::collections::BTreeMap::new();
        if self.entries.is_empty() {
            for result in &self.results {
                *counts.entry(result.entrant.team().to_string()).or_insert(0) += 1;
            }
        } else {
            for entry in &self.entries {
                *counts.entry(entry.entrant.team().to_string()).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprint_categories_seed_from_prelim() {
        assert!(Discipline::Sprint60.category().seeds_from_prelim());
        assert!(Discipline::Hurdles60.category().seeds_from_prelim());
        assert!(!Discipline::Mile.category().seeds_from_prelim());
        assert!(!Discipline::LongJump.category().seeds_from_prelim());
        assert!(!Discipline::Relay4x400.category().seeds_from_prelim());
    }

    #[test]
    fn field_disciplines_rank_descending() {
        assert_eq!(Discipline::ShotPut.ordering(), MarkOrdering::DescendingMeasure);
        assert_eq!(Discipline::HighJump.ordering(), MarkOrdering::DescendingMeasure);
        assert_eq!(Discipline::Sprint60.ordering(), MarkOrdering::AscendingTime);
        assert_eq!(Discipline::Relay4x400.ordering(), MarkOrdering::AscendingTime);
    }

    #[test]
    fn discipline_serde_uses_display_names() {
        let json = serde_json::to_string(&Discipline::Hurdles60).unwrap();
        assert_eq!(json, "\"60m Hurdles\"");
        let back: Discipline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Discipline::Hurdles60);
    }

    #[test]
    fn combined_standings_is_not_a_scorable_final() {
        let event = MeetEvent {
            id: EventId::new("017"),
            discipline: Discipline::Heptathlon,
            gender: Gender::Men,
            round: EventRound::Final,
            kind: EventKind::CombinedStandings,
            status: EventStatus::Completed,
            entries: Vec::new(),
            results: Vec::new(),
            day: String::new(),
            start_time: String::new(),
        };
        assert!(!event.is_scorable_final());
    }
}
