//! The normalized, immutable meet snapshot.
//!
//! Ingestion produces a fresh snapshot on every refresh with a bumped
//! version; analytics consume it read-only and are never handed a snapshot
//! that mutates underneath them. Event status is the source of truth for
//! whether points are scored; inconsistencies surface as warnings, not
//! failures.

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::combined::CombinedEventGroup;
use super::event::{EventId, EventRound, EventStatus, Gender, MeetEvent};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetSnapshot {
    /// Monotonically increasing per refresh; consumers use it to tell
    /// reports apart.
    pub version: u64,
    pub meet_name: String,
    pub captured_at: DateTime<Utc>,
    pub events: Vec<MeetEvent>,
    #[serde(default)]
    pub combined_groups: Vec<CombinedEventGroup>,
}

/// A snapshot inconsistency worth flagging. Never fatal: status stays the
/// source of truth for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IntegrityWarning {
    /// Results published for an event still marked `Scheduled`.
    ResultsOnScheduledEvent { event: EventId },
    /// Two result rows claim the same place in one event.
    DuplicatePlace { event: EventId, place: u32 },
    /// A combined group references an event id the snapshot does not have.
    UnknownGroupEvent { group: EventId, event: EventId },
    /// A group's standings id points at an event of the wrong kind.
    StandingsKindMismatch { group: EventId, event: EventId },
}

impl std::fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityWarning::ResultsOnScheduledEvent { event } => {
                write!(f, "event {} has results but is still scheduled", event)
            }
            IntegrityWarning::DuplicatePlace { event, place } => {
                write!(f, "event {} lists place {} more than once", event, place)
            }
            IntegrityWarning::UnknownGroupEvent { group, event } => {
                write!(f, "combined group {} references unknown event {}", group, event)
            }
            IntegrityWarning::StandingsKindMismatch { group, event } => {
                write!(f, "combined group {} standings id {} is not a standings event", group, event)
            }
        }
    }
}

impl MeetSnapshot {
    pub fn event(&self, id: &EventId) -> Option<&MeetEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Finals that have scored: completed, final round, individual or relay.
    pub fn completed_finals(&self) -> impl Iterator<Item = &MeetEvent> {
        self.events.iter().filter(|e| e.is_scorable_final() && e.is_completed())
    }

    /// Finals still able to score: final round, individual or relay, not yet
    /// completed. Combined events are tracked through their groups instead.
    pub fn remaining_finals(&self) -> impl Iterator<Item = &MeetEvent> {
        self.events.iter().filter(|e| e.is_scorable_final() && !e.is_completed())
    }

    /// The completed prelim for a final, if the meet ran one.
    pub fn completed_prelim_for(&self, final_event: &MeetEvent) -> Option<&MeetEvent> {
        self.events.iter().find(|e| {
            e.round == EventRound::Prelim
                && e.discipline == final_event.discipline
                && e.gender == final_event.gender
                && e.is_completed()
        })
    }

    pub fn group(&self, id: &EventId) -> Option<&CombinedEventGroup> {
        self.combined_groups.iter().find(|g| &g.id == id)
    }

    /// Every team appearing anywhere in the snapshot, deterministically
    /// ordered.
    pub fn teams(&self) -> BTreeSet<String> {
        let mut teams = BTreeSet::new();
        for event in &self.events {
            for entry in &event.entries {
                teams.insert(entry.entrant.team().to_string());
            }
            for result in &event.results {
                teams.insert(result.entrant.team().to_string());
            }
        }
        teams
    }

    /// A copy restricted to one gender's competition. Team races are scored
    /// separately for men and women, so reports are usually built per side.
    pub fn for_gender(&self, gender: Gender) -> MeetSnapshot {
        MeetSnapshot {
            version: self.version,
            meet_name: self.meet_name.clone(),
            captured_at: self.captured_at,
            events: self.events.iter().filter(|e| e.gender == gender).cloned().collect(),
            combined_groups: self
                .combined_groups
                .iter()
                .filter(|g| g.gender == gender)
                .cloned()
                .collect(),
        }
    }

    /// Scan for data-integrity issues. Cheap enough to run on every refresh.
    pub fn integrity_warnings(&self) -> Vec<IntegrityWarning> {
        let mut warnings = Vec::new();

        for event in &self.events {
            if event.status == EventStatus::Scheduled && !event.results.is_empty() {
                warnings.push(IntegrityWarning::ResultsOnScheduledEvent {
                    event: event.id.clone(),
                });
            }
            let mut seen: HashMap<u32, u32> = HashMap::new();
            for result in &event.results {
                if let Some(place) = result.place {
                    *seen.entry(place).or_insert(0) += 1;
                }
            }
            let mut duplicates: Vec<u32> =
                seen.into_iter().filter(|(_, n)| *n > 1).map(|(p, _)| p).collect();
            duplicates.sort_unstable();
            for place in duplicates {
                warnings.push(IntegrityWarning::DuplicatePlace {
                    event: event.id.clone(),
                    place,
                });
            }
        }

        for group in &self.combined_groups {
            for id in group.sub_events.iter().chain(std::iter::once(&group.standings_event)) {
                if self.event(id).is_none() {
                    warnings.push(IntegrityWarning::UnknownGroupEvent {
                        group: group.id.clone(),
                        event: id.clone(),
                    });
                }
            }
            if let Some(event) = self.event(&group.standings_event) {
                if event.kind != super::event::EventKind::CombinedStandings {
                    warnings.push(IntegrityWarning::StandingsKindMismatch {
                        group: group.id.clone(),
                        event: event.id.clone(),
                    });
                }
            }
        }

        warnings
    }
}
