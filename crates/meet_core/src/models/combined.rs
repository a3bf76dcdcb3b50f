//! Combined events (pentathlon/heptathlon).
//!
//! A group's points are atomic: zero until every sub-event AND the standings
//! event are completed, then awarded in full from the standings placements.

use serde::{Deserialize, Serialize};

use super::event::{EventId, EventStatus, Gender};
use super::snapshot::MeetSnapshot;
use crate::models::Discipline;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedEventGroup {
    pub id: EventId,
    /// `Pentathlon` or `Heptathlon`.
    pub discipline: Discipline,
    pub gender: Gender,
    /// The individual disciplines, in contest order.
    pub sub_events: Vec<EventId>,
    /// The cumulative-standings event carrying the official placements.
    pub standings_event: EventId,
}

impl CombinedEventGroup {
    /// True iff every sub-event and the standings event are `Completed`.
    /// A referenced event missing from the snapshot counts as incomplete.
    pub fn is_complete(&self, snapshot: &MeetSnapshot) -> bool {
        let completed = |id: &EventId| {
            snapshot.event(id).map(|e| e.status == EventStatus::Completed).unwrap_or(false)
        };
        self.sub_events.iter().all(completed) && completed(&self.standings_event)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.standings_event == *id || self.sub_events.contains(id)
    }

    /// Teams with entrants in this group, with entrant counts. Placements
    /// live on the standings event; its start list (or interim results) is
    /// the group's field.
    pub fn team_entrant_counts(
        &self,
        snapshot: &MeetSnapshot,
    ) -> std::collections::BTreeMap<String, usize> {
        snapshot
            .event(&self.standings_event)
            .map(|e| e.team_entrant_counts())
            .unwrap_or_default()
    }
}
