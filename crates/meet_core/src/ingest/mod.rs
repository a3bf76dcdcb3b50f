//! Seams to the external collaborators.
//!
//! The scraping collaborator implements [`SnapshotSource`] and hands the
//! engine fully-normalized snapshots on its own cadence; season rankings
//! load once per meet via [`SeasonRankings`](crate::models::SeasonRankings).
//! Nothing in this crate fetches or parses pages.

use chrono::{DateTime, Utc};
use log::debug;

use crate::error::Result;
use crate::models::{
    CombinedEventGroup, MeetEvent, MeetSnapshot, SeedMark, SeedSource, StartListEntry,
};

/// Produces a fresh immutable snapshot per call. Implementations live with
/// the scraping collaborator; the engine only consumes the result.
pub trait SnapshotSource {
    fn fetch(&mut self) -> Result<MeetSnapshot>;
}

/// Assembles versioned snapshots. Each build gets the next version number,
/// so consumers can tell stale reports from fresh ones; an in-flight
/// computation keeps its own snapshot and is never mutated underneath.
#[derive(Debug)]
pub struct SnapshotBuilder {
    next_version: u64,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        SnapshotBuilder::new()
    }
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        SnapshotBuilder { next_version: 1 }
    }

    pub fn build(
        &mut self,
        meet_name: impl Into<String>,
        captured_at: DateTime<Utc>,
        mut events: Vec<MeetEvent>,
        combined_groups: Vec<CombinedEventGroup>,
    ) -> MeetSnapshot {
        backfill_final_fields(&mut events);
        let version = self.next_version;
        self.next_version += 1;
        debug!("built snapshot v{} with {} events", version, events.len());
        MeetSnapshot {
            version,
            meet_name: meet_name.into(),
            captured_at,
            events,
            combined_groups,
        }
    }
}

/// Fill empty final start lists from their completed prelims.
///
/// Providers often publish no separate final start list while the prelim is
/// running; once it completes, its results define the final's field, and
/// their marks become prelim-sourced seeds.
pub fn backfill_final_fields(events: &mut [MeetEvent]) {
    let backfills: Vec<(usize, Vec<StartListEntry>)> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| e.is_scorable_final() && !e.is_completed() && e.entries.is_empty())
        .filter_map(|(i, final_event)| {
            let prelim = events.iter().find(|p| {
                p.round == crate::models::EventRound::Prelim
                    && p.discipline == final_event.discipline
                    && p.gender == final_event.gender
                    && p.is_completed()
            })?;
            let entries: Vec<StartListEntry> = prelim
                .results
                .iter()
                .map(|r| {
                    let seed = r.mark.map(|mark| SeedMark {
                        mark,
                        source: SeedSource::PrelimResult,
                    });
                    StartListEntry::new(r.entrant.clone(), seed)
                })
                .collect();
            (!entries.is_empty()).then_some((i, entries))
        })
        .collect();

    for (i, entries) in backfills {
        events[i].entries = entries;
    }
}
