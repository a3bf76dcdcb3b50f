//! Shared builders for unit tests. Not compiled into the library.

use chrono::{TimeZone, Utc};

use super::combined::CombinedEventGroup;
use super::entry::{Entrant, EventResult, SeedMark, SeedSource, StartListEntry};
use super::event::{
    Discipline, EventId, EventKind, EventRound, EventStatus, Gender, MeetEvent,
};
use super::mark::Mark;
use super::snapshot::MeetSnapshot;

pub fn event(
    id: &str,
    discipline: Discipline,
    round: EventRound,
    status: EventStatus,
) -> MeetEvent {
    let kind = match discipline.category() {
        super::event::DisciplineCategory::Relay => EventKind::Relay,
        _ => EventKind::Individual,
    };
    MeetEvent {
        id: EventId::new(id),
        discipline,
        gender: Gender::Men,
        round,
        kind,
        status,
        entries: Vec::new(),
        results: Vec::new(),
        day: String::new(),
        start_time: String::new(),
    }
}

pub fn entry(entrant: Entrant, seed: Option<&str>) -> StartListEntry {
    let seed = seed.map(|raw| SeedMark {
        mark: parse_mark(raw),
        source: SeedSource::SeasonBest,
    });
    StartListEntry::new(entrant, seed)
}

pub fn result(entrant: Entrant, place: u32, mark: &str) -> EventResult {
    EventResult { entrant, place: Some(place), mark: Some(parse_mark(mark)) }
}

pub fn group(id: &str, sub_events: &[&str], standings: &str) -> CombinedEventGroup {
    CombinedEventGroup {
        id: EventId::new(id),
        discipline: Discipline::Heptathlon,
        gender: Gender::Men,
        sub_events: sub_events.iter().map(|s| EventId::new(*s)).collect(),
        standings_event: EventId::new(standings),
    }
}

pub fn snapshot(events: Vec<MeetEvent>, groups: Vec<CombinedEventGroup>) -> MeetSnapshot {
    MeetSnapshot {
        version: 1,
        meet_name: "Conference Indoor Championship".to_string(),
        captured_at: Utc.with_ymd_and_hms(2026, 3, 13, 18, 0, 0).unwrap(),
        events,
        combined_groups: groups,
    }
}

/// Parse a mark string, trying time first then measure. Test inputs are
/// unambiguous ("6.54" sprints use times, "19.22m" throws carry a unit).
fn parse_mark(raw: &str) -> Mark {
    if raw.ends_with('m') || raw.contains('-') {
        Mark::parse(raw, super::event::MarkOrdering::DescendingMeasure)
            .unwrap_or_else(|| panic!("fixture mark {:?} must parse", raw))
    } else {
        Mark::parse(raw, super::event::MarkOrdering::AscendingTime)
            .unwrap_or_else(|| panic!("fixture mark {:?} must parse", raw))
    }
}

/// A completed 60m final with a full eight-deep result list across four
/// teams. Points: Summit 10+5=15, Westlake 8+3=11, Northfield 6+2+1=9,
/// Ridgeview 4.
pub fn completed_sprint_final(id: &str) -> MeetEvent {
    let mut ev = event(id, Discipline::Sprint60, EventRound::Final, EventStatus::Completed);
    let order = [
        ("A. Okafor", "Summit", "6.58"),
        ("L. Mercer", "Westlake", "6.61"),
        ("T. Voss", "Northfield", "6.63"),
        ("R. Stanton", "Summit", "6.66"),
        ("K. Adeyemi", "Ridgeview", "6.69"),
        ("J. Paek", "Westlake", "6.71"),
        ("C. Ibarra", "Northfield", "6.74"),
        ("M. Doyle", "Northfield", "6.78"),
    ];
    for (i, (name, team, mark)) in order.iter().enumerate() {
        ev.results.push(result(Entrant::athlete(*name, *team), (i + 1) as u32, mark));
    }
    ev
}
