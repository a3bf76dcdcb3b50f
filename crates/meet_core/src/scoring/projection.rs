//! Deterministic projected final scores from seed and prelim marks.
//!
//! Sprint and hurdle finals are projected off the completed prelim; distance,
//! field, and relay finals always run off the season-best/seed mark. Ties on
//! identical marks break by stable start-list order; nothing here is ever
//! randomized.

use std::collections::BTreeMap;

use super::points::points_for_place;
use super::standings::Standings;
use super::{remaining_units, RemainingUnit};
use crate::models::{
    CombinedEventGroup, Entrant, Mark, MeetEvent, MeetSnapshot, SeasonRankings,
};

/// Projected final score per team: current locked points plus seed-order
/// points from every remaining unit.
pub fn project_scores(
    snapshot: &MeetSnapshot,
    rankings: &SeasonRankings,
    standings: &Standings,
) -> BTreeMap<String, u32> {
    let mut projected: BTreeMap<String, u32> =
        standings.iter().map(|(t, p)| (t.to_string(), p)).collect();

    for unit in remaining_units(snapshot) {
        for (team, pts) in projected_unit_points(&unit, snapshot, rankings) {
            *projected.entry(team).or_insert(0) += pts;
        }
    }

    projected
}

/// Points each team takes from one remaining unit if its seed order holds
/// exactly.
pub fn projected_unit_points(
    unit: &RemainingUnit<'_>,
    snapshot: &MeetSnapshot,
    rankings: &SeasonRankings,
) -> BTreeMap<String, u32> {
    let order = seed_order(unit, snapshot, rankings);
    let mut points: BTreeMap<String, u32> = BTreeMap::new();
    for (i, entrant) in order.iter().enumerate() {
        let pts = points_for_place(Some((i + 1) as u32));
        if pts > 0 {
            *points.entry(entrant.team().to_string()).or_insert(0) += pts;
        }
    }
    points
}

/// The projected finishing order of a remaining unit, best first.
///
/// Entrants with no resolvable basis sort to the back (they still occupy
/// places, they just cannot beat anyone seeded). The sort is stable, so
/// equal marks keep their start-list order.
pub fn seed_order<'a>(
    unit: &RemainingUnit<'a>,
    snapshot: &'a MeetSnapshot,
    rankings: &SeasonRankings,
) -> Vec<&'a Entrant> {
    match *unit {
        RemainingUnit::Event(event) => event_seed_order(event, snapshot, rankings),
        RemainingUnit::Group(group) => group_seed_order(group, snapshot, rankings),
    }
}

fn event_seed_order<'a>(
    event: &'a MeetEvent,
    snapshot: &'a MeetSnapshot,
    rankings: &SeasonRankings,
) -> Vec<&'a Entrant> {
    let mut ranked: Vec<(&Entrant, f64)> = event
        .entries
        .iter()
        .map(|entry| {
            let key = effective_seed(event, &entry.entrant, entry.seed.map(|s| s.mark), snapshot, rankings)
                .map(|m| m.sort_key())
                .unwrap_or(crate::models::mark::UNMARKED_SORT_KEY);
            (&entry.entrant, key)
        })
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(e, _)| e).collect()
}

/// Resolve the mark an entrant is projected from.
///
/// Sprint/hurdles finals with a completed prelim use the prelim result even
/// when a faster season best exists; everything else uses the start-list
/// seed, falling back to the season-rankings mark for athletes whose start
/// list carried none.
fn effective_seed(
    event: &MeetEvent,
    entrant: &Entrant,
    listed_seed: Option<Mark>,
    snapshot: &MeetSnapshot,
    rankings: &SeasonRankings,
) -> Option<Mark> {
    if event.discipline.category().seeds_from_prelim() {
        if let Some(prelim) = snapshot.completed_prelim_for(event) {
            let prelim_mark = prelim
                .results
                .iter()
                .find(|r| r.entrant.label() == entrant.label())
                .and_then(|r| r.mark);
            if let Some(mark) = prelim_mark {
                return Some(mark);
            }
        }
    }
    listed_seed.or_else(|| {
        entrant
            .athlete_name()
            .and_then(|name| rankings.best_mark(name, event.discipline))
    })
}

/// A combined group's forecast order: interim standings places when the
/// standings page has results, else pre-meet season rank for the combined
/// discipline. Unplaced/unranked entrants go to the back in field order.
fn group_seed_order<'a>(
    group: &CombinedEventGroup,
    snapshot: &'a MeetSnapshot,
    rankings: &SeasonRankings,
) -> Vec<&'a Entrant> {
    let Some(standings_event) = snapshot.event(&group.standings_event) else {
        return Vec::new();
    };

    if !standings_event.results.is_empty() {
        let mut ranked: Vec<(&Entrant, u32)> = standings_event
            .results
            .iter()
            .map(|r| (&r.entrant, r.place.unwrap_or(u32::MAX)))
            .collect();
        ranked.sort_by_key(|(_, place)| *place);
        return ranked.into_iter().map(|(e, _)| e).collect();
    }

    let mut ranked: Vec<(&Entrant, u32)> = standings_event
        .entries
        .iter()
        .map(|entry| {
            let rank = entry
                .entrant
                .athlete_name()
                .and_then(|name| rankings.rank(name, group.discipline))
                .unwrap_or(u32::MAX);
            (&entry.entrant, rank)
        })
        .collect();
    ranked.sort_by_key(|(_, rank)| *rank);
    ranked.into_iter().map(|(e, _)| e).collect()
}
