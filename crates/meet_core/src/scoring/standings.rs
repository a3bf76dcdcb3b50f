//! Current locked team scores.
//!
//! Recomputed from scratch on every call: re-running against an unchanged
//! snapshot must reproduce identical totals, so nothing is accumulated
//! incrementally.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use super::points::points_for_place;
use crate::models::MeetSnapshot;

/// Team totals from completed finals and complete combined groups only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    totals: BTreeMap<String, u32>,
}

impl Standings {
    pub fn get(&self, team: &str) -> u32 {
        self.totals.get(team).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.totals.iter().map(|(team, pts)| (team.as_str(), *pts))
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.totals.keys().map(String::as_str)
    }

    /// Teams ordered by points descending, name ascending on ties.
    pub fn sorted(&self) -> Vec<(String, u32)> {
        let mut rows: Vec<(String, u32)> =
            self.totals.iter().map(|(t, p)| (t.clone(), *p)).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    pub fn leader(&self) -> Option<(String, u32)> {
        self.sorted().into_iter().next()
    }

    /// The best current score among every team other than `team`. Zero when
    /// no rival exists.
    pub fn best_excluding(&self, team: &str) -> u32 {
        self.totals
            .iter()
            .filter(|(t, _)| t.as_str() != team)
            .map(|(_, p)| *p)
            .max()
            .unwrap_or(0)
    }
}

/// Tally points from all completed scorable finals plus complete combined
/// groups. Prelims and incomplete groups contribute nothing. Every team
/// seen anywhere in the snapshot appears, at zero if it has not scored.
pub fn compute_standings(snapshot: &MeetSnapshot) -> Standings {
    let mut totals: BTreeMap<String, u32> =
        snapshot.teams().into_iter().map(|t| (t, 0)).collect();

    for event in snapshot.completed_finals() {
        for result in &event.results {
            let pts = points_for_place(result.place);
            if pts > 0 {
                *totals.entry(result.entrant.team().to_string()).or_insert(0) += pts;
            }
        }
    }

    for group in &snapshot.combined_groups {
        if !group.is_complete(snapshot) {
            continue;
        }
        let Some(standings_event) = snapshot.event(&group.standings_event) else {
            continue;
        };
        for result in &standings_event.results {
            let pts = points_for_place(result.place);
            if pts > 0 {
                *totals.entry(result.entrant.team().to_string()).or_insert(0) += pts;
            }
        }
    }

    debug!(
        "standings recomputed for snapshot v{}: {} teams",
        snapshot.version,
        totals.len()
    );
    Standings { totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use crate::models::{Discipline, Entrant, EventKind, EventRound, EventStatus};

    #[test]
    fn completed_final_scores_by_the_table() {
        let snapshot = fixtures::snapshot(vec![fixtures::completed_sprint_final("002")], vec![]);
        let standings = compute_standings(&snapshot);
        assert_eq!(standings.get("Summit"), 15);
        assert_eq!(standings.get("Westlake"), 11);
        assert_eq!(standings.get("Northfield"), 9);
        assert_eq!(standings.get("Ridgeview"), 4);
    }

    #[test]
    fn prelims_never_score() {
        let mut prelim = fixtures::event(
            "002-1",
            Discipline::Sprint60,
            EventRound::Prelim,
            EventStatus::Completed,
        );
        prelim.results.push(fixtures::result(Entrant::athlete("A. Okafor", "Summit"), 1, "6.60"));
        let snapshot = fixtures::snapshot(vec![prelim], vec![]);
        let standings = compute_standings(&snapshot);
        assert_eq!(standings.get("Summit"), 0);
    }

    #[test]
    fn incomplete_event_scores_nothing_even_with_partial_results() {
        let mut ev = fixtures::event(
            "004",
            Discipline::Mile,
            EventRound::Final,
            EventStatus::InProgress,
        );
        ev.results.push(fixtures::result(Entrant::athlete("M. Reyes", "Summit"), 1, "4:01.77"));
        let snapshot = fixtures::snapshot(vec![ev], vec![]);
        assert_eq!(compute_standings(&snapshot).get("Summit"), 0);
    }

    #[test]
    fn incomplete_combined_group_is_atomic() {
        let mut sub = fixtures::event(
            "070",
            Discipline::Heptathlon,
            EventRound::Final,
            EventStatus::Completed,
        );
        sub.kind = EventKind::CombinedSubEvent;
        let mut standings_ev = fixtures::event(
            "079",
            Discipline::Heptathlon,
            EventRound::Final,
            EventStatus::InProgress,
        );
        standings_ev.kind = EventKind::CombinedStandings;
        standings_ev
            .results
            .push(fixtures::result(Entrant::athlete("P. Lindqvist", "Westlake"), 1, "5:30.00"));

        let group = fixtures::group("hep", &["070"], "079");
        let snapshot = fixtures::snapshot(vec![sub, standings_ev.clone()], vec![group.clone()]);
        assert_eq!(
            compute_standings(&snapshot).get("Westlake"),
            0,
            "group with in-progress standings must contribute zero"
        );

        // Completing the standings event releases the full award in one step.
        let mut done = standings_ev;
        done.status = EventStatus::Completed;
        let mut sub2 = fixtures::event(
            "070",
            Discipline::Heptathlon,
            EventRound::Final,
            EventStatus::Completed,
        );
        sub2.kind = EventKind::CombinedSubEvent;
        let snapshot = fixtures::snapshot(vec![sub2, done], vec![group]);
        assert_eq!(compute_standings(&snapshot).get("Westlake"), 10);
    }

    #[test]
    fn recompute_is_idempotent() {
        let snapshot = fixtures::snapshot(vec![fixtures::completed_sprint_final("002")], vec![]);
        let first = compute_standings(&snapshot);
        let second = compute_standings(&snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn conservation_full_event_awards_39() {
        let snapshot = fixtures::snapshot(vec![fixtures::completed_sprint_final("002")], vec![]);
        let total: u32 = compute_standings(&snapshot).iter().map(|(_, p)| p).sum();
        assert_eq!(total, 39);
    }

    #[test]
    fn best_excluding_ignores_the_named_team() {
        let snapshot = fixtures::snapshot(vec![fixtures::completed_sprint_final("002")], vec![]);
        let standings = compute_standings(&snapshot);
        assert_eq!(standings.best_excluding("Summit"), 11);
        assert_eq!(standings.best_excluding("Westlake"), 15);
    }
}
