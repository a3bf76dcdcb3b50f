//! Ranks the remaining units by how much they can still move the team race.
//!
//! `swing` is the most points any single entered team could extract from the
//! unit alone (same per-event cap as the ceiling). The weighted value folds
//! in how close the entered teams currently are:
//!
//!     weighted = swing / (1 + gap)
//!
//! where `gap` is the absolute current-score difference between the two
//! best-placed teams entered in that unit. A unit with fewer than two teams
//! entered cannot shuffle relative standings and weighs zero.

use serde::{Deserialize, Serialize};

use super::points::top_k_points;
use super::standings::Standings;
use super::{remaining_units, RemainingUnit};
use crate::models::{Discipline, EventId, Gender, MeetSnapshot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverageEntry {
    pub event_id: EventId,
    pub discipline: Discipline,
    pub gender: Gender,
    /// Max points a single entered team could take from this unit.
    pub swing: u32,
    /// Current-score gap between the two best-placed entered teams.
    pub gap: u32,
    /// `swing / (1 + gap)`; zero when fewer than two teams are entered.
    pub weighted: f64,
    /// Entered teams, best current score first.
    pub teams_entered: Vec<String>,
}

/// Leverage for every remaining unit, descending by weighted value; ties
/// break by raw swing then event id so the order is total.
pub fn rank_leverage(snapshot: &MeetSnapshot, standings: &Standings) -> Vec<LeverageEntry> {
    let mut entries: Vec<LeverageEntry> = remaining_units(snapshot)
        .iter()
        .map(|unit| leverage_for(unit, snapshot, standings))
        .collect();

    entries.sort_by(|a, b| {
        b.weighted
            .total_cmp(&a.weighted)
            .then_with(|| b.swing.cmp(&a.swing))
            .then_with(|| a.event_id.cmp(&b.event_id))
    });
    entries
}

fn leverage_for(
    unit: &RemainingUnit<'_>,
    snapshot: &MeetSnapshot,
    standings: &Standings,
) -> LeverageEntry {
    let counts = unit.team_entrant_counts(snapshot);
    let swing = counts.values().map(|&k| top_k_points(k)).max().unwrap_or(0);

    let mut teams: Vec<(String, u32)> =
        counts.keys().map(|t| (t.clone(), standings.get(t))).collect();
    teams.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let (gap, weighted) = match (teams.first(), teams.get(1)) {
        (Some(first), Some(second)) => {
            let gap = first.1 - second.1;
            (gap, swing as f64 / (1.0 + gap as f64))
        }
        _ => (0, 0.0),
    };

    let gender = match unit {
        RemainingUnit::Event(e) => e.gender,
        RemainingUnit::Group(g) => g.gender,
    };

    LeverageEntry {
        event_id: unit.id().clone(),
        discipline: unit.discipline(),
        gender,
        swing,
        gap,
        weighted,
        teams_entered: teams.into_iter().map(|(t, _)| t).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use crate::models::{Discipline, Entrant, EventRound, EventStatus};
    use crate::scoring::compute_standings;

    #[test]
    fn closer_teams_make_an_event_more_leveraged() {
        let done = fixtures::completed_sprint_final("002");

        // Same swing (one entrant each), different contenders.
        let mut tight = fixtures::event(
            "005",
            Discipline::Sprint200,
            EventRound::Final,
            EventStatus::Scheduled,
        );
        // Summit (15) vs Westlake (11): gap 4.
        tight.entries.push(fixtures::entry(Entrant::athlete("A", "Summit"), None));
        tight.entries.push(fixtures::entry(Entrant::athlete("B", "Westlake"), None));

        let mut lopsided = fixtures::event(
            "006",
            Discipline::Sprint400,
            EventRound::Final,
            EventStatus::Scheduled,
        );
        // Summit (15) vs Ridgeview (4): gap 11.
        lopsided.entries.push(fixtures::entry(Entrant::athlete("C", "Summit"), None));
        lopsided.entries.push(fixtures::entry(Entrant::athlete("D", "Ridgeview"), None));

        let snapshot = fixtures::snapshot(vec![done, tight, lopsided], vec![]);
        let standings = compute_standings(&snapshot);
        let ranked = rank_leverage(&snapshot, &standings);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].event_id, crate::models::EventId::new("005"));
        assert_eq!(ranked[0].swing, 10);
        assert_eq!(ranked[0].gap, 4);
        assert!((ranked[0].weighted - 2.0).abs() < 1e-9);
        assert_eq!(ranked[1].gap, 11);
        assert!(ranked[0].weighted > ranked[1].weighted);
    }

    #[test]
    fn deeper_entry_lists_raise_swing() {
        let mut ev = fixtures::event(
            "005",
            Discipline::Sprint200,
            EventRound::Final,
            EventStatus::Scheduled,
        );
        for name in ["A", "B", "C"] {
            ev.entries.push(fixtures::entry(Entrant::athlete(name, "Summit"), None));
        }
        ev.entries.push(fixtures::entry(Entrant::athlete("D", "Westlake"), None));
        let snapshot = fixtures::snapshot(vec![ev], vec![]);
        let standings = compute_standings(&snapshot);
        let ranked = rank_leverage(&snapshot, &standings);

        // Three Summit entrants: 10 + 8 + 6.
        assert_eq!(ranked[0].swing, 24);
    }

    #[test]
    fn single_team_event_weighs_zero() {
        let mut ev = fixtures::event(
            "005",
            Discipline::Sprint200,
            EventRound::Final,
            EventStatus::Scheduled,
        );
        ev.entries.push(fixtures::entry(Entrant::athlete("A", "Summit"), None));
        let snapshot = fixtures::snapshot(vec![ev], vec![]);
        let standings = compute_standings(&snapshot);
        let ranked = rank_leverage(&snapshot, &standings);

        assert_eq!(ranked[0].swing, 10);
        assert_eq!(ranked[0].weighted, 0.0);
    }

    #[test]
    fn order_is_total_and_deterministic() {
        let mut a = fixtures::event(
            "010",
            Discipline::Sprint200,
            EventRound::Final,
            EventStatus::Scheduled,
        );
        a.entries.push(fixtures::entry(Entrant::athlete("A", "Summit"), None));
        a.entries.push(fixtures::entry(Entrant::athlete("B", "Westlake"), None));
        let mut b = a.clone();
        b.id = crate::models::EventId::new("009");

        let snapshot = fixtures::snapshot(vec![a, b], vec![]);
        let standings = compute_standings(&snapshot);
        let ranked = rank_leverage(&snapshot, &standings);

        // Identical weight and swing: id ascending breaks the tie.
        assert_eq!(ranked[0].event_id, crate::models::EventId::new("009"));
        assert_eq!(ranked[1].event_id, crate::models::EventId::new("010"));
    }
}
