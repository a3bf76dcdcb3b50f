use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::snapshot::MeetSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    pub name: String,
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub roster: Vec<Athlete>,
}

impl Team {
    /// Reconstruct team rosters from everything entered anywhere in the
    /// snapshot. Relay squads contribute no named athletes.
    pub fn rosters(snapshot: &MeetSnapshot) -> Vec<Team> {
        let mut by_team: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for event in &snapshot.events {
            let entrants = event
                .entries
                .iter()
                .map(|e| &e.entrant)
                .chain(event.results.iter().map(|r| &r.entrant));
            for entrant in entrants {
                let names = by_team.entry(entrant.team().to_string()).or_default();
                if let Some(name) = entrant.athlete_name() {
                    if !names.iter().any(|n| n == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }
        by_team
            .into_iter()
            .map(|(team, names)| Team {
                roster: names
                    .into_iter()
                    .map(|name| Athlete { name, team: team.clone() })
                    .collect(),
                name: team,
            })
            .collect()
    }
}
