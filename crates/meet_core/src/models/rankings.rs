//! Pre-meet season rankings, loaded once per meet from an offline source.
//!
//! Used as the fallback seed basis for entrants whose start list carries no
//! mark, and as the seed order for combined-event forecasting.

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::event::Discipline;
use super::mark::Mark;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRankingEntry {
    pub athlete: String,
    pub team: String,
    pub discipline: Discipline,
    /// National descending-order list position, 1 = best.
    pub rank: u32,
    pub mark: Mark,
}

/// The full pre-meet ranking table, indexed for athlete lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SeasonRankingEntry>", into = "Vec<SeasonRankingEntry>")]
pub struct SeasonRankings {
    entries: Vec<SeasonRankingEntry>,
    #[serde(skip)]
    index: HashMap<(Discipline, String), usize>,
}

impl SeasonRankings {
    pub fn new(entries: Vec<SeasonRankingEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| ((e.discipline, e.athlete.clone()), i))
            .collect();
        SeasonRankings { entries, index }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<SeasonRankingEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let entries: Vec<SeasonRankingEntry> = serde_json::from_reader(reader)?;
        Ok(Self::new(entries))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, athlete: &str, discipline: Discipline) -> Option<&SeasonRankingEntry> {
        self.index.get(&(discipline, athlete.to_string())).map(|&i| &self.entries[i])
    }

    /// Season-best mark for an athlete in a discipline, if ranked.
    pub fn best_mark(&self, athlete: &str, discipline: Discipline) -> Option<Mark> {
        self.entry(athlete, discipline).map(|e| e.mark)
    }

    /// National rank for an athlete in a discipline, if ranked.
    pub fn rank(&self, athlete: &str, discipline: Discipline) -> Option<u32> {
        self.entry(athlete, discipline).map(|e| e.rank)
    }
}

impl From<Vec<SeasonRankingEntry>> for SeasonRankings {
    fn from(entries: Vec<SeasonRankingEntry>) -> Self {
        Self::new(entries)
    }
}

impl From<SeasonRankings> for Vec<SeasonRankingEntry> {
    fn from(rankings: SeasonRankings) -> Self {
        rankings.entries
    }
}
