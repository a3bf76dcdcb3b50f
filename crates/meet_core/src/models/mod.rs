pub mod combined;
pub mod entry;
pub mod event;
pub mod mark;
pub mod rankings;
pub mod snapshot;
pub mod team;

#[cfg(test)]
pub(crate) mod fixtures;

pub use combined::CombinedEventGroup;
pub use entry::{Entrant, EventResult, SeedMark, SeedSource, StartListEntry};
pub use event::{
    Discipline, DisciplineCategory, EventId, EventKind, EventRound, EventStatus, Gender,
    MarkOrdering, MeetEvent,
};
pub use mark::Mark;
pub use rankings::{SeasonRankingEntry, SeasonRankings};
pub use snapshot::{IntegrityWarning, MeetSnapshot};
pub use team::{Athlete, Team};
