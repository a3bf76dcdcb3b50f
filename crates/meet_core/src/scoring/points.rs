//! The championship placement-to-points table. Pure lookup, no state.

/// Points by place, index 0 = first place. Places beyond eighth score zero.
pub const PLACE_POINTS: [u32; 8] = [10, 8, 6, 5, 4, 3, 2, 1];

/// Deepest scoring place.
pub const SCORING_DEPTH: usize = 8;

/// Total points one event can award: 10+8+6+5+4+3+2+1.
pub const MAX_EVENT_POINTS: u32 = 39;

/// Points for an official place. Anything outside 1..=8, including a
/// missing place, maps to zero.
pub fn points_for_place(place: Option<u32>) -> u32 {
    match place {
        Some(p) if (1..=SCORING_DEPTH as u32).contains(&p) => PLACE_POINTS[(p - 1) as usize],
        _ => 0,
    }
}

/// The most points `k` entrants from one team can take out of a single
/// event: the top `k` table values, capped at the eight scoring slots.
pub fn top_k_points(k: usize) -> u32 {
    PLACE_POINTS.iter().take(k.min(SCORING_DEPTH)).sum()
}
