//! Performance marks: track times and field measurements.
//!
//! Live results publish marks as strings ("1:45.23", "5.85m", "13-04.50",
//! "DNS"). Ingestion parses them once into a structured `Mark`; everything
//! downstream compares sort keys, never strings.

use serde::{Deserialize, Serialize};

use super::event::MarkOrdering;

/// Sort key assigned to entrants with no usable mark so they rank last.
pub const UNMARKED_SORT_KEY: f64 = 1.0e9;

/// A parsed performance mark.
///
/// `Time` is seconds; `Measure` is meters. Which variant an event expects
/// follows from its discipline's [`MarkOrdering`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mark {
    /// Track time in seconds (lower is better).
    Time(f64),
    /// Field measurement in meters (higher is better).
    Measure(f64),
}

impl Mark {
    /// Parse a raw results-page mark under the given ordering rule.
    ///
    /// Returns `None` for the non-marks (`DNS`, `DNF`, `DQ`, `NH`, `NM`,
    /// `FOUL`) and for anything unparseable; missing data excludes an
    /// entrant, it never fails a computation.
    pub fn parse(raw: &str, ordering: MarkOrdering) -> Option<Mark> {
        let cleaned = normalize(raw);
        if cleaned.is_empty() {
            return None;
        }
        match cleaned.to_ascii_uppercase().as_str() {
            "DNS" | "DNF" | "DQ" | "NH" | "NM" | "FOUL" | "SCR" => return None,
            _ => {}
        }

        let cleaned = strip_annotations(&cleaned);

        // Imperial field mark: feet-inches like "13-04.50".
        if let Some((feet, inches)) = split_feet_inches(&cleaned) {
            return Some(Mark::Measure((feet * 12.0 + inches) * 0.0254));
        }

        // Time with minutes: "1:45.23" or "9:02.11".
        if let Some((minutes, seconds)) = split_minutes_seconds(&cleaned) {
            return Some(Mark::Time(minutes * 60.0 + seconds));
        }

        // Plain decimal: a sprint time or a metric field mark, disambiguated
        // by the event's ordering rule.
        let value: f64 = cleaned.parse().ok()?;
        if value <= 0.0 {
            return None;
        }
        match ordering {
            MarkOrdering::AscendingTime => Some(Mark::Time(value)),
            MarkOrdering::DescendingMeasure => Some(Mark::Measure(value)),
        }
    }

    pub fn seconds(&self) -> Option<f64> {
        match self {
            Mark::Time(s) => Some(*s),
            Mark::Measure(_) => None,
        }
    }

    pub fn meters(&self) -> Option<f64> {
        match self {
            Mark::Time(_) => None,
            Mark::Measure(m) => Some(*m),
        }
    }

    /// Key for best-first sorting: lower is always better.
    pub fn sort_key(&self) -> f64 {
        match self {
            Mark::Time(s) => *s,
            Mark::Measure(m) => -m,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Time(s) if *s >= 60.0 => {
                let minutes = (*s / 60.0).floor();
                write!(f, "{}:{:05.2}", minutes as u64, s - minutes * 60.0)
            }
            Mark::Time(s) => write!(f, "{:.2}", s),
            Mark::Measure(m) => write!(f, "{:.2}m", m),
        }
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().replace('\u{a0}', "").replace("  ", " ")
}

/// Drop wind readings in parentheses and trailing unit/qualifier letters
/// ("5.85m", "7.21q", "6.54w").
fn strip_annotations(mark: &str) -> String {
    let mut s = match mark.find('(') {
        Some(idx) => mark[..idx].trim().to_string(),
        None => mark.to_string(),
    };
    while s.chars().last().is_some_and(|c| c.is_ascii_alphabetic()) {
        s.pop();
    }
    s.trim().to_string()
}

fn split_feet_inches(mark: &str) -> Option<(f64, f64)> {
    let (feet, inches) = mark.split_once('-')?;
    let feet: f64 = feet.parse().ok()?;
    let inches: f64 = inches.parse().ok()?;
    if feet < 0.0 || !(0.0..12.0).contains(&inches) {
        return None;
    }
    Some((feet, inches))
}

fn split_minutes_seconds(mark: &str) -> Option<(f64, f64)> {
    let (minutes, seconds) = mark.split_once(':')?;
    let minutes: f64 = minutes.parse().ok()?;
    let seconds: f64 = seconds.parse().ok()?;
    if minutes < 0.0 || !(0.0..60.0).contains(&seconds) {
        return None;
    }
    Some((minutes, seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sprint_time() {
        let mark = Mark::parse("6.54", MarkOrdering::AscendingTime).unwrap();
        assert_eq!(mark, Mark::Time(6.54));
    }

    #[test]
    fn parses_time_with_minutes() {
        let mark = Mark::parse("1:45.23", MarkOrdering::AscendingTime).unwrap();
        assert_eq!(mark.seconds(), Some(105.23));
    }

    #[test]
    fn parses_metric_field_mark() {
        let mark = Mark::parse("5.85m", MarkOrdering::DescendingMeasure).unwrap();
        assert_eq!(mark, Mark::Measure(5.85));
    }

    #[test]
    fn parses_feet_inches() {
        let mark = Mark::parse("13-04.50", MarkOrdering::DescendingMeasure).unwrap();
        let meters = mark.meters().unwrap();
        // 13 ft 4.5 in = 160.5 in = 4.0767 m
        assert!((meters - 4.0767).abs() < 1e-3, "got {}", meters);
    }

    #[test]
    fn strips_wind_annotation() {
        let mark = Mark::parse("7.21 (+1.8)", MarkOrdering::DescendingMeasure).unwrap();
        assert_eq!(mark, Mark::Measure(7.21));
    }

    #[test]
    fn non_marks_parse_to_none() {
        for raw in ["DNS", "DNF", "DQ", "NH", "NM", "FOUL", ""] {
            assert!(
                Mark::parse(raw, MarkOrdering::AscendingTime).is_none(),
                "{:?} should not parse",
                raw
            );
        }
    }

    #[test]
    fn sort_key_orders_times_ascending() {
        let fast = Mark::Time(6.54);
        let slow = Mark::Time(6.80);
        assert!(fast.sort_key() < slow.sort_key());
    }

    #[test]
    fn sort_key_orders_measures_descending() {
        let long = Mark::Measure(7.90);
        let short = Mark::Measure(7.40);
        assert!(long.sort_key() < short.sort_key(), "longer mark must rank first");
    }

    #[test]
    fn display_round_trips_minutes() {
        assert_eq!(Mark::Time(105.23).to_string(), "1:45.23");
        assert_eq!(Mark::Time(6.5).to_string(), "6.50");
        assert_eq!(Mark::Measure(5.85).to_string(), "5.85m");
    }
}
