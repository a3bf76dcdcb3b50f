//! JSON boundary for embedding hosts (dashboards, bots, schedulers).
//!
//! Requests and responses are schema-versioned strings so callers in any
//! runtime can drive the engine without linking against the crate's types.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoringError};
use crate::models::{Gender, MeetSnapshot, SeasonRankings};
use crate::report::{run_full_analysis, MeetReport};
use crate::scoring::{SimulationConfig, DEFAULT_TRIALS};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub schema_version: u8,
    /// Fixed simulation seed; omit for an entropy-seeded run.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub trials: Option<u32>,
    /// Restrict the report to one side's team race.
    #[serde(default)]
    pub gender: Option<Gender>,
    pub snapshot: MeetSnapshot,
    #[serde(default)]
    pub rankings: SeasonRankings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub schema_version: u8,
    pub report: MeetReport,
}

/// Parse a request, run the full analysis, and serialize the report.
pub fn analyze_meet_json(request: &str) -> Result<String> {
    let request: AnalysisRequest = serde_json::from_str(request)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(ScoringError::SchemaVersion {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let snapshot = match request.gender {
        Some(gender) => request.snapshot.for_gender(gender),
        None => request.snapshot,
    };

    let config = SimulationConfig {
        trials: request.trials.unwrap_or(DEFAULT_TRIALS),
        seed: request.seed,
        ..SimulationConfig::default()
    };

    let report = run_full_analysis(&snapshot, &request.rankings, &config)?;
    let response = AnalysisResponse { schema_version: SCHEMA_VERSION, report };
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use serde_json::json;

    fn request_json(seed: u64) -> String {
        let snapshot = fixtures::snapshot(vec![fixtures::completed_sprint_final("002")], vec![]);
        json!({
            "schema_version": 1,
            "seed": seed,
            "trials": 500,
            "snapshot": serde_json::to_value(&snapshot).unwrap(),
        })
        .to_string()
    }

    #[test]
    fn analyze_produces_a_versioned_report() {
        let out = analyze_meet_json(&request_json(42)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["report"]["teams"][0]["team"], "Summit");
        assert_eq!(parsed["report"]["teams"][0]["current"], 15);
    }

    #[test]
    fn same_request_same_output() {
        let request = request_json(999);
        let a = analyze_meet_json(&request).unwrap();
        let b = analyze_meet_json(&request).unwrap();
        assert_eq!(a, b, "a seeded request must be fully deterministic");
    }

    #[test]
    fn wrong_schema_version_is_rejected() {
        let snapshot = fixtures::snapshot(vec![], vec![]);
        let request = json!({
            "schema_version": 9,
            "snapshot": serde_json::to_value(&snapshot).unwrap(),
        })
        .to_string();
        let err = analyze_meet_json(&request).unwrap_err();
        assert!(matches!(err, ScoringError::SchemaVersion { found: 9, expected: 1 }));
    }

    #[test]
    fn malformed_request_is_a_deserialization_error() {
        let err = analyze_meet_json("{not json").unwrap_err();
        assert!(matches!(err, ScoringError::Deserialization(_)));
    }
}
