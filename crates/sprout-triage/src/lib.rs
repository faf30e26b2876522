//! # sprout-triage
//!
//! A deterministic rule engine for symptom escalation. Explicitly
//! non-diagnostic: it decides whether reported symptoms warrant watching or
//! urgent escalation to the care team, nothing more. Thresholds follow the
//! discharge-guidance rules the assistant explains to guardians.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fever at or above this forces high risk.
pub const FEVER_HIGH_C: f64 = 39.0;
/// Fever at or above this (but below high) forces at least watch.
pub const FEVER_WATCH_C: f64 = 38.5;
/// Pain score (0-10) at or above this forces at least watch.
pub const PAIN_WATCH: u8 = 7;
/// Vomiting events within six hours at or above this force at least watch.
pub const VOMITING_WATCH_6H: u32 = 2;

/// Guardian-reported symptoms. Every field is optional; absent inputs
/// simply contribute nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomReport {
    /// Body temperature in °C.
    pub fever_c: Option<f64>,
    /// Pain on a 0-10 scale.
    pub pain_0_10: Option<u8>,
    /// Vomiting events in the last six hours.
    pub vomiting_events_6h: Option<u32>,
    pub breathing_difficulty: Option<bool>,
}

/// Escalation level. Ordered: rules only ever escalate, so `Watch` never
/// downgrades an already `HighRisk` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Normal,
    Watch,
    HighRisk,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Normal => "normal",
            RiskLevel::Watch => "watch",
            RiskLevel::HighRisk => "high_risk",
        };
        f.write_str(s)
    }
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// 1 when the guardian should be told to seek immediate care.
    pub alert_flag: u8,
    /// One human-readable line per triggered rule.
    pub reasons: Vec<String>,
}

/// Apply the escalation rules to a symptom report.
pub fn evaluate(symptoms: &SymptomReport) -> RiskAssessment {
    let mut risk = RiskLevel::Normal;
    let mut alert = 0;
    let mut reasons = Vec::new();

    if let Some(fever) = symptoms.fever_c {
        if fever >= FEVER_HIGH_C {
            risk = RiskLevel::HighRisk;
            alert = 1;
            reasons.push(format!("High fever (>= {FEVER_HIGH_C:.1} °C)."));
        } else if fever >= FEVER_WATCH_C {
            risk = risk.max(RiskLevel::Watch);
            reasons.push("Mild fever in recovery range.".to_string());
        }
    }

    if let Some(pain) = symptoms.pain_0_10 {
        if pain >= PAIN_WATCH {
            risk = risk.max(RiskLevel::Watch);
            reasons.push(format!("Pain level {PAIN_WATCH} or above."));
        }
    }

    if let Some(events) = symptoms.vomiting_events_6h {
        if events >= VOMITING_WATCH_6H {
            risk = risk.max(RiskLevel::Watch);
            reasons.push(format!(
                "Repeated vomiting (>= {VOMITING_WATCH_6H} times in 6h)."
            ));
        }
    }

    // Breathing difficulty overrides everything.
    if symptoms.breathing_difficulty == Some(true) {
        risk = RiskLevel::HighRisk;
        alert = 1;
        reasons.push("Breathing difficulty reported.".to_string());
    }

    RiskAssessment {
        risk_level: risk,
        alert_flag: alert,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_symptoms_is_normal() {
        let result = evaluate(&SymptomReport::default());
        assert_eq!(result.risk_level, RiskLevel::Normal);
        assert_eq!(result.alert_flag, 0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_high_fever_is_high_risk() {
        let result = evaluate(&SymptomReport {
            fever_c: Some(39.2),
            ..Default::default()
        });
        assert_eq!(result.risk_level, RiskLevel::HighRisk);
        assert_eq!(result.alert_flag, 1);
        assert_eq!(result.reasons, ["High fever (>= 39.0 °C)."]);
    }

    #[test]
    fn test_mild_fever_is_watch_without_alert() {
        let result = evaluate(&SymptomReport {
            fever_c: Some(38.6),
            ..Default::default()
        });
        assert_eq!(result.risk_level, RiskLevel::Watch);
        assert_eq!(result.alert_flag, 0);
    }

    #[test]
    fn test_fever_just_below_watch_is_normal() {
        let result = evaluate(&SymptomReport {
            fever_c: Some(38.4),
            ..Default::default()
        });
        assert_eq!(result.risk_level, RiskLevel::Normal);
    }

    #[test]
    fn test_breathing_difficulty_alone_is_high_risk() {
        let result = evaluate(&SymptomReport {
            breathing_difficulty: Some(true),
            ..Default::default()
        });
        assert_eq!(result.risk_level, RiskLevel::HighRisk);
        assert_eq!(result.alert_flag, 1);
        assert_eq!(result.reasons, ["Breathing difficulty reported."]);
    }

    #[test]
    fn test_breathing_difficulty_false_contributes_nothing() {
        let result = evaluate(&SymptomReport {
            breathing_difficulty: Some(false),
            ..Default::default()
        });
        assert_eq!(result.risk_level, RiskLevel::Normal);
    }

    #[test]
    fn test_pain_and_vomiting_force_watch() {
        let result = evaluate(&SymptomReport {
            pain_0_10: Some(7),
            vomiting_events_6h: Some(2),
            ..Default::default()
        });
        assert_eq!(result.risk_level, RiskLevel::Watch);
        assert_eq!(result.alert_flag, 0);
        assert_eq!(result.reasons.len(), 2);
    }

    #[test]
    fn test_watch_rules_never_downgrade_high_risk() {
        let result = evaluate(&SymptomReport {
            fever_c: Some(39.5),
            pain_0_10: Some(8),
            vomiting_events_6h: Some(3),
            ..Default::default()
        });
        assert_eq!(result.risk_level, RiskLevel::HighRisk);
        assert_eq!(result.alert_flag, 1);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn test_risk_level_serializes_snake_case() {
        let json = serde_json::to_string(&RiskLevel::HighRisk).unwrap();
        assert_eq!(json, "\"high_risk\"");
        assert_eq!(RiskLevel::HighRisk.to_string(), "high_risk");
    }
}
