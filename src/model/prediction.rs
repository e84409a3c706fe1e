//! Delay prediction request/response types.
//!
//! The prediction model lives in the backend; these types only mirror the
//! `POST /predict` wire contract.

use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionInput {
    /// Origin zone slug ("zone-a", ...).
    pub from_zone: String,
    /// Destination zone slug.
    pub to_zone: String,
    /// Delivery time slot slug ("morning", "afternoon", "evening").
    pub time_slot: String,
    /// Traffic level slug ("low", "medium", "high").
    pub traffic: String,
    /// Weather conditions slug ("clear", "rain", "storm").
    pub weather: String,
    /// Package weight in kg.
    pub weight: f64,
    /// Route distance in km.
    pub distance: f64,
}

/// Response body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionOutcome {
    /// Backend delay classification (0 = on time, 1 = delayed).
    pub delay_class: i64,
    /// Classifier confidence, percent.
    pub delay_confidence: f64,
    /// Estimated delivery duration in minutes.
    pub estimated_duration_min: f64,
}

impl PredictionOutcome {
    /// Whether the backend classified this delivery as delayed.
    pub fn is_delayed(&self) -> bool {
        self.delay_class != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_serializes_to_backend_field_names() {
        let input = PredictionInput {
            from_zone: "zone-a".to_string(),
            to_zone: "zone-c".to_string(),
            time_slot: "morning".to_string(),
            traffic: "high".to_string(),
            weather: "rain".to_string(),
            weight: 4.5,
            distance: 12.0,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["from_zone"], "zone-a");
        assert_eq!(json["traffic"], "high");
        assert_eq!(json["weight"], 4.5);
    }

    #[test]
    fn outcome_deserializes_and_classifies() {
        let body = r#"{"delay_class":1,"delay_confidence":87.5,"estimated_duration_min":42.3}"#;
        let outcome: PredictionOutcome = serde_json::from_str(body).unwrap();
        assert!(outcome.is_delayed());
        assert_eq!(outcome.delay_confidence, 87.5);

        let body = r#"{"delay_class":0,"delay_confidence":60.0,"estimated_duration_min":25.0}"#;
        let outcome: PredictionOutcome = serde_json::from_str(body).unwrap();
        assert!(!outcome.is_delayed());
    }
}
