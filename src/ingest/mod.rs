//! Ingestion of backend JSON into domain records.
//!
//! The backend serves loosely-typed JSON arrays: numbers sometimes arrive as
//! strings, fields go missing, and rate values occasionally carry an embedded
//! percent sign. All of that is resolved here, at the boundary, so the rest
//! of the crate only ever sees finite numbers and non-empty ids:
//!
//! - missing or unparseable numerics coerce to `0.0`, never NaN or an error,
//! - derived ratios (cost per km) treat division by zero as `0.0`,
//! - a trailing `%` is stripped before parsing rate values,
//! - missing categorical tags default to [`UNKNOWN_TAG`],
//! - rows without an id get a synthesized positional one.
//!
//! Only a body that fails to parse as a JSON array at all produces a
//! [`FetchError::Decode`]; individual malformed rows are coerced, not
//! dropped, so row counts stay honest.

use crate::model::{Delivery, FetchError, HeatmapCell, RecordId, Supplier, UNKNOWN_TAG};
use serde_json::Value;
use tracing::warn;

/// Coerce a loosely-typed JSON value to a finite f64.
///
/// Strings are trimmed and may carry a trailing `%`. Anything that does not
/// resolve to a finite number becomes `0.0`.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Coerce a JSON value to a non-empty string, falling back to `default`.
pub fn coerce_tag(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Safe ratio: zero denominator (or any non-finite result) yields `0.0`.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Look up the first present field among several candidate key spellings.
///
/// The backend emits snake_case but older payloads used camelCase; accepting
/// both keeps ingestion tolerant of either revision.
fn field<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(k))
}

fn parse_array(body: &str, endpoint: &str) -> Result<Vec<Value>, FetchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| FetchError::Decode {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(FetchError::Decode {
            endpoint: endpoint.to_string(),
            reason: format!("expected a JSON array, got {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fallible-free id extraction: use the given keys, else synthesize
/// `<prefix>-<index>`.
fn record_id(obj: &Value, keys: &[&str], prefix: &str, index: usize) -> RecordId {
    let raw = coerce_tag(field(obj, keys), "");
    match RecordId::new(raw) {
        Ok(id) => id,
        Err(_) => {
            warn!(prefix, index, "row has no usable id, synthesizing one");
            RecordId::new(format!("{prefix}-{index}"))
                .unwrap_or_else(|_| unreachable!("synthesized id is non-empty"))
        }
    }
}

/// Parse the `GET /cost-analysis` body into delivery records.
///
/// `cost_per_km` is derived once here; views never recompute it.
pub fn parse_deliveries(body: &str) -> Result<Vec<Delivery>, FetchError> {
    let items = parse_array(body, "/cost-analysis")?;
    let deliveries = items
        .iter()
        .enumerate()
        .map(|(i, obj)| {
            let cost = coerce_number(field(obj, &["cost", "delivery_cost"]));
            let distance = coerce_number(field(obj, &["distance", "delivery_distance_km"]));
            Delivery {
                id: record_id(obj, &["order_id", "orderId"], "delivery", i),
                supplier: coerce_tag(field(obj, &["supplier"]), UNKNOWN_TAG),
                cost,
                distance,
                duration: coerce_number(field(obj, &["duration", "delivery_duration_min"])),
                cost_per_km: ratio(cost, distance),
                anomaly_type: coerce_tag(field(obj, &["anomaly_type", "anomalyType"]), UNKNOWN_TAG),
                status: coerce_tag(field(obj, &["status"]), UNKNOWN_TAG),
            }
        })
        .collect();
    Ok(deliveries)
}

/// Parse the `GET /supplier-scores` body into supplier KPI records.
pub fn parse_suppliers(body: &str) -> Result<Vec<Supplier>, FetchError> {
    let items = parse_array(body, "/supplier-scores")?;
    let suppliers = items
        .iter()
        .enumerate()
        .map(|(i, obj)| Supplier {
            id: record_id(obj, &["supplier", "name"], "supplier", i),
            reliability_score: coerce_number(field(
                obj,
                &["reliability_score", "reliabilityScore", "score"],
            )),
            on_time_rate: coerce_number(field(obj, &["on_time_rate", "onTimeRate"])),
            severe_delay_rate: coerce_number(field(
                obj,
                &["severe_delay_rate", "severeDelayRate"],
            )),
            avg_predicted_delay: coerce_number(field(
                obj,
                &["avg_predicted_delay", "avgPredictedDelay"],
            )),
            avg_actual_delay: coerce_number(field(obj, &["avg_actual_delay", "avgActualDelay"])),
            order_volume: coerce_number(field(obj, &["order_volume", "orderVolume"])),
            avg_distance: coerce_number(field(obj, &["avg_distance", "avgDistance"])),
            distance_efficiency: coerce_number(field(
                obj,
                &["distance_efficiency", "distanceEfficiency"],
            )),
            weather_resilience: coerce_number(field(
                obj,
                &["weather_resilience", "weatherResilience"],
            )),
            zones_served: coerce_number(field(obj, &["zones_served", "zonesServed"])),
            tier: coerce_tag(field(obj, &["tier"]), UNKNOWN_TAG),
        })
        .collect();
    Ok(suppliers)
}

/// Parse the `GET /heatmap-data` body into heatmap cells.
///
/// Intensity is clamped to 0-100 on top of the usual numeric coercion.
pub fn parse_heatmap_cells(body: &str) -> Result<Vec<HeatmapCell>, FetchError> {
    let items = parse_array(body, "/heatmap-data")?;
    let cells = items
        .iter()
        .enumerate()
        .map(|(i, obj)| {
            let zone = coerce_tag(field(obj, &["zone"]), UNKNOWN_TAG);
            let time_slot = coerce_tag(field(obj, &["time_slot", "timeSlot"]), UNKNOWN_TAG);
            let intensity = coerce_number(field(obj, &["intensity"])).clamp(0.0, 100.0);
            let id = RecordId::new(format!("{zone}@{time_slot}"))
                .unwrap_or_else(|_| record_id(obj, &[], "cell", i));
            HeatmapCell {
                id,
                zone,
                time_slot,
                intensity,
            }
        })
        .collect();
    Ok(cells)
}
