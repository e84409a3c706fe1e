//! Zone/time delivery-intensity heatmap model.
//!
//! The backend computes intensity per (zone, time slot) cell; this module
//! only models the grid. Cells implement [`TableRecord`] so the shared
//! pipeline provides zone filtering and CSV export of the grid for free.

use crate::model::record::SortField;
use crate::model::{RecordId, TableRecord};

/// One cell of the zone/time heatmap from `GET /heatmap-data`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    /// Synthetic id: `<zone>@<time-slot>`.
    pub id: RecordId,
    /// Delivery zone label ("Zone A", ...). Doubles as the category tag.
    pub zone: String,
    /// Time slot label ("6AM-8AM", ...).
    pub time_slot: String,
    /// Delivery intensity, clamped to 0-100 at ingestion.
    pub intensity: f64,
}

/// The single sortable field of a heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeatmapSortField {
    /// Sort by delivery intensity.
    #[default]
    Intensity,
}

impl SortField for HeatmapSortField {
    fn label(self) -> &'static str {
        "intensity"
    }

    fn next(self) -> Self {
        self
    }
}

impl TableRecord for HeatmapCell {
    type SortField = HeatmapSortField;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> &str {
        self.zone.as_str()
    }

    fn category(&self) -> &str {
        &self.zone
    }

    fn sort_key(&self, _field: HeatmapSortField) -> f64 {
        self.intensity
    }
}

/// Intensity bucket driving the heatmap color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityBucket {
    /// 0-19
    Low,
    /// 20-39
    Medium,
    /// 40-59
    High,
    /// 60-79
    VeryHigh,
    /// 80-100
    Critical,
}

impl IntensityBucket {
    /// Classify a clamped intensity value.
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity >= 80.0 {
            Self::Critical
        } else if intensity >= 60.0 {
            Self::VeryHigh
        } else if intensity >= 40.0 {
            Self::High
        } else if intensity >= 20.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Legend label for this bucket.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low (0-20)",
            Self::Medium => "Medium (20-40)",
            Self::High => "High (40-60)",
            Self::VeryHigh => "Very High (60-80)",
            Self::Critical => "Critical (80-100)",
        }
    }
}

/// Grid view over a flat cell collection.
///
/// Zones and time slots are taken in first-appearance order so the grid
/// matches the backend's layout. Missing cells render as absent rather than
/// zero, keeping "no data" distinct from "no deliveries".
#[derive(Debug, Clone, Default)]
pub struct HeatmapGrid {
    /// Distinct zone labels, row order.
    pub zones: Vec<String>,
    /// Distinct time slot labels, column order.
    pub time_slots: Vec<String>,
    cells: Vec<HeatmapCell>,
}

impl HeatmapGrid {
    /// Build a grid from flat cells.
    pub fn from_cells(cells: &[HeatmapCell]) -> Self {
        let mut zones: Vec<String> = Vec::new();
        let mut time_slots: Vec<String> = Vec::new();
        for cell in cells {
            if !zones.contains(&cell.zone) {
                zones.push(cell.zone.clone());
            }
            if !time_slots.contains(&cell.time_slot) {
                time_slots.push(cell.time_slot.clone());
            }
        }
        Self {
            zones,
            time_slots,
            cells: cells.to_vec(),
        }
    }

    /// Intensity at (zone, time slot), if the backend reported that cell.
    pub fn intensity(&self, zone: &str, time_slot: &str) -> Option<f64> {
        self.cells
            .iter()
            .find(|c| c.zone == zone && c.time_slot == time_slot)
            .map(|c| c.intensity)
    }
}
