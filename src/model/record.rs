//! Domain records consumed by the table pipeline.
//!
//! A record is one row of analytics data computed by the backend: an
//! anomalous delivery or a supplier KPI row. The analytic values themselves
//! (anomaly classification, reliability score) are opaque here; this module
//! only guarantees the invariants the pipeline relies on:
//!
//! - every record has a stable non-empty [`RecordId`],
//! - every numeric field is finite (ingestion coerces junk to `0.0`),
//! - the categorical tag defaults to `"unknown"` when the source omits it.

use crate::model::RecordId;

/// Sentinel tag used when a record's category is absent from source data.
pub const UNKNOWN_TAG: &str = "unknown";

/// A sortable numeric field that the controls row can label and cycle.
///
/// Implemented by each record type's sort-field enum so the generic table
/// state can step through sort options without knowing the record type.
pub trait SortField: Copy + Eq + Default {
    /// Short label for the controls row.
    fn label(self) -> &'static str;

    /// Next field in the sort cycle (wraps).
    fn next(self) -> Self;
}

/// A row that can flow through the filter/sort/paginate/export pipeline.
///
/// The pipeline is generic over this trait so deliveries, suppliers, and
/// heatmap cells share one implementation of filtering, sorting, pagination,
/// and CSV export.
pub trait TableRecord {
    /// Which numeric field a view can sort this record type by.
    type SortField: SortField;

    /// Stable identifier, used as render and selection key.
    fn id(&self) -> &RecordId;

    /// The text field matched against the free-text search (case-insensitive
    /// substring).
    fn search_text(&self) -> &str;

    /// The categorical tag matched against the category filter.
    fn category(&self) -> &str;

    /// Resolve a sort field to its numeric value. Always finite.
    fn sort_key(&self, field: Self::SortField) -> f64;
}

// ===== Delivery =====

/// One anomalous delivery from `GET /cost-analysis`.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// Order identifier (search key).
    pub id: RecordId,
    /// Supplier that handled the delivery.
    pub supplier: String,
    /// Total delivery cost.
    pub cost: f64,
    /// Delivery distance in km.
    pub distance: f64,
    /// Delivery duration in minutes.
    pub duration: f64,
    /// Cost per km, derived once at ingestion. Zero when distance is zero.
    pub cost_per_km: f64,
    /// Anomaly classification assigned by the backend ("cost", "duration",
    /// "distance", or [`UNKNOWN_TAG`]).
    pub anomaly_type: String,
    /// Delivery status label ("completed", "pending", "failed", ...).
    pub status: String,
}

/// Numeric fields a delivery table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliverySortField {
    /// Sort by total cost.
    #[default]
    Cost,
    /// Sort by distance.
    Distance,
    /// Sort by duration.
    Duration,
    /// Sort by derived cost per km.
    CostPerKm,
}

impl SortField for DeliverySortField {
    fn label(self) -> &'static str {
        match self {
            Self::Cost => "cost",
            Self::Distance => "distance",
            Self::Duration => "duration",
            Self::CostPerKm => "cost/km",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Cost => Self::Distance,
            Self::Distance => Self::Duration,
            Self::Duration => Self::CostPerKm,
            Self::CostPerKm => Self::Cost,
        }
    }
}

impl TableRecord for Delivery {
    type SortField = DeliverySortField;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> &str {
        self.id.as_str()
    }

    fn category(&self) -> &str {
        &self.anomaly_type
    }

    fn sort_key(&self, field: DeliverySortField) -> f64 {
        match field {
            DeliverySortField::Cost => self.cost,
            DeliverySortField::Distance => self.distance,
            DeliverySortField::Duration => self.duration,
            DeliverySortField::CostPerKm => self.cost_per_km,
        }
    }
}

// ===== Supplier =====

/// One supplier KPI row from `GET /supplier-scores`.
///
/// All rates and scores are raw numbers; any percent sign embedded in source
/// values is stripped at ingestion. Display code adds the `%` back, so
/// sorting and color thresholds always see plain numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    /// Supplier name (doubles as the id and the search key).
    pub id: RecordId,
    /// Composite reliability score, 0-100.
    pub reliability_score: f64,
    /// Percentage of deliveries on time.
    pub on_time_rate: f64,
    /// Percentage of deliveries with severe delays.
    pub severe_delay_rate: f64,
    /// Average predicted delay in minutes.
    pub avg_predicted_delay: f64,
    /// Average actual delay in minutes.
    pub avg_actual_delay: f64,
    /// Total orders handled.
    pub order_volume: f64,
    /// Average delivery distance in km.
    pub avg_distance: f64,
    /// Distance efficiency percentage.
    pub distance_efficiency: f64,
    /// Performance-in-bad-weather percentage.
    pub weather_resilience: f64,
    /// Number of zones served.
    pub zones_served: f64,
    /// Performance tier assigned by the score engine ("Gold", "Silver",
    /// "Bronze", "Critical Review", or [`UNKNOWN_TAG`]).
    pub tier: String,
}

/// Numeric fields a supplier table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupplierSortField {
    /// Sort by composite reliability score.
    #[default]
    Reliability,
    /// Sort by on-time rate.
    OnTimeRate,
    /// Sort by order volume.
    OrderVolume,
    /// Sort by average actual delay.
    AvgActualDelay,
}

impl SortField for SupplierSortField {
    fn label(self) -> &'static str {
        match self {
            Self::Reliability => "reliability",
            Self::OnTimeRate => "on-time rate",
            Self::OrderVolume => "order volume",
            Self::AvgActualDelay => "avg delay",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Reliability => Self::OnTimeRate,
            Self::OnTimeRate => Self::OrderVolume,
            Self::OrderVolume => Self::AvgActualDelay,
            Self::AvgActualDelay => Self::Reliability,
        }
    }
}

impl TableRecord for Supplier {
    type SortField = SupplierSortField;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn search_text(&self) -> &str {
        self.id.as_str()
    }

    fn category(&self) -> &str {
        &self.tier
    }

    fn sort_key(&self, field: SupplierSortField) -> f64 {
        match field {
            SupplierSortField::Reliability => self.reliability_score,
            SupplierSortField::OnTimeRate => self.on_time_rate,
            SupplierSortField::OrderVolume => self.order_volume,
            SupplierSortField::AvgActualDelay => self.avg_actual_delay,
        }
    }
}
