//! Domain model types (pure).
//!
//! Records, identifiers, the heatmap grid, prediction wire types, and the
//! error taxonomy. No I/O lives here.

pub mod error;
pub mod heatmap;
pub mod identifiers;
pub mod prediction;
pub mod record;

// Re-export for convenience
pub use error::{AppError, FetchError, RenderFault};
pub use heatmap::{HeatmapCell, HeatmapGrid, HeatmapSortField, IntensityBucket};
pub use identifiers::{InvalidRecordId, RecordId};
pub use prediction::{PredictionInput, PredictionOutcome};
pub use record::{
    Delivery, DeliverySortField, SortField, Supplier, SupplierSortField, TableRecord, UNKNOWN_TAG,
};
