//! The backend's endpoints, as fetch closures for [`crate::store::RemoteData`].
//!
//! Each function does one blocking round trip and hands the body to the
//! ingest layer. They are called from load worker threads, never from the
//! render loop.

use crate::ingest;
use crate::model::{Delivery, FetchError, HeatmapCell, PredictionInput, PredictionOutcome, Supplier};
use crate::store::ApiClient;

/// `GET /cost-analysis`: the anomalous-delivery collection.
pub fn fetch_deliveries(client: &ApiClient) -> Result<Vec<Delivery>, FetchError> {
    ingest::parse_deliveries(&client.get_text("/cost-analysis")?)
}

/// `GET /supplier-scores`: the supplier KPI collection.
pub fn fetch_suppliers(client: &ApiClient) -> Result<Vec<Supplier>, FetchError> {
    ingest::parse_suppliers(&client.get_text("/supplier-scores")?)
}

/// `GET /heatmap-data`: the zone/time intensity cells.
pub fn fetch_heatmap(client: &ApiClient) -> Result<Vec<HeatmapCell>, FetchError> {
    ingest::parse_heatmap_cells(&client.get_text("/heatmap-data")?)
}

/// `POST /predict`: score one route.
pub fn submit_prediction(
    client: &ApiClient,
    input: &PredictionInput,
) -> Result<PredictionOutcome, FetchError> {
    client.post_json("/predict", input)
}
