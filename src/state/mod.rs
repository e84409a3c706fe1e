//! Pure application state.
//!
//! Everything here is plain data with transition methods; no terminal, no
//! network, no clock. The view layer feeds events in and reads state out.

pub mod app_state;
pub mod prediction;
pub mod table;

pub use app_state::{AppState, View};
pub use prediction::{options, PredictionField, PredictionForm};
pub use table::TableState;
