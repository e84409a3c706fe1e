//! Logistics Analytics Dashboard (ldash)
//!
//! TUI dashboard over a logistics analytics backend: delivery cost
//! anomalies, supplier reliability KPIs, delay prediction, and a zone/time
//! delivery heatmap.
//!
//! Pure Core / Impure Shell: `model`, `pipeline`, and `state` are pure and
//! synchronous; `store` owns the network edge on worker threads; `view`
//! owns the terminal.

pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;
