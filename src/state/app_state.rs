//! Application state and navigation.
//!
//! `AppState` is the root state type: which view is active, each view's
//! transient table/form state, and each view's remote collection. State
//! transitions are plain methods with no I/O; the view layer (impure shell)
//! decides when to start loads and polls them.

use crate::model::{
    Delivery, DeliverySortField, HeatmapCell, HeatmapSortField, PredictionOutcome, Supplier,
    SupplierSortField,
};
use crate::state::{PredictionForm, TableState};
use crate::store::{RecordStore, RemoteData};

/// The dashboard's views, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Delivery cost anomalies (the default/home view).
    #[default]
    CostAnalysis,
    /// Supplier reliability KPIs.
    Suppliers,
    /// Delay prediction form.
    Prediction,
    /// Zone/time delivery-intensity heatmap.
    Heatmap,
}

impl View {
    /// All views in navbar order.
    pub const ALL: [View; 4] = [
        View::CostAnalysis,
        View::Suppliers,
        View::Prediction,
        View::Heatmap,
    ];

    /// Navbar title.
    pub fn title(self) -> &'static str {
        match self {
            View::CostAnalysis => "Cost Analysis",
            View::Suppliers => "Suppliers",
            View::Prediction => "Prediction",
            View::Heatmap => "Heatmap",
        }
    }

    /// Slug used in export filenames and the `--view` CLI flag.
    pub fn slug(self) -> &'static str {
        match self {
            View::CostAnalysis => "cost-analysis",
            View::Suppliers => "suppliers",
            View::Prediction => "prediction",
            View::Heatmap => "heatmap",
        }
    }

    /// Parse a `--view` flag / config value.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.slug() == slug)
    }

    /// Next view in navbar order (wraps).
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous view in navbar order (wraps).
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Root application state. Pure data, no side effects.
#[derive(Debug)]
pub struct AppState {
    /// Currently active view.
    pub view: View,
    /// Rows per table page, fixed at startup from config.
    pub page_size: usize,

    /// Cost-analysis collection.
    pub deliveries: RecordStore<Delivery>,
    /// Cost-analysis table state.
    pub cost_table: TableState<DeliverySortField>,

    /// Supplier collection.
    pub suppliers: RecordStore<Supplier>,
    /// Supplier table state.
    pub supplier_table: TableState<SupplierSortField>,

    /// Heatmap cell collection.
    pub heatmap: RecordStore<HeatmapCell>,
    /// Heatmap table state (zone filter + export).
    pub heatmap_table: TableState<HeatmapSortField>,

    /// Prediction form state.
    pub prediction_form: PredictionForm,
    /// Outcome of the last submitted prediction.
    pub prediction: RemoteData<PredictionOutcome>,

    /// One-line inline status (export confirmations and similar).
    pub status_line: Option<String>,
}

impl AppState {
    /// Fresh state starting on the given view.
    pub fn new(start_view: View, page_size: usize) -> Self {
        Self {
            view: start_view,
            page_size,
            deliveries: RecordStore::new(),
            cost_table: TableState::new(page_size),
            suppliers: RecordStore::new(),
            supplier_table: TableState::new(page_size),
            heatmap: RecordStore::new(),
            heatmap_table: TableState::new(page_size),
            prediction_form: PredictionForm::default(),
            prediction: RemoteData::new(),
            status_line: None,
        }
    }

    /// Switch to a view.
    ///
    /// The view being left discards its transient state and collection
    /// (views re-fetch on entry); superseded in-flight loads are discarded
    /// by the store's generation check. Switching to the current view is a
    /// no-op so a redundant navbar press doesn't wipe state.
    pub fn set_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        self.reset_view_state(self.view);
        self.view = view;
        self.status_line = None;
    }

    /// Navigate to the next view in navbar order.
    pub fn next_view(&mut self) {
        self.set_view(self.view.next());
    }

    /// Navigate to the previous view in navbar order.
    pub fn prev_view(&mut self) {
        self.set_view(self.view.prev());
    }

    /// Navigate back to the default/home view (used by boundary recovery).
    pub fn go_home(&mut self) {
        self.set_view(View::default());
    }

    fn reset_view_state(&mut self, view: View) {
        match view {
            View::CostAnalysis => {
                self.deliveries.reset();
                self.cost_table = TableState::new(self.page_size);
            }
            View::Suppliers => {
                self.suppliers.reset();
                self.supplier_table = TableState::new(self.page_size);
            }
            View::Heatmap => {
                self.heatmap.reset();
                self.heatmap_table = TableState::new(self.page_size);
            }
            View::Prediction => {
                self.prediction.reset();
                self.prediction_form = PredictionForm::default();
            }
        }
    }

    /// Poll all in-flight requests. Returns `true` if anything settled and a
    /// re-render is due.
    pub fn poll_loads(&mut self) -> bool {
        let mut changed = self.deliveries.poll();
        changed |= self.suppliers.poll();
        changed |= self.heatmap.poll();
        changed |= self.prediction.poll();
        changed
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
