//! Cost-analysis view: the anomalous-delivery table (home view).

use crate::model::{Delivery, RenderFault};
use crate::pipeline::Column;
use crate::state::AppState;
use crate::view::styles::DashStyles;
use crate::view::table::{render_table, TableView};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Column schema, shared by the table and the CSV export.
pub fn columns() -> Vec<Column<Delivery>> {
    vec![
        Column {
            label: "Order",
            value: |d: &Delivery| d.id.as_str().to_string(),
        },
        Column {
            label: "Supplier",
            value: |d: &Delivery| d.supplier.clone(),
        },
        Column {
            label: "Cost",
            value: |d: &Delivery| format!("{:.2}", d.cost),
        },
        Column {
            label: "Distance (km)",
            value: |d: &Delivery| format!("{:.1}", d.distance),
        },
        Column {
            label: "Duration (min)",
            value: |d: &Delivery| format!("{:.0}", d.duration),
        },
        Column {
            label: "Cost/km",
            value: |d: &Delivery| format!("{:.2}", d.cost_per_km),
        },
        Column {
            label: "Anomaly",
            value: |d: &Delivery| d.anomaly_type.clone(),
        },
        Column {
            label: "Status",
            value: |d: &Delivery| d.status.clone(),
        },
    ]
}

/// Render the cost-analysis table.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: DashStyles) -> Result<(), RenderFault> {
    let columns = columns();
    render_table(
        frame,
        area,
        &TableView {
            title: " Delivery Cost Anomalies ",
            store: &state.deliveries,
            state: &state.cost_table,
            columns: &columns,
            row_style: |d, styles| styles.anomaly(&d.anomaly_type),
        },
        styles,
    )
}
