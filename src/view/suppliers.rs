//! Supplier performance view: KPI table plus a per-supplier detail modal.

use crate::model::{RenderFault, Supplier, TableRecord};
use crate::pipeline::Column;
use crate::state::AppState;
use crate::view::styles::DashStyles;
use crate::view::table::{render_table, TableView};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Column schema, shared by the table and the CSV export.
///
/// The table shows the headline KPIs; the full metric set lives in the
/// detail modal and the export.
pub fn columns() -> Vec<Column<Supplier>> {
    vec![
        Column {
            label: "Supplier",
            value: |s: &Supplier| s.id.as_str().to_string(),
        },
        Column {
            label: "Reliability",
            value: |s: &Supplier| format!("{:.1}", s.reliability_score),
        },
        Column {
            label: "On-time %",
            value: |s: &Supplier| format!("{:.1}%", s.on_time_rate),
        },
        Column {
            label: "Severe delay %",
            value: |s: &Supplier| format!("{:.1}%", s.severe_delay_rate),
        },
        Column {
            label: "Avg delay (min)",
            value: |s: &Supplier| format!("{:.1}", s.avg_actual_delay),
        },
        Column {
            label: "Orders",
            value: |s: &Supplier| format!("{:.0}", s.order_volume),
        },
        Column {
            label: "Tier",
            value: |s: &Supplier| s.tier.clone(),
        },
    ]
}

/// Export schema: the table columns plus the modal-only metrics.
pub fn export_columns() -> Vec<Column<Supplier>> {
    let mut cols = columns();
    cols.extend([
        Column {
            label: "Predicted delay (min)",
            value: |s: &Supplier| format!("{:.1}", s.avg_predicted_delay),
        },
        Column {
            label: "Avg distance (km)",
            value: |s: &Supplier| format!("{:.1}", s.avg_distance),
        },
        Column {
            label: "Distance efficiency %",
            value: |s: &Supplier| format!("{:.1}%", s.distance_efficiency),
        },
        Column {
            label: "Weather resilience %",
            value: |s: &Supplier| format!("{:.1}%", s.weather_resilience),
        },
        Column {
            label: "Zones served",
            value: |s: &Supplier| format!("{:.0}", s.zones_served),
        },
    ]);
    cols
}

/// Render the supplier table, with the detail modal on top when a supplier
/// is open.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: DashStyles) -> Result<(), RenderFault> {
    let columns = columns();
    render_table(
        frame,
        area,
        &TableView {
            title: " Supplier Performance ",
            store: &state.suppliers,
            state: &state.supplier_table,
            columns: &columns,
            row_style: |s, styles| styles.tier(&s.tier),
        },
        styles,
    )?;

    if let Some(id) = state.supplier_table.selected() {
        // The collection may have been replaced since the row was opened; a
        // vanished supplier is a render fault the boundary contains.
        let supplier = state
            .suppliers
            .records()
            .iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| {
                RenderFault::new(
                    "supplier_modal",
                    format!("supplier {} is no longer in the collection", id.as_str()),
                )
            })?;
        render_modal(frame, area, supplier, styles);
    }
    Ok(())
}

fn render_modal(frame: &mut Frame, area: Rect, supplier: &Supplier, styles: DashStyles) {
    let metrics: [(&str, String); 10] = [
        ("Reliability score", format!("{:.1}", supplier.reliability_score)),
        ("On-time rate", format!("{:.1}%", supplier.on_time_rate)),
        ("Severe delay rate", format!("{:.1}%", supplier.severe_delay_rate)),
        ("Avg predicted delay", format!("{:.1} min", supplier.avg_predicted_delay)),
        ("Avg actual delay", format!("{:.1} min", supplier.avg_actual_delay)),
        ("Order volume", format!("{:.0}", supplier.order_volume)),
        ("Avg distance", format!("{:.1} km", supplier.avg_distance)),
        ("Distance efficiency", format!("{:.1}%", supplier.distance_efficiency)),
        ("Weather resilience", format!("{:.1}%", supplier.weather_resilience)),
        ("Zones served", format!("{:.0}", supplier.zones_served)),
    ];

    let mut lines = vec![Line::from(vec![
        Span::styled("Tier: ", styles.dim()),
        Span::styled(supplier.tier.clone(), styles.tier(&supplier.tier)),
    ])];
    for (label, value) in metrics {
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<22}"), styles.dim()),
            Span::raw(value),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("esc to close", styles.dim())));

    let height = lines.len() as u16 + 2;
    let modal = centered(area, 48, height);
    frame.render_widget(Clear, modal);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", supplier.id.as_str()))
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        ),
        modal,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, rect, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(mid);
    rect
}
