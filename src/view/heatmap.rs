//! Zone/time heatmap view.
//!
//! Cells flow through the same pipeline as the record tables (the zone tag
//! is the category), so zone filtering and CSV export come for free; the
//! grid is then rebuilt from whatever cells pass the filter.

use crate::model::{HeatmapCell, HeatmapGrid, IntensityBucket, RenderFault};
use crate::pipeline::{self, Column};
use crate::state::AppState;
use crate::store::LoadStatus;
use crate::view::styles::DashStyles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// Export schema for the flat cell list.
pub fn columns() -> Vec<Column<HeatmapCell>> {
    vec![
        Column {
            label: "Zone",
            value: |c: &HeatmapCell| c.zone.clone(),
        },
        Column {
            label: "Time slot",
            value: |c: &HeatmapCell| c.time_slot.clone(),
        },
        Column {
            label: "Intensity",
            value: |c: &HeatmapCell| format!("{:.0}", c.intensity),
        },
    ]
}

/// Render the heatmap grid with its legend.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: DashStyles) -> Result<(), RenderFault> {
    let [filter_area, grid_area, legend_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let filter = &state.heatmap_table.filter;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("zone: ", styles.dim()),
            Span::raw(filter.category.label().to_string()),
        ])),
        filter_area,
    );

    let cells = pipeline::apply(state.heatmap.records(), filter);
    if state.heatmap.status() == LoadStatus::Loading && cells.is_empty() {
        frame.render_widget(
            Paragraph::new("Loading…").style(styles.loading()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Delivery Intensity "),
            ),
            grid_area,
        );
    } else {
        render_grid(frame, grid_area, &HeatmapGrid::from_cells(&cells), styles);
    }

    render_legend(frame, legend_area, styles);

    let mut footer = vec![Span::raw(format!("{} cells", cells.len()))];
    if state.heatmap.status() == LoadStatus::Failed {
        let detail = state
            .heatmap
            .last_error()
            .map(|e| e.to_string())
            .unwrap_or_default();
        footer.push(Span::styled(format!("  refresh failed: {detail}"), styles.error()));
    }
    frame.render_widget(Paragraph::new(Line::from(footer)), footer_area);
    Ok(())
}

fn render_grid(frame: &mut Frame, area: Rect, grid: &HeatmapGrid, styles: DashStyles) {
    let mut header = vec![Cell::from("")];
    header.extend(grid.time_slots.iter().map(|s| Cell::from(s.clone())));

    let rows: Vec<Row> = grid
        .zones
        .iter()
        .map(|zone| {
            let mut cells = vec![Cell::from(zone.clone()).style(styles.header())];
            for slot in &grid.time_slots {
                cells.push(match grid.intensity(zone, slot) {
                    Some(intensity) => Cell::from(format!("{intensity:>4.0}"))
                        .style(styles.bucket(IntensityBucket::from_intensity(intensity))),
                    // Absent cell: the backend reported no data, not zero.
                    None => Cell::from("   ·").style(styles.dim()),
                });
            }
            Row::new(cells)
        })
        .collect();

    let widths = vec![Constraint::Fill(1); grid.time_slots.len() + 1];
    frame.render_widget(
        Table::new(rows, widths)
            .header(Row::new(header).style(styles.header()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Delivery Intensity "),
            ),
        area,
    );
}

fn render_legend(frame: &mut Frame, area: Rect, styles: DashStyles) {
    let buckets = [
        IntensityBucket::Low,
        IntensityBucket::Medium,
        IntensityBucket::High,
        IntensityBucket::VeryHigh,
        IntensityBucket::Critical,
    ];
    let mut spans = Vec::new();
    for bucket in buckets {
        spans.push(Span::styled("  ", styles.bucket(bucket)));
        spans.push(Span::raw(format!(" {}  ", bucket.label())));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
