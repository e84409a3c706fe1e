//! Shared table chrome: filter bar, record table, pagination footer.
//!
//! Every table view renders through [`render_table`] so search, category
//! cycling, sorting, paging, and the loading/error strips look and behave
//! identically everywhere. The column spec is the same [`Column`] set the
//! CSV export uses; what you see is what you export.

use crate::model::{FetchError, RenderFault, TableRecord};
use crate::pipeline::{self, Column, PageView};
use crate::state::TableState;
use crate::store::{LoadStatus, RecordStore};
use crate::view::styles::DashStyles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

/// Everything a table view needs to draw itself.
pub struct TableView<'a, R: TableRecord> {
    /// Block title, shown in the table border.
    pub title: &'static str,
    /// The view's record store.
    pub store: &'a RecordStore<R>,
    /// The view's transient state.
    pub state: &'a TableState<R::SortField>,
    /// Column spec, shared with CSV export.
    pub columns: &'a [Column<R>],
    /// Per-record row styling (anomaly/tier colors).
    pub row_style: fn(&R, DashStyles) -> Style,
}

/// Render one table view into `area`.
pub fn render_table<R: TableRecord + Clone>(
    frame: &mut Frame,
    area: Rect,
    view: &TableView<'_, R>,
    styles: DashStyles,
) -> Result<(), RenderFault> {
    let [filter_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_filter_bar(frame, filter_area, view, styles);

    let sequence = pipeline::apply(view.store.records(), &view.state.filter);
    let page = pipeline::page(&sequence, &view.state.page);

    match view.store.status() {
        LoadStatus::Loading if view.store.records().is_empty() => {
            frame.render_widget(
                Paragraph::new("Loading…")
                    .style(styles.loading())
                    .block(bordered(view.title)),
                table_area,
            );
        }
        _ => render_rows(frame, table_area, view, &page, styles),
    }

    render_footer(
        frame,
        footer_area,
        &page,
        sequence.len(),
        view.store.status(),
        view.store.last_error(),
        styles,
    );
    Ok(())
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(title)
}

fn render_filter_bar<R: TableRecord>(
    frame: &mut Frame,
    area: Rect,
    view: &TableView<'_, R>,
    styles: DashStyles,
) {
    use crate::model::SortField as _;

    let filter = &view.state.filter;
    let search = if view.state.search_editing {
        format!("/{}_", filter.search_text)
    } else if filter.search_text.is_empty() {
        "/ search".to_string()
    } else {
        format!("/{}", filter.search_text)
    };
    let line = Line::from(vec![
        Span::styled(search, styles.header()),
        Span::styled("  category: ", styles.dim()),
        Span::raw(filter.category.label().to_string()),
        Span::styled("  sort: ", styles.dim()),
        Span::raw(format!(
            "{} {}",
            filter.sort_field.label(),
            filter.sort_direction.arrow()
        )),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_rows<R: TableRecord + Clone>(
    frame: &mut Frame,
    area: Rect,
    view: &TableView<'_, R>,
    page: &PageView<'_, R>,
    styles: DashStyles,
) {
    let header = Row::new(
        view.columns
            .iter()
            .map(|c| Cell::from(c.label))
            .collect::<Vec<_>>(),
    )
    .style(styles.header());

    let rows: Vec<Row> = page
        .items
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut style = (view.row_style)(record, styles);
            if i == view.state.cursor {
                style = style.patch(styles.cursor_row());
            }
            Row::new(
                view.columns
                    .iter()
                    .map(|c| Cell::from((c.value)(record)))
                    .collect::<Vec<_>>(),
            )
            .style(style)
        })
        .collect();

    let widths = vec![Constraint::Fill(1); view.columns.len()];
    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(bordered(view.title)),
        area,
    );
}

fn render_footer<R>(
    frame: &mut Frame,
    area: Rect,
    page: &PageView<'_, R>,
    total_records: usize,
    status: LoadStatus,
    last_error: Option<&FetchError>,
    styles: DashStyles,
) {
    let mut spans = vec![Span::raw(format!(
        "page {}/{}  {} records",
        page.current_page, page.total_pages, total_records
    ))];
    match status {
        LoadStatus::Failed => {
            let detail = last_error.map(|e| e.to_string()).unwrap_or_default();
            spans.push(Span::styled(format!("  refresh failed: {detail}"), styles.error()));
        }
        LoadStatus::Loading => {
            spans.push(Span::styled("  refreshing…", styles.loading()));
        }
        LoadStatus::Idle | LoadStatus::Loaded => {}
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
