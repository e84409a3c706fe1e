//! TUI rendering and terminal management (impure shell)

pub mod boundary;
mod cost;
mod heatmap;
mod help;
mod prediction;
mod styles;
mod table;

pub use boundary::Boundary;
pub use help::render_help_overlay;
pub use styles::{ColorConfig, DashStyles};

mod suppliers;

use crate::config::ResolvedConfig;
use crate::model::{AppError, TableRecord};
use crate::pipeline;
use crate::state::{AppState, PredictionField, TableState, View};
use crate::store::{endpoints, ApiClient, LoadStatus, RecordStore};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info};

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    client: ApiClient,
    config: ResolvedConfig,
    styles: DashStyles,
    /// Guards the whole frame; a fault here replaces everything.
    app_boundary: Boundary,
    /// Guards the active view's body; a fault here leaves the chrome alive.
    view_boundary: Boundary,
    help_open: bool,
    /// Whether this instance owns the real terminal (raw mode to undo).
    owns_terminal: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a TUI application on the real terminal.
    ///
    /// Sets up raw mode and the alternate screen; both are undone on drop.
    pub fn new(config: ResolvedConfig) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let mut app = Self::with_terminal(terminal, config);
        app.owns_terminal = true;
        Ok(app)
    }
}

impl<B: Backend> Drop for TuiApp<B> {
    fn drop(&mut self) {
        if self.owns_terminal {
            let _ = disable_raw_mode();
            let _ = io::stdout().execute(LeaveAlternateScreen);
        }
    }
}

impl<B: Backend> TuiApp<B> {
    /// Build an application around an existing terminal (TestBackend in
    /// tests, the crossterm terminal in production).
    pub fn with_terminal(terminal: Terminal<B>, config: ResolvedConfig) -> Self {
        let client = ApiClient::new(config.api_base_url.clone(), config.request_timeout);
        let styles = DashStyles::new(ColorConfig::from_env_and_args(config.no_color));
        let state = AppState::new(config.default_view, config.page_size);
        Self {
            terminal,
            state,
            client,
            config,
            styles,
            app_boundary: Boundary::new("app"),
            view_boundary: Boundary::new("view"),
            help_open: false,
            owns_terminal: false,
        }
    }

    /// Read access to the application state, for assertions in tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits. Event-driven: redraws on input and when
    /// an in-flight load settles; idle frames cost one channel poll.
    pub fn run(&mut self) -> Result<(), AppError> {
        const TICK: Duration = Duration::from_millis(250);

        info!(view = self.state.view.slug(), "starting dashboard");
        self.ensure_view_loaded();
        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.state.poll_loads();
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else if self.state.poll_loads() {
                self.draw()?;
            }
        }
    }

    /// Kick off the active view's load if nothing is held yet.
    fn ensure_view_loaded(&mut self) {
        let client = self.client.clone();
        match self.state.view {
            View::CostAnalysis => {
                if self.state.deliveries.status() == LoadStatus::Idle {
                    self.state
                        .deliveries
                        .begin_load(move || endpoints::fetch_deliveries(&client));
                }
            }
            View::Suppliers => {
                if self.state.suppliers.status() == LoadStatus::Idle {
                    self.state
                        .suppliers
                        .begin_load(move || endpoints::fetch_suppliers(&client));
                }
            }
            View::Heatmap => {
                if self.state.heatmap.status() == LoadStatus::Idle {
                    self.state
                        .heatmap
                        .begin_load(move || endpoints::fetch_heatmap(&client));
                }
            }
            // Prediction loads on submit, not on entry.
            View::Prediction => {}
        }
    }

    /// Refresh the active view's collection, keeping it on screen meanwhile.
    fn refresh_view(&mut self) {
        let client = self.client.clone();
        match self.state.view {
            View::CostAnalysis => {
                self.state
                    .deliveries
                    .begin_load(move || endpoints::fetch_deliveries(&client));
            }
            View::Suppliers => {
                self.state
                    .suppliers
                    .begin_load(move || endpoints::fetch_suppliers(&client));
            }
            View::Heatmap => {
                self.state
                    .heatmap
                    .begin_load(move || endpoints::fetch_heatmap(&client));
            }
            View::Prediction => {}
        }
    }

    fn switch_view(&mut self, view: View) {
        self.state.set_view(view);
        // A broken view must not poison the one we switch to.
        self.view_boundary.retry();
        self.ensure_view_loaded();
    }

    /// Handle one key event. Returns `true` when the user quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.help_open = false;
            }
            return false;
        }

        // Search editing captures the keyboard for the active table.
        if self.active_search_editing() && self.handle_search_key(key) {
            return false;
        }

        // Boundary recovery keys.
        if self.app_boundary.is_failed() || self.view_boundary.is_failed() {
            match key.code {
                KeyCode::Char('t') => {
                    debug!("boundary retry requested");
                    self.app_boundary.retry();
                    self.view_boundary.retry();
                    return false;
                }
                KeyCode::Char('H') => {
                    self.app_boundary.retry();
                    self.view_boundary.retry();
                    self.state.go_home();
                    self.ensure_view_loaded();
                    return false;
                }
                KeyCode::Char('q') => return true,
                _ => return false,
            }
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Tab => self.switch_view(self.state.view.next()),
            KeyCode::BackTab => self.switch_view(self.state.view.prev()),
            KeyCode::Char('H') => self.switch_view(View::default()),
            KeyCode::Char('r') => self.refresh_view(),
            KeyCode::Char('e') => self.export_current(),
            KeyCode::Char(c @ '1'..='4') if !self.numeric_entry_focused() => {
                let index = c as usize - '1' as usize;
                self.switch_view(View::ALL[index]);
            }
            _ => self.handle_view_key(key),
        }
        false
    }

    fn active_search_editing(&self) -> bool {
        match self.state.view {
            View::CostAnalysis => self.state.cost_table.search_editing,
            View::Suppliers => self.state.supplier_table.search_editing,
            View::Heatmap => self.state.heatmap_table.search_editing,
            View::Prediction => false,
        }
    }

    /// Whether '1'-'4' should type into the prediction form instead of
    /// switching views.
    fn numeric_entry_focused(&self) -> bool {
        self.state.view == View::Prediction
            && matches!(
                self.state.prediction_form.focus,
                PredictionField::Weight | PredictionField::Distance
            )
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let table: &mut dyn SearchTarget = match self.state.view {
            View::CostAnalysis => &mut self.state.cost_table,
            View::Suppliers => &mut self.state.supplier_table,
            View::Heatmap => &mut self.state.heatmap_table,
            View::Prediction => return false,
        };
        match key.code {
            KeyCode::Char(c) => table.push_char(c),
            KeyCode::Backspace => table.pop_char(),
            KeyCode::Enter | KeyCode::Esc => table.stop_editing(),
            _ => {}
        }
        true
    }

    fn handle_view_key(&mut self, key: KeyEvent) {
        match self.state.view {
            View::CostAnalysis => {
                table_key(
                    key,
                    &self.state.deliveries,
                    &mut self.state.cost_table,
                    false,
                );
            }
            View::Suppliers => {
                table_key(
                    key,
                    &self.state.suppliers,
                    &mut self.state.supplier_table,
                    true,
                );
            }
            View::Heatmap => {
                table_key(
                    key,
                    &self.state.heatmap,
                    &mut self.state.heatmap_table,
                    false,
                );
            }
            View::Prediction => self.handle_prediction_key(key),
        }
    }

    fn handle_prediction_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.prediction_form;
        match key.code {
            KeyCode::Down => form.focus_next(),
            KeyCode::Up => form.focus_prev(),
            KeyCode::Left => form.step_choice(false),
            KeyCode::Right => form.step_choice(true),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c) => form.push_char(c),
            KeyCode::Enter => {
                if let Some(input) = form.to_input() {
                    let client = self.client.clone();
                    self.state
                        .prediction
                        .begin_load(move || endpoints::submit_prediction(&client, &input));
                }
            }
            _ => {}
        }
    }

    /// Export the active view's filtered/sorted sequence to CSV.
    fn export_current(&mut self) {
        let date = chrono::Local::now().date_naive();
        let dir = self.config.export_dir.clone();
        let slug = self.state.view.slug();
        let result = match self.state.view {
            View::CostAnalysis => {
                let sequence = pipeline::apply(
                    self.state.deliveries.records(),
                    &self.state.cost_table.filter,
                );
                pipeline::write_export(&dir, slug, date, &sequence, &cost::columns())
            }
            View::Suppliers => {
                let sequence = pipeline::apply(
                    self.state.suppliers.records(),
                    &self.state.supplier_table.filter,
                );
                pipeline::write_export(&dir, slug, date, &sequence, &suppliers::export_columns())
            }
            View::Heatmap => {
                let sequence = pipeline::apply(
                    self.state.heatmap.records(),
                    &self.state.heatmap_table.filter,
                );
                pipeline::write_export(&dir, slug, date, &sequence, &heatmap::columns())
            }
            View::Prediction => {
                self.state.status_line = Some("nothing to export on this view".to_string());
                return;
            }
        };
        self.state.status_line = Some(match result {
            Ok(path) => {
                info!(path = %path.display(), "exported view");
                format!("exported {}", path.display())
            }
            Err(err) => format!("export failed: {err}"),
        });
    }

    /// Draw one frame.
    pub fn draw(&mut self) -> Result<(), AppError> {
        let state = &self.state;
        let styles = self.styles;
        let dev_mode = self.config.dev_mode;
        let help_open = self.help_open;
        let app_boundary = &mut self.app_boundary;
        let view_boundary = &mut self.view_boundary;

        self.terminal.draw(|frame| {
            let area = frame.area();
            if let Some(fault) = app_boundary.guard(|| {
                let [nav_area, body_area, status_area] = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Fill(1),
                    Constraint::Length(1),
                ])
                .areas(area);

                render_navbar(frame, nav_area, state.view, styles);
                render_status(frame, status_area, state, styles);

                if let Some(fault) =
                    view_boundary.guard(|| render_view(frame, body_area, state, styles))
                {
                    boundary::render_fallback(frame, body_area, fault, dev_mode);
                }
                Ok(())
            }) {
                boundary::render_fallback(frame, area, fault, dev_mode);
            }

            if help_open {
                render_help_overlay(frame, area, styles);
            }
        })?;
        Ok(())
    }
}

/// Dispatch to the active view's renderer.
fn render_view(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: DashStyles,
) -> Result<(), crate::model::RenderFault> {
    match state.view {
        View::CostAnalysis => cost::render(frame, area, state, styles),
        View::Suppliers => suppliers::render(frame, area, state, styles),
        View::Prediction => prediction::render(frame, area, state, styles),
        View::Heatmap => heatmap::render(frame, area, state, styles),
    }
}

fn render_navbar(frame: &mut Frame, area: Rect, active: View, styles: DashStyles) {
    let mut spans = Vec::new();
    for (i, view) in View::ALL.into_iter().enumerate() {
        let style = if view == active {
            styles.active_tab()
        } else {
            styles.dim()
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, view.title()), style));
        spans.push(Span::raw("│"));
    }
    spans.pop();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState, styles: DashStyles) {
    let line = match &state.status_line {
        Some(message) => Line::from(Span::styled(message.clone(), styles.status())),
        None => Line::from(Span::styled("? help  q quit", styles.dim())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// The search-editing surface of a table view, independent of record type.
trait SearchTarget {
    fn push_char(&mut self, ch: char);
    fn pop_char(&mut self);
    fn stop_editing(&mut self);
}

impl<F: crate::model::SortField> SearchTarget for TableState<F> {
    fn push_char(&mut self, ch: char) {
        self.push_search_char(ch);
    }
    fn pop_char(&mut self) {
        self.pop_search_char();
    }
    fn stop_editing(&mut self) {
        self.search_editing = false;
    }
}

/// Shared key handling for the table views.
fn table_key<R: TableRecord + Clone>(
    key: KeyEvent,
    store: &RecordStore<R>,
    table: &mut TableState<R::SortField>,
    selectable: bool,
) {
    // With a detail open, the keyboard only closes it.
    if selectable && table.selected().is_some() {
        if key.code == KeyCode::Esc {
            table.clear_selection();
        }
        return;
    }

    let sequence = pipeline::apply(store.records(), &table.filter);
    let page = pipeline::page(&sequence, &table.page);

    match key.code {
        KeyCode::Char('/') => table.search_editing = true,
        KeyCode::Char('c') => {
            let categories = pipeline::distinct_categories(store.records());
            table.cycle_category(&categories);
        }
        KeyCode::Char('s') => table.cycle_sort_field(),
        KeyCode::Char('d') => table.toggle_sort_direction(),
        KeyCode::Char('n') | KeyCode::Right => table.next_page(page.total_pages),
        KeyCode::Char('p') | KeyCode::Left => table.prev_page(),
        KeyCode::Char('j') | KeyCode::Down => table.cursor_down(page.items.len()),
        KeyCode::Char('k') | KeyCode::Up => table.cursor_up(),
        KeyCode::Enter if selectable => {
            if let Some(record) = page.items.get(table.cursor) {
                table.select(record.id().clone());
            }
        }
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
