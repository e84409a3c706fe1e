//! Help overlay listing the key bindings.

use crate::view::styles::DashStyles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const BINDINGS: &[(&str, &str)] = &[
    ("1-4 / Tab", "switch view"),
    ("/", "edit search (enter/esc to leave)"),
    ("c", "cycle category filter"),
    ("s", "cycle sort field"),
    ("d", "toggle sort direction"),
    ("n / p", "next / previous page"),
    ("j / k", "move row cursor"),
    ("enter", "open detail / submit form"),
    ("esc", "close detail / leave search"),
    ("r", "refresh current view"),
    ("e", "export current view to CSV"),
    ("t", "retry a failed section"),
    ("H", "back to cost analysis"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the help overlay centered over the whole frame.
pub fn render_help_overlay(frame: &mut Frame, area: Rect, styles: DashStyles) {
    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:>10}  "), styles.header()),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("? or esc to close", styles.dim())));

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 52.min(area.width);
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

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help ")),
        rect,
    );
}
