//! Render boundaries: contain a failed render instead of crashing the app.
//!
//! A [`Boundary`] guards one render region. While healthy it runs the
//! region's render function; the first failure latches the fault and from
//! then on the region draws a fallback panel until the user retries (`t`)
//! or resets back to the home view (`H`). Boundaries nest: the per-view
//! boundary sits inside the application boundary, so a broken view leaves
//! the navbar and footer alive.

use crate::model::RenderFault;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::error;

/// A latching render guard for one region of the screen.
#[derive(Debug)]
pub struct Boundary {
    name: &'static str,
    fault: Option<RenderFault>,
}

impl Boundary {
    /// A healthy boundary guarding the named region.
    pub fn new(name: &'static str) -> Self {
        Self { name, fault: None }
    }

    /// Whether the boundary is latched on a fault.
    pub fn is_failed(&self) -> bool {
        self.fault.is_some()
    }

    /// The latched fault, if any.
    pub fn fault(&self) -> Option<&RenderFault> {
        self.fault.as_ref()
    }

    /// Run the guarded render attempt.
    ///
    /// Once failed, the attempt is not run again until [`Boundary::retry`];
    /// whatever state caused the fault would only fail the same way on every
    /// frame. Returns the fault the caller should draw a fallback for, or
    /// `None` when the region rendered normally.
    pub fn guard(
        &mut self,
        attempt: impl FnOnce() -> Result<(), RenderFault>,
    ) -> Option<&RenderFault> {
        if self.fault.is_none() {
            if let Err(fault) = attempt() {
                error!(
                    boundary = self.name,
                    origin = fault.origin,
                    message = %fault.message,
                    "render failed, boundary latched"
                );
                self.fault = Some(fault);
            }
        }
        self.fault.as_ref()
    }

    /// Clear the fault and attempt the region again on the next frame.
    pub fn retry(&mut self) {
        self.fault = None;
    }
}

/// Draw the fallback panel for a latched boundary.
///
/// This path must itself be infallible, so it sticks to plain paragraphs.
/// Fault details (origin and message) are shown only in dev mode; normal
/// users get the generic message and the recovery keys.
pub fn render_fallback(frame: &mut Frame, area: Rect, fault: &RenderFault, dev_mode: bool) {
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Something went wrong displaying this section.",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("t", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  try again"),
        ]),
        Line::from(vec![
            Span::styled("H", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  back to cost analysis"),
        ]),
    ];
    if dev_mode {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[{}] {}", fault.origin, fault.message),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" error ");
    let inner = centered(area, 60, lines.len() as u16 + 2);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        inner,
    );
}

/// Center a box of the given size within `area`, clamped to fit.
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
