//! Delay-prediction view: the feature form and the latest outcome.

use crate::model::RenderFault;
use crate::state::{AppState, PredictionField};
use crate::store::LoadStatus;
use crate::view::styles::DashStyles;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render the prediction form and the outcome panel beside it.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, styles: DashStyles) -> Result<(), RenderFault> {
    let [form_area, outcome_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Fill(1)]).areas(area);

    render_form(frame, form_area, state, styles);
    render_outcome(frame, outcome_area, state, styles);
    Ok(())
}

fn render_form(frame: &mut Frame, area: Rect, state: &AppState, styles: DashStyles) {
    let form = &state.prediction_form;
    let mut lines = Vec::new();
    for field in PredictionField::ALL {
        let focused = field == form.focus;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            styles.header().add_modifier(Modifier::UNDERLINED)
        } else {
            styles.dim()
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<16}", field.label()), label_style),
            Span::raw(form.display_value(field)),
        ]));
    }
    lines.push(Line::from(""));

    let submit = if form.is_complete() {
        Span::styled("enter to predict", styles.status())
    } else {
        Span::styled("fill every field to predict", styles.dim())
    };
    lines.push(Line::from(submit));

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Delay Prediction "),
        ),
        area,
    );
}

fn render_outcome(frame: &mut Frame, area: Rect, state: &AppState, styles: DashStyles) {
    let lines = match state.prediction.status() {
        LoadStatus::Idle => vec![Line::from(Span::styled(
            "Submit the form to score a route.",
            styles.dim(),
        ))],
        LoadStatus::Loading => vec![Line::from(Span::styled("Scoring…", styles.loading()))],
        LoadStatus::Failed => {
            let detail = state
                .prediction
                .last_error()
                .map(|e| e.to_string())
                .unwrap_or_default();
            vec![
                Line::from(Span::styled("Prediction failed", styles.error())),
                Line::from(Span::styled(detail, styles.dim())),
            ]
        }
        LoadStatus::Loaded => match state.prediction.value() {
            Some(outcome) => {
                let verdict = if outcome.is_delayed() {
                    Span::styled("DELAY EXPECTED", styles.error().add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("ON TIME", styles.status().add_modifier(Modifier::BOLD))
                };
                vec![
                    Line::from(verdict),
                    Line::from(""),
                    Line::from(format!("confidence: {:.1}%", outcome.delay_confidence)),
                    Line::from(format!(
                        "estimated duration: {:.0} min",
                        outcome.estimated_duration_min
                    )),
                ]
            }
            None => vec![Line::from(Span::styled("No outcome held.", styles.dim()))],
        },
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Outcome ")),
        area,
    );
}
