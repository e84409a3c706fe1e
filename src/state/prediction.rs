//! Delay-prediction form state.
//!
//! A small field-by-field form: choice fields step through fixed option
//! lists, numeric fields take typed digits. Submission is enabled only when
//! every field is filled, mirroring the backend's requirement that all
//! features be present.

use crate::model::PredictionInput;

/// Option lists for the choice fields. Slugs are what the backend expects;
/// labels are what the form shows.
pub mod options {
    /// (slug, label) pairs for origin/destination zones.
    pub const ZONES: &[(&str, &str)] = &[
        ("zone-a", "Zone A - Central Business District"),
        ("zone-b", "Zone B - Residential North"),
        ("zone-c", "Zone C - Industrial South"),
        ("zone-d", "Zone D - Suburban East"),
    ];

    /// (slug, label) pairs for delivery time slots.
    pub const TIME_SLOTS: &[(&str, &str)] = &[
        ("morning", "Morning (6AM - 12PM)"),
        ("afternoon", "Afternoon (12PM - 6PM)"),
        ("evening", "Evening (6PM - 10PM)"),
    ];

    /// (slug, label) pairs for traffic levels.
    pub const TRAFFIC: &[(&str, &str)] =
        &[("low", "Low"), ("medium", "Medium"), ("high", "High")];

    /// (slug, label) pairs for weather conditions.
    pub const WEATHER: &[(&str, &str)] =
        &[("clear", "Clear"), ("rain", "Rain"), ("storm", "Storm")];
}

/// The form's fields, in focus-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionField {
    /// Origin zone choice.
    #[default]
    FromZone,
    /// Destination zone choice.
    ToZone,
    /// Time slot choice.
    TimeSlot,
    /// Traffic level choice.
    Traffic,
    /// Weather conditions choice.
    Weather,
    /// Package weight text input.
    Weight,
    /// Route distance text input.
    Distance,
}

impl PredictionField {
    /// All fields in focus order.
    pub const ALL: [PredictionField; 7] = [
        Self::FromZone,
        Self::ToZone,
        Self::TimeSlot,
        Self::Traffic,
        Self::Weather,
        Self::Weight,
        Self::Distance,
    ];

    /// Form label for this field.
    pub fn label(self) -> &'static str {
        match self {
            Self::FromZone => "From zone",
            Self::ToZone => "To zone",
            Self::TimeSlot => "Time slot",
            Self::Traffic => "Traffic level",
            Self::Weather => "Weather",
            Self::Weight => "Weight (kg)",
            Self::Distance => "Distance (km)",
        }
    }

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Transient state of the prediction form.
#[derive(Debug, Clone, Default)]
pub struct PredictionForm {
    /// Which field has focus.
    pub focus: PredictionField,
    /// Selected index into [`options::ZONES`], if chosen.
    pub from_zone: Option<usize>,
    /// Selected index into [`options::ZONES`], if chosen.
    pub to_zone: Option<usize>,
    /// Selected index into [`options::TIME_SLOTS`], if chosen.
    pub time_slot: Option<usize>,
    /// Selected index into [`options::TRAFFIC`], if chosen.
    pub traffic: Option<usize>,
    /// Selected index into [`options::WEATHER`], if chosen.
    pub weather: Option<usize>,
    /// Raw weight text as typed.
    pub weight: String,
    /// Raw distance text as typed.
    pub distance: String,
}

impl PredictionForm {
    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the focused choice field forward (or backward). No-op on the
    /// numeric fields.
    pub fn step_choice(&mut self, forward: bool) {
        let (slot, len) = match self.focus {
            PredictionField::FromZone => (&mut self.from_zone, options::ZONES.len()),
            PredictionField::ToZone => (&mut self.to_zone, options::ZONES.len()),
            PredictionField::TimeSlot => (&mut self.time_slot, options::TIME_SLOTS.len()),
            PredictionField::Traffic => (&mut self.traffic, options::TRAFFIC.len()),
            PredictionField::Weather => (&mut self.weather, options::WEATHER.len()),
            PredictionField::Weight | PredictionField::Distance => return,
        };
        *slot = Some(match (*slot, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    /// Type a character into the focused numeric field. Only digits and one
    /// decimal point are accepted.
    pub fn push_char(&mut self, ch: char) {
        let field = match self.focus {
            PredictionField::Weight => &mut self.weight,
            PredictionField::Distance => &mut self.distance,
            _ => return,
        };
        if ch.is_ascii_digit() || (ch == '.' && !field.contains('.')) {
            field.push(ch);
        }
    }

    /// Delete the last character of the focused numeric field.
    pub fn pop_char(&mut self) {
        match self.focus {
            PredictionField::Weight => {
                self.weight.pop();
            }
            PredictionField::Distance => {
                self.distance.pop();
            }
            _ => {}
        }
    }

    /// Whether every field is filled with a usable value.
    pub fn is_complete(&self) -> bool {
        self.from_zone.is_some()
            && self.to_zone.is_some()
            && self.time_slot.is_some()
            && self.traffic.is_some()
            && self.weather.is_some()
            && self.weight.parse::<f64>().is_ok_and(|w| w > 0.0)
            && self.distance.parse::<f64>().is_ok_and(|d| d > 0.0)
    }

    /// Build the request body, or `None` while the form is incomplete.
    pub fn to_input(&self) -> Option<PredictionInput> {
        if !self.is_complete() {
            return None;
        }
        Some(PredictionInput {
            from_zone: options::ZONES[self.from_zone?].0.to_string(),
            to_zone: options::ZONES[self.to_zone?].0.to_string(),
            time_slot: options::TIME_SLOTS[self.time_slot?].0.to_string(),
            traffic: options::TRAFFIC[self.traffic?].0.to_string(),
            weather: options::WEATHER[self.weather?].0.to_string(),
            weight: self.weight.parse().ok()?,
            distance: self.distance.parse().ok()?,
        })
    }

    /// The display text of the focused/choice fields for rendering.
    pub fn display_value(&self, field: PredictionField) -> String {
        fn choice(slot: Option<usize>, opts: &[(&str, &str)]) -> String {
            match slot {
                Some(i) => opts[i].1.to_string(),
                None => "— select —".to_string(),
            }
        }
        match field {
            PredictionField::FromZone => choice(self.from_zone, options::ZONES),
            PredictionField::ToZone => choice(self.to_zone, options::ZONES),
            PredictionField::TimeSlot => choice(self.time_slot, options::TIME_SLOTS),
            PredictionField::Traffic => choice(self.traffic, options::TRAFFIC),
            PredictionField::Weather => choice(self.weather, options::WEATHER),
            PredictionField::Weight => self.weight.clone(),
            PredictionField::Distance => self.distance.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> PredictionForm {
        PredictionForm {
            from_zone: Some(0),
            to_zone: Some(2),
            time_slot: Some(1),
            traffic: Some(2),
            weather: Some(1),
            weight: "4.5".to_string(),
            distance: "12".to_string(),
            ..PredictionForm::default()
        }
    }

    #[test]
    fn incomplete_form_cannot_submit() {
        let mut form = filled_form();
        form.weather = None;
        assert!(!form.is_complete());
        assert!(form.to_input().is_none());

        let mut form = filled_form();
        form.weight.clear();
        assert!(!form.is_complete());
    }

    #[test]
    fn complete_form_builds_backend_slugs() {
        let input = filled_form().to_input().unwrap();
        assert_eq!(input.from_zone, "zone-a");
        assert_eq!(input.to_zone, "zone-c");
        assert_eq!(input.time_slot, "afternoon");
        assert_eq!(input.traffic, "high");
        assert_eq!(input.weather, "rain");
        assert_eq!(input.weight, 4.5);
        assert_eq!(input.distance, 12.0);
    }

    #[test]
    fn numeric_fields_accept_one_decimal_point_only() {
        let mut form = PredictionForm {
            focus: PredictionField::Weight,
            ..PredictionForm::default()
        };
        for ch in "4.5.2x".chars() {
            form.push_char(ch);
        }
        assert_eq!(form.weight, "4.52");
        form.pop_char();
        assert_eq!(form.weight, "4.5");
    }

    #[test]
    fn choice_stepping_wraps_both_ways() {
        let mut form = PredictionForm::default();
        form.step_choice(true);
        assert_eq!(form.from_zone, Some(0));
        form.step_choice(false);
        assert_eq!(form.from_zone, Some(options::ZONES.len() - 1));
        form.step_choice(true);
        assert_eq!(form.from_zone, Some(0));
    }

    #[test]
    fn focus_cycle_covers_all_fields_and_wraps() {
        let mut form = PredictionForm::default();
        let mut seen = vec![form.focus];
        for _ in 0..PredictionField::ALL.len() {
            form.focus_next();
            seen.push(form.focus);
        }
        assert_eq!(seen.first(), seen.last());
        for field in PredictionField::ALL {
            assert!(seen.contains(&field));
        }

        form.focus_prev();
        assert_eq!(form.focus, PredictionField::Distance);
    }

    #[test]
    fn zero_weight_is_not_a_valid_submission() {
        let mut form = filled_form();
        form.weight = "0".to_string();
        assert!(!form.is_complete());
    }
}
