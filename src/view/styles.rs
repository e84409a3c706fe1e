//! Color scheme for the dashboard.
//!
//! Tags coming off the wire (anomaly types, tiers) are open-ended strings,
//! so styling matches known tags and falls back to dim for anything else.

use crate::model::IntensityBucket;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether color output is enabled.
///
/// Priority (first match wins):
/// 1. `--no-color` CLI flag (disables colors)
/// 2. `NO_COLOR` env var (any value disables colors)
/// 3. Default: colors enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Resolve from the CLI flag and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== DashStyles =====

/// Styles for the dashboard's tables, tags, and heatmap.
#[derive(Debug, Clone, Copy)]
pub struct DashStyles {
    enabled: bool,
}

impl DashStyles {
    /// Build the style set for a color configuration.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            enabled: config.colors_enabled(),
        }
    }

    fn fg(self, color: Color) -> Style {
        if self.enabled {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Table header row.
    pub fn header(self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// The highlighted row under the cursor.
    pub fn cursor_row(self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style for a delivery anomaly tag.
    pub fn anomaly(self, tag: &str) -> Style {
        match tag {
            "cost" => self.fg(Color::Red),
            "duration" => self.fg(Color::Magenta),
            "distance" => self.fg(Color::Yellow),
            _ => self.fg(Color::DarkGray),
        }
    }

    /// Style for a supplier tier tag.
    pub fn tier(self, tag: &str) -> Style {
        match tag {
            "Gold" => self.fg(Color::Yellow),
            "Silver" => self.fg(Color::White),
            "Bronze" => self.fg(Color::LightRed),
            "Critical Review" => self.fg(Color::Red),
            _ => self.fg(Color::DarkGray),
        }
    }

    /// Background style for a heatmap cell, by intensity bucket.
    pub fn bucket(self, bucket: IntensityBucket) -> Style {
        if !self.enabled {
            return Style::default();
        }
        let bg = match bucket {
            IntensityBucket::Low => Color::Green,
            IntensityBucket::Medium => Color::LightGreen,
            IntensityBucket::High => Color::Yellow,
            IntensityBucket::VeryHigh => Color::LightRed,
            IntensityBucket::Critical => Color::Red,
        };
        Style::default().bg(bg).fg(Color::Black)
    }

    /// Inline error text (fetch failures, status line errors).
    pub fn error(self) -> Style {
        self.fg(Color::Red)
    }

    /// Loading indicator text.
    pub fn loading(self) -> Style {
        self.fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    /// Success/info status line text.
    pub fn status(self) -> Style {
        self.fg(Color::Green)
    }

    /// Dimmed chrome (hints, inactive tabs).
    pub fn dim(self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// The active navbar tab.
    pub fn active_tab(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }
}

impl Default for DashStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn no_color_flag_disables_colors() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial]
    fn no_color_env_var_disables_colors() {
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        assert!(!config.colors_enabled(), "any NO_COLOR value disables");
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial]
    fn colors_enabled_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled());
    }

    #[test]
    #[serial]
    fn unknown_tags_get_the_fallback_style() {
        std::env::remove_var("NO_COLOR");
        let styles = DashStyles::default();
        assert_eq!(styles.anomaly("unknown"), styles.anomaly("whatever"));
        assert_ne!(styles.anomaly("cost"), styles.anomaly("duration"));
        assert_ne!(styles.tier("Gold"), styles.tier("Critical Review"));
    }

    #[test]
    #[serial]
    fn disabled_colors_strip_foregrounds() {
        let styles = DashStyles::new(ColorConfig::from_env_and_args(true));
        assert!(styles.anomaly("cost").fg.is_none());
        assert!(styles.bucket(IntensityBucket::Critical).bg.is_none());
    }

    #[test]
    #[serial]
    fn buckets_map_to_distinct_backgrounds() {
        std::env::remove_var("NO_COLOR");
        let styles = DashStyles::default();
        let low = styles.bucket(IntensityBucket::Low);
        let critical = styles.bucket(IntensityBucket::Critical);
        assert_ne!(low.bg, critical.bg);
    }
}
