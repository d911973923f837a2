//! Theme and style system for userdeck
//!
//! Provides consistent styling across the two screens with support for
//! light, dark, and color-free terminals.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Global theme instance (set once at startup from the CLI flag)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Cyan,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Yellow,
    border: Color::DarkGray,
    background: Color::Reset,
});

/// Initialize the global theme (call once at startup)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Main accent color (titles, key UI elements)
    pub primary: Color,
    /// Error states (failed fetch, missing data)
    pub error: Color,
    /// Main text color
    pub text: Color,
    /// Muted/secondary text (labels, disabled actions)
    pub text_muted: Color,
    /// Emphasized text (key hints, avatar link)
    pub text_emphasis: Color,
    /// Border color
    pub border: Color,
    /// Background color (Reset keeps the terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// No-color theme - style helpers fall back to modifiers only so the
    /// UI uses the terminal defaults without emitting color codes.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            background: Color::Reset,
        }
    }

    // === Style Helpers ===

    /// Style for titles and the position indicator
    pub fn title_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    /// Style for muted text (field labels)
    pub fn muted_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (key hints, links)
    pub fn emphasis_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_emphasis)
    }

    /// Style for error text
    pub fn error_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    /// Style for disabled navigation actions
    pub fn disabled_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Style for borders
    pub fn border_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Background style
    pub fn background_style(&self) -> Style {
        if self.theme_type == ThemeType::NoColor {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("nocolor".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
        assert_eq!("no-color".parse::<ThemeType>().unwrap(), ThemeType::NoColor);
    }

    #[test]
    fn test_no_color_theme_styles_do_not_set_colors() {
        let t = Theme::new(ThemeType::NoColor);
        let s = t.disabled_style();
        // In no-color mode we rely on modifiers only, not fg/bg.
        assert!(s.fg.is_none());
        assert!(s.bg.is_none());

        // The error dialog border goes through this helper too
        let e = t.error_style();
        assert!(e.fg.is_none());
        assert!(e.bg.is_none());
    }
}
