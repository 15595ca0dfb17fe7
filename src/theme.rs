//! Colors for the TUI and CLI output.
//!
//! Provides ratatui styles for the terminal UI and ANSI-wrapped strings for
//! plain CLI output. The active theme is chosen once at startup from the
//! `[ui] theme` config value.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for titles, keys and the input cursor
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    /// Emit ANSI codes for CLI output
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Light gray text with a red accent.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Red,
            error: Color::LightRed,
            success: Color::Green,
            ansi: true,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            ansi: true,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::Green,
            ansi: true,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    /// Disable ANSI output (for `NO_COLOR` or non-terminal stdout).
    pub fn without_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (titles, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        format!("{}{}{}", color_to_ansi(color), text, ansi::RESET)
    }
}

/// Raw ANSI sequences used by the config diff preview.
pub mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Install the process-wide theme. Only the first call has any effect.
pub fn set_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// The active theme, or the default if none was installed.
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}

/// Resolve the theme for a config name, honoring `NO_COLOR`.
///
/// Unknown names fall back to the default theme.
pub fn theme_for(name: &str) -> Theme {
    let theme = Theme::by_name(name).unwrap_or_else(|| {
        tracing::warn!(theme = name, "Unknown theme, using default");
        Theme::default()
    });
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        theme.without_ansi()
    } else {
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_standard() {
        assert_eq!(Theme::default(), Theme::standard());
        assert_eq!(Theme::default().accent, Color::Red);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Theme::by_name("classic"), Some(Theme::classic()));
        assert_eq!(Theme::by_name(" Ocean "), Some(Theme::ocean()));
        assert_eq!(Theme::by_name("default"), Some(Theme::standard()));
        assert_eq!(Theme::by_name("neon"), None);
    }

    #[test]
    fn style_helpers_return_theme_colors() {
        let theme = Theme::ocean();
        assert_eq!(theme.text_style().fg, Some(Color::Cyan));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::LightCyan));
    }

    #[test]
    fn ansi_helpers_wrap_with_color_codes() {
        let theme = Theme::classic();
        let accent = theme.accent_text("test");
        assert_eq!(accent, "\x1b[33mtest\x1b[0m");

        let error = Theme::standard().error_text("boom");
        assert!(error.starts_with("\x1b[91m"));
        assert!(error.ends_with(ansi::RESET));
    }

    #[test]
    fn without_ansi_returns_plain_text() {
        let theme = Theme::standard().without_ansi();
        assert_eq!(theme.success_text("ok"), "ok");
        assert_eq!(theme.primary_text("plain"), "plain");
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
