//! Visual theme and styling.

use console::Style;

/// Colors used for check results and errors.
#[derive(Debug, Clone)]
pub struct FeatureTheme {
    /// Style for supported results (green).
    pub success: Style,
    /// Style for unsupported results (orange).
    pub warning: Style,
    /// Style for errors (red bold), written to stderr.
    pub error: Style,
}

impl Default for FeatureTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold().for_stderr(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new().for_stderr(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

/// Turn off styling on both stdout and stderr (`--no-color`).
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = FeatureTheme::plain().format_success("supported");
        assert_eq!(msg, "✓ supported");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = FeatureTheme::plain().format_warning("not supported");
        assert_eq!(msg, "⚠ not supported");
    }

    #[test]
    fn theme_formats_error() {
        let msg = FeatureTheme::plain().format_error("bad version");
        assert_eq!(msg, "✗ bad version");
    }

    // Color switches are process-wide, so both streams are exercised in one test.
    #[test]
    fn colors_follow_each_stream() {
        console::set_colors_enabled(true);
        console::set_colors_enabled_stderr(false);
        let theme = FeatureTheme::new();
        assert_eq!(theme.format_error("bad version"), "✗ bad version");
        assert!(theme.format_success("supported").contains('\u{1b}'));

        console::set_colors_enabled_stderr(true);
        assert!(theme.format_error("bad version").contains('\u{1b}'));

        disable_colors();
        assert!(!console::colors_enabled());
        assert!(!console::colors_enabled_stderr());
        assert_eq!(theme.format_success("supported"), "✓ supported");
        assert_eq!(theme.format_error("bad version"), "✗ bad version");
    }
}
