//! Shared test themes.

use crate::theme::{Theme, ThemeColors};

pub(crate) fn sample_colors() -> ThemeColors {
    ThemeColors {
        primary: "#2563eb".into(),
        border: "#e5e7eb".into(),
        bg_header: "#f8fafc".into(),
        bg_hover: "#f1f5f9".into(),
        bg_cell: "#ffffff".into(),
        bg_selected: "#dbeafe".into(),
        text_primary: "#0f172a".into(),
        text_secondary: "#64748b".into(),
        text_disabled: "#94a3b8".into(),
        success: "#10b981".into(),
        warning: "#f59e0b".into(),
        error: "#ef4444".into(),
        info: "#3b82f6".into(),
    }
}

pub(crate) fn sample_theme(name: &str) -> Theme {
    Theme::new(name, sample_colors())
}

/// A sample theme with a distinct primary color.
pub(crate) fn themed(name: &str, primary: &str) -> Theme {
    let mut theme = sample_theme(name);
    theme.colors.primary = primary.into();
    theme
}
