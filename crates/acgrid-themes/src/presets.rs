#![forbid(unsafe_code)]

//! Preset definitions.
//!
//! All presets share the standard spacing, typography and border scales and
//! differ in palette and shadow tint.

use acgrid_style::{Theme, ThemeColors, ThemeShadows};

const AUTHOR: &str = "AC Grid Team";
const VERSION: &str = "0.1.0";

fn preset(name: &str, display_name: &str, description: &str, colors: ThemeColors) -> Theme {
    Theme::new(name, colors)
        .with_display_name(display_name)
        .with_description(description)
        .with_author(AUTHOR)
        .with_version(VERSION)
}

/// Shadows tinted with one `r, g, b` triple at increasing opacity.
fn tinted_shadows(rgb: &str, alphas: [&str; 4]) -> ThemeShadows {
    ThemeShadows {
        none: "none".into(),
        sm: format!("0 1px 2px 0 rgba({rgb}, {})", alphas[0]),
        md: format!("0 4px 6px -1px rgba({rgb}, {})", alphas[1]),
        lg: format!("0 10px 15px -3px rgba({rgb}, {})", alphas[2]),
        xl: format!("0 20px 25px -5px rgba({rgb}, {})", alphas[3]),
    }
}

/// Default light theme.
pub fn light() -> Theme {
    preset(
        "light",
        "Light",
        "AC Grid default light theme",
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
        },
    )
    .with_shadows(tinted_shadows("0, 0, 0", ["0.05", "0.1", "0.1", "0.1"]))
}

/// Default dark theme.
pub fn dark() -> Theme {
    preset(
        "dark",
        "Dark",
        "AC Grid default dark theme",
        ThemeColors {
            primary: "#3b82f6".into(),
            border: "#374151".into(),
            bg_header: "#1f2937".into(),
            bg_hover: "#374151".into(),
            bg_cell: "#111827".into(),
            bg_selected: "#1e3a8a".into(),
            text_primary: "#f9fafb".into(),
            text_secondary: "#d1d5db".into(),
            text_disabled: "#6b7280".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#3b82f6".into(),
        },
    )
    .with_shadows(tinted_shadows("0, 0, 0", ["0.25", "0.3", "0.3", "0.3"]))
}

/// Blue and cyan palette.
pub fn ocean() -> Theme {
    preset(
        "ocean",
        "Ocean",
        "AC Grid ocean theme with blue and cyan color palette",
        ThemeColors {
            primary: "#0ea5e9".into(),
            border: "#cbd5e1".into(),
            bg_header: "#f0f9ff".into(),
            bg_hover: "#e0f2fe".into(),
            bg_cell: "#ffffff".into(),
            bg_selected: "#bae6fd".into(),
            text_primary: "#0c4a6e".into(),
            text_secondary: "#64748b".into(),
            text_disabled: "#94a3b8".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#06b6d4".into(),
        },
    )
    .with_shadows(tinted_shadows("14, 165, 233", ["0.1", "0.15", "0.2", "0.25"]))
}

/// Green, natural palette.
pub fn forest() -> Theme {
    preset(
        "forest",
        "Forest",
        "AC Grid forest theme with green and natural color palette",
        ThemeColors {
            primary: "#10b981".into(),
            border: "#d1d5db".into(),
            bg_header: "#f0fdf4".into(),
            bg_hover: "#dcfce7".into(),
            bg_cell: "#ffffff".into(),
            bg_selected: "#bbf7d0".into(),
            text_primary: "#064e3b".into(),
            text_secondary: "#64748b".into(),
            text_disabled: "#94a3b8".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#3b82f6".into(),
        },
    )
    .with_shadows(tinted_shadows("16, 185, 129", ["0.1", "0.15", "0.2", "0.25"]))
}

/// Orange and purple palette.
pub fn sunset() -> Theme {
    preset(
        "sunset",
        "Sunset",
        "AC Grid sunset theme with orange and purple color palette",
        ThemeColors {
            primary: "#f97316".into(),
            border: "#e5e7eb".into(),
            bg_header: "#fff7ed".into(),
            bg_hover: "#fed7aa".into(),
            bg_cell: "#ffffff".into(),
            bg_selected: "#fdba74".into(),
            text_primary: "#7c2d12".into(),
            text_secondary: "#64748b".into(),
            text_disabled: "#94a3b8".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#8b5cf6".into(),
        },
    )
    .with_shadows(tinted_shadows("249, 115, 22", ["0.1", "0.15", "0.2", "0.25"]))
}

/// Bamboo greens.
pub fn bamboo() -> Theme {
    preset(
        "bamboo",
        "Bamboo",
        "AC Grid bamboo theme with natural green and bamboo color palette",
        ThemeColors {
            primary: "#22c55e".into(),
            border: "#d1fae5".into(),
            bg_header: "#f0fdf4".into(),
            bg_hover: "#dcfce7".into(),
            bg_cell: "#ffffff".into(),
            bg_selected: "#bbf7d0".into(),
            text_primary: "#14532d".into(),
            text_secondary: "#65a30d".into(),
            text_disabled: "#86efac".into(),
            success: "#22c55e".into(),
            warning: "#eab308".into(),
            error: "#dc2626".into(),
            info: "#0ea5e9".into(),
        },
    )
    .with_shadows(tinted_shadows("34, 197, 94", ["0.1", "0.15", "0.2", "0.25"]))
}

/// Dark violet with translucent surfaces.
pub fn violet() -> Theme {
    preset(
        "violet",
        "Violet",
        "AC Grid dark violet theme with purple color palette",
        ThemeColors {
            primary: "#8b5cf6".into(),
            border: "rgba(139, 92, 246, 0.3)".into(),
            bg_header: "rgba(49, 46, 129, 0.6)".into(),
            bg_hover: "rgba(76, 29, 149, 0.4)".into(),
            bg_cell: "rgba(30, 27, 75, 0.5)".into(),
            bg_selected: "rgba(109, 40, 217, 0.3)".into(),
            text_primary: "#c4b5fd".into(),
            text_secondary: "rgba(196, 181, 253, 0.7)".into(),
            text_disabled: "rgba(196, 181, 253, 0.4)".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            info: "#8b5cf6".into(),
        },
    )
    .with_shadows(tinted_shadows("0, 0, 0", ["0.3", "0.4", "0.5", "0.6"]))
}
