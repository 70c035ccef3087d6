#![forbid(unsafe_code)]

//! Projection of themes onto CSS custom properties.
//!
//! Every variable lives under the `--ac-grid-` namespace. Grid styles are
//! written against these names, so renaming or dropping one is a breaking
//! change for every consumer stylesheet.
//!
//! # Example
//! ```
//! use acgrid_style::css::camel_to_kebab;
//!
//! assert_eq!(camel_to_kebab("bgHeader"), "bg-header");
//! assert_eq!(camel_to_kebab("textPrimary"), "text-primary");
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::theme::Theme;

/// Namespace shared by every grid variable.
pub const CSS_VAR_PREFIX: &str = "--ac-grid";

/// CSS custom property name to value.
///
/// Ordered so that projections compare and render deterministically.
pub type CssVariableMap = BTreeMap<String, String>;

/// Convert a camelCase key to kebab-case.
///
/// A hyphen is inserted between a lowercase letter or digit and a following
/// uppercase letter, then the whole string is lowercased. Runs of capitals
/// are not split (`"URLValue"` becomes `"urlvalue"`).
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        if ch.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('-');
        }
        out.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    out
}

fn var_name(group: Option<&str>, key: &str) -> String {
    match group {
        Some(group) => format!("{CSS_VAR_PREFIX}-{group}-{}", camel_to_kebab(key)),
        None => format!("{CSS_VAR_PREFIX}-{}", camel_to_kebab(key)),
    }
}

fn insert_all<'a>(
    vars: &mut CssVariableMap,
    group: Option<&str>,
    entries: impl IntoIterator<Item = (&'static str, &'a str)>,
) {
    for (key, value) in entries {
        vars.insert(var_name(group, key), value.to_owned());
    }
}

/// Flatten a theme into its CSS variables.
///
/// Pure and deterministic. Colors are emitted without a group segment
/// (`--ac-grid-bg-header`); every other group carries one
/// (`--ac-grid-spacing-md`, `--ac-grid-font-weight-bold`). Values are copied
/// verbatim; font weights are written as bare integers.
pub fn theme_to_css_variables(theme: &Theme) -> CssVariableMap {
    let mut vars = CssVariableMap::new();

    insert_all(&mut vars, None, theme.colors.entries());
    insert_all(&mut vars, Some("spacing"), theme.spacing.entries());
    insert_all(
        &mut vars,
        Some("font-size"),
        theme.typography.font_size.entries(),
    );
    for (key, weight) in theme.typography.font_weight.entries() {
        vars.insert(var_name(Some("font-weight"), key), weight.to_string());
    }
    insert_all(
        &mut vars,
        Some("line-height"),
        theme.typography.line_height.entries(),
    );
    insert_all(
        &mut vars,
        Some("border-radius"),
        theme.borders.radius.entries(),
    );
    insert_all(&mut vars, Some("border-width"), theme.borders.width.entries());
    insert_all(&mut vars, Some("shadow"), theme.shadows.entries());

    vars
}

/// Render variables as a single CSS rule, e.g. `:root { --ac-grid-primary: #fff; }`.
pub fn to_css_rule(vars: &CssVariableMap, selector: &str) -> String {
    let mut css = String::with_capacity(vars.len() * 40 + selector.len() + 4);
    css.push_str(selector);
    css.push_str(" {\n");
    for (name, value) in vars {
        // Writing into a String cannot fail.
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push('}');
    css
}
