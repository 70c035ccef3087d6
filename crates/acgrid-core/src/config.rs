#![forbid(unsafe_code)]

//! Grid feature configuration.
//!
//! Every feature is off unless `enabled` is set. Defaults match what the
//! grid renders with no configuration at all. With the `serde` feature all
//! records (de)serialize with camelCase keys and missing keys take their
//! defaults.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::pagination::PaginationConfig;
use crate::virtualized::VirtualizationConfig;

pub const DEFAULT_COLUMN_WIDTH: u32 = 150;
pub const MIN_COLUMN_WIDTH: u32 = 20;

// ── Resizing ────────────────────────────────────────────────────────────

/// Column resizing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ResizingConfig {
    pub enabled: bool,
    pub default_column_width: u32,
    pub min_column_width: u32,
    pub max_column_width: u32,
    /// Starting width per column id.
    pub initial_column_sizing: BTreeMap<String, u32>,
}

impl Default for ResizingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
            max_column_width: u32::MAX,
            initial_column_sizing: BTreeMap::new(),
        }
    }
}

impl ResizingConfig {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, min: u32, max: u32) -> Self {
        self.min_column_width = min;
        self.max_column_width = max;
        self
    }

    #[must_use]
    pub fn with_column_width(mut self, column_id: impl Into<String>, width: u32) -> Self {
        self.initial_column_sizing.insert(column_id.into(), width);
        self
    }

    /// Clamp `width` into `[min_column_width, max_column_width]`.
    ///
    /// Inverted bounds resolve to the minimum.
    #[must_use]
    pub fn clamp_width(&self, width: u32) -> u32 {
        width
            .min(self.max_column_width)
            .max(self.min_column_width)
    }

    /// Starting width of `column_id`, clamped.
    #[must_use]
    pub fn column_width(&self, column_id: &str) -> u32 {
        let width = self
            .initial_column_sizing
            .get(column_id)
            .copied()
            .unwrap_or(self.default_column_width);
        self.clamp_width(width)
    }
}

// ── Pinning ─────────────────────────────────────────────────────────────

/// Side a column is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PinSide {
    Left,
    Right,
}

/// Column pinning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PinningConfig {
    pub enabled: bool,
    /// Column ids pinned to the left edge, outermost first.
    pub left: Vec<String>,
    /// Column ids pinned to the right edge, innermost first.
    pub right: Vec<String>,
}

impl PinningConfig {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Pin `column_id` to `side`, moving it if already pinned elsewhere.
    pub fn pin(&mut self, column_id: impl Into<String>, side: PinSide) {
        let column_id = column_id.into();
        self.unpin(&column_id);
        match side {
            PinSide::Left => self.left.push(column_id),
            PinSide::Right => self.right.push(column_id),
        }
    }

    pub fn unpin(&mut self, column_id: &str) {
        self.left.retain(|id| id != column_id);
        self.right.retain(|id| id != column_id);
    }

    #[must_use]
    pub fn side(&self, column_id: &str) -> Option<PinSide> {
        if self.left.iter().any(|id| id == column_id) {
            Some(PinSide::Left)
        } else if self.right.iter().any(|id| id == column_id) {
            Some(PinSide::Right)
        } else {
            None
        }
    }
}

// ── Selection ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

/// Row selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SelectionConfig {
    pub enabled: bool,
    pub mode: SelectionMode,
    /// Only takes effect in [`SelectionMode::Multiple`].
    pub enable_checkbox: bool,
    /// Row ids selected at startup.
    pub initial_row_selection: BTreeSet<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: SelectionMode::Single,
            enable_checkbox: true,
            initial_row_selection: BTreeSet::new(),
        }
    }
}

impl SelectionConfig {
    #[must_use]
    pub fn enabled(mode: SelectionMode) -> Self {
        Self {
            enabled: true,
            mode,
            ..Self::default()
        }
    }

    /// Whether a checkbox column is rendered.
    #[must_use]
    pub fn shows_checkbox(&self) -> bool {
        self.enabled && self.mode == SelectionMode::Multiple && self.enable_checkbox
    }

    /// Initial selection, trimmed to one row in single mode.
    #[must_use]
    pub fn initial_selection(&self) -> BTreeSet<String> {
        match self.mode {
            SelectionMode::Multiple => self.initial_row_selection.clone(),
            SelectionMode::Single => self
                .initial_row_selection
                .iter()
                .next()
                .cloned()
                .into_iter()
                .collect(),
        }
    }
}

// ── Editing ─────────────────────────────────────────────────────────────

/// Gesture that opens a cell editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EditTrigger {
    #[default]
    DoubleClick,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EditingConfig {
    pub enabled: bool,
    pub mode: EditTrigger,
}

// ── Grouping ────────────────────────────────────────────────────────────

/// Expansion of grouped rows: all at once, or per row id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ExpandedState {
    All(bool),
    Rows(BTreeMap<String, bool>),
}

impl Default for ExpandedState {
    fn default() -> Self {
        Self::All(false)
    }
}

impl ExpandedState {
    #[must_use]
    pub fn is_expanded(&self, row_id: &str) -> bool {
        match self {
            Self::All(all) => *all,
            Self::Rows(rows) => rows.get(row_id).copied().unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GroupingConfig {
    pub enabled: bool,
    /// Column ids to group by, outermost first.
    pub initial_grouping: Vec<String>,
    pub initial_expanded: ExpandedState,
}

// ── Filtering ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FilteringConfig {
    pub enabled: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub initial_global_filter: Option<String>,
    pub initial_column_filters: BTreeMap<String, String>,
}

impl FilteringConfig {
    /// Filter state at startup; blank initial values are dropped.
    #[must_use]
    pub fn initial_state(&self) -> FilterState {
        let mut state = FilterState::default();
        if let Some(global) = &self.initial_global_filter {
            state.set_global_filter(global.as_str());
        }
        for (column_id, value) in &self.initial_column_filters {
            state.set_column_filter(column_id.as_str(), value.as_str());
        }
        state
    }
}

// ── Grid ────────────────────────────────────────────────────────────────

/// All feature settings of one grid.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GridConfig {
    pub resizing: ResizingConfig,
    pub pinning: PinningConfig,
    pub selection: SelectionConfig,
    pub editing: EditingConfig,
    pub grouping: GroupingConfig,
    pub filtering: FilteringConfig,
    pub pagination: PaginationConfig,
    pub virtualization: VirtualizationConfig,
}

impl GridConfig {
    /// Parse a JSON grid configuration.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Names of the enabled features, in declaration order.
    #[must_use]
    pub fn enabled_features(&self) -> Vec<&'static str> {
        [
            ("resizing", self.resizing.enabled),
            ("pinning", self.pinning.enabled),
            ("selection", self.selection.enabled),
            ("editing", self.editing.enabled),
            ("grouping", self.grouping.enabled),
            ("filtering", self.filtering.enabled),
            ("pagination", self.pagination.enabled),
            ("virtualization", self.virtualization.enabled),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_off_by_default() {
        assert!(GridConfig::default().enabled_features().is_empty());
    }

    #[test]
    fn resizing_defaults_and_clamp() {
        let config = ResizingConfig::default();
        assert_eq!(config.default_column_width, 150);
        assert_eq!(config.min_column_width, 20);
        assert_eq!(config.max_column_width, u32::MAX);
        assert_eq!(config.clamp_width(5), 20);
        assert_eq!(config.clamp_width(400), 400);

        let bounded = ResizingConfig::enabled()
            .with_bounds(50, 300)
            .with_column_width("wide", 900);
        assert_eq!(bounded.column_width("wide"), 300);
        assert_eq!(bounded.column_width("other"), 150);
    }

    #[test]
    fn pin_moves_between_sides() {
        let mut pinning = PinningConfig::enabled();
        pinning.pin("id", PinSide::Left);
        pinning.pin("actions", PinSide::Right);
        assert_eq!(pinning.side("id"), Some(PinSide::Left));

        pinning.pin("id", PinSide::Right);
        assert!(pinning.left.is_empty());
        assert_eq!(pinning.right, vec!["actions", "id"]);

        pinning.unpin("actions");
        assert_eq!(pinning.side("actions"), None);
    }

    #[test]
    fn checkbox_only_in_multiple_mode() {
        assert!(!SelectionConfig::default().shows_checkbox());
        assert!(!SelectionConfig::enabled(SelectionMode::Single).shows_checkbox());
        assert!(SelectionConfig::enabled(SelectionMode::Multiple).shows_checkbox());

        let mut no_box = SelectionConfig::enabled(SelectionMode::Multiple);
        no_box.enable_checkbox = false;
        assert!(!no_box.shows_checkbox());
    }

    #[test]
    fn single_mode_keeps_one_initial_row() {
        let mut config = SelectionConfig::enabled(SelectionMode::Single);
        config.initial_row_selection = ["b", "a"].into_iter().map(String::from).collect();
        assert_eq!(config.initial_selection().len(), 1);
        config.mode = SelectionMode::Multiple;
        assert_eq!(config.initial_selection().len(), 2);
    }

    #[test]
    fn editing_defaults_to_double_click() {
        assert_eq!(EditingConfig::default().mode, EditTrigger::DoubleClick);
    }

    #[test]
    fn expanded_state_lookup() {
        assert!(!ExpandedState::default().is_expanded("x"));
        assert!(ExpandedState::All(true).is_expanded("x"));
        let rows = ExpandedState::Rows([("g1".to_owned(), true)].into_iter().collect());
        assert!(rows.is_expanded("g1"));
        assert!(!rows.is_expanded("g2"));
    }

    #[test]
    fn filtering_initial_state() {
        let config = FilteringConfig {
            enabled: true,
            initial_global_filter: Some(" ".into()),
            initial_column_filters: [
                ("age".to_owned(), ">3".to_owned()),
                ("x".to_owned(), String::new()),
            ]
            .into_iter()
            .collect(),
        };
        let state = config.initial_state();
        assert_eq!(state.global_filter, None);
        assert_eq!(state.column_filters.len(), 1);
    }

    #[test]
    fn enabled_features_listed_in_order() {
        let config = GridConfig {
            virtualization: VirtualizationConfig::enabled(),
            pagination: PaginationConfig::enabled(),
            resizing: ResizingConfig::enabled(),
            ..GridConfig::default()
        };
        assert_eq!(
            config.enabled_features(),
            vec!["resizing", "pagination", "virtualization"]
        );
    }
}
