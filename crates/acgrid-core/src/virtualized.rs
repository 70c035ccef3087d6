#![forbid(unsafe_code)]

//! Row virtualization for large, fixed-row-height grids.
//!
//! The [`Virtualizer`] keeps the latest `(config, scroll_top,
//! container_height, total_count)` snapshot and derives, on demand, which
//! rows must be materialized. Every call to [`Virtualizer::virtual_state`] is
//! a pure function of that snapshot.
//!
//! # Overscan
//!
//! The leading edge is padded by one `overscan` worth of rows while the
//! trailing edge gets `visible_count + 2 * overscan` rows past the start.
//! The asymmetry is part of the rendering contract and must be kept.
//!
//! # Example
//!
//! ```
//! use acgrid_core::virtualized::{VirtualizationConfig, Virtualizer};
//!
//! let mut virt = Virtualizer::new(
//!     VirtualizationConfig::enabled()
//!         .with_row_height(35.0)
//!         .with_overscan(5),
//! );
//! virt.update_state(3500.0, 350.0, 10_000);
//!
//! let state = virt.virtual_state();
//! assert_eq!(state.visible_range.as_range(), 95..115);
//! assert_eq!(state.total_height, 350_000.0);
//! ```

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row height used when none is configured, in pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 35.0;

/// Overscan used when none is configured, in rows.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Virtualization settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct VirtualizationConfig {
    /// Whether rows outside the viewport are skipped.
    pub enabled: bool,
    /// Fixed row height in pixels. `None` means [`DEFAULT_ROW_HEIGHT`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub row_height: Option<f64>,
    /// Extra rows rendered around the viewport. `None` means
    /// [`DEFAULT_OVERSCAN`]; `Some(0)` disables overscan.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub overscan: Option<usize>,
}

impl VirtualizationConfig {
    /// Enabled config with default row height and overscan.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Set the fixed row height.
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = Some(row_height);
        self
    }

    /// Set the overscan row count.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = Some(overscan);
        self
    }

    /// Row height actually used for layout.
    ///
    /// Zero, negative and non-finite heights fall back to
    /// [`DEFAULT_ROW_HEIGHT`].
    #[must_use]
    pub fn effective_row_height(&self) -> f64 {
        match self.row_height {
            Some(h) if h.is_finite() && h > 0.0 => h,
            _ => DEFAULT_ROW_HEIGHT,
        }
    }

    /// Overscan actually used for layout.
    #[must_use]
    pub fn effective_overscan(&self) -> usize {
        self.overscan.unwrap_or(DEFAULT_OVERSCAN)
    }
}

/// Partial update for [`VirtualizationConfig`]; unset fields are kept.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VirtualizationConfigPatch {
    pub enabled: Option<bool>,
    pub row_height: Option<f64>,
    pub overscan: Option<usize>,
}

impl VirtualizationConfigPatch {
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn row_height(mut self, row_height: f64) -> Self {
        self.row_height = Some(row_height);
        self
    }

    #[must_use]
    pub fn overscan(mut self, overscan: usize) -> Self {
        self.overscan = Some(overscan);
        self
    }

    fn apply_to(self, config: &mut VirtualizationConfig) {
        if let Some(enabled) = self.enabled {
            config.enabled = enabled;
        }
        if let Some(row_height) = self.row_height {
            config.row_height = Some(row_height);
        }
        if let Some(overscan) = self.overscan {
            config.overscan = Some(overscan);
        }
    }
}

impl From<VirtualizationConfig> for VirtualizationConfigPatch {
    fn from(config: VirtualizationConfig) -> Self {
        Self {
            enabled: Some(config.enabled),
            row_height: config.row_height,
            overscan: config.overscan,
        }
    }
}

/// Half-open range of row indices to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub end: usize,
}

impl VisibleRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of rows in the range.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<VisibleRange> for Range<usize> {
    fn from(range: VisibleRange) -> Self {
        range.as_range()
    }
}

/// Output of [`Virtualizer::virtual_state`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct VirtualState {
    /// Scroll offset the range was computed from, clamped to be non-negative.
    pub scroll_top: f64,
    pub container_height: f64,
    /// Height of the scroll spacer: `total_count * row_height`.
    pub total_height: f64,
    pub visible_range: VisibleRange,
}

/// Computes the visible window of a fixed-row-height list.
#[derive(Debug, Clone, Default)]
pub struct Virtualizer {
    config: VirtualizationConfig,
    scroll_top: f64,
    container_height: f64,
    total_count: usize,
}

impl Virtualizer {
    /// Create a virtualizer with an unmeasured container.
    #[must_use]
    pub fn new(config: VirtualizationConfig) -> Self {
        Self {
            config,
            scroll_top: 0.0,
            container_height: 0.0,
            total_count: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &VirtualizationConfig {
        &self.config
    }

    /// Merge the fields set in `patch` into the current config.
    pub fn update_config(&mut self, patch: impl Into<VirtualizationConfigPatch>) {
        patch.into().apply_to(&mut self.config);
    }

    /// Record the latest scroll position, viewport height and row count.
    pub fn update_state(&mut self, scroll_top: f64, container_height: f64, total_count: usize) {
        self.scroll_top = scroll_top;
        self.container_height = container_height;
        self.total_count = total_count;
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Compute the window for the current snapshot.
    ///
    /// When virtualization is disabled or the container has not been
    /// measured (zero, negative or non-finite height) every row is in range
    /// and the scroll metrics are zero.
    #[must_use]
    pub fn virtual_state(&self) -> VirtualState {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "virtual_state",
            enabled = self.config.enabled,
            total_count = self.total_count,
            scroll_top = self.scroll_top,
            container_height = self.container_height
        )
        .entered();

        let row_height = self.config.effective_row_height();
        let overscan = self.config.effective_overscan();
        let measured = self.container_height.is_finite() && self.container_height > 0.0;

        if !self.config.enabled || !measured {
            return VirtualState {
                scroll_top: 0.0,
                container_height: 0.0,
                total_height: 0.0,
                visible_range: VisibleRange::new(0, self.total_count),
            };
        }

        // NaN.max(0.0) is 0.0.
        let scroll_top = self.scroll_top.max(0.0);
        let start = ((scroll_top / row_height).floor() as usize).saturating_sub(overscan);
        let visible_count = (self.container_height / row_height).ceil() as usize;
        let end = self.total_count.min(
            start
                .saturating_add(visible_count)
                .saturating_add(overscan.saturating_mul(2)),
        );
        let start = start.min(end);

        VirtualState {
            scroll_top,
            container_height: self.container_height,
            total_height: self.total_count as f64 * row_height,
            visible_range: VisibleRange::new(start, end),
        }
    }

    /// Slice of `rows` inside the current window.
    #[must_use]
    pub fn visible_rows<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let range = self.virtual_state().visible_range;
        let end = range.end.min(rows.len());
        let start = range.start.min(end);
        &rows[start..end]
    }

    /// Top offset of row `index` in pixels.
    #[must_use]
    pub fn row_offset(&self, index: usize) -> f64 {
        index as f64 * self.config.effective_row_height()
    }
}
