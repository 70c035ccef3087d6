#![forbid(unsafe_code)]

//! Data-grid core for AC Grid.
//!
//! Rendering-independent building blocks: row virtualization, row access,
//! filter predicates, reordering, pagination and feature configuration.
//!
//! # Feature Flags
//!
//! - `serde`: (de)serialize configuration and state records with camelCase keys.
//! - `tracing`: emit a `debug` span around every visible-window computation.

pub mod config;
pub mod filter;
pub mod pagination;
pub mod reorder;
pub mod row;
pub mod virtualized;

pub use config::{
    EditTrigger, EditingConfig, ExpandedState, FilteringConfig, GridConfig, GroupingConfig,
    PinSide, PinningConfig, ResizingConfig, SelectionConfig, SelectionMode,
};
pub use filter::{
    FilterColumn, FilterFn, FilterState, FilterType, date_filter, number_filter, text_filter,
};
pub use pagination::{PaginationConfig, PaginationMode, PaginationState};
pub use reorder::{array_move, move_item};
pub use row::{CellValue, RowAccessor};
pub use virtualized::{
    VirtualState, VirtualizationConfig, VirtualizationConfigPatch, Virtualizer, VisibleRange,
};
