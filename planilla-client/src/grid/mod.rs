//! Server-side data grids
//!
//! - [`config`]: request building, response routing, row selection
//! - [`render`]: cell renderers (currency, dates, status badges)
//! - [`state`]: per-table UI state
//! - [`feedback`]: the error/message sink a grid reports to

pub mod config;
pub mod feedback;
pub mod render;
pub mod state;

pub use config::{GridColumn, GridConfig, GridRequest, RowCallback, RowFormatter};
pub use feedback::{FeedbackState, GridFeedback};
pub use render::{CellRenderer, RenderMode};
pub use state::{GridState, GridStateStore, SortDirection};
