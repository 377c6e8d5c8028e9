// ABOUTME: Split-pane grid layout for an editing surface.
// ABOUTME: Panes sit side by side and can be split, merged, focused and evenly sized.

mod documents;
mod error;
mod focus;
mod grid;
mod pane;
mod reflow;

pub use documents::{SplitAction, SplitOutcome};
pub use error::GridError;
pub use focus::FocusDirection;
pub use grid::{Grid, Removal};
pub use pane::{DocumentId, Pane, PaneId, ViewClosed, ViewId};
pub use reflow::Span;
