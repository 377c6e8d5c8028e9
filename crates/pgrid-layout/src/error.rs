// ABOUTME: Error types for grid operations.
// ABOUTME: Raised when a caller hands the grid a handle it does not own.

use crate::{PaneId, ViewId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Pane {0:?} does not belong to this grid")]
    UnknownPane(PaneId),

    #[error("View {0:?} is not hosted by pane {1:?}")]
    UnknownView(ViewId, PaneId),
}
