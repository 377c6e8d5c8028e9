// ABOUTME: Placing documents into panes and moving views between panes.
// ABOUTME: Implements raise/focus by document, view closing, and split actions.

use crate::{DocumentId, FocusDirection, Grid, GridError, PaneId, Removal, ViewClosed, ViewId};

/// What to do with a view when the user asks to split it off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAction {
    /// Open the view's document in the pane to the left, creating one if needed
    SplitLeft,
    /// Open the view's document in the pane to the right, creating one if needed
    SplitRight,
    /// Like `SplitLeft`, but the view is closed in its current pane
    MoveLeft,
    /// Like `SplitRight`, but the view is closed in its current pane
    MoveRight,
}

impl SplitAction {
    fn is_left(self) -> bool {
        matches!(self, SplitAction::SplitLeft | SplitAction::MoveLeft)
    }

    fn is_move(self) -> bool {
        matches!(self, SplitAction::MoveLeft | SplitAction::MoveRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    /// Pane now showing the document
    pub pane: PaneId,
    /// View of the document in that pane
    pub view: ViewId,
    /// For moves, what happened to the pane the view left
    pub source: Option<ViewClosed>,
}

impl Grid {
    /// Open a new view of `document` in `pane`, even if one already exists.
    pub fn add_view(&mut self, pane: PaneId, document: DocumentId) -> Result<ViewId, GridError> {
        let index = self.index_of(pane)?;
        let view = self.create_view_id();
        self.splits[index].pane.add_view(view, document);

        tracing::debug!("Added view {:?} of {:?} to {:?}", view, document, pane);
        Ok(view)
    }

    /// Make `view` the visible view of `pane`
    pub fn set_active_view(&mut self, pane: PaneId, view: ViewId) -> Result<(), GridError> {
        let index = self.index_of(pane)?;
        if self.splits[index].pane.set_active_view(view) {
            Ok(())
        } else {
            Err(GridError::UnknownView(view, pane))
        }
    }

    /// Show `document` in `pane`, reusing the pane's view of it if there is one.
    pub fn raise_document(
        &mut self,
        pane: PaneId,
        document: DocumentId,
        focus: bool,
    ) -> Result<ViewId, GridError> {
        let index = self.index_of(pane)?;
        Ok(self.raise_at(index, document, focus))
    }

    fn raise_at(&mut self, index: usize, document: DocumentId, focus: bool) -> ViewId {
        let view = match self.splits[index].pane.find_with_document(document) {
            Some(view) => {
                self.splits[index].pane.set_active_view(view);
                view
            }
            None => {
                let view = self.create_view_id();
                self.splits[index].pane.add_view(view, document);
                view
            }
        };

        if focus {
            let pane = self.splits[index].pane.id();
            self.transfer_focus(pane);
        }
        view
    }

    /// Bring `document` to the front and focus it.
    ///
    /// A pane already showing the document wins, searching left to right.
    /// Otherwise the document opens in the last focused pane, or the first.
    pub fn focus_document(&mut self, document: DocumentId) -> (PaneId, ViewId) {
        let index = self
            .splits
            .iter()
            .position(|s| s.pane.find_with_document(document).is_some())
            .or_else(|| self.last_focused.and_then(|p| self.index_of(p).ok()))
            .unwrap_or(0);

        let view = self.raise_at(index, document, true);
        (self.splits[index].pane.id(), view)
    }

    /// First document matching `predicate`, searching panes left to right and
    /// each pane most recently used first
    pub fn find_document<F>(&self, mut predicate: F) -> Option<DocumentId>
    where
        F: FnMut(DocumentId) -> bool,
    {
        self.splits
            .iter()
            .find_map(|s| s.pane.find_document(&mut predicate))
    }

    /// Close `view` in `pane`.
    ///
    /// `ViewClosed::Empty` is the pane's request to be collapsed; the caller
    /// decides whether to honor it with [`Grid::collapse_empty_pane`].
    pub fn close_view(&mut self, pane: PaneId, view: ViewId) -> Result<ViewClosed, GridError> {
        let index = self.index_of(pane)?;
        let closed = self.splits[index]
            .pane
            .remove_view(view)
            .ok_or(GridError::UnknownView(view, pane))?;

        if closed == ViewClosed::Empty {
            tracing::debug!("Pane {:?} is now empty", pane);
        }
        Ok(closed)
    }

    /// Remove a pane whose last view was closed, handing focus to its left
    /// neighbor first. Panes that still host views are kept.
    pub fn collapse_empty_pane(&mut self, pane: PaneId) -> Result<Removal, GridError> {
        let index = self.index_of(pane)?;
        if !self.splits[index].pane.is_empty() || self.splits.len() == 1 {
            return Ok(Removal::Refused);
        }

        let neighbor = self.focus_neighbor(FocusDirection::Left, pane)?;
        self.transfer_focus(neighbor);
        self.remove_pane(pane)?;

        Ok(Removal::Removed {
            focus: Some(neighbor),
        })
    }

    /// Split `view` off into the neighboring pane, see [`SplitAction`]
    pub fn split_view(
        &mut self,
        pane: PaneId,
        view: ViewId,
        action: SplitAction,
    ) -> Result<SplitOutcome, GridError> {
        let document = self
            .pane(pane)?
            .document_of(view)
            .ok_or(GridError::UnknownView(view, pane))?;

        let target = if action.is_left() {
            match self.pane_before(pane)? {
                Some(target) => target,
                None => self.insert_before(pane)?,
            }
        } else {
            match self.pane_after(pane)? {
                Some(target) => target,
                None => self.insert_after(pane)?,
            }
        };

        let source = if action.is_move() {
            Some(self.close_view(pane, view)?)
        } else {
            None
        };

        let view = self.raise_document(target, document, true)?;
        Ok(SplitOutcome {
            pane: target,
            view,
            source,
        })
    }
}
