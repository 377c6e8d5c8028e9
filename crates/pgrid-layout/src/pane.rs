// ABOUTME: A single slot of the grid hosting a stack of views.
// ABOUTME: Tracks which view is active and the order views were last used in.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u64);

/// Handle for a view hosted by a pane. The surface itself lives with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

/// Handle for the document a view is editing, chosen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// What happened to a pane after one of its views was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewClosed {
    /// Another view took over as the active one
    Activated(ViewId),
    /// The pane no longer hosts any view
    Empty,
}

#[derive(Debug, Clone, Copy)]
struct HostedView {
    id: ViewId,
    document: DocumentId,
}

#[derive(Debug)]
pub struct Pane {
    id: PaneId,
    /// Views in the order they were added
    views: Vec<HostedView>,
    /// Most recently used first
    focus_history: Vec<ViewId>,
    active: Option<ViewId>,
}

impl Pane {
    pub(crate) fn new(id: PaneId) -> Self {
        Self {
            id,
            views: Vec::new(),
            focus_history: Vec::new(),
            active: None,
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn is_empty(&self) -> bool {
        self.focus_history.is_empty()
    }

    pub fn active_view(&self) -> Option<ViewId> {
        self.active
    }

    /// Views hosted by this pane, in the order they were added
    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.views.iter().map(|v| v.id)
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.views.iter().any(|v| v.id == view)
    }

    pub fn document_of(&self, view: ViewId) -> Option<DocumentId> {
        self.views.iter().find(|v| v.id == view).map(|v| v.document)
    }

    pub(crate) fn add_view(&mut self, id: ViewId, document: DocumentId) {
        self.views.push(HostedView { id, document });
        self.focus_history.insert(0, id);
        self.active = Some(id);
    }

    /// Make `view` the visible one. Returns false if this pane does not host it.
    pub(crate) fn set_active_view(&mut self, view: ViewId) -> bool {
        if !self.contains(view) {
            return false;
        }
        if self.active != Some(view) {
            self.focus_history.retain(|v| *v != view);
            self.focus_history.insert(0, view);
            self.active = Some(view);
        }
        true
    }

    /// Remove `view`, handing activation to the next most recently used view.
    /// Returns None if this pane does not host it.
    pub(crate) fn remove_view(&mut self, view: ViewId) -> Option<ViewClosed> {
        let index = self.views.iter().position(|v| v.id == view)?;
        self.views.remove(index);
        self.focus_history.retain(|v| *v != view);

        // The active view is always the head of the history.
        match self.focus_history.first().copied() {
            Some(next) => {
                self.active = Some(next);
                Some(ViewClosed::Activated(next))
            }
            None => {
                self.active = None;
                Some(ViewClosed::Empty)
            }
        }
    }

    /// View showing `document`, if any
    pub fn find_with_document(&self, document: DocumentId) -> Option<ViewId> {
        self.views
            .iter()
            .find(|v| v.document == document)
            .map(|v| v.id)
    }

    /// Most recently used document matching `predicate`
    pub fn find_document<F>(&self, mut predicate: F) -> Option<DocumentId>
    where
        F: FnMut(DocumentId) -> bool,
    {
        self.focus_history
            .iter()
            .filter_map(|id| self.document_of(*id))
            .find(|doc| predicate(*doc))
    }
}
