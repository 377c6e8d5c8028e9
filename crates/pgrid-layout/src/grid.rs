// ABOUTME: Ordered sequence of panes that make up one split editing surface.
// ABOUTME: Supports navigation, inserting panes beside others, and removing panes.

use pgrid_core::GridConfig;

use crate::{GridError, Pane, PaneId, ViewId};

/// One divider of the grid: a pane plus where the divider after it sits.
///
/// Conceptually this is a binary join whose first child is always the pane
/// and whose second child is the next split (or nothing for the last pane).
/// Storing the joins in a flat, ordered list keeps that invariant by
/// construction.
#[derive(Debug)]
pub(crate) struct Split {
    pub(crate) pane: Pane,
    pub(crate) position: u32,
}

/// Outcome of [`Grid::remove_pane`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The pane was the only one left and was kept
    Refused,
    /// The pane is gone. `focus` names the pane that took over focus, if the
    /// removed pane was the focused one.
    Removed { focus: Option<PaneId> },
}

#[derive(Debug)]
pub struct Grid {
    pub(crate) splits: Vec<Split>,
    /// Most recently focused pane. Never owns the pane: cleared when it is removed.
    pub(crate) last_focused: Option<PaneId>,
    pub(crate) extent: u32,
    pub(crate) handle_size: u32,
    next_pane_id: u64,
    next_view_id: u64,
}

impl Grid {
    /// Create a grid holding a single empty pane
    pub fn new(extent: u32) -> Self {
        let mut grid = Self {
            splits: Vec::new(),
            last_focused: None,
            extent,
            handle_size: 0,
            next_pane_id: 0,
            next_view_id: 0,
        };
        let pane = grid.create_pane();
        grid.splits.push(Split { pane, position: 0 });
        grid.reflow();
        grid
    }

    pub fn from_config(config: &GridConfig) -> Self {
        let mut grid = Self::new(config.extent);
        grid.set_handle_size(config.handle_size);
        grid
    }

    fn create_pane(&mut self) -> Pane {
        let id = PaneId(self.next_pane_id);
        self.next_pane_id += 1;
        Pane::new(id)
    }

    pub(crate) fn create_view_id(&mut self) -> ViewId {
        let id = ViewId(self.next_view_id);
        self.next_view_id += 1;
        id
    }

    pub(crate) fn index_of(&self, pane: PaneId) -> Result<usize, GridError> {
        self.splits
            .iter()
            .position(|s| s.pane.id() == pane)
            .ok_or(GridError::UnknownPane(pane))
    }

    pub fn pane(&self, pane: PaneId) -> Result<&Pane, GridError> {
        let index = self.index_of(pane)?;
        Ok(&self.splits[index].pane)
    }

    pub fn contains(&self, pane: PaneId) -> bool {
        self.index_of(pane).is_ok()
    }

    /// Number of panes. Never zero.
    pub fn len(&self) -> usize {
        self.splits.len()
    }

    /// Always false: a grid keeps at least one pane.
    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    /// All panes, left to right
    pub fn panes(&self) -> impl Iterator<Item = PaneId> + Clone + '_ {
        self.splits.iter().map(|s| s.pane.id())
    }

    pub fn first_pane(&self) -> PaneId {
        self.splits[0].pane.id()
    }

    pub fn last_pane(&self) -> PaneId {
        self.splits[self.splits.len() - 1].pane.id()
    }

    /// Pane directly left of `pane`, if any
    pub fn pane_before(&self, pane: PaneId) -> Result<Option<PaneId>, GridError> {
        let index = self.index_of(pane)?;
        Ok(index.checked_sub(1).map(|i| self.splits[i].pane.id()))
    }

    /// Pane directly right of `pane`, if any
    pub fn pane_after(&self, pane: PaneId) -> Result<Option<PaneId>, GridError> {
        let index = self.index_of(pane)?;
        Ok(self.splits.get(index + 1).map(|s| s.pane.id()))
    }

    /// Insert a new empty pane directly left of `reference`
    pub fn insert_before(&mut self, reference: PaneId) -> Result<PaneId, GridError> {
        let index = self.index_of(reference)?;
        Ok(self.insert_at(index))
    }

    /// Insert a new empty pane directly right of `reference`
    pub fn insert_after(&mut self, reference: PaneId) -> Result<PaneId, GridError> {
        let index = self.index_of(reference)?;
        Ok(self.insert_at(index + 1))
    }

    fn insert_at(&mut self, index: usize) -> PaneId {
        let pane = self.create_pane();
        let id = pane.id();
        self.splits.insert(index, Split { pane, position: 0 });
        self.reflow();

        tracing::info!("Added pane {:?}, total panes: {}", id, self.splits.len());
        id
    }

    /// Remove `pane` from the grid, keeping the order of the others.
    ///
    /// The last remaining pane is never removed.
    pub fn remove_pane(&mut self, pane: PaneId) -> Result<Removal, GridError> {
        let index = self.index_of(pane)?;

        if self.splits.len() == 1 {
            tracing::debug!("Refusing to remove {:?}, it is the only pane", pane);
            return Ok(Removal::Refused);
        }

        let before = index.checked_sub(1).map(|i| self.splits[i].pane.id());
        let after = self.splits.get(index + 1).map(|s| s.pane.id());

        self.splits.remove(index);
        self.reflow();

        let mut focus = None;
        if self.last_focused == Some(pane) {
            self.last_focused = None;
            focus = before.or(after);
            if let Some(next) = focus {
                self.transfer_focus(next);
            }
        }

        tracing::info!(
            "Closed pane {:?}, remaining panes: {}",
            pane,
            self.splits.len()
        );
        Ok(Removal::Removed { focus })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(grid: &Grid) -> Vec<PaneId> {
        grid.panes().collect()
    }

    #[test]
    fn new_grid_has_one_pane() {
        let grid = Grid::new(800);
        assert_eq!(grid.len(), 1);
        assert!(!grid.is_empty());
        assert_eq!(grid.first_pane(), grid.last_pane());
        assert!(grid.pane(grid.first_pane()).unwrap().is_empty());
    }

    #[test]
    fn insert_after_places_pane_to_the_right() {
        let mut grid = Grid::new(800);
        let a = grid.first_pane();
        let b = grid.insert_after(a).unwrap();
        let c = grid.insert_after(a).unwrap();

        assert_eq!(order(&grid), vec![a, c, b]);
        assert_eq!(grid.pane_after(a).unwrap(), Some(c));
        assert_eq!(grid.pane_before(b).unwrap(), Some(c));
        assert_eq!(grid.last_pane(), b);
    }

    #[test]
    fn insert_before_head_becomes_new_head() {
        let mut grid = Grid::new(800);
        let a = grid.first_pane();
        let b = grid.insert_before(a).unwrap();

        assert_eq!(order(&grid), vec![b, a]);
        assert_eq!(grid.first_pane(), b);
        assert_eq!(grid.pane_before(b).unwrap(), None);
        assert_eq!(grid.pane_after(a).unwrap(), None);
    }

    #[test]
    fn navigation_rejects_foreign_panes() {
        let mut grid = Grid::new(800);
        let stranger = PaneId(42);

        assert_eq!(
            grid.pane_before(stranger),
            Err(GridError::UnknownPane(stranger))
        );
        assert_eq!(
            grid.insert_after(stranger),
            Err(GridError::UnknownPane(stranger))
        );
        assert_eq!(
            grid.remove_pane(stranger),
            Err(GridError::UnknownPane(stranger))
        );
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn remove_head_middle_and_tail() {
        let mut grid = Grid::new(800);
        let a = grid.first_pane();
        let b = grid.insert_after(a).unwrap();
        let c = grid.insert_after(b).unwrap();
        let d = grid.insert_after(c).unwrap();

        assert_eq!(
            grid.remove_pane(b).unwrap(),
            Removal::Removed { focus: None }
        );
        assert_eq!(order(&grid), vec![a, c, d]);

        grid.remove_pane(a).unwrap();
        assert_eq!(order(&grid), vec![c, d]);

        grid.remove_pane(d).unwrap();
        assert_eq!(order(&grid), vec![c]);
    }

    #[test]
    fn remove_sole_pane_is_refused() {
        let mut grid = Grid::new(800);
        let a = grid.first_pane();

        assert_eq!(grid.remove_pane(a).unwrap(), Removal::Refused);
        assert_eq!(order(&grid), vec![a]);
        assert!(!grid.is_empty());
    }

    #[test]
    fn removing_focused_pane_prefers_predecessor() {
        let mut grid = Grid::new(800);
        let a = grid.first_pane();
        let b = grid.insert_after(a).unwrap();
        let c = grid.insert_after(b).unwrap();

        grid.notify_focus(b);
        assert_eq!(
            grid.remove_pane(b).unwrap(),
            Removal::Removed { focus: Some(a) }
        );
        assert_eq!(grid.last_focus(), Some(a));

        grid.notify_focus(a);
        assert_eq!(
            grid.remove_pane(a).unwrap(),
            Removal::Removed { focus: Some(c) }
        );
        assert_eq!(grid.last_focus(), Some(c));
    }

    #[test]
    fn removing_unfocused_pane_keeps_focus() {
        let mut grid = Grid::new(800);
        let a = grid.first_pane();
        let b = grid.insert_after(a).unwrap();

        grid.notify_focus(a);
        grid.remove_pane(b).unwrap();
        assert_eq!(grid.last_focus(), Some(a));
    }
}
