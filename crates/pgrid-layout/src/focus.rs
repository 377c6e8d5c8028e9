// ABOUTME: Focus bookkeeping for the grid.
// ABOUTME: Remembers the last focused pane and moves focus between neighbors.

use crate::{Grid, GridError, PaneId};

/// Direction of a focus move, as delivered by the host's key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Left,
    Right,
    Up,
    Down,
    TabBackward,
    TabForward,
}

impl FocusDirection {
    /// Whether the move goes towards the start of the pane sequence.
    ///
    /// Up and tab-backward only reach the grid once the active view declined
    /// to move focus internally, at which point they act like left.
    pub fn is_backward(self) -> bool {
        matches!(
            self,
            FocusDirection::Left | FocusDirection::Up | FocusDirection::TabBackward
        )
    }
}

impl Grid {
    /// Pane that most recently held focus, if it still exists
    pub fn last_focus(&self) -> Option<PaneId> {
        self.last_focused
    }

    /// Record that focus landed inside `pane`.
    ///
    /// Returns false and leaves the focus untouched when the pane belongs to
    /// another grid.
    pub fn notify_focus(&mut self, pane: PaneId) -> bool {
        if !self.contains(pane) {
            return false;
        }
        self.transfer_focus(pane);
        true
    }

    pub(crate) fn transfer_focus(&mut self, pane: PaneId) {
        if self.last_focused != Some(pane) {
            tracing::debug!("Focus changed to pane {:?}", pane);
            self.last_focused = Some(pane);
        }
    }

    /// Neighbor of `from` in `direction`, wrapping around at either end
    pub fn focus_neighbor(
        &self,
        direction: FocusDirection,
        from: PaneId,
    ) -> Result<PaneId, GridError> {
        let neighbor = if direction.is_backward() {
            self.pane_before(from)?.unwrap_or_else(|| self.last_pane())
        } else {
            self.pane_after(from)?.unwrap_or_else(|| self.first_pane())
        };
        Ok(neighbor)
    }

    /// Move focus from the last focused pane to its neighbor.
    ///
    /// Does nothing when no pane has been focused yet.
    pub fn focus_neighbor_from_last(&mut self, direction: FocusDirection) -> Option<PaneId> {
        let from = self.last_focused?;
        let neighbor = self.focus_neighbor(direction, from).ok()?;
        self.transfer_focus(neighbor);
        Some(neighbor)
    }

    /// Restore focus to the last focused pane, or the first pane
    pub fn grab_default_focus(&mut self) -> PaneId {
        let pane = self.last_focused.unwrap_or_else(|| self.first_pane());
        self.transfer_focus(pane);
        pane
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_panes() -> (Grid, PaneId, PaneId, PaneId) {
        let mut grid = Grid::new(900);
        let a = grid.first_pane();
        let b = grid.insert_after(a).unwrap();
        let c = grid.insert_after(b).unwrap();
        (grid, a, b, c)
    }

    #[test]
    fn neighbors_wrap_around() {
        let (grid, a, b, c) = three_panes();

        assert_eq!(grid.focus_neighbor(FocusDirection::Left, a).unwrap(), c);
        assert_eq!(grid.focus_neighbor(FocusDirection::Right, c).unwrap(), a);
        assert_eq!(grid.focus_neighbor(FocusDirection::Right, a).unwrap(), b);
        assert_eq!(grid.focus_neighbor(FocusDirection::Left, c).unwrap(), b);
    }

    #[test]
    fn vertical_and_tab_directions_follow_sequence() {
        let (grid, a, b, c) = three_panes();

        assert_eq!(grid.focus_neighbor(FocusDirection::Up, b).unwrap(), a);
        assert_eq!(grid.focus_neighbor(FocusDirection::TabBackward, a).unwrap(), c);
        assert_eq!(grid.focus_neighbor(FocusDirection::Down, b).unwrap(), c);
        assert_eq!(grid.focus_neighbor(FocusDirection::TabForward, c).unwrap(), a);
    }

    #[test]
    fn single_pane_is_its_own_neighbor() {
        let grid = Grid::new(900);
        let a = grid.first_pane();
        assert_eq!(grid.focus_neighbor(FocusDirection::Left, a).unwrap(), a);
        assert_eq!(grid.focus_neighbor(FocusDirection::Right, a).unwrap(), a);
    }

    #[test]
    fn foreign_focus_is_ignored() {
        let (mut grid, a, _, _) = three_panes();
        assert!(grid.notify_focus(a));
        assert!(!grid.notify_focus(PaneId(77)));
        assert_eq!(grid.last_focus(), Some(a));
    }

    #[test]
    fn focus_action_needs_a_focused_pane() {
        let (mut grid, a, b, _) = three_panes();
        assert_eq!(grid.focus_neighbor_from_last(FocusDirection::Right), None);

        grid.notify_focus(a);
        assert_eq!(grid.focus_neighbor_from_last(FocusDirection::Right), Some(b));
        assert_eq!(grid.last_focus(), Some(b));
    }

    #[test]
    fn default_focus_prefers_last_focused() {
        let (mut grid, a, b, c) = three_panes();
        assert_eq!(grid.grab_default_focus(), a);

        grid.notify_focus(c);
        assert_eq!(grid.grab_default_focus(), c);

        grid.remove_pane(c).unwrap();
        assert_eq!(grid.grab_default_focus(), b);
    }
}
