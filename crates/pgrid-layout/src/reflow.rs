// ABOUTME: Sizing of the grid's panes along its horizontal extent.
// ABOUTME: Evenly redistributes divider positions and maps them to pixel spans.

use crate::{Grid, GridError, PaneId};

/// Horizontal slice of the grid occupied by one pane, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub len: u32,
}

impl Grid {
    pub fn extent(&self) -> u32 {
        self.extent
    }

    pub fn handle_size(&self) -> u32 {
        self.handle_size
    }

    pub fn set_handle_size(&mut self, handle_size: u32) {
        self.handle_size = handle_size;
        self.reflow();
    }

    /// Give every pane an equal share of the extent.
    ///
    /// Only divider positions change; the pane order is left alone, so
    /// running this twice is the same as running it once.
    pub fn reflow(&mut self) {
        let count = self.splits.len().max(1) as u32;
        let handles = self.handle_size.saturating_mul(count - 1);
        let position = self.extent.saturating_sub(handles) / count;

        for split in &mut self.splits {
            split.position = position;
        }

        tracing::trace!("Reflowed {} panes to {} px each", count, position);
    }

    /// Divider positions, left to right
    pub fn splits(&self) -> Vec<u32> {
        self.splits.iter().map(|s| s.position).collect()
    }

    pub fn position(&self, pane: PaneId) -> Result<u32, GridError> {
        let index = self.index_of(pane)?;
        Ok(self.splits[index].position)
    }

    /// Move the divider after `pane`, as when the user drags it.
    /// Returns the position actually applied.
    pub fn set_position(&mut self, pane: PaneId, position: u32) -> Result<u32, GridError> {
        let index = self.index_of(pane)?;
        let position = position.min(self.extent);
        self.splits[index].position = position;
        Ok(position)
    }

    /// Change the total extent.
    ///
    /// Each divider keeps its position as a fraction of the old extent, since
    /// every divider is measured inside its own nested allocation.
    pub fn resize(&mut self, extent: u32) {
        let old = self.extent;
        self.extent = extent;

        if old == 0 {
            self.reflow();
            return;
        }

        for split in &mut self.splits {
            let scaled = u64::from(split.position) * u64::from(extent) / u64::from(old);
            split.position = u32::try_from(scaled).unwrap_or(extent);
        }

        tracing::debug!("Resized grid from {} to {} px", old, extent);
    }

    /// Pixel span of every pane, left to right.
    ///
    /// Each divider splits whatever its parent left over: the pane gets up to
    /// `position` pixels, a handle follows, and the remainder goes on to the
    /// next split. The last pane has no second child and takes all that is left.
    pub fn pane_spans(&self) -> Vec<(PaneId, Span)> {
        let mut result = Vec::with_capacity(self.splits.len());
        let mut start = 0;
        let mut remaining = self.extent;
        let last = self.splits.len() - 1;

        for (i, split) in self.splits.iter().enumerate() {
            let len = if i == last {
                remaining
            } else {
                split.position.min(remaining)
            };
            result.push((split.pane.id(), Span { start, len }));

            let consumed = len.saturating_add(self.handle_size).min(remaining);
            start += consumed;
            remaining -= consumed;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(extent: u32, panes: usize) -> Grid {
        let mut grid = Grid::new(extent);
        for _ in 1..panes {
            let last = grid.last_pane();
            grid.insert_after(last).unwrap();
        }
        grid
    }

    #[test]
    fn single_pane_fills_extent() {
        let grid = Grid::new(1000);
        assert_eq!(grid.splits(), vec![1000]);
        assert_eq!(
            grid.pane_spans()[0].1,
            Span {
                start: 0,
                len: 1000
            }
        );
    }

    #[test]
    fn split_gives_equal_space() {
        let grid = grid_with(1000, 4);
        assert_eq!(grid.splits(), vec![250; 4]);

        let lens: Vec<u32> = grid.pane_spans().iter().map(|(_, s)| s.len).collect();
        assert_eq!(lens, vec![250; 4]);
    }

    #[test]
    fn remainder_goes_to_last_pane() {
        let grid = grid_with(1000, 3);
        assert_eq!(grid.splits(), vec![333; 3]);

        let spans = grid.pane_spans();
        assert_eq!(spans[2].1, Span { start: 666, len: 334 });
    }

    #[test]
    fn handles_are_subtracted_before_dividing() {
        let mut grid = grid_with(1000, 3);
        grid.set_handle_size(5);
        assert_eq!(grid.splits(), vec![330; 3]);

        let spans: Vec<Span> = grid.pane_spans().into_iter().map(|(_, s)| s).collect();
        assert_eq!(spans[0], Span { start: 0, len: 330 });
        assert_eq!(spans[1], Span { start: 335, len: 330 });
        assert_eq!(spans[2], Span { start: 670, len: 330 });
    }

    #[test]
    fn reflow_after_removal() {
        let mut grid = grid_with(1200, 3);
        let middle = grid.panes().nth(1).unwrap();
        grid.remove_pane(middle).unwrap();
        assert_eq!(grid.splits(), vec![600, 600]);
    }

    #[test]
    fn resize_keeps_proportions() {
        let mut grid = grid_with(1000, 2);
        let first = grid.first_pane();
        grid.set_position(first, 300).unwrap();

        grid.resize(2000);
        assert_eq!(grid.position(first).unwrap(), 600);
        assert_eq!(grid.extent(), 2000);
    }

    #[test]
    fn resize_from_zero_reflows() {
        let mut grid = grid_with(0, 2);
        assert_eq!(grid.splits(), vec![0, 0]);
        grid.resize(800);
        assert_eq!(grid.splits(), vec![400, 400]);
    }

    #[test]
    fn set_position_is_clamped() {
        let mut grid = grid_with(500, 2);
        let first = grid.first_pane();
        assert_eq!(grid.set_position(first, 9000).unwrap(), 500);

        let spans = grid.pane_spans();
        assert_eq!(spans[0].1.len, 500);
        assert_eq!(spans[1].1, Span { start: 500, len: 0 });
    }

    #[test]
    fn reflow_is_idempotent() {
        let mut grid = grid_with(999, 4);
        let before = grid.splits();
        grid.reflow();
        grid.reflow();
        assert_eq!(grid.splits(), before);
    }
}
