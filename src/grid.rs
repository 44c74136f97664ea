use crate::chain::Chain;
use crate::error::{Error, Result};
use crate::vector::Vector;

/// Largest window the grid will allocate
pub const MAX_RENDER_CELLS: usize = 1 << 22;

/// Character grid for drawing a chain
/// Cell (0, 0) is the bottom-left corner; rows are emitted top to bottom
#[derive(Clone)]
pub struct Grid {
    pub rows: i64,
    pub cols: i64,
    /// World position of the bottom-left cell
    pub origin: Vector,
    pub cells: Vec<char>,
}

impl Grid {
    /// Create an empty grid filled with `.`
    ///
    /// Negative dimensions count as zero. Windows above `MAX_RENDER_CELLS`
    /// are refused.
    pub fn new(rows: i64, cols: i64, origin: Vector) -> Result<Self> {
        let (rows, cols) = (rows.max(0), cols.max(0));
        let too_large = || Error::RenderTooLarge {
            rows,
            cols,
            limit: MAX_RENDER_CELLS,
        };

        let count = usize::try_from(rows)
            .ok()
            .zip(usize::try_from(cols).ok())
            .and_then(|(r, c)| r.checked_mul(c))
            .filter(|&n| n <= MAX_RENDER_CELLS)
            .ok_or_else(too_large)?;

        Ok(Grid {
            rows,
            cols,
            origin,
            cells: vec!['.'; count],
        })
    }

    /// Square window of `size` cells with its bottom-left corner at `origin`
    pub fn square(size: u32, origin: Vector) -> Result<Self> {
        Self::new(i64::from(size), i64::from(size), origin)
    }

    /// Smallest window holding every knot and visited cell of `chain`
    pub fn fitting(chain: &Chain) -> Result<Self> {
        let points = chain.knots().iter().chain(chain.visited().iter());
        let (mut min, mut max) = (chain.head(), chain.head());
        for p in points {
            min = Vector::new(min.x.min(p.x), min.y.min(p.y));
            max = Vector::new(max.x.max(p.x), max.y.max(p.y));
        }
        let span = max - min;
        Self::new(span.y + 1, span.x + 1, min)
    }

    /// Convert a world position to a cell ID, None if outside the window
    pub fn get_id(&self, pos: Vector) -> Option<usize> {
        let local = pos - self.origin;
        if local.x < 0 || local.x >= self.cols || local.y < 0 || local.y >= self.rows {
            return None;
        }
        Some((local.x + local.y * self.cols) as usize)
    }

    /// Set a cell; positions outside the window are ignored
    pub fn set_cell(&mut self, pos: Vector, value: char) {
        if let Some(id) = self.get_id(pos) {
            self.cells[id] = value;
        }
    }

    /// Draw the knots of `chain`, marking `start` with `s`
    ///
    /// Two-knot chains use `H`/`T`; longer chains label followers by index.
    /// Where knots overlap, the one closest to the head is shown.
    pub fn draw_knots(&mut self, chain: &Chain, start: Vector) {
        self.set_cell(start, 's');
        for (i, &knot) in chain.knots().iter().enumerate().rev() {
            self.set_cell(knot, knot_label(i, chain.len()));
        }
    }

    /// Mark every visited tail position with `#`, and `start` with `s`
    pub fn draw_visited(&mut self, chain: &Chain, start: Vector) {
        for &pos in chain.visited() {
            self.set_cell(pos, '#');
        }
        self.set_cell(start, 's');
    }

    /// Render rows top to bottom, one line each
    pub fn render(&self) -> String {
        let cols = self.cols as usize;
        let mut out = String::with_capacity(self.cells.len() + self.rows as usize);
        for row in self.cells.chunks(cols.max(1)).rev() {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

fn knot_label(index: usize, len: usize) -> char {
    match index {
        0 => 'H',
        _ if len == 2 => 'T',
        i => char::from_digit((i % 36) as u32, 36).unwrap_or('?'),
    }
}

/// Draw a chain into a square window anchored at `start`
pub fn render_chain(chain: &Chain, start: Vector, size: u32) -> Result<String> {
    let mut grid = Grid::square(size, start)?;
    grid.draw_knots(chain, start);
    Ok(grid.render())
}

/// Draw the visited set in a window fitted around the whole run
pub fn render_visited(chain: &Chain, start: Vector) -> Result<String> {
    let mut grid = Grid::fitting(chain)?;
    grid.draw_visited(chain, start);
    Ok(grid.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_two_knot_chain() {
        let chain = Chain::new(2, Vector::ORIGIN).unwrap();
        assert_eq!(render_chain(&chain, Vector::ORIGIN, 3).unwrap(), "...\n...\nH..\n");
    }

    #[test]
    fn test_head_and_tail_labels() {
        let mut chain = Chain::new(2, Vector::ORIGIN).unwrap();
        chain.apply_step_to_head(Vector::new(1, 0)).apply_step_to_head(Vector::new(1, 0));
        assert_eq!(render_chain(&chain, Vector::ORIGIN, 4).unwrap(), "....\n....\n....\nsTH.\n");
    }

    #[test]
    fn test_long_chain_uses_indices() {
        let mut chain = Chain::new(4, Vector::ORIGIN).unwrap();
        chain.apply_steps(vec![Vector::new(0, 1); 3]);
        // Knots at y = 3, 2, 1, 0 with the tail back on the start cell
        assert_eq!(render_chain(&chain, Vector::ORIGIN, 2).unwrap(), "2.\n3.\n");
        assert_eq!(render_chain(&chain, Vector::ORIGIN, 4).unwrap(), "H...\n1...\n2...\n3...\n");
    }

    #[test]
    fn test_out_of_window_ignored() {
        let mut grid = Grid::square(2, Vector::ORIGIN).unwrap();
        grid.set_cell(Vector::new(5, 5), 'x');
        grid.set_cell(Vector::new(-1, 0), 'x');
        assert_eq!(grid.get_id(Vector::new(5, 5)), None);
        assert_eq!(grid.render(), "..\n..\n");
    }

    #[test]
    fn test_render_visited_fits_run() {
        let mut chain = Chain::new(2, Vector::ORIGIN).unwrap();
        chain.apply_steps(vec![Vector::new(1, 0); 3]);
        // Tail visited x = 0..=2, head sits at x = 3
        assert_eq!(render_visited(&chain, Vector::ORIGIN).unwrap(), "s##.\n");
    }

    #[test]
    fn test_rendering_does_not_touch_state() {
        let mut chain = Chain::new(3, Vector::ORIGIN).unwrap();
        chain.apply_steps(vec![Vector::new(1, 0), Vector::new(0, 1), Vector::new(1, 0)]);
        let knots = chain.knots().to_vec();
        let visits = chain.count_tail_visits();
        render_chain(&chain, Vector::ORIGIN, 5).unwrap();
        render_visited(&chain, Vector::ORIGIN).unwrap();
        assert_eq!(chain.knots(), knots.as_slice());
        assert_eq!(chain.count_tail_visits(), visits);
    }

    #[test]
    fn test_empty_window() {
        let chain = Chain::new(2, Vector::ORIGIN).unwrap();
        assert_eq!(render_chain(&chain, Vector::ORIGIN, 0).unwrap(), "");
        assert!(Grid::new(-3, 4, Vector::ORIGIN).unwrap().cells.is_empty());
    }

    #[test]
    fn test_oversized_square_refused() {
        let chain = Chain::new(2, Vector::ORIGIN).unwrap();
        assert!(render_chain(&chain, Vector::ORIGIN, 2048).is_ok());
        assert!(matches!(
            render_chain(&chain, Vector::ORIGIN, 50_000),
            Err(Error::RenderTooLarge { rows: 50_000, cols: 50_000, .. })
        ));
        assert!(matches!(
            Grid::new(i64::MAX, i64::MAX, Vector::ORIGIN),
            Err(Error::RenderTooLarge { .. })
        ));
    }

    #[test]
    fn test_visited_window_too_wide_for_run() {
        let mut chain = Chain::new(2, Vector::ORIGIN).unwrap();
        let mut steps = vec![Vector::new(1, 0); 50_000];
        steps.extend(vec![Vector::new(0, 1); 50_000]);
        chain.apply_steps(steps);
        assert!(matches!(
            render_visited(&chain, Vector::ORIGIN),
            Err(Error::RenderTooLarge { .. })
        ));
    }
}
