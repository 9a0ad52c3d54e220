//! Grid module - the scrolling tile buffer
//!
//! The grid is a `rows x cols` field stored as one flat row-major buffer that is
//! allocated once when the game is created. The bottom row is a permanent wall
//! (the floor) and never scrolls. Every other row shifts one column to the left
//! per tick, which is how the world moves toward the player.
//!
//! Coordinates: `(row, col)` with row 0 at the top and col 0 at the left.

use crate::types::CellKind;

/// Fixed-size grid of cells, row-major (`row * cols + col`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    rows: u16,
    cols: u16,
    cells: Vec<CellKind>,
}

impl TileGrid {
    /// Create an empty grid with the floor row filled with walls
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = (rows as usize) * (cols as usize);
        let mut grid = Self {
            rows,
            cols,
            cells: vec![CellKind::Empty; len],
        };
        if rows > 0 {
            let floor = grid.floor_row();
            grid.row_mut(floor).fill(CellKind::Wall);
        }
        grid
    }

    #[inline(always)]
    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// The permanent wall row
    pub fn floor_row(&self) -> u16 {
        self.rows - 1
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: u16, col: u16) -> Option<CellKind> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at `(row, col)`. Returns false if out of bounds.
    pub fn set(&mut self, row: u16, col: u16, kind: CellKind) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Write `kind` at `(row, col)` and return what was there before.
    pub fn replace(&mut self, row: u16, col: u16, kind: CellKind) -> Option<CellKind> {
        let i = self.index(row, col)?;
        Some(std::mem::replace(&mut self.cells[i], kind))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u16) -> &[CellKind] {
        let start = (row as usize) * (self.cols as usize);
        &self.cells[start..start + self.cols as usize]
    }

    fn row_mut(&mut self, row: u16) -> &mut [CellKind] {
        let start = (row as usize) * (self.cols as usize);
        let end = start + self.cols as usize;
        &mut self.cells[start..end]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Shift every row above the floor one column to the left.
    ///
    /// A `PlayerHead` that moves out of the player column is replaced by
    /// `trailing`, leaving a sprite trail behind the player. The rightmost
    /// column becomes empty.
    pub fn scroll_left(&mut self, trailing: CellKind) {
        if self.cols == 0 {
            return;
        }
        let cols = self.cols as usize;
        for row in 0..self.floor_row() {
            let cells = self.row_mut(row);
            cells.copy_within(1..cols, 0);
            for cell in &mut cells[..cols - 1] {
                if *cell == CellKind::PlayerHead {
                    *cell = trailing;
                }
            }
            cells[cols - 1] = CellKind::Empty;
        }
    }

    /// Fill `height` rows directly above the floor in the rightmost column
    /// with obstacle cells.
    pub fn place_obstacle(&mut self, height: u16) {
        let col = self.cols - 1;
        let floor = self.floor_row();
        let top = floor.saturating_sub(height);
        for row in top..floor {
            self.set(row, col, CellKind::Obstacle);
        }
    }

    /// Number of player cells (head or trail) in one column
    pub fn player_cells_in_column(&self, col: u16) -> usize {
        (0..self.rows)
            .filter_map(|row| self.get(row, col))
            .filter(CellKind::is_player)
            .count()
    }
}
