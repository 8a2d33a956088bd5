//! Board module - manages the game grid
//!
//! The board is a fixed-size grid where each cell is empty (`0`) or holds the
//! tag of the piece that locked there. Storage is a flat row-major vector;
//! the dimensions never change after construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::pieces::{Piece, Shape};
use crate::types::{Cell, EMPTY, MAX_TAG};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

/// Result of removing complete rows from a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClear {
    pub board: Board,
    pub lines_cleared: u32,
}

impl Board {
    /// Create an empty board of `width` columns by `height` rows
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a board from explicit rows.
    ///
    /// Returns `None` if the rows are ragged, empty, or contain a tag above 7.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        if cells.iter().any(|&c| c > MAX_TAG) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or the tag is invalid
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if cell > MAX_TAG {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Would `shape` anchored at (x, y) collide?
    ///
    /// A block collides when it lies left of column 0, right of the last
    /// column, below the last row, or on an occupied cell. Blocks above the
    /// top edge (negative y) do not collide on their own.
    pub fn collides(&self, x: i32, y: i32, shape: &Shape) -> bool {
        shape.blocks().any(|(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;
            bx < 0
                || bx as usize >= self.width
                || by >= self.height as i32
                || (by >= 0 && self.is_occupied(bx, by))
        })
    }

    /// Would `piece` collide at its own position?
    pub fn piece_collides(&self, piece: &Piece) -> bool {
        self.collides(piece.x, piece.y, &piece.shape)
    }

    /// Copy of this board with `piece` written in at its colour tag.
    ///
    /// Blocks outside the board are dropped.
    pub fn merged_with(&self, piece: &Piece) -> Board {
        let mut out = self.clone();
        out.merge_piece(piece);
        out
    }

    /// Write `piece` into this board, skipping out-of-bounds blocks.
    /// Returns the number of blocks written.
    pub fn merge_piece(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, piece.color) {
                written += 1;
            }
        }
        written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height || self.width == 0 {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|&cell| cell != EMPTY)
    }

    /// Remove every full row in one pass and pad the top with empty rows.
    /// Returns how many rows were removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width;
        let mut cleared = 0;
        let mut write_y = self.height;

        // Scan from bottom to top; surviving rows slide down to write_y.
        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        cleared
    }

    /// Copy of this board with full rows removed
    pub fn clear_lines(&self) -> LineClear {
        let mut board = self.clone();
        let lines_cleared = board.clear_full_rows();
        LineClear {
            board,
            lines_cleared,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }

    /// Convert to explicit rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}

/// Empty board of the given size (free-function form of [`Board::new`])
pub fn create_empty_board(cols: usize, rows: usize) -> Board {
    Board::new(cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_set_rejects_invalid_tag() {
        let mut board = Board::new(4, 4);
        assert!(!board.set(0, 0, 8));
        assert_eq!(board.get(0, 0), Some(EMPTY));
    }

    #[test]
    fn test_clear_full_rows_two_pointer() {
        let mut board = Board::new(3, 4);
        for x in 0..3 {
            board.set(x, 1, 2);
            board.set(x, 3, 5);
        }
        board.set(0, 2, 7);
        board.set(1, 0, 6);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(
            board.to_rows(),
            vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 6, 0], vec![7, 0, 0]]
        );
    }

    #[test]
    fn test_collides_allows_blocks_above_top() {
        let board = Board::new(10, 20);
        let i = get_shape(PieceKind::I);
        // I blocks sit on shape row 1; y = -1 puts them on board row 0.
        assert!(!board.collides(3, -1, &i));
        // y = -2 puts them above the board entirely.
        assert!(!board.collides(3, -2, &i));
    }
}
