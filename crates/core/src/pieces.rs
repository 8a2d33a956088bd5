//! Pieces module - tetromino shape matrices, the shape catalog, and rotation
//!
//! A [`Shape`] is an immutable matrix of cell tags (at most 4x4, not
//! necessarily square). Rotating produces a new shape; catalog shapes are
//! never mutated. A [`Piece`] is a shape anchored on the board by its
//! top-left corner.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, EMPTY, MAX_TAG};

/// Largest supported shape side length
pub const MAX_SHAPE_DIM: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_DIM * MAX_SHAPE_DIM;

/// Shape matrix, stored flat in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: ArrayVec<Cell, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from its rows.
    ///
    /// Returns `None` for an empty matrix, ragged rows, a side longer than
    /// [`MAX_SHAPE_DIM`], or any tag outside `0..=7`.
    ///
    /// ```
    /// use classic_tetris_core::Shape;
    ///
    /// let s = Shape::from_rows(&[&[0, 6, 0], &[6, 6, 6]]).unwrap();
    /// assert_eq!((s.width(), s.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[Cell]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_DIM || height > MAX_SHAPE_DIM {
            return None;
        }

        let mut cells = ArrayVec::new();
        for row in rows {
            if row.len() != width {
                return None;
            }
            for &cell in row.iter() {
                if cell > MAX_TAG {
                    return None;
                }
                cells.push(cell);
            }
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Cell at (col, row), or `None` outside the matrix
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.width() || row >= self.height() {
            return None;
        }
        Some(self.cells[row * self.width() + col])
    }

    /// Occupied cells as `(col, row)` offsets from the top-left corner
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != EMPTY)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    /// First nonzero tag in row-major order (`None` if the shape has no blocks)
    pub fn color_tag(&self) -> Option<Cell> {
        self.cells.iter().copied().find(|&cell| cell != EMPTY)
    }

    /// Rows of the matrix, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width())
    }

    /// Rotate 90° clockwise: transpose, then reverse each resulting row.
    ///
    /// A `w x h` shape becomes `h x w`.
    pub fn rotated(&self) -> Shape {
        let (w, h) = (self.width(), self.height());
        let mut cells = ArrayVec::new();
        // New row r is old column r read bottom to top.
        for r in 0..w {
            for c in 0..h {
                cells.push(self.cells[(h - 1 - c) * w + r]);
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

/// Shape rows for a catalog piece (spawn orientation)
fn catalog_rows(kind: PieceKind) -> &'static [&'static [Cell]] {
    match kind {
        PieceKind::I => &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
        PieceKind::J => &[&[2, 0, 0], &[2, 2, 2], &[0, 0, 0]],
        PieceKind::L => &[&[0, 0, 3], &[3, 3, 3], &[0, 0, 0]],
        PieceKind::O => &[&[4, 4], &[4, 4]],
        PieceKind::S => &[&[0, 5, 5], &[5, 5, 0], &[0, 0, 0]],
        PieceKind::T => &[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]],
        PieceKind::Z => &[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]],
    }
}

/// Spawn-orientation shape of a catalog piece
pub fn get_shape(kind: PieceKind) -> Shape {
    // Catalog rows are well-formed constants; the fallback is unreachable.
    Shape::from_rows(catalog_rows(kind)).unwrap_or_else(fallback_shape)
}

/// The seven catalog shapes in tag order
pub fn catalog() -> Vec<Shape> {
    PieceKind::ALL.iter().map(|&kind| get_shape(kind)).collect()
}

/// Single-block shape used when the catalog cannot supply a piece
pub fn fallback_shape() -> Shape {
    let mut cells = ArrayVec::new();
    cells.push(1);
    Shape {
        width: 1,
        height: 1,
        cells,
    }
}

/// Rotate a shape 90° clockwise (free-function form of [`Shape::rotated`])
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotated()
}

/// Active falling piece
///
/// `(x, y)` is the shape's top-left corner in board coordinates. Every move or
/// rotation produces a new `Piece`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub x: i32,
    pub y: i32,
    pub shape: Shape,
    pub color: Cell,
}

impl Piece {
    pub fn new(x: i32, y: i32, shape: Shape, color: Cell) -> Self {
        Self { x, y, shape, color }
    }

    /// The same piece translated by (dx, dy)
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// The piece with a replacement shape, shifted horizontally by `dx`
    pub fn with_shape(&self, shape: Shape, dx: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
            shape,
            color: self.color,
        }
    }

    /// Piece at the same y
    pub fn at_y(&self, y: i32) -> Self {
        Self {
            y,
            ..self.clone()
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .blocks()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Catalog kind, if the colour tag names one
    pub fn kind(&self) -> Option<PieceKind> {
        PieceKind::from_tag(self.color)
    }
}
