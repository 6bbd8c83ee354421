//! The board: owner of all cells, with row/column/square views.

use crate::{Cell, Position, candidate_set};

/// Error raised when a board cannot be constructed from the given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The flat input length does not describe a square board whose side is
    /// itself a perfect square.
    ///
    /// Admissible lengths are fourth powers: 16 (4×4), 81 (9×9), 256
    /// (16×16), and so on.
    #[display("cell count {len} does not form a square board with square sub-grids")]
    InvalidSize {
        /// The offending input length.
        len: usize,
    },
    /// A cell value exceeds the board's side length.
    #[display("value {value} at {position} exceeds board size {size}")]
    ValueOutOfRange {
        /// The offending value.
        value: u8,
        /// Where it was found.
        position: Position,
        /// The board side length.
        size: u8,
    },
}

/// A square grid of [`Cell`]s with sub-square structure.
///
/// The board owns all `n²` cells in a flat row-major vector
/// (`index = y·size + x`) and provides three orthogonal views over them:
/// rows, columns, and squares. Each cell belongs to exactly one of each.
///
/// Cloning a board deep-copies every cell including its candidate state;
/// the solver relies on this to explore branches without aliasing.
///
/// # Examples
///
/// ```
/// use omnidoku_core::Board;
///
/// let board = Board::from_values(&[
///     1, 2, 3, 4,
///     3, 4, 1, 2,
///     2, 1, 4, 3,
///     4, 3, 2, 1,
/// ])?;
///
/// let top_row: Vec<u8> = board.row_values(0);
/// assert_eq!(top_row, vec![1, 2, 3, 4]);
///
/// let left_column: Vec<u8> = board.column_values(0);
/// assert_eq!(left_column, vec![1, 3, 2, 4]);
///
/// let top_left_square: Vec<u8> = board.square_values(0, 0);
/// assert_eq!(top_left_square, vec![1, 2, 3, 4]);
/// # Ok::<(), omnidoku_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    square_size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Constructs a board from a flat row-major sequence of values,
    /// 0 meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] unless the input length is a
    /// fourth power (so both the side length and the sub-square side are
    /// exact), and [`BoardError::ValueOutOfRange`] if any value exceeds the
    /// side length.
    pub fn from_values(values: &[u8]) -> Result<Self, BoardError> {
        let (size, square_size) =
            dimensions(values.len()).ok_or(BoardError::InvalidSize { len: values.len() })?;
        let cells = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                #[expect(clippy::cast_possible_truncation)]
                let position = Position::new(
                    (index % usize::from(size)) as u8,
                    (index / usize::from(size)) as u8,
                );
                if value > size {
                    return Err(BoardError::ValueOutOfRange {
                        value,
                        position,
                        size,
                    });
                }
                Ok(Cell::new(position, value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            size,
            square_size,
            cells,
        })
    }

    /// Returns the board side length `n`.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the sub-square side length `√n`.
    #[inline]
    #[must_use]
    pub const fn square_size(&self) -> u8 {
        self.square_size
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range. Out-of-range access is
    /// a programming error, not a recoverable condition.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: u8, y: u8) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Returns the cell at `(x, y)` mutably.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[inline]
    pub fn cell_mut(&mut self, x: u8, y: u8) -> &mut Cell {
        let index = self.index(x, y);
        &mut self.cells[index]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the cells of row `y` in left-to-right order.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: u8) -> impl Iterator<Item = &Cell> {
        let size = usize::from(self.size);
        let start = usize::from(y) * size;
        self.cells[start..start + size].iter()
    }

    /// Returns the cells of column `x` in top-to-bottom order.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn column(&self, x: u8) -> impl Iterator<Item = &Cell> {
        assert!(x < self.size, "column {x} out of range for size {}", self.size);
        self.cells[usize::from(x)..]
            .iter()
            .step_by(usize::from(self.size))
    }

    /// Returns the cells of the square at square-grid coordinates
    /// `(bx, by)`, row-major within the square.
    ///
    /// Squares form a `square_size × square_size` meta-grid:
    ///
    /// ```text
    /// ┌─────┬─────┐
    /// │ 0,0 │ 1,0 │
    /// ├─────┼─────┤
    /// │ 0,1 │ 1,1 │
    /// └─────┴─────┘
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if either square coordinate is out of range.
    pub fn square(&self, bx: u8, by: u8) -> impl Iterator<Item = &Cell> {
        assert!(
            bx < self.square_size && by < self.square_size,
            "square ({bx}, {by}) out of range for square size {}",
            self.square_size
        );
        let size = usize::from(self.size);
        let square = usize::from(self.square_size);
        let origin = size * (usize::from(by) * square) + usize::from(bx) * square;
        (0..square).flat_map(move |dy| {
            let start = origin + dy * size;
            self.cells[start..start + square].iter()
        })
    }

    /// Returns the cells of the square containing the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    pub fn square_containing(&self, x: u8, y: u8) -> impl Iterator<Item = &Cell> {
        self.square(x / self.square_size, y / self.square_size)
    }

    /// Returns the values of row `y` as a copied sequence.
    ///
    /// Value accessors are for comparison; they cannot alias or mutate the
    /// board. Use the cell views when references are needed.
    #[must_use]
    pub fn row_values(&self, y: u8) -> Vec<u8> {
        self.row(y).map(Cell::value).collect()
    }

    /// Returns the values of column `x` as a copied sequence.
    #[must_use]
    pub fn column_values(&self, x: u8) -> Vec<u8> {
        self.column(x).map(Cell::value).collect()
    }

    /// Returns the values of the square at `(bx, by)` as a copied sequence.
    #[must_use]
    pub fn square_values(&self, bx: u8, by: u8) -> Vec<u8> {
        self.square(bx, by).map(Cell::value).collect()
    }

    /// Returns `true` if no cell is empty.
    ///
    /// This says nothing about rule validity; a filled board may still be
    /// in violation.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Draws the board as a bordered grid with sub-square separators.
    ///
    /// Purely diagnostic; the output shape is stable but not part of any
    /// serialization contract. Empty cells show as `_`, values are
    /// right-aligned to the width of the largest value:
    ///
    /// ```text
    /// ┌────┬────┐
    /// │ 1_ │ 3_ │
    /// │ _2 │ _4 │
    /// ├────┼────┤
    /// │ __ │ 1_ │
    /// │ 3_ │ _2 │
    /// └────┴────┘
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let size = usize::from(self.size);
        let square = usize::from(self.square_size);
        let width = self.size.to_string().len();
        let gap = if width == 1 { "" } else { " " };

        let segment = "─".repeat(square * width + (square - 1) * gap.len() + 2);
        let segments = vec![segment; square];
        let header = format!("┌{}┐", segments.join("┬"));
        let middle = format!("├{}┤", segments.join("┼"));
        let footer = format!("└{}┘", segments.join("┴"));

        let mut lines = vec![header];
        for y in 0..size {
            let mut blocks = Vec::with_capacity(square);
            for bx in 0..square {
                let block: Vec<String> = (0..square)
                    .map(|i| {
                        let cell = &self.cells[y * size + bx * square + i];
                        if cell.is_empty() {
                            "_".repeat(width)
                        } else {
                            format!("{:>width$}", cell.value())
                        }
                    })
                    .collect();
                blocks.push(block.join(gap));
            }
            lines.push(format!("│ {} │", blocks.join(" │ ")));
            if (y + 1) % square == 0 && y + 1 < size {
                lines.push(middle.clone());
            }
        }
        lines.push(footer);
        lines.join("\n")
    }

    fn index(&self, x: u8, y: u8) -> usize {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) out of range for size {}",
            self.size
        );
        usize::from(y) * usize::from(self.size) + usize::from(x)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Computes `(size, square_size)` for a flat cell count, or `None` if the
/// count is not a fourth power within the supported range.
fn dimensions(len: usize) -> Option<(u8, u8)> {
    let size = len.isqrt();
    if size * size != len || size == 0 || size > usize::from(candidate_set::MAX_VALUE) {
        return None;
    }
    let square_size = size.isqrt();
    if square_size * square_size != size {
        return None;
    }
    #[expect(clippy::cast_possible_truncation)]
    Some((size as u8, square_size as u8))
}
