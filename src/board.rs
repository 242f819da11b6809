//! Board state: cell occupancy on a square grid.
//!
//! The board knows nothing about Othello rules beyond bounds checking.
//! `Clone` is a deep copy, so a cloned board is an independent snapshot.

use std::fmt;
use std::str::FromStr;

use crate::constants::N;

/// Errors raised by grid access and board decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Coordinate outside `[0, size)`; indicates a bug in the caller.
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
    /// Encoded cell value other than 0, 1 or 2.
    #[error("invalid cell value {0}")]
    InvalidCell(u8),
    /// Unrecognized character in a text grid.
    #[error("invalid cell character {0:?}")]
    InvalidChar(char),
    /// Row `row` has `len` cells on a board with `size` rows.
    #[error("board is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    /// No rows at all.
    #[error("board has no rows")]
    Empty,
}

/// One of the two stone colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// Occupancy of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The color of the stone in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Decode the integer encoding: 0 = empty, 1 = black, 2 = white.
impl TryFrom<u8> for Cell {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            2 => Ok(Cell::White),
            other => Err(BoardError::InvalidCell(other)),
        }
    }
}

/// A board coordinate `(x, y)` = `(column, row)`, 0-indexed.
pub type Move = (usize, usize);

/// A square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// An empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// The canonical starting position: the four center cells hold
    /// alternating diagonal pairs, Black on the main diagonal.
    pub fn starting() -> Self {
        let mut board = Self::new(N);
        let lo = N / 2 - 1;
        let hi = N / 2;
        board.cells[lo * N + lo] = Cell::Black;
        board.cells[lo * N + hi] = Cell::White;
        board.cells[hi * N + lo] = Cell::White;
        board.cells[hi * N + hi] = Cell::Black;
        board
    }

    /// Decode rows of the integer encoding (`0`, `1`, `2`).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(BoardError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for &v in values {
                cells.push(Cell::try_from(v)?);
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(x, y)` lies on the grid.
    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn idx(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        let i = self.idx(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> Result<(), BoardError> {
        let i = self.idx(x, y)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Number of stones of `color` on the board.
    pub fn count_of(&self, color: Color) -> usize {
        let cell = Cell::from(color);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over every cell as `(x, y, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i % size, i / size, c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.cells[y * self.size + x] {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    Cell::Empty => '.',
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a text grid, one line per row. Whitespace between cells is ignored
/// and blank lines are skipped.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '.' | '0' => Ok(0),
                        'X' | 'x' | 'B' | 'b' | '1' => Ok(1),
                        'O' | 'o' | 'W' | 'w' | '2' => Ok(2),
                        d if d.is_ascii_digit() => Err(BoardError::InvalidCell(d as u8 - b'0')),
                        other => Err(BoardError::InvalidChar(other)),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .filter(|row| !matches!(row, Ok(r) if r.is_empty()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }
}
