use anyhow::{anyhow, Result};
use thiserror::Error;

use std::fmt;

use crate::{SIZE, WINDOW};

/// The occupant of a single cell
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Marker {
    Empty,
    PlayerOne,
    PlayerTwo,
    Computer,
}

impl Marker {
    /// The three markers that take turns, in fixed rotation order
    pub const PARTICIPANTS: [Marker; 3] = [Marker::PlayerOne, Marker::PlayerTwo, Marker::Computer];

    pub fn is_empty(&self) -> bool {
        matches!(self, Marker::Empty)
    }

    fn glyph(&self) -> char {
        match self {
            Marker::Empty => '.',
            Marker::PlayerOne => '1',
            Marker::PlayerTwo => '2',
            Marker::Computer => 'C',
        }
    }

    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' => Some(Marker::Empty),
            '1' => Some(Marker::PlayerOne),
            '2' => Some(Marker::PlayerTwo),
            'C' => Some(Marker::Computer),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Reasons a piece could not be dropped
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range. Columns must be below {}", SIZE)]
    OutOfRange { column: usize },
    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },
}

/// Four consecutive cells along a row, column or diagonal
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Window(pub [Marker; WINDOW]);

impl Window {
    /// The number of cells in this window holding `marker`
    pub fn count(&self, marker: Marker) -> usize {
        self.0.iter().filter(|&&cell| cell == marker).count()
    }
}

// (row step, column step) for horizontal, vertical, diagonal down-right and diagonal up-right
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A square grid obeying the gravity rule
///
/// Cells are stored row by row, with row 0 at the top of the board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Marker; SIZE * SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Marker::Empty; SIZE * SIZE],
        }
    }

    /// Parses a board from its rows, top row first
    ///
    /// Each row has one character per column: `.` for an empty cell,
    /// `1` and `2` for the human players and `C` for the computer.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != SIZE {
            return Err(anyhow!("expected {} rows, found {}", SIZE, rows.len()));
        }
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref().trim();
            if line.chars().count() != SIZE {
                return Err(anyhow!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    SIZE
                ));
            }
            for (column, glyph) in line.chars().enumerate() {
                let marker = Marker::from_glyph(glyph)
                    .ok_or_else(|| anyhow!("could not parse '{}' as a marker", glyph))?;
                board.set(row, column, marker);
            }
        }

        // no piece may float above an empty cell
        for column in 0..SIZE {
            for row in 1..SIZE {
                if board.get(row, column).is_empty() && !board.get(row - 1, column).is_empty() {
                    return Err(anyhow!(
                        "Invalid position, piece floating above row {} in column {}",
                        row,
                        column
                    ));
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Marker {
        self.cells[row * SIZE + column]
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, marker: Marker) {
        self.cells[row * SIZE + column] = marker;
    }

    /// Restores a cell to empty, undoing a `drop` that landed there
    pub(crate) fn clear(&mut self, row: usize, column: usize) {
        self.set(row, column, Marker::Empty);
    }

    /// Whether a piece can be dropped into `column`
    pub fn is_legal(&self, column: usize) -> bool {
        column < SIZE && self.get(0, column).is_empty()
    }

    /// All playable columns, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..SIZE).filter(|&column| self.is_legal(column)).collect()
    }

    /// Drops `marker` into `column`, returning the row it landed in
    pub fn drop(&mut self, column: usize, marker: Marker) -> Result<usize, MoveError> {
        if column >= SIZE {
            return Err(MoveError::OutOfRange { column });
        }
        for row in (0..SIZE).rev() {
            if self.get(row, column).is_empty() {
                self.set(row, column, marker);
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull { column })
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Every window of `WINDOW` cells on the board, in all four directions
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS.iter().flat_map(move |&(d_row, d_column)| {
            (0..SIZE).flat_map(move |row| {
                (0..SIZE).filter_map(move |column| self.window(row, column, d_row, d_column))
            })
        })
    }

    // the window starting at (row, column), if it fits on the board
    fn window(&self, row: usize, column: usize, d_row: isize, d_column: isize) -> Option<Window> {
        let span = WINDOW as isize - 1;
        let last_row = row as isize + d_row * span;
        let last_column = column as isize + d_column * span;
        if last_row < 0 || last_row >= SIZE as isize || last_column < 0 || last_column >= SIZE as isize {
            return None;
        }

        let mut cells = [Marker::Empty; WINDOW];
        for (i, cell) in cells.iter_mut().enumerate() {
            let r = row as isize + d_row * i as isize;
            let c = column as isize + d_column * i as isize;
            *cell = self.get(r as usize, c as usize);
        }
        Some(Window(cells))
    }

    /// Whether `marker` has four in a line anywhere on the board
    pub fn has_won(&self, marker: Marker) -> bool {
        if marker.is_empty() {
            return false;
        }
        self.windows().any(|window| window.count(marker) == WINDOW)
    }

    /// No legal columns remain and nobody has won
    pub fn is_draw(&self) -> bool {
        self.legal_columns().is_empty()
            && !Marker::PARTICIPANTS.iter().any(|&marker| self.has_won(marker))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for column in 0..SIZE {
                write!(f, "{}", self.get(row, column))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
