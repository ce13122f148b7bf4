//! Connect-three on a gravity grid
//!
//! Marks are dropped into a column and land on the lowest free cell. The
//! first side to line up three of its marks horizontally, vertically or
//! diagonally wins.

use std::fmt;

use minimax_core::{Game, PlayConvention};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Marks in a row needed to win
pub const RUN_LENGTH: usize = 3;

/// Symbol for an empty cell in text rows
pub const EMPTY: char = '.';

/// Line directions as (column, row) steps: horizontal, vertical and the
/// two diagonals. Opposite directions are covered by starting the scan
/// from the other end of the run.
const LINE_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

// ============================================================================
// MARK
// ============================================================================

/// The two sides' marks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Grid state (clone to mutate)
///
/// Cells are stored column-major with row 0 at the bottom, so every column
/// is a run of marks from index 0 followed only by empty cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Mark>>,
    /// Side whose mark the next drop places
    to_move: Mark,
}

impl Board {
    /// Empty board with `first` to move
    pub fn new(width: usize, height: usize, first: Mark) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
            to_move: first,
        })
    }

    /// Build a board from text rows, top row first.
    ///
    /// Cells are `.`, `X` or `O`; whitespace is ignored. The side with fewer
    /// marks moves next, and `first_on_balanced` breaks the tie when both
    /// sides have the same count.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], first_on_balanced: Mark) -> Result<Self, BoardError> {
        let symbols: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        let height = symbols.len();
        let width = symbols.first().map_or(0, Vec::len);
        let mut board = Self::new(width, height, first_on_balanced)?;

        for (row, line) in symbols.iter().enumerate() {
            if line.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            for (column, &symbol) in line.iter().enumerate() {
                let cell = match symbol {
                    EMPTY => None,
                    _ => Some(
                        Mark::from_symbol(symbol)
                            .ok_or(BoardError::InvalidCell { symbol, row, column })?,
                    ),
                };
                let index = board.index(column, height - 1 - row);
                board.cells[index] = cell;
            }
        }

        for column in 0..width {
            let free = board.free_row(column).unwrap_or(height);
            if (free..height).any(|row| board.get(column, row).is_some()) {
                return Err(BoardError::FloatingMark { column });
            }
        }

        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        board.to_move = match x_count.abs_diff(o_count) {
            0 => first_on_balanced,
            1 if x_count > o_count => Mark::O,
            1 => Mark::X,
            _ => return Err(BoardError::UnbalancedMarks { x_count, o_count }),
        };

        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Side whose mark the next drop places
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Mark at `column`, `row` (row 0 is the bottom); None if empty or off
    /// the board
    pub fn get(&self, column: usize, row: usize) -> Option<Mark> {
        if column < self.width && row < self.height {
            self.cells[self.index(column, row)]
        } else {
            None
        }
    }

    /// Lowest empty row in `column`
    pub fn free_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height).find(|&row| self.cells[self.index(column, row)].is_none())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Board after the side to move drops into `column`; None if the
    /// column is full or off the board
    pub fn drop_mark(&self, column: usize) -> Option<Board> {
        let row = self.free_row(column)?;
        let mut next = self.clone();
        let index = self.index(column, row);
        next.cells[index] = Some(self.to_move);
        next.to_move = self.to_move.opponent();
        Some(next)
    }

    /// True if any side has `RUN_LENGTH` marks in a line
    pub fn has_run(&self) -> bool {
        (0..self.width).any(|column| (0..self.height).any(|row| self.run_starts_at(column, row)))
    }

    fn run_starts_at(&self, column: usize, row: usize) -> bool {
        let mark = match self.get(column, row) {
            Some(mark) => mark,
            None => return false,
        };

        LINE_DIRECTIONS.iter().any(|&(dc, dr)| {
            (1..RUN_LENGTH as isize).all(|step| {
                self.cell_at(column as isize + dc * step, row as isize + dr * step) == Some(mark)
            })
        })
    }

    fn cell_at(&self, column: isize, row: isize) -> Option<Mark> {
        if column < 0 || row < 0 {
            return None;
        }
        self.get(column as usize, row as usize)
    }

    fn index(&self, column: usize, row: usize) -> usize {
        column * self.height + row
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            let line: Vec<String> = (0..self.width)
                .map(|column| self.get(column, row).map_or(EMPTY, Mark::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

// ============================================================================
// GAME
// ============================================================================

/// Live connect-three match
#[derive(Clone, Debug)]
pub struct ConnectThree {
    board: Board,
}

impl ConnectThree {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Game for ConnectThree {
    type State = Board;

    fn neighbors(&self, state: &Board) -> Vec<Board> {
        (0..state.width())
            .filter_map(|column| state.drop_mark(column))
            .collect()
    }

    fn is_goal(&self, state: &Board) -> bool {
        state.has_run()
    }

    fn current_position(&self) -> Board {
        self.board.clone()
    }

    fn apply_move(&mut self, state: Board) {
        self.board = state;
    }

    fn convention(&self) -> PlayConvention {
        PlayConvention::NormalPlay
    }

    fn game_over(&self) -> bool {
        self.board.is_full() || self.board.has_run()
    }
}

// ============================================================================
// TESTS
// ============================================================================
