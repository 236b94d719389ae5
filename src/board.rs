//! Board state representation and basic operations
//!
//! The board is a mutable nxn grid. Search code mutates it in place with
//! [`Board::place`] / [`Board::undo`] rather than copying per node, and win
//! detection after a placement inspects only the lines through that cell.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::Line;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A (row, col) position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Mutable nxn board with last-move bookkeeping.
///
/// The board records the placements it is told to make; turn alternation is
/// the caller's responsibility. A single instance is shared by reference
/// throughout one search call and restored to its pre-call state on return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    last_move: Option<Coord>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSize`] if `size < 3`; smaller boards
    /// cannot produce a meaningful game.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size < 3 {
            return Err(crate::Error::InvalidSize { size });
        }
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
            last_move: None,
        })
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is filtered out; the remaining characters must form a
    /// perfect square of at least 9 cells, each one of `.`, `X`, or `O`.
    /// The board size is inferred from the cell count.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not a valid square or any
    /// character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut size = 3;
        while size * size < chars.len() {
            size += 1;
        }
        if size * size != chars.len() {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new(size)?;
        for (i, &c) in chars.iter().enumerate() {
            board.cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(board)
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// The most recent placement, if any
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Get the cell at a coordinate. Panics if the coordinate is out of
    /// bounds; use [`Board::place`] for checked mutation.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Place a mark on an empty cell and record it as the last move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either index is `>= size`,
    /// or [`crate::Error::OccupiedCell`] if the cell is not empty.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), crate::Error> {
        if !self.in_bounds(coord) {
            return Err(crate::Error::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        let idx = self.index(coord);
        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::OccupiedCell {
                row: coord.row,
                col: coord.col,
            });
        }
        self.cells[idx] = player.to_cell();
        self.last_move = Some(coord);
        Ok(())
    }

    /// Clear a cell back to empty.
    ///
    /// Usage contract: callers undo strictly in reverse placement order
    /// (the discipline a backtracking search follows naturally). The board
    /// keeps no undo stack; `last_move` is forgotten when it pointed at the
    /// undone cell.
    pub fn undo(&mut self, coord: Coord) {
        let idx = self.index(coord);
        self.cells[idx] = Cell::Empty;
        if self.last_move == Some(coord) {
            self.last_move = None;
        }
    }

    /// Restore the last-move bookkeeping. Search code saves it before a
    /// place/undo sequence so the caller's board comes back unchanged.
    pub(crate) fn restore_last_move(&mut self, last: Option<Coord>) {
        self.last_move = last;
    }

    /// All empty-cell coordinates in row-major order.
    ///
    /// Recomputed on every call since the board mutates between calls.
    pub fn legal_moves(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(move |(i, _)| Coord::new(i / size, i % size))
    }

    /// Number of empty cells remaining
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Check whether the move just made completed a winning line.
    ///
    /// Examines only the row, column, and (if applicable) the one or two
    /// diagonals passing through `last`: O(n), never a full-board rescan.
    /// A win can only be completed by the move just made, so this matches
    /// full-scan semantics when called after every placement.
    pub fn check_win(&self, last: Coord) -> Option<Player> {
        let mark = self.get(last);
        let player = mark.to_player()?;
        for line in Line::through(last, self.size) {
            if line.cells(self.size).all(|c| self.get(c) == mark) {
                return Some(player);
            }
        }
        None
    }

    /// Full-board winner scan over every line.
    ///
    /// O(n²) validation path; the search uses [`Board::check_win`] instead.
    pub fn winner(&self) -> Option<Player> {
        for line in Line::all(self.size) {
            let mut cells = line.cells(self.size);
            let Some(first_coord) = cells.next() else {
                continue;
            };
            let first = self.get(first_coord);
            if first != Cell::Empty && cells.all(|c| self.get(c) == first) {
                return first.to_player();
            }
        }
        None
    }

    /// True when no legal moves remain
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// True when the board is full and nobody has won
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.get(Coord::new(row, col)).to_char())?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
