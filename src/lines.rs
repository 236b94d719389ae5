//! Win-line enumeration and per-line mark tallies

use crate::board::{Board, Cell, Coord, Player};

/// A candidate win-line: a full row, column, or one of the two diagonals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
    Main,
    Anti,
}

impl Line {
    /// All 2n + 2 candidate win-lines of an nxn board
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Col))
            .chain([Line::Main, Line::Anti])
    }

    /// The lines passing through a cell: its row, its column, and whichever
    /// of the two diagonals contain it
    pub fn through(coord: Coord, size: usize) -> impl Iterator<Item = Line> {
        let mut lines = vec![Line::Row(coord.row), Line::Col(coord.col)];
        if coord.row == coord.col {
            lines.push(Line::Main);
        }
        if coord.row + coord.col == size - 1 {
            lines.push(Line::Anti);
        }
        lines.into_iter()
    }

    /// The n cell coordinates of this line, in order
    pub fn cells(self, size: usize) -> impl Iterator<Item = Coord> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Coord::new(row, i),
            Line::Col(col) => Coord::new(i, col),
            Line::Main => Coord::new(i, i),
            Line::Anti => Coord::new(i, size - 1 - i),
        })
    }
}

/// Mark counts along one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTally {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl LineTally {
    /// Tally the marks along `line`. Pure function of the current board state.
    pub fn scan(board: &Board, line: Line) -> Self {
        let mut tally = LineTally::default();
        for coord in line.cells(board.size()) {
            match board.get(coord) {
                Cell::X => tally.x += 1,
                Cell::O => tally.o += 1,
                Cell::Empty => tally.empty += 1,
            }
        }
        tally
    }

    /// Marks the given player holds on this line
    pub fn count(&self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_yields_every_line() {
        for size in [3, 4, 7] {
            assert_eq!(Line::all(size).count(), 2 * size + 2);
        }
    }

    #[test]
    fn test_through_counts() {
        // Center of an odd board sits on both diagonals
        assert_eq!(Line::through(Coord::new(1, 1), 3).count(), 4);
        // Corner sits on exactly one diagonal
        assert_eq!(Line::through(Coord::new(0, 0), 3).count(), 3);
        assert_eq!(Line::through(Coord::new(0, 2), 3).count(), 3);
        // Edge midpoint sits on neither
        assert_eq!(Line::through(Coord::new(0, 1), 3).count(), 2);
    }

    #[test]
    fn test_cells_order() {
        let cells: Vec<Coord> = Line::Anti.cells(3).collect();
        assert_eq!(
            cells,
            vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]
        );
        let cells: Vec<Coord> = Line::Col(2).cells(4).collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.col == 2));
    }

    #[test]
    fn test_scan_tallies_marks() {
        let board = Board::from_string("XXO .O. X..").unwrap();
        let top = LineTally::scan(&board, Line::Row(0));
        assert_eq!(
            top,
            LineTally {
                x: 2,
                o: 1,
                empty: 0
            }
        );
        assert_eq!(top.count(Player::X), 2);
        assert_eq!(top.count(Player::O), 1);

        let main = LineTally::scan(&board, Line::Main);
        assert_eq!(
            main,
            LineTally {
                x: 1,
                o: 1,
                empty: 1
            }
        );
    }
}
