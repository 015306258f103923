use std::fmt;

use crate::grid::Grid;

/// Side length of the board
pub const SIZE: usize = 3;

/// What a square holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// The player who moves after this one
    pub fn other(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A 3×3 tic-tac-toe board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid<Mark>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Grid::new(SIZE, SIZE, Mark::Empty),
        }
    }

    /// Build a board from rows, e.g. for setting up positions
    pub fn from_rows(rows: [[Mark; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                board.cells.set(r, c, *mark);
            }
        }
        board
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row, col)
    }

    /// Place a mark. Returns false outside the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        self.cells.set(row, col, mark)
    }

    fn line(&self, squares: [(usize, usize); SIZE]) -> Option<Mark> {
        let [a, b, c] = squares.map(|(r, col)| self.cells.get(r, col).unwrap_or(Mark::Empty));
        (a != Mark::Empty && a == b && b == c).then_some(a)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0   1   2")?;
        for (i, row) in self.cells.rows().enumerate() {
            let marks: Vec<String> = row.iter().map(|m| m.to_string()).collect();
            writeln!(f, "{i} {}", marks.join(" | "))?;
            if i + 1 < SIZE {
                writeln!(f, "  {}", "-".repeat(9))?;
            }
        }
        Ok(())
    }
}

/// The winning mark, scanning rows, then columns, then diagonals
pub fn check_winner(board: &Board) -> Option<Mark> {
    let rows = (0..SIZE).map(|r| [(r, 0), (r, 1), (r, 2)]);
    let cols = (0..SIZE).map(|c| [(0, c), (1, c), (2, c)]);
    let diagonals = [[(0, 0), (1, 1), (2, 2)], [(0, 2), (1, 1), (2, 0)]];

    rows.chain(cols)
        .chain(diagonals)
        .find_map(|squares| board.line(squares))
}

/// True iff no square is empty
pub fn is_board_full(board: &Board) -> bool {
    board.cells.cells().all(|m| *m != Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!is_board_full(&board));
    }

    #[test]
    fn test_rows_columns_diagonals() {
        let row = Board::from_rows([[E, E, E], [O, O, O], [X, X, E]]);
        assert_eq!(check_winner(&row), Some(O));

        let col = Board::from_rows([[X, O, E], [X, O, E], [X, E, E]]);
        assert_eq!(check_winner(&col), Some(X));

        let diag = Board::from_rows([[O, X, X], [E, O, X], [E, E, O]]);
        assert_eq!(check_winner(&diag), Some(O));

        let anti = Board::from_rows([[O, O, X], [E, X, E], [X, E, E]]);
        assert_eq!(check_winner(&anti), Some(X));
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Row 0 is X and column 2 is O; rows are scanned first
        let board = Board::from_rows([[X, X, X], [E, E, O], [E, E, O]]);
        assert_eq!(check_winner(&board), Some(X));

        let board = Board::from_rows([[O, E, X], [O, E, X], [O, E, X]]);
        assert_eq!(check_winner(&board), Some(O));
    }

    #[test]
    fn test_exhaustive_winner_iff_line() {
        let marks = [E, X, O];
        let lines: [[(usize, usize); 3]; 8] = [
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];

        for code in 0..3usize.pow(9) {
            let mut rows = [[E; 3]; 3];
            let mut n = code;
            for cell in 0..9 {
                rows[cell / 3][cell % 3] = marks[n % 3];
                n /= 3;
            }
            let board = Board::from_rows(rows);

            let has_line = lines.iter().any(|line| {
                let [a, b, c] = line.map(|(r, col)| rows[r][col]);
                a != E && a == b && b == c
            });
            assert_eq!(check_winner(&board).is_some(), has_line, "{rows:?}");

            let full = rows.iter().flatten().all(|m| *m != E);
            assert_eq!(is_board_full(&board), full);
        }
    }

    #[test]
    fn test_one_empty_square_is_not_full() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        assert!(!is_board_full(&board));

        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(is_board_full(&board));
    }

    #[test]
    fn test_display() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "  0   1   2");
        assert_eq!(lines[1], "0 X |   |  ");
        assert_eq!(lines[2], "  ---------");
        assert_eq!(lines[3], "1   | O |  ");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_other() {
        assert_eq!(X.other(), O);
        assert_eq!(O.other(), X);
    }
}
