use std::time::Duration;

use super::action::Direction;
use crate::grid::Grid;

/// A cell on the board, as (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }

    /// Grid indices, if both coordinates are non-negative
    pub fn to_index(&self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.row).ok()?, usize::try_from(self.col).ok()?))
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (d_row, d_col) = direction.delta();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(-d_row, -d_col));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Turn unless the new direction is a U-turn. Returns whether it turned.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Prepend a new head one step along the current direction
    pub fn push_head(&mut self) -> Position {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.insert(0, new_head);
        new_head
    }

    /// Remove the last segment
    pub fn drop_tail(&mut self) -> Option<Position> {
        self.body.pop()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What a board cell holds, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
    Body,
    Head,
    Food,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// `None` once the interior is full
    pub food: Option<Position>,
    pub height: usize,
    pub width: usize,
    pub score: u32,
    pub steps: u32,
    /// Current post-tick delay
    pub speed: Duration,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        food: Option<Position>,
        height: usize,
        width: usize,
        speed: Duration,
    ) -> Self {
        Self {
            snake,
            food,
            height,
            width,
            score: 0,
            steps: 0,
            speed,
            is_alive: true,
        }
    }

    /// Check if a position is strictly inside the wall ring
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.row > 0
            && pos.row < self.height as i32 - 1
            && pos.col > 0
            && pos.col < self.width as i32 - 1
    }

    /// Snapshot of the board
    ///
    /// Body is drawn before the head so a crashed head stays visible; segments
    /// outside the board are skipped.
    pub fn to_grid(&self) -> Grid<Cell> {
        let mut grid = Grid::new(self.height, self.width, Cell::Empty);

        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_interior(Position::new(row as i32, col as i32)) {
                    grid.set(row, col, Cell::Wall);
                }
            }
        }

        let mut put = |pos: Position, cell: Cell| {
            if let Some((row, col)) = pos.to_index() {
                grid.set(row, col, cell);
            }
        };

        if let Some(food) = self.food {
            put(food, Cell::Food);
        }
        for segment in self.snake.body_segments() {
            put(*segment, Cell::Body);
        }
        put(self.snake.head(), Cell::Head);

        grid
    }
}
