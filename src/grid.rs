//! Fixed-size 2D cell storage shared by both games
//!
//! The snake renderer works on a `Grid<Cell>` snapshot and tic-tac-toe keeps its
//! marks in a 3×3 `Grid<Mark>`. Dimensions are set at construction and never change.

/// A row-major grid of `height × width` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn new(height: usize, width: usize, fill: T) -> Self {
        Self {
            height,
            width,
            cells: vec![fill; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Read a cell, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false (and writes nothing) outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }
}
