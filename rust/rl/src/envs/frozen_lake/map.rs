use super::action::Action;
use gymnasium::{Continous, Discrete};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// A single tile of the lake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    Start,
    Frozen,
    Hole,
    Goal,
    /// Any byte outside `SFHG`: walkable, never shaped, never terminal.
    Other(u8),
}

impl Cell {
    pub fn from_byte(b: u8) -> Self {
        match b {
            b'S' => Cell::Start,
            b'F' => Cell::Frozen,
            b'H' => Cell::Hole,
            b'G' => Cell::Goal,
            other => Cell::Other(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Start => 'S',
            Cell::Frozen => 'F',
            Cell::Hole => 'H',
            Cell::Goal => 'G',
            Cell::Other(b) => b as char,
        }
    }

    /// Holes and the goal end the episode and never let the agent out again.
    pub fn is_absorbing(self) -> bool {
        matches!(self, Cell::Hole | Cell::Goal)
    }

    /// Display color; unknown labels have none.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Cell::Start => Some("green"),
            Cell::Frozen => Some("skyblue"),
            Cell::Hole => Some("black"),
            Cell::Goal => Some("gold"),
            Cell::Other(_) => None,
        }
    }
}

/// Immutable `nrow x ncol` lake layout. States are the row-major flattening
/// of the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Parses equal-length rows over `SFHG`.
    ///
    /// # Panics
    ///
    /// If a row is shorter than the first one. Rectangular input is a caller
    /// contract and is not checked beyond that.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Self {
        let nrow = rows.len();
        let ncol = rows.first().map_or(0, |r| r.as_ref().len());
        let cells = Array2::from_shape_fn((nrow, ncol), |(row, col)| {
            Cell::from_byte(rows[row].as_ref().as_bytes()[col])
        });

        Self { cells }
    }

    pub fn nrow(&self) -> usize {
        self.cells.nrows()
    }

    pub fn ncol(&self) -> usize {
        self.cells.ncols()
    }

    pub fn n_s(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[[row, col]]
    }

    pub fn to_s(&self, row: usize, col: usize) -> Discrete {
        row * self.ncol() + col
    }

    pub fn from_s(&self, s: Discrete) -> (usize, usize) {
        (s / self.ncol(), s % self.ncol())
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.axis_iter(Axis(0))
    }

    /// Moves one cell towards `a`, staying put along an axis that would leave the grid.
    pub fn inc(&self, row: usize, col: usize, a: Action) -> (usize, usize) {
        match a {
            Action::Left => (row, col.saturating_sub(1)),
            Action::Down => ((row + 1).min(self.nrow() - 1), col),
            Action::Right => (row, (col + 1).min(self.ncol() - 1)),
            Action::Up => (row.saturating_sub(1), col),
        }
    }

    /// Uniform distribution over the start cells.
    ///
    /// A grid without any `S` is a caller error; every entry is then NaN.
    pub fn isd(&self) -> Array1<Continous> {
        let isd = self
            .cells
            .iter()
            .map(|&c| if c == Cell::Start { 1. } else { 0. })
            .collect::<Array1<Continous>>();
        let total = isd.sum();

        isd / total
    }

    /// Renders back to the `SFHG` rows it was parsed from.
    pub fn to_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.as_char()).collect())
            .collect()
    }
}
