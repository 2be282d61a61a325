use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::error::Error;

/// Row-major, 1-based name of a cell, as a human would type it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub usize);

impl Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A fixed-size snapshot of which cells are alive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridState {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl GridState {
    pub fn new(
        rows: usize,
        cols: usize,
        alive: impl IntoIterator<Item = CellId>,
    ) -> Result<Self, Error> {
        let mut grid = Self::dead(rows, cols)?;
        let max = rows * cols;
        for id in alive {
            if !(1..=max).contains(&id.0) {
                return Err(Error::InvalidCellId { id, max });
            }
            grid.cells[id.0 - 1] = true;
        }
        Ok(grid)
    }

    pub fn dead(rows: usize, cols: usize) -> Result<Self, Error> {
        match rows.checked_mul(cols) {
            Some(len) if len > 0 => Ok(Self {
                rows,
                cols,
                cells: vec![false; len],
            }),
            _ => Err(Error::InvalidDimension { rows, cols }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.alive_at(row, col))
    }

    pub fn identifier_of(&self, row: usize, col: usize) -> CellId {
        CellId(row * self.cols + col + 1)
    }

    pub fn coords_of(&self, CellId(id): CellId) -> Option<(usize, usize)> {
        (1..=self.rows * self.cols)
            .contains(&id)
            .then(|| ((id - 1) / self.cols, (id - 1) % self.cols))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells in row-major order.
    pub fn alive_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells
            .iter()
            .positions(|&alive| alive)
            .map(|i| CellId(i + 1))
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.rows).cartesian_product(0..self.cols)
    }
}

impl GridState {
    // Callers inside the crate only pass coordinates produced by `coords`.
    pub(crate) fn alive_at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }
}

impl FromStr for GridState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect_vec();
        let Some(cols) = lines.first().map(|l| l.chars().count()) else {
            return Err(Error::Parse("Empty grid".to_string()));
        };
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(Error::Parse(format!(
                    "Row {y} has a different width than row 0"
                )));
            }
            for c in line.chars() {
                match c {
                    '.' => cells.push(false),
                    'o' => cells.push(true),
                    _ => return Err(Error::Parse(format!("Unexpected character {c}"))),
                }
            }
        }
        Ok(Self::from_cells(lines.len(), cols, cells))
    }
}

impl Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for &alive in row {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marks_ids() {
        let grid = GridState::new(2, 3, [CellId(1), CellId(5)]).unwrap();
        assert_eq!(grid.to_string(), "o..\n.o.");
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_duplicate_ids() {
        let grid = GridState::new(2, 2, [CellId(4), CellId(4)]).unwrap();
        assert_eq!(grid.alive_ids().collect_vec(), [CellId(4)]);
    }

    #[test]
    fn test_invalid_dimension() {
        assert_eq!(
            GridState::new(0, 3, std::iter::empty()),
            Err(Error::InvalidDimension { rows: 0, cols: 3 })
        );
        assert_eq!(
            GridState::new(3, 0, std::iter::empty()),
            Err(Error::InvalidDimension { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn test_invalid_cell_id() {
        assert_eq!(
            GridState::new(2, 2, [CellId(0)]),
            Err(Error::InvalidCellId { id: CellId(0), max: 4 })
        );
        assert_eq!(
            GridState::new(2, 2, [CellId(5)]),
            Err(Error::InvalidCellId { id: CellId(5), max: 4 })
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = GridState::dead(2, 3).unwrap();
        assert_eq!(grid.is_alive(1, 2), Ok(false));
        assert!(matches!(grid.is_alive(2, 0), Err(Error::OutOfBounds { .. })));
        assert!(matches!(grid.is_alive(0, 3), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_identifiers() {
        let grid = GridState::dead(3, 4).unwrap();
        assert_eq!(grid.identifier_of(0, 0), CellId(1));
        assert_eq!(grid.identifier_of(1, 0), CellId(5));
        assert_eq!(grid.identifier_of(2, 3), CellId(12));
        assert_eq!(grid.coords_of(CellId(7)), Some((1, 2)));
        assert_eq!(grid.coords_of(CellId(0)), None);
        assert_eq!(grid.coords_of(CellId(13)), None);
    }

    #[test]
    fn test_parse() {
        let grid = GridState::from_str(
            "
            .o.
            o.o
        ",
        )
        .unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid.alive_ids().collect_vec(), [CellId(2), CellId(4), CellId(6)]);
        assert!(GridState::from_str("oo\no").is_err());
        assert!(GridState::from_str("ox").is_err());
        assert!(GridState::from_str("\n  \n").is_err());
    }
}
