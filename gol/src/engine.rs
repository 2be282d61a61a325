use itertools::Itertools;

use crate::{
    GridState,
    classification::{ClassificationRecord, Fate},
};

/// Which cells may be classified as dying of overpopulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overpopulation {
    /// Any cell with more than 3 live neighbours, including cells that were
    /// already dead and stay dead.
    #[default]
    AnyCell,
    /// Only cells that were alive before the step.
    AliveOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Engine {
    pub overpopulation: Overpopulation,
}

impl Engine {
    pub fn new(overpopulation: Overpopulation) -> Self {
        Self { overpopulation }
    }

    /// Advance `grid` by one generation. Every neighbour count is taken from
    /// `grid` itself, never from the partially built next state.
    pub fn step(&self, grid: &GridState) -> (GridState, ClassificationRecord) {
        let mut record = ClassificationRecord::default();
        let mut cells = Vec::with_capacity(grid.rows() * grid.cols());
        for (row, col) in grid.coords() {
            let alive = grid.alive_at(row, col);
            let count = count_live_neighbours(grid, row, col);
            let (next, fate) = self.transition(alive, count);
            if let Some(fate) = fate {
                record.push(fate, grid.identifier_of(row, col));
            }
            cells.push(next);
        }
        let next = GridState::from_cells(grid.rows(), grid.cols(), cells);
        log::debug!(
            "step: population {} -> {}, underpopulation {}, just right {}, breeding {}, overpopulation {}",
            grid.population(),
            next.population(),
            record.underpopulation.len(),
            record.just_right.len(),
            record.breeding.len(),
            record.overpopulation.len(),
        );
        (next, record)
    }

    // The arms are ordered; the first match wins.
    fn transition(&self, alive: bool, count: u8) -> (bool, Option<Fate>) {
        match (alive, count) {
            (true, ..2) => (false, Some(Fate::Underpopulation)),
            (true, 2 | 3) => (true, Some(Fate::JustRight)),
            (false, 3) => (true, Some(Fate::Breeding)),
            (true, 4..) => (false, Some(Fate::Overpopulation)),
            (false, 4..) if self.overpopulation == Overpopulation::AnyCell => {
                (false, Some(Fate::Overpopulation))
            }
            _ => (false, None),
        }
    }
}

/// Advance `grid` by one generation with the default engine.
pub fn step(grid: &GridState) -> (GridState, ClassificationRecord) {
    Engine::default().step(grid)
}

/// Live cells among the up to 8 cells around `(row, col)`. Positions off the
/// edge of the grid are skipped, there is no wraparound.
pub fn count_live_neighbours(grid: &GridState, row: usize, col: usize) -> u8 {
    neighbours((row, col))
        .filter(|&(r, c)| r < grid.rows() && c < grid.cols())
        .filter(|&(r, c)| grid.alive_at(r, c))
        .count() as u8
}

fn neighbours((row, col): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    (-1..=1isize)
        .cartesian_product(-1..=1isize)
        .filter(|&d| d != (0, 0))
        .filter_map(move |(dr, dc)| {
            Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
        })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::CellId;

    #[test]
    fn test_all_dead_has_no_neighbours() {
        let grid = GridState::dead(4, 5).unwrap();
        for (row, col) in grid.coords() {
            assert_eq!(count_live_neighbours(&grid, row, col), 0);
        }
    }

    #[test]
    fn test_corner_does_not_wrap() {
        let grid = GridState::from_str(
            "
            ...
            ...
            ..o
        ",
        )
        .unwrap();
        assert_eq!(count_live_neighbours(&grid, 0, 0), 0);
        assert_eq!(count_live_neighbours(&grid, 1, 1), 1);
        assert_eq!(count_live_neighbours(&grid, 2, 2), 0);
    }

    #[test]
    fn test_full_grid_counts() {
        let grid = GridState::from_str("ooo\nooo\nooo").unwrap();
        assert_eq!(count_live_neighbours(&grid, 0, 0), 3);
        assert_eq!(count_live_neighbours(&grid, 0, 1), 5);
        assert_eq!(count_live_neighbours(&grid, 1, 1), 8);
    }

    #[test]
    fn test_transition_precedence() {
        let engine = Engine::default();
        assert_eq!(engine.transition(true, 0), (false, Some(Fate::Underpopulation)));
        assert_eq!(engine.transition(true, 1), (false, Some(Fate::Underpopulation)));
        assert_eq!(engine.transition(true, 2), (true, Some(Fate::JustRight)));
        assert_eq!(engine.transition(true, 3), (true, Some(Fate::JustRight)));
        assert_eq!(engine.transition(true, 4), (false, Some(Fate::Overpopulation)));
        assert_eq!(engine.transition(false, 2), (false, None));
        assert_eq!(engine.transition(false, 3), (true, Some(Fate::Breeding)));
        assert_eq!(engine.transition(false, 8), (false, Some(Fate::Overpopulation)));

        let engine = Engine::new(Overpopulation::AliveOnly);
        assert_eq!(engine.transition(false, 8), (false, None));
        assert_eq!(engine.transition(true, 8), (false, Some(Fate::Overpopulation)));
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = GridState::new(3, 3, [CellId(5)]).unwrap();
        let (next, record) = step(&grid);
        assert_eq!(next.population(), 0);
        assert_eq!(record.underpopulation, [CellId(5)]);
        assert!(record.just_right.is_empty());
        assert!(record.breeding.is_empty());
        assert!(record.overpopulation.is_empty());
    }

    #[test]
    fn test_input_is_untouched() {
        let grid = GridState::from_str("ooo\n...").unwrap();
        let before = grid.clone();
        let (next, _) = step(&grid);
        assert_eq!(grid, before);
        assert_ne!(next, grid);
    }
}
