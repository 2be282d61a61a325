use crate::{ClassificationRecord, Engine, GridState};

/// One snapshot in the history of a simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    pub index: usize,
    pub grid: GridState,
    /// How the cells got here from the previous generation. `None` for the
    /// seed.
    pub record: Option<ClassificationRecord>,
}

/// Yields the seed as generation 0 and then every following generation,
/// forever.
#[derive(Clone, Debug)]
pub struct Simulation {
    engine: Engine,
    next: Option<Generation>,
}

impl Simulation {
    pub fn new(engine: Engine, seed: GridState) -> Self {
        Self {
            engine,
            next: Some(Generation {
                index: 0,
                grid: seed,
                record: None,
            }),
        }
    }

    /// The first `generations` snapshots, seed included.
    pub fn run(engine: Engine, seed: GridState, generations: usize) -> Vec<Generation> {
        Self::new(engine, seed).take(generations).collect()
    }
}

impl Iterator for Simulation {
    type Item = Generation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let (grid, record) = self.engine.step(&current.grid);
        log::trace!("generation {}:\n{}", current.index, current.grid);
        self.next = Some(Generation {
            index: current.index + 1,
            grid,
            record: Some(record),
        });
        Some(current)
    }
}
