mod classification;
mod engine;
mod error;
mod grid;
pub mod render;
mod simulation;


pub use crate::{
    classification::{ClassificationRecord, Fate},
    engine::{Engine, Overpopulation, count_live_neighbours, step},
    error::Error,
    grid::{CellId, GridState},
    simulation::{Generation, Simulation},
};
