//! Explicit finite-difference solver for 2D heat diffusion with a reheated
//! central source and zero-gradient edges.

mod driver;
mod error;
mod grid;
mod output;
mod params;
mod source;
pub mod stencil;

pub use driver::{RunReport, Simulation};
pub use error::{ConfigError, SimError};
pub use grid::{Grid, GridPair};
pub use output::{format_general, save_dat, write_dat};
pub use params::{DEFAULT_ALPHA, DEFAULT_LENGTH, HOT_TEMPERATURE, MAX_CELLS, SimulationParams};
pub use source::HeatSource;
pub use stencil::Diffusion;
