//! Error types for simulation setup.

use std::fmt;

/// A simulation configuration the solver refuses to run.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid has no interior cells for the 5-point stencil.
    GridTooSmall { nx: usize, ny: usize },
    /// The cell count overflows or exceeds [`MAX_CELLS`](crate::MAX_CELLS).
    GridTooLarge { nx: usize, ny: usize },
    /// The run would perform no time steps.
    NoSteps,
    /// A physical parameter is zero, negative, or not finite.
    NonPositive { name: &'static str, value: f64 },
    /// The central hot square does not fit inside the grid.
    HotRegionOutOfBounds {
        half_width: usize,
        nx: usize,
        ny: usize,
    },
    /// A worker pool was requested with zero threads.
    NoWorkers,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { nx, ny } => {
                write!(f, "grid {nx}x{ny} is too small, both dimensions must be >= 3")
            }
            Self::GridTooLarge { nx, ny } => write!(
                f,
                "grid {nx}x{ny} exceeds the limit of {} cells",
                crate::MAX_CELLS
            ),
            Self::NoSteps => write!(f, "number of time steps must be >= 1"),
            Self::NonPositive { name, value } => {
                write!(f, "{name} must be a positive finite number, got {value}")
            }
            Self::HotRegionOutOfBounds { half_width, nx, ny } => write!(
                f,
                "hot region of half-width {half_width} does not fit in a {nx}x{ny} grid"
            ),
            Self::NoWorkers => write!(f, "worker count must be >= 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while building a [`Simulation`](crate::Simulation).
#[derive(Debug)]
pub enum SimError {
    Config(ConfigError),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::ThreadPool(e) => write!(f, "failed to build worker pool: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::ThreadPool(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for SimError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(e)
    }
}
