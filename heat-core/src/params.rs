use crate::error::ConfigError;
use crate::source::HeatSource;

pub const DEFAULT_ALPHA: f64 = 0.01;
pub const DEFAULT_LENGTH: f64 = 1.0;
pub const HOT_TEMPERATURE: f64 = 100.0;
/// Largest accepted `nx * ny`; two buffers of this size take 4 GiB.
pub const MAX_CELLS: usize = 1 << 28;

/// Validated inputs of a run plus the step sizes derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    nx: usize,
    ny: usize,
    nt: usize,
    lx: f64,
    ly: f64,
    alpha: f64,
    hot_temperature: f64,
}

impl SimulationParams {
    pub fn new(nx: usize, ny: usize, nt: usize) -> Result<SimulationParams, ConfigError> {
        if nx < 3 || ny < 3 {
            return Err(ConfigError::GridTooSmall { nx, ny });
        }
        match nx.checked_mul(ny) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(ConfigError::GridTooLarge { nx, ny }),
        }
        if nt == 0 {
            return Err(ConfigError::NoSteps);
        }
        HeatSource::centered(nx, HOT_TEMPERATURE).check_fits(nx, ny)?;

        Ok(SimulationParams {
            nx,
            ny,
            nt,
            lx: DEFAULT_LENGTH,
            ly: DEFAULT_LENGTH,
            alpha: DEFAULT_ALPHA,
            hot_temperature: HOT_TEMPERATURE,
        })
    }

    // ---- Setters ----

    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), ConfigError> {
        self.alpha = positive("alpha", alpha)?;
        Ok(())
    }

    pub fn set_domain(&mut self, lx: f64, ly: f64) -> Result<(), ConfigError> {
        let lx = positive("lx", lx)?;
        let ly = positive("ly", ly)?;
        self.lx = lx;
        self.ly = ly;
        Ok(())
    }

    pub fn set_hot_temperature(&mut self, temperature: f64) {
        self.hot_temperature = temperature;
    }

    // ---- Accessors ----

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nt(&self) -> usize {
        self.nt
    }

    pub fn lx(&self) -> f64 {
        self.lx
    }

    pub fn ly(&self) -> f64 {
        self.ly
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn hot_temperature(&self) -> f64 {
        self.hot_temperature
    }

    pub fn dx(&self) -> f64 {
        self.lx / self.nx as f64
    }

    pub fn dy(&self) -> f64 {
        self.ly / self.ny as f64
    }

    /// Largest step the explicit scheme tolerates: `0.25 * min(dx, dy)^2 / alpha`.
    pub fn dt(&self) -> f64 {
        let h = self.dx().min(self.dy());
        0.25 * h * h / self.alpha
    }

    pub fn hot_source(&self) -> HeatSource {
        HeatSource::centered(self.nx, self.hot_temperature)
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
