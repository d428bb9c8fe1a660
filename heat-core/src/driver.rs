use crate::error::{ConfigError, SimError};
use crate::grid::{Grid, GridPair};
use crate::params::SimulationParams;
use crate::source::HeatSource;
use crate::stencil::{self, Diffusion};
use std::time::{Duration, Instant};

/// Outcome of [`Simulation::run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub steps: usize,
    pub workers: usize,
    pub elapsed: Duration,
}

/// Owns both buffers and the worker pool and advances the field step by step.
pub struct Simulation {
    params: SimulationParams,
    diffusion: Diffusion,
    source: Option<HeatSource>,
    buffers: GridPair,
    pool: Option<rayon::ThreadPool>,
    steps_done: usize,
}

impl Simulation {
    /// Runs on the rayon global pool.
    pub fn new(params: SimulationParams) -> Simulation {
        let diffusion = Diffusion {
            alpha: params.alpha(),
            dx: params.dx(),
            dy: params.dy(),
            dt: params.dt(),
        };
        Simulation {
            source: Some(params.hot_source()),
            buffers: GridPair::zeros(params.nx(), params.ny()),
            diffusion,
            params,
            pool: None,
            steps_done: 0,
        }
    }

    /// Runs on a dedicated pool of exactly `workers` threads.
    pub fn with_workers(params: SimulationParams, workers: usize) -> Result<Simulation, SimError> {
        if workers == 0 {
            return Err(ConfigError::NoWorkers.into());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;
        let mut sim = Simulation::new(params);
        sim.pool = Some(pool);
        Ok(sim)
    }

    // ---- Configuration ----

    /// Replaces the heat source; `None` lets the field evolve freely.
    pub fn set_source(&mut self, source: Option<HeatSource>) -> Result<(), ConfigError> {
        if let Some(src) = &source {
            src.check_fits(self.params.nx(), self.params.ny())?;
        }
        self.source = source;
        Ok(())
    }

    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), ConfigError> {
        self.params.set_alpha(alpha)?;
        self.diffusion.alpha = self.params.alpha();
        self.diffusion.dt = self.params.dt();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.buffers.clear();
        self.steps_done = 0;
    }

    // ---- Accessors ----

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn source(&self) -> Option<&HeatSource> {
        self.source.as_ref()
    }

    pub fn field(&self) -> &Grid {
        self.buffers.current()
    }

    /// Mutable access to the current field, e.g. to seed an initial condition.
    pub fn field_mut(&mut self) -> &mut Grid {
        self.buffers.current_mut()
    }

    pub fn into_field(self) -> Grid {
        self.buffers.into_current()
    }

    pub fn steps_done(&self) -> usize {
        self.steps_done
    }

    pub fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    // ---- Time stepping ----

    /// Reheats the source into the current field.
    pub fn inject(&mut self) {
        if let Some(src) = &self.source {
            src.inject(self.buffers.current_mut());
        }
    }

    /// One iteration: inject, parallel stencil into the other slot, swap roles.
    pub fn step(&mut self) {
        self.inject();

        let diffusion = self.diffusion;
        let (current, next) = self.buffers.split();
        match &self.pool {
            Some(pool) => pool.install(|| stencil::step(&diffusion, current, next)),
            None => stencil::step(&diffusion, current, next),
        }

        self.buffers.swap();
        self.steps_done += 1;
    }

    /// Advances `nt` steps and reports the elapsed wall-clock time of the loop.
    pub fn run(&mut self) -> RunReport {
        self.run_observed(|_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer(step, field)` after each step,
    /// with `step` counted from 1.
    pub fn run_observed<F>(&mut self, mut observer: F) -> RunReport
    where
        F: FnMut(usize, &Grid),
    {
        let steps = self.params.nt();
        let workers = self.workers();

        let start = Instant::now();
        for n in 1..=steps {
            self.step();
            observer(n, self.field());
        }
        let elapsed = start.elapsed();

        RunReport {
            steps,
            workers,
            elapsed,
        }
    }
}
