use heat_core::{Simulation, SimulationParams};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Solver {
    inner: Simulation,
}

#[wasm_bindgen]
impl Solver {
    #[wasm_bindgen(constructor)]
    pub fn new(nx: usize, ny: usize) -> Result<Solver, JsValue> {
        // nt only bounds `run`; the page drives the loop itself through `step`.
        let params = SimulationParams::new(nx, ny, 1).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Solver {
            inner: Simulation::new(params),
        })
    }

    // Parameters
    pub fn set_alpha(&mut self, alpha: f64) -> Result<(), JsValue> {
        self.inner
            .set_alpha(alpha)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn get_dt(&self) -> f64 { self.inner.params().dt() }
    pub fn get_hot_half_width(&self) -> usize {
        self.inner.source().map_or(0, |s| s.half_width())
    }

    pub fn reset(&mut self) { self.inner.reset(); }
    /// Sets one cell; coordinates outside the grid are ignored, not reported.
    pub fn add_hotspot(&mut self, i: usize, j: usize, value: f64) {
        let field = self.inner.field_mut();
        if i >= field.nx() || j >= field.ny() {
            return;
        }
        field.set(i, j, value);
    }

    pub fn nx(&self) -> usize { self.inner.params().nx() }
    pub fn ny(&self) -> usize { self.inner.params().ny() }
    pub fn steps_done(&self) -> usize { self.inner.steps_done() }

    // Copy-based JS access (reliable)
    pub fn get_field(&self) -> Vec<f64> {
        self.inner.field().as_slice().to_vec()
    }

    // Step + timing (WASM-only)
    pub fn step(&mut self, count: u32) -> StepInfo {
        let t0 = now_ms();
        for _ in 0..count {
            self.inner.step();
        }
        let t1 = now_ms();
        StepInfo { steps: count, compute_ms: t1 - t0, max: self.inner.field().max() }
    }
}

#[wasm_bindgen]
pub struct StepInfo {
    steps: u32,
    compute_ms: f64,
    max: f64,
}

#[wasm_bindgen]
impl StepInfo {
    pub fn steps(&self) -> u32 { self.steps }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
    pub fn max(&self) -> f64 { self.max }
}


fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotspot_outside_grid_is_ignored() {
        let mut s = Solver::new(12, 8).unwrap();
        s.add_hotspot(12, 0, 5.0);
        s.add_hotspot(0, 8, 5.0);
        assert!(s.get_field().iter().all(|&v| v == 0.0));

        s.add_hotspot(11, 7, 5.0);
        assert_eq!(s.get_field()[11 * 8 + 7], 5.0);
    }
}
