use anyhow::{Context, Result};
use growth_core::{
    ModelAnalysis, ModelParameters, Regime, Simulation, SimulationSample, Termination,
};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[derive(Debug, Serialize)]
struct SampleBatch {
    samples: Vec<SimulationSample>,
    done: bool,
    termination: Option<Termination>,
}

fn build_params(r: f64, k: f64, p0: f64, t_max: f64, dt: f64) -> Result<ModelParameters> {
    ModelParameters::new(r, k, p0, t_max, dt).context("Invalid model parameters")
}

fn next_batch(simulation: &mut Simulation, batch: usize) -> SampleBatch {
    let samples: Vec<_> = simulation.by_ref().take(batch.max(1)).collect();
    let termination = simulation.termination();
    SampleBatch {
        samples,
        done: termination.is_some(),
        termination,
    }
}

#[wasm_bindgen]
pub struct WasmSimulationRunner {
    params: ModelParameters,
    simulation: Simulation,
}

#[wasm_bindgen]
impl WasmSimulationRunner {
    #[wasm_bindgen(constructor)]
    pub fn new(
        r: f64,
        k: f64,
        p0: f64,
        t_max: f64,
        dt: f64,
    ) -> Result<WasmSimulationRunner, JsValue> {
        console_error_panic_hook::set_once();

        let params =
            build_params(r, k, p0, t_max, dt).map_err(|e| JsValue::from_str(&format!("{e:#}")))?;
        Ok(WasmSimulationRunner {
            params,
            simulation: Simulation::new(params),
        })
    }

    /// Pulls at most `batch` samples (at least one while the run is open).
    pub fn run_steps(&mut self, batch: u32) -> Result<JsValue, JsValue> {
        let payload = next_batch(&mut self.simulation, batch as usize);
        to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn is_done(&self) -> bool {
        self.simulation.termination().is_some()
    }

    pub fn total_steps(&self) -> usize {
        self.simulation.steps()
    }

    pub fn is_degenerate(&self) -> bool {
        self.params.regime() == Regime::Degenerate
    }

    /// Restarts integration from `t = 0`.
    pub fn reset(&mut self) {
        self.simulation = Simulation::new(self.params);
    }

    pub fn analysis(&self) -> Result<JsValue, JsValue> {
        to_value(&ModelAnalysis::of(&self.params))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::WasmSimulationRunner;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn runner_rejects_non_positive_capacity() {
        let result = WasmSimulationRunner::new(0.5, 0.0, 10.0, 50.0, 0.1);
        let message = result
            .err()
            .and_then(|err| err.as_string())
            .unwrap_or_default();
        assert!(message.contains("carrying capacity (K)"));
    }

    #[wasm_bindgen_test]
    fn runner_reports_done_after_draining() {
        let mut runner = WasmSimulationRunner::new(0.1, 500.0, 600.0, 10.0, 0.5).expect("runner");
        assert!(runner.is_degenerate());
        runner.run_steps(100).expect("batch");
        assert!(runner.is_done());
        runner.reset();
        assert!(!runner.is_done());
    }
}
