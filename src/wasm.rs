//! WASM bindings for Bias Core.
//!
//! Exposes the calculator to a browser UI. The JavaScript side owns the
//! sliders, schematic image and chart; it pushes every change through the
//! setters and reads fresh results back.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmBiasCalculator } from 'bias_core';
//!
//! await init();
//!
//! const calc = new WasmBiasCalculator('divider');
//! calc.set_vcc(12);
//! calc.set_rb1(47000);
//!
//! const point = JSON.parse(calc.operating_point_json());
//! const line = calc.load_line(); // [v0, i0, v1, i1, ...]
//! ```

use wasm_bindgen::prelude::*;

use crate::analysis::recompute;
use crate::bias::compute;
use crate::circuit::{CircuitParameters, Topology};
use crate::load_line::sample;
use crate::report;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Browser-facing calculator state: the selected topology and current
/// component values. Results are recomputed on every read.
#[wasm_bindgen]
pub struct WasmBiasCalculator {
    topology: Topology,
    params: CircuitParameters,
}

#[wasm_bindgen]
impl WasmBiasCalculator {
    /// Create a calculator with default component values.
    ///
    /// # Arguments
    /// * `topology` - One of `emitter`, `fixed`, `divider`, `mosfet`
    #[wasm_bindgen(constructor)]
    pub fn new(topology: &str) -> Result<WasmBiasCalculator, JsValue> {
        Ok(WasmBiasCalculator {
            topology: topology.parse().map_err(js_error)?,
            params: CircuitParameters::default(),
        })
    }

    /// Change the selected topology. Component values are kept.
    #[wasm_bindgen]
    pub fn set_topology(&mut self, topology: &str) -> Result<(), JsValue> {
        self.topology = topology.parse().map_err(js_error)?;
        Ok(())
    }

    /// Selected topology's selector key.
    #[wasm_bindgen(getter)]
    pub fn topology(&self) -> String {
        self.topology.key().to_string()
    }

    /// Key for the schematic image of the selected topology.
    #[wasm_bindgen]
    pub fn diagram_key(&self) -> String {
        self.topology.diagram_key().to_string()
    }

    #[wasm_bindgen]
    pub fn set_vcc(&mut self, value: f64) {
        self.params.vcc = value;
    }

    #[wasm_bindgen]
    pub fn set_rb1(&mut self, value: f64) {
        self.params.rb1 = value;
    }

    #[wasm_bindgen]
    pub fn set_rb2(&mut self, value: f64) {
        self.params.rb2 = value;
    }

    #[wasm_bindgen]
    pub fn set_rc(&mut self, value: f64) {
        self.params.rc = value;
    }

    #[wasm_bindgen]
    pub fn set_re(&mut self, value: f64) {
        self.params.re = value;
    }

    #[wasm_bindgen]
    pub fn set_beta(&mut self, value: f64) {
        self.params.beta = value;
    }

    /// Operating point as a JSON object with camelCase keys.
    #[wasm_bindgen]
    pub fn operating_point_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&compute(self.topology, &self.params)).map_err(js_error)
    }

    /// A single operating point quantity by name (`ic`, `vce`, `idMax`, ...),
    /// or `undefined` if the topology has no such quantity.
    #[wasm_bindgen]
    pub fn quantity(&self, name: &str) -> Option<f64> {
        compute(self.topology, &self.params).get(name)
    }

    /// Load line flattened as `[v0, i0, v1, i1, ...]`.
    #[wasm_bindgen]
    pub fn load_line(&self) -> Vec<f64> {
        sample(self.topology, &self.params)
            .iter()
            .flat_map(|p| [p.voltage, p.current])
            .collect()
    }

    /// Full analysis (parameters, axes, operating point, load line) as JSON.
    #[wasm_bindgen]
    pub fn analysis_json(&self) -> Result<String, JsValue> {
        report::to_json(&recompute(&self.params, self.topology)).map_err(js_error)
    }

    /// Slider definitions for the selected topology as JSON.
    #[wasm_bindgen]
    pub fn controls_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.topology.controls()).map_err(js_error)
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
