//! Per-topology parameter controls.
//!
//! Each topology exposes a subset of [`CircuitParameters`] to the input UI,
//! with its own label, range and step. The MOSFET reuses the `rb1` and `rc`
//! slots for its gate and drain resistors.

use serde::Serialize;

use super::params::{CircuitParameters, ParameterKind};
use super::types::Topology;

/// A slider-style control bound to one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterControl {
    pub kind: ParameterKind,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterControl {
    const fn new(kind: ParameterKind, label: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            kind,
            label,
            min,
            max,
            step,
        }
    }

    /// Check whether a value lies within the control's range (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Current value of the bound parameter.
    pub fn value(&self, params: &CircuitParameters) -> f64 {
        params.get(self.kind)
    }
}

const SUPPLY: (f64, f64, f64) = (1.0, 12.0, 0.1);
const BASE_RESISTOR: (f64, f64, f64) = (1_000.0, 1_000_000.0, 1_000.0);
const LOAD_RESISTOR: (f64, f64, f64) = (100.0, 10_000.0, 100.0);
const EMITTER_RESISTOR: (f64, f64, f64) = (10.0, 1_000.0, 10.0);
const GAIN: (f64, f64, f64) = (50.0, 300.0, 1.0);

fn control(kind: ParameterKind, label: &'static str, range: (f64, f64, f64)) -> ParameterControl {
    ParameterControl::new(kind, label, range.0, range.1, range.2)
}

impl Topology {
    /// Controls shown for this topology, in display order.
    pub fn controls(&self) -> Vec<ParameterControl> {
        use ParameterKind::*;

        match self {
            Topology::EmitterBias => vec![
                control(Vcc, "Vcc (V)", SUPPLY),
                control(Rb1, "Rb (Ω)", BASE_RESISTOR),
                control(Rc, "Rc (Ω)", LOAD_RESISTOR),
                control(Re, "Re (Ω)", EMITTER_RESISTOR),
                control(Beta, "Beta", GAIN),
            ],
            Topology::FixedBias => vec![
                control(Vcc, "Vcc (V)", SUPPLY),
                control(Rb1, "Rb (Ω)", BASE_RESISTOR),
                control(Rc, "Rc (Ω)", LOAD_RESISTOR),
                control(Beta, "Beta", GAIN),
            ],
            Topology::VoltageDivider => vec![
                control(Vcc, "Vcc (V)", SUPPLY),
                control(Rb1, "Rb1 (Ω)", BASE_RESISTOR),
                control(Rb2, "Rb2 (Ω)", BASE_RESISTOR),
                control(Rc, "Rc (Ω)", LOAD_RESISTOR),
                control(Re, "Re (Ω)", EMITTER_RESISTOR),
                control(Beta, "Beta", GAIN),
            ],
            Topology::MosfetCommonSource => vec![
                control(Vcc, "Vdd (V)", SUPPLY),
                control(Rb1, "Rg (Ω)", BASE_RESISTOR),
                control(Rc, "Rd (Ω)", LOAD_RESISTOR),
            ],
        }
    }

    /// Whether this topology reads the given parameter.
    pub fn uses(&self, kind: ParameterKind) -> bool {
        self.controls().iter().any(|c| c.kind == kind)
    }
}
