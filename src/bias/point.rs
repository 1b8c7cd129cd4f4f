//! Operating point result shapes, one per topology.
//!
//! All currents are in amperes, voltages in volts, resistances in ohms.

use serde::Serialize;

use crate::circuit::Topology;

/// Emitter-stabilised BJT bias point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitterBiasPoint {
    pub ie: f64,
    pub ib: f64,
    pub ic: f64,
    pub vce: f64,
    pub ic_max: f64,
    pub v_rb: f64,
    pub v_rc: f64,
    pub v_re: f64,
}

/// Fixed (single base resistor) BJT bias point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedBiasPoint {
    pub ib: f64,
    pub ic: f64,
    pub ie: f64,
    pub vce: f64,
    pub ic_max: f64,
    pub v_rb: f64,
    pub v_rc: f64,
}

/// Voltage-divider BJT bias point.
///
/// `vb` and `rbb` are the Thevenin equivalent of the base divider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltageDividerPoint {
    pub vb: f64,
    pub ib: f64,
    pub ic: f64,
    pub ie: f64,
    pub vce: f64,
    pub ic_max: f64,
    pub v_rb1: f64,
    pub v_rb2: f64,
    pub v_rc: f64,
    pub v_re: f64,
    pub rbb: f64,
}

/// Common-source MOSFET bias point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MosfetPoint {
    pub vgs: f64,
    pub id: f64,
    pub vds: f64,
    pub id_max: f64,
    pub v_rd: f64,
}

/// DC operating point of a biased transistor.
///
/// The variant always matches the [`Topology`] it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "topology")]
pub enum OperatingPoint {
    #[serde(rename = "emitter")]
    EmitterBias(EmitterBiasPoint),
    #[serde(rename = "fixed")]
    FixedBias(FixedBiasPoint),
    #[serde(rename = "divider")]
    VoltageDivider(VoltageDividerPoint),
    #[serde(rename = "mosfet")]
    MosfetCommonSource(MosfetPoint),
}

impl OperatingPoint {
    /// The topology this point was computed for.
    pub fn topology(&self) -> Topology {
        match self {
            OperatingPoint::EmitterBias(_) => Topology::EmitterBias,
            OperatingPoint::FixedBias(_) => Topology::FixedBias,
            OperatingPoint::VoltageDivider(_) => Topology::VoltageDivider,
            OperatingPoint::MosfetCommonSource(_) => Topology::MosfetCommonSource,
        }
    }

    /// Saturation current bound (IcMax / IdMax).
    pub fn saturation_current(&self) -> f64 {
        match self {
            OperatingPoint::EmitterBias(p) => p.ic_max,
            OperatingPoint::FixedBias(p) => p.ic_max,
            OperatingPoint::VoltageDivider(p) => p.ic_max,
            OperatingPoint::MosfetCommonSource(p) => p.id_max,
        }
    }

    /// Output current (Ic / Id).
    pub fn output_current(&self) -> f64 {
        match self {
            OperatingPoint::EmitterBias(p) => p.ic,
            OperatingPoint::FixedBias(p) => p.ic,
            OperatingPoint::VoltageDivider(p) => p.ic,
            OperatingPoint::MosfetCommonSource(p) => p.id,
        }
    }

    /// Output voltage (Vce / Vds).
    pub fn output_voltage(&self) -> f64 {
        match self {
            OperatingPoint::EmitterBias(p) => p.vce,
            OperatingPoint::FixedBias(p) => p.vce,
            OperatingPoint::VoltageDivider(p) => p.vce,
            OperatingPoint::MosfetCommonSource(p) => p.vds,
        }
    }

    /// Named quantities in listing order.
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        match *self {
            OperatingPoint::EmitterBias(p) => vec![
                ("ie", p.ie),
                ("ib", p.ib),
                ("ic", p.ic),
                ("vce", p.vce),
                ("icMax", p.ic_max),
                ("vRb", p.v_rb),
                ("vRc", p.v_rc),
                ("vRe", p.v_re),
            ],
            OperatingPoint::FixedBias(p) => vec![
                ("ib", p.ib),
                ("ic", p.ic),
                ("ie", p.ie),
                ("vce", p.vce),
                ("icMax", p.ic_max),
                ("vRb", p.v_rb),
                ("vRc", p.v_rc),
            ],
            OperatingPoint::VoltageDivider(p) => vec![
                ("vb", p.vb),
                ("ib", p.ib),
                ("ic", p.ic),
                ("ie", p.ie),
                ("vce", p.vce),
                ("icMax", p.ic_max),
                ("vRb1", p.v_rb1),
                ("vRb2", p.v_rb2),
                ("vRc", p.v_rc),
                ("vRe", p.v_re),
                ("rbb", p.rbb),
            ],
            OperatingPoint::MosfetCommonSource(p) => vec![
                ("vgs", p.vgs),
                ("id", p.id),
                ("vds", p.vds),
                ("idMax", p.id_max),
                ("vRd", p.v_rd),
            ],
        }
    }

    /// Look up a quantity by its listing name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields()
            .into_iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// True when every quantity is finite.
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_finite())
    }
}

/// Unit symbol for a quantity name.
pub fn unit_of(name: &str) -> &'static str {
    match name {
        "rbb" => "Ω",
        n if n.starts_with('i') => "A",
        _ => "V",
    }
}
