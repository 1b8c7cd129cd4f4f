//! Topology selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BiasError, Result};

/// One of the supported transistor DC-biasing configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// BJT with base resistor to Vcc and emitter degeneration resistor.
    #[default]
    #[serde(rename = "emitter")]
    EmitterBias,
    /// BJT with a single base resistor to Vcc.
    #[serde(rename = "fixed")]
    FixedBias,
    /// BJT with an Rb1/Rb2 divider on the base and an emitter resistor.
    #[serde(rename = "divider")]
    VoltageDivider,
    /// N-channel enhancement MOSFET, common source with drain resistor.
    #[serde(rename = "mosfet")]
    MosfetCommonSource,
}

impl Topology {
    /// All topologies in selector order.
    pub const ALL: [Topology; 4] = [
        Topology::EmitterBias,
        Topology::FixedBias,
        Topology::VoltageDivider,
        Topology::MosfetCommonSource,
    ];

    /// Short selector identifier.
    pub fn key(&self) -> &'static str {
        match self {
            Topology::EmitterBias => "emitter",
            Topology::FixedBias => "fixed",
            Topology::VoltageDivider => "divider",
            Topology::MosfetCommonSource => "mosfet",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Topology::EmitterBias => "Emitter Bias",
            Topology::FixedBias => "Fixed Bias",
            Topology::VoltageDivider => "Voltage Divider",
            Topology::MosfetCommonSource => "MOSFET (N-channel)",
        }
    }

    /// Key used by the schematic image lookup. The core never loads the image.
    pub fn diagram_key(&self) -> &'static str {
        self.key()
    }

    /// Whether the device is a MOSFET rather than a BJT.
    pub fn is_mosfet(&self) -> bool {
        matches!(self, Topology::MosfetCommonSource)
    }

    /// Input voltage below which the device does not conduct.
    pub fn turn_on_voltage(&self) -> f64 {
        if self.is_mosfet() {
            crate::MOSFET_THRESHOLD
        } else {
            crate::BJT_VBE_DROP
        }
    }

    /// Label for the load line's voltage axis.
    pub fn voltage_axis_label(&self) -> &'static str {
        if self.is_mosfet() {
            "Vds (V)"
        } else {
            "Vce (V)"
        }
    }

    /// Label for the load line's current axis.
    pub fn current_axis_label(&self) -> &'static str {
        if self.is_mosfet() {
            "Id (A)"
        } else {
            "Ic (A)"
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Topology {
    type Err = BiasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emitter" | "emitter_bias" => Ok(Topology::EmitterBias),
            "fixed" | "fixed_bias" => Ok(Topology::FixedBias),
            "divider" | "voltage_divider" => Ok(Topology::VoltageDivider),
            "mosfet" | "mosfet_common_source" => Ok(Topology::MosfetCommonSource),
            _ => Err(BiasError::unknown_topology(s)),
        }
    }
}
