//! Combined recomputation of operating point and load line.
//!
//! Callers re-run [`recompute`] on every parameter or topology change. Both
//! results are rebuilt from scratch so they can never disagree with each
//! other or with the parameters they were derived from.

use serde::Serialize;

use crate::bias::{self, OperatingPoint};
use crate::circuit::{CircuitParameters, Topology};
use crate::load_line::{self, LoadLinePoint};

/// Axis labels for plotting the load line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisLabels {
    pub x: &'static str,
    pub y: &'static str,
}

impl AxisLabels {
    /// Labels for a topology (Vce/Ic for BJTs, Vds/Id for the MOSFET).
    pub fn for_topology(topology: Topology) -> Self {
        Self {
            x: topology.voltage_axis_label(),
            y: topology.current_axis_label(),
        }
    }
}

/// Everything the rendering layer needs for one parameter snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub topology: Topology,
    pub label: &'static str,
    pub parameters: CircuitParameters,
    pub axes: AxisLabels,
    pub operating_point: OperatingPoint,
    pub load_line: Vec<LoadLinePoint>,
}

/// Compute the operating point and load line for a parameter snapshot.
pub fn recompute(params: &CircuitParameters, topology: Topology) -> Analysis {
    log::debug!("recompute {} with {:?}", topology.key(), params);

    let operating_point = bias::compute(topology, params);
    if !operating_point.is_finite() {
        log::warn!(
            "{} operating point has non-finite values; check for zero or negative resistances",
            topology.label()
        );
    }
    if params.vcc <= topology.turn_on_voltage() {
        log::warn!(
            "supply {} V is at or below the {} V turn-on voltage; the device is in cutoff",
            params.vcc,
            topology.turn_on_voltage()
        );
    }

    Analysis {
        topology,
        label: topology.label(),
        parameters: *params,
        axes: AxisLabels::for_topology(topology),
        operating_point,
        load_line: load_line::sample(topology, params),
    }
}
