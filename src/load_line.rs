//! DC load line sampling.
//!
//! The load line is the straight line `I = (Vcc - V) / Rc` between the
//! saturation point `(0, Vcc/Rc)` and cutoff `(Vcc, 0)`. Every topology is
//! sampled the same way; Re is deliberately left out of the slope, so for the
//! voltage divider the plotted intercept differs from its reported IcMax.

use serde::Serialize;

use crate::circuit::{CircuitParameters, Topology};
use crate::LOAD_LINE_STEPS;

/// One sample on the load line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadLinePoint {
    /// Collector-emitter (or drain-source) voltage in volts
    pub voltage: f64,
    /// Collector (or drain) current in amperes, never negative
    pub current: f64,
}

/// Sample the load line at `LOAD_LINE_STEPS + 1` evenly spaced voltages from
/// 0 to Vcc inclusive, ordered by increasing voltage.
///
/// The topology only selects axis naming downstream; the samples are the same
/// for every topology.
pub fn sample(_topology: Topology, params: &CircuitParameters) -> Vec<LoadLinePoint> {
    let vcc = params.vcc;
    let rc = params.rc;
    let i_max = vcc / rc;

    let points: Vec<LoadLinePoint> = (0..=LOAD_LINE_STEPS)
        .map(|i| {
            let voltage = (i as f64 / LOAD_LINE_STEPS as f64) * vcc;
            let current = i_max - voltage / rc;
            LoadLinePoint {
                voltage,
                // NaN fails the comparison and passes through unclamped
                current: if current < 0.0 { 0.0 } else { current },
            }
        })
        .collect();

    log::trace!(
        "sampled {} load line points (vcc={}, rc={})",
        points.len(),
        vcc,
        rc
    );
    points
}
