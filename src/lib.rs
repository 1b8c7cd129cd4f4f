//! # Bias Core
//!
//! DC operating point and load line calculator for transistor bias circuits.
//!
//! This library provides:
//! - Closed-form bias equations for four topologies: emitter bias, fixed
//!   bias, voltage divider (BJT) and common-source MOSFET
//! - DC load line sampling for plotting
//! - Per-topology parameter controls with the ranges an input UI should offer
//! - Text, CSV and JSON reports
//!
//! ## Architecture
//!
//! - [`circuit`] - Topology selector, component values, controls and validation
//! - [`bias`] - Operating point equations and per-topology result types
//! - [`load_line`] - Load line sampling
//! - [`analysis`] - Combined recomputation for one parameter snapshot
//! - [`report`] - Output formatting
//! - [`units`] - Engineering-notation parsing and formatting
//!
//! ## Usage
//!
//! ```
//! use bias_core::{recompute, CircuitParameters, Topology};
//!
//! let params = CircuitParameters::default();
//! let analysis = recompute(&params, Topology::FixedBias);
//!
//! assert_eq!(analysis.load_line.len(), 21);
//! assert_eq!(analysis.operating_point.saturation_current(), 0.005);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! biascalc --topology divider --vcc 12 --rb1 47k --rb2 10k --rc 2.2k --re 470 --beta 150
//! ```
//!
//! ## Device Model
//!
//! The devices are not simulated. A BJT conducts with a fixed 0.7 V
//! base-emitter drop and constant current gain; the MOSFET uses a fixed 2 V
//! threshold. All computations are pure arithmetic: invalid inputs such as a
//! zero resistance give infinite or NaN results rather than errors.

pub mod analysis;
pub mod bias;
pub mod circuit;
pub mod error;
pub mod load_line;
pub mod report;
pub mod units;

// Re-export main types for convenience
pub use analysis::{recompute, Analysis};
pub use bias::{compute, OperatingPoint};
pub use circuit::{CircuitParameters, Topology};
pub use error::{BiasError, Result};
pub use load_line::{sample, LoadLinePoint};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmBiasCalculator;

/// Base-emitter junction drop of a conducting BJT, in volts.
pub const BJT_VBE_DROP: f64 = 0.7;

/// Gate threshold voltage of the MOSFET, in volts.
pub const MOSFET_THRESHOLD: f64 = 2.0;

/// Number of equal voltage steps on the load line (giving one more point).
pub const LOAD_LINE_STEPS: usize = 20;
