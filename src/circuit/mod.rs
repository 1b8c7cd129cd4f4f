//! Circuit description: topology selection and component values.
//!
//! A circuit is fully described by a [`Topology`] plus a [`CircuitParameters`]
//! snapshot. [`Topology::controls`] describes which parameters the input UI
//! should expose for each topology and over what ranges.

mod controls;
mod params;
mod types;
mod validate;

pub use controls::ParameterControl;
pub use params::{CircuitParameters, ParameterKind};
pub use types::Topology;
pub use validate::{check_ranges, validate_parameters};
