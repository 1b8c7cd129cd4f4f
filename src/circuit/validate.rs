//! Opt-in parameter validation.
//!
//! The calculation engine accepts any numbers. These checks are for callers
//! that want bad input rejected up front instead of seeing non-finite results.
//! Nothing here substitutes or clamps a value.

use crate::error::{BiasError, Result};

use super::params::CircuitParameters;
use super::types::Topology;

/// Validate the parameters a topology reads.
///
/// Checks:
/// - Every used parameter is finite
/// - Every used parameter is strictly positive
///
/// A supply below the junction drop or gate threshold is accepted; the
/// device is simply in cutoff and the equations still give finite values.
pub fn validate_parameters(topology: Topology, params: &CircuitParameters) -> Result<()> {
    for control in topology.controls() {
        let value = control.value(params);
        let name = control.kind.name();

        if !value.is_finite() {
            return Err(BiasError::invalid_parameter(name, value, "must be a finite number"));
        }
        if value <= 0.0 {
            return Err(BiasError::invalid_parameter(name, value, "must be greater than zero"));
        }
    }

    Ok(())
}

/// Check the parameters a topology reads against its control ranges.
pub fn check_ranges(topology: Topology, params: &CircuitParameters) -> Result<()> {
    for control in topology.controls() {
        let value = control.value(params);
        if !control.contains(value) {
            return Err(BiasError::OutOfRange {
                param: control.kind.name().to_string(),
                value,
                min: control.min,
                max: control.max,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid_everywhere() {
        let params = CircuitParameters::default();
        for topology in Topology::ALL {
            validate_parameters(topology, &params).unwrap();
            check_ranges(topology, &params).unwrap();
        }
    }

    #[test]
    fn test_zero_resistance_rejected() {
        let params = CircuitParameters::default().with_rc(0.0);
        let err = validate_parameters(Topology::FixedBias, &params).unwrap_err();
        assert!(matches!(err, BiasError::InvalidParameter { ref param, .. } if param == "rc"));
    }

    #[test]
    fn test_unused_parameter_ignored() {
        // Rb2 is only read by the divider
        let params = CircuitParameters::default().with_rb2(-1.0);
        validate_parameters(Topology::EmitterBias, &params).unwrap();
        assert!(validate_parameters(Topology::VoltageDivider, &params).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        let params = CircuitParameters::default().with_beta(f64::NAN);
        let err = validate_parameters(Topology::EmitterBias, &params).unwrap_err();
        assert!(matches!(err, BiasError::InvalidParameter { ref param, .. } if param == "beta"));
        validate_parameters(Topology::MosfetCommonSource, &params).unwrap();
    }

    #[test]
    fn test_supply_below_threshold_accepted() {
        let params = CircuitParameters::default().with_vcc(1.5);
        for topology in Topology::ALL {
            validate_parameters(topology, &params).unwrap();
            check_ranges(topology, &params).unwrap();
        }

        let point = crate::bias::compute(Topology::MosfetCommonSource, &params);
        assert!(point.is_finite());
        assert!(point.output_current() < 0.0);
    }

    #[test]
    fn test_out_of_range() {
        let params = CircuitParameters::default().with_re(5_000.0);
        let err = check_ranges(Topology::EmitterBias, &params).unwrap_err();
        assert!(matches!(
            err,
            BiasError::OutOfRange { ref param, min, max, .. } if param == "re" && min == 10.0 && max == 1_000.0
        ));
        check_ranges(Topology::FixedBias, &params).unwrap();
    }
}
