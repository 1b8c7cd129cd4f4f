//! DC operating point equations.
//!
//! Each topology has a closed-form solution using a fixed junction model:
//! a 0.7 V base-emitter drop for the BJTs ([`crate::BJT_VBE_DROP`]) and a
//! 2 V threshold for the MOSFET ([`crate::MOSFET_THRESHOLD`]).
//!
//! [`compute`] is total over numeric inputs. Zero or negative resistances
//! are not rejected; they show up as infinite or NaN quantities in the
//! result. Use [`crate::circuit::validate_parameters`] to reject them first.

mod point;

pub use point::{
    unit_of, EmitterBiasPoint, FixedBiasPoint, MosfetPoint, OperatingPoint, VoltageDividerPoint,
};

use crate::circuit::{CircuitParameters, Topology};
use crate::{BJT_VBE_DROP, MOSFET_THRESHOLD};

/// Compute the operating point of `topology` for the given component values.
pub fn compute(topology: Topology, params: &CircuitParameters) -> OperatingPoint {
    match topology {
        Topology::EmitterBias => OperatingPoint::EmitterBias(emitter_bias(params)),
        Topology::FixedBias => OperatingPoint::FixedBias(fixed_bias(params)),
        Topology::VoltageDivider => OperatingPoint::VoltageDivider(voltage_divider(params)),
        Topology::MosfetCommonSource => OperatingPoint::MosfetCommonSource(mosfet(params)),
    }
}

/// Emitter bias. Ie is approximated by Ic.
pub fn emitter_bias(p: &CircuitParameters) -> EmitterBiasPoint {
    let ib = (p.vcc - BJT_VBE_DROP) / (p.rb1 + p.re * p.beta);
    let ic = p.beta * ib;
    let ie = ic;

    EmitterBiasPoint {
        ie,
        ib,
        ic,
        vce: p.vcc - ic * p.rc - ie * p.re,
        ic_max: p.vcc / p.rc,
        v_rb: ib * p.rb1,
        v_rc: ic * p.rc,
        v_re: ie * p.re,
    }
}

/// Fixed bias.
pub fn fixed_bias(p: &CircuitParameters) -> FixedBiasPoint {
    let ib = (p.vcc - BJT_VBE_DROP) / p.rb1;
    let ic = p.beta * ib;

    FixedBiasPoint {
        ib,
        ic,
        ie: ib + ic,
        vce: p.vcc - ic * p.rc,
        ic_max: p.vcc / p.rc,
        v_rb: ib * p.rb1,
        v_rc: ic * p.rc,
    }
}

/// Voltage divider bias.
///
/// Ib and Vce are negated relative to the textbook loop equations; the
/// reported values keep that sign convention. IcMax includes Re in the
/// saturation path, unlike the load line which uses Vcc/Rc.
pub fn voltage_divider(p: &CircuitParameters) -> VoltageDividerPoint {
    let divider = p.rb1 + p.rb2;
    let vb = p.vcc * p.rb2 / divider;
    let rbb = p.rb1 * p.rb2 / divider;
    let ib = -((vb - BJT_VBE_DROP) / (rbb + (p.beta + 1.0) * p.re));
    let ic = p.beta * ib;
    let ie = (p.beta + 1.0) * ib;

    VoltageDividerPoint {
        vb,
        ib,
        ic,
        ie,
        vce: -(p.vcc - ic * p.rc - ie * p.re),
        ic_max: p.vcc / (p.rc + p.re),
        v_rb1: (p.vcc - vb) * (p.rb1 / divider),
        v_rb2: vb * (p.rb2 / divider),
        v_rc: ic * p.rc,
        v_re: ie * p.re,
        rbb,
    }
}

/// Common-source MOSFET.
///
/// Id is `(Vdd - 2 V) / Rg` with Rg taken from `rb1`. An ideal gate draws no
/// current, but the drain current is still divided by the gate resistor here.
/// Vgs is reported equal to Vds.
pub fn mosfet(p: &CircuitParameters) -> MosfetPoint {
    let id = (p.vcc - MOSFET_THRESHOLD) / p.rb1;
    let vds = p.vcc - id * p.rc;

    MosfetPoint {
        vgs: vds,
        id,
        vds,
        id_max: p.vcc / p.rc,
        v_rd: id * p.rc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn bjt_params() -> CircuitParameters {
        CircuitParameters::new()
            .with_vcc(5.0)
            .with_rb1(100_000.0)
            .with_re(100.0)
            .with_beta(100.0)
            .with_rc(1_000.0)
    }

    #[test]
    fn test_emitter_bias_scenario() {
        let OperatingPoint::EmitterBias(p) = compute(Topology::EmitterBias, &bjt_params()) else {
            panic!("wrong variant");
        };
        // Ib = 4.3 / 110k
        assert_relative_eq!(p.ib, 4.3 / 110_000.0, max_relative = 1e-12);
        assert_relative_eq!(p.ib, 3.909e-5, max_relative = 1e-3);
        assert_relative_eq!(p.ic, 3.909e-3, max_relative = 1e-3);
        assert_eq!(p.ie, p.ic);
        assert_abs_diff_eq!(p.vce, 0.7, epsilon = 1e-3);
        assert_relative_eq!(p.ic_max, 0.005);
        assert_relative_eq!(p.v_rb, p.ib * 100_000.0);
        assert_relative_eq!(p.v_rc, p.ic * 1_000.0);
        assert_relative_eq!(p.v_re, p.ie * 100.0);
    }

    #[test]
    fn test_fixed_bias_scenario() {
        let OperatingPoint::FixedBias(p) = compute(Topology::FixedBias, &bjt_params()) else {
            panic!("wrong variant");
        };
        assert_relative_eq!(p.ib, 4.3e-5, max_relative = 1e-12);
        assert_relative_eq!(p.ic, 4.3e-3, max_relative = 1e-12);
        assert_relative_eq!(p.ie, 4.343e-3, max_relative = 1e-12);
        assert_abs_diff_eq!(p.vce, 0.7, epsilon = 1e-9);
        assert_relative_eq!(p.ic_max, 0.005);
        assert_abs_diff_eq!(p.v_rb, 4.3, epsilon = 1e-9);
        assert_abs_diff_eq!(p.v_rc, 4.3, epsilon = 1e-9);
    }

    #[test]
    fn test_mosfet_scenario() {
        let params = CircuitParameters::new()
            .with_vcc(5.0)
            .with_rb1(100_000.0)
            .with_rc(1_000.0);
        let OperatingPoint::MosfetCommonSource(p) = compute(Topology::MosfetCommonSource, &params)
        else {
            panic!("wrong variant");
        };
        assert_relative_eq!(p.id, 3e-5, max_relative = 1e-12);
        assert_abs_diff_eq!(p.vgs, 4.97, epsilon = 1e-9);
        assert_abs_diff_eq!(p.vds, 4.97, epsilon = 1e-9);
        assert_relative_eq!(p.id_max, 0.005);
        assert_abs_diff_eq!(p.v_rd, 0.03, epsilon = 1e-9);
    }

    #[test]
    fn test_mosfet_ignores_beta_and_emitter() {
        let a = mosfet(&CircuitParameters::default());
        let b = mosfet(&CircuitParameters::default().with_beta(250.0).with_re(999.0).with_rb2(1.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mosfet_drain_current_divided_by_gate_resistor() {
        let base = CircuitParameters::default().with_vcc(6.0);
        let a = mosfet(&base.with_rb1(10_000.0));
        let b = mosfet(&base.with_rb1(20_000.0));
        assert_relative_eq!(a.id, 4.0 / 10_000.0, max_relative = 1e-12);
        assert_relative_eq!(a.id, 2.0 * b.id, max_relative = 1e-12);
        assert_eq!(a.vgs, a.vds);
    }

    #[test]
    fn test_voltage_divider_equations() {
        let params = CircuitParameters::new()
            .with_vcc(12.0)
            .with_rb1(47_000.0)
            .with_rb2(10_000.0)
            .with_rc(2_200.0)
            .with_re(470.0)
            .with_beta(150.0);
        let OperatingPoint::VoltageDivider(p) = compute(Topology::VoltageDivider, &params) else {
            panic!("wrong variant");
        };

        let vb = 12.0 * 10_000.0 / 57_000.0;
        let rbb = 47_000.0 * 10_000.0 / 57_000.0;
        assert_relative_eq!(p.vb, vb, max_relative = 1e-12);
        assert_relative_eq!(p.rbb, rbb, max_relative = 1e-12);

        // Negated loop solution: Vb > 0.7 here so Ib comes out negative
        let ib = -(vb - 0.7) / (rbb + 151.0 * 470.0);
        assert_relative_eq!(p.ib, ib, max_relative = 1e-12);
        assert!(p.ib < 0.0);
        assert_relative_eq!(p.ic, 150.0 * ib, max_relative = 1e-12);
        assert_relative_eq!(p.ie, 151.0 * ib, max_relative = 1e-12);
        assert_relative_eq!(
            p.vce,
            -(12.0 - p.ic * 2_200.0 - p.ie * 470.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(p.ic_max, 12.0 / 2_670.0, max_relative = 1e-12);
        assert_relative_eq!(p.v_rb1, (12.0 - vb) * 47_000.0 / 57_000.0, max_relative = 1e-12);
        assert_relative_eq!(p.v_rb2, vb * 10_000.0 / 57_000.0, max_relative = 1e-12);
        assert_relative_eq!(p.v_rc, p.ic * 2_200.0, max_relative = 1e-12);
        assert_relative_eq!(p.v_re, p.ie * 470.0, max_relative = 1e-12);
    }

    #[test]
    fn test_voltage_divider_positive_below_vbe() {
        // Default divider puts Vb at ~0.45 V, below the junction drop
        let p = voltage_divider(&CircuitParameters::default());
        assert!(p.vb < BJT_VBE_DROP);
        assert!(p.ib > 0.0);
        assert!(p.ic > 0.0);
    }

    #[test]
    fn test_ic_max_independent_of_beta_and_re() {
        let base = bjt_params();
        for topology in [Topology::EmitterBias, Topology::FixedBias] {
            let reference = compute(topology, &base).saturation_current();
            for (beta, re) in [(50.0, 10.0), (300.0, 1_000.0), (175.0, 470.0)] {
                let params = base.with_beta(beta).with_re(re);
                assert_eq!(compute(topology, &params).saturation_current(), reference);
            }
            assert_relative_eq!(reference, base.vcc / base.rc);
        }
    }

    #[test]
    fn test_variant_matches_topology() {
        let params = CircuitParameters::default();
        for topology in Topology::ALL {
            assert_eq!(compute(topology, &params).topology(), topology);
        }
    }

    #[test]
    fn test_zero_resistance_propagates_non_finite() {
        let params = bjt_params().with_rc(0.0);
        let point = compute(Topology::FixedBias, &params);
        assert!(point.saturation_current().is_infinite());
        assert!(!point.is_finite());

        let params = CircuitParameters::default().with_rb1(0.0);
        let OperatingPoint::MosfetCommonSource(p) = compute(Topology::MosfetCommonSource, &params)
        else {
            panic!("wrong variant");
        };
        assert!(p.id.is_infinite());
        assert!(p.vds.is_infinite());

        let params = CircuitParameters::default().with_rb1(0.0).with_rb2(0.0);
        let p = voltage_divider(&params);
        assert!(p.vb.is_nan());
        assert!(p.ib.is_nan());
    }
}
