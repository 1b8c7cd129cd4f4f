//! Component values feeding the bias equations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one field of [`CircuitParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    /// Supply voltage (Vcc / Vdd)
    Vcc,
    /// Base resistor, upper divider resistor, or gate resistor
    Rb1,
    /// Lower divider resistor
    Rb2,
    /// Collector / drain resistor
    Rc,
    /// Emitter resistor
    Re,
    /// Current gain
    Beta,
}

impl ParameterKind {
    /// All parameters in declaration order.
    pub const ALL: [ParameterKind; 6] = [
        ParameterKind::Vcc,
        ParameterKind::Rb1,
        ParameterKind::Rb2,
        ParameterKind::Rc,
        ParameterKind::Re,
        ParameterKind::Beta,
    ];

    /// Storage name of the parameter.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKind::Vcc => "vcc",
            ParameterKind::Rb1 => "rb1",
            ParameterKind::Rb2 => "rb2",
            ParameterKind::Rc => "rc",
            ParameterKind::Re => "re",
            ParameterKind::Beta => "beta",
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Supply voltage, resistances (ohms) and current gain.
///
/// Which fields matter depends on the topology: `rb2` is only read by the
/// voltage divider, `re` by emitter bias and the divider, and `beta` by the
/// three BJT topologies. For the MOSFET, `rb1` holds the gate resistor and
/// `rc` the drain resistor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParameters {
    /// Supply voltage in volts
    pub vcc: f64,
    /// Base / gate resistor in ohms
    pub rb1: f64,
    /// Lower divider resistor in ohms
    pub rb2: f64,
    /// Collector / drain resistor in ohms
    pub rc: f64,
    /// Emitter resistor in ohms
    pub re: f64,
    /// Current gain
    pub beta: f64,
}

impl Default for CircuitParameters {
    fn default() -> Self {
        Self {
            vcc: 5.0,
            rb1: 100_000.0,
            rb2: 10_000.0,
            rc: 1_000.0,
            re: 100.0,
            beta: 100.0,
        }
    }
}

impl CircuitParameters {
    /// Create parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the supply voltage.
    pub fn with_vcc(mut self, vcc: f64) -> Self {
        self.vcc = vcc;
        self
    }

    /// Set the base (or gate) resistor.
    pub fn with_rb1(mut self, rb1: f64) -> Self {
        self.rb1 = rb1;
        self
    }

    /// Set the lower divider resistor.
    pub fn with_rb2(mut self, rb2: f64) -> Self {
        self.rb2 = rb2;
        self
    }

    /// Set the collector (or drain) resistor.
    pub fn with_rc(mut self, rc: f64) -> Self {
        self.rc = rc;
        self
    }

    /// Set the emitter resistor.
    pub fn with_re(mut self, re: f64) -> Self {
        self.re = re;
        self
    }

    /// Set the current gain.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Read a parameter by kind.
    pub fn get(&self, kind: ParameterKind) -> f64 {
        match kind {
            ParameterKind::Vcc => self.vcc,
            ParameterKind::Rb1 => self.rb1,
            ParameterKind::Rb2 => self.rb2,
            ParameterKind::Rc => self.rc,
            ParameterKind::Re => self.re,
            ParameterKind::Beta => self.beta,
        }
    }

    /// Write a parameter by kind. The value is stored as given.
    pub fn set(&mut self, kind: ParameterKind, value: f64) {
        match kind {
            ParameterKind::Vcc => self.vcc = value,
            ParameterKind::Rb1 => self.rb1 = value,
            ParameterKind::Rb2 => self.rb2 = value,
            ParameterKind::Rc => self.rc = value,
            ParameterKind::Re => self.re = value,
            ParameterKind::Beta => self.beta = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = CircuitParameters::default();
        assert_eq!(p.vcc, 5.0);
        assert_eq!(p.rb1, 100_000.0);
        assert_eq!(p.rb2, 10_000.0);
        assert_eq!(p.rc, 1_000.0);
        assert_eq!(p.re, 100.0);
        assert_eq!(p.beta, 100.0);
    }

    #[test]
    fn test_get_set_roundtrip_per_kind() {
        let mut p = CircuitParameters::new();
        for (i, kind) in ParameterKind::ALL.into_iter().enumerate() {
            let value = 1.5 + i as f64;
            p.set(kind, value);
            assert_eq!(p.get(kind), value);
        }
        assert_eq!(p.vcc, 1.5);
        assert_eq!(p.beta, 6.5);
    }

    #[test]
    fn test_set_keeps_invalid_values() {
        let mut p = CircuitParameters::new();
        p.set(ParameterKind::Rc, -10.0);
        assert_eq!(p.rc, -10.0);
    }
}
