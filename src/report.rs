//! Text, CSV and JSON renderings of an analysis.

use std::fmt::Write;

use crate::analysis::Analysis;
use crate::bias::{unit_of, OperatingPoint};
use crate::circuit::Topology;
use crate::error::Result;
use crate::load_line::LoadLinePoint;
use crate::units::format_si;

/// One line per quantity: name, raw value in scientific notation, and the
/// same value with an SI prefix.
pub fn format_listing(point: &OperatingPoint) -> String {
    let mut out = String::new();
    for (name, value) in point.fields() {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{:<6} = {:>13.6e}  {}",
            name,
            value,
            format_si(value, unit_of(name))
        );
    }
    out
}

/// Load line as CSV with the topology's axis labels as header.
pub fn format_load_line_csv(topology: Topology, points: &[LoadLinePoint]) -> String {
    let mut out = format!(
        "{},{}\n",
        topology.voltage_axis_label(),
        topology.current_axis_label()
    );
    for p in points {
        let _ = writeln!(out, "{},{}", p.voltage, p.current);
    }
    out
}

/// Human-readable report: header, parameters in control order, listing.
pub fn format_text(analysis: &Analysis) -> String {
    let mut out = format!("{}\n\n", analysis.label);
    for control in analysis.topology.controls() {
        let _ = writeln!(out, "{:<10} {}", control.label, control.value(&analysis.parameters));
    }
    let point = &analysis.operating_point;
    let _ = writeln!(
        out,
        "\nQ point: {} = {}, {} = {}\n",
        analysis.axes.x,
        format_si(point.output_voltage(), "V"),
        analysis.axes.y,
        format_si(point.output_current(), "A")
    );
    out.push_str(&format_listing(point));
    out
}

/// Pretty-printed JSON document of the whole analysis.
pub fn to_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}
