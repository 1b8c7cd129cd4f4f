//! biascalc - transistor bias point calculator
//!
//! Prints the DC operating point and load line for one bias topology.
//!
//! # Usage
//!
//! ```bash
//! biascalc --topology emitter --vcc 5 --rb1 100k --rc 1k --re 100 --beta 100
//! biascalc --topology mosfet --format csv > load_line.csv
//! RUST_LOG=debug biascalc --format json
//! ```

use std::io::{self, Write};

use bias_core::{
    circuit::{check_ranges, validate_parameters, CircuitParameters, ParameterKind, Topology},
    error::{BiasError, Result},
    recompute, report, units,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Parameters and operating point listing
    Text,
    /// Full analysis as JSON
    Json,
    /// Load line samples as CSV
    Csv,
}

/// Transistor DC bias calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bias topology: emitter, fixed, divider or mosfet
    #[arg(short, long, default_value = "emitter", value_parser = parse_topology)]
    topology: Topology,

    /// Supply voltage Vcc / Vdd in volts
    #[arg(long, value_parser = parse_value)]
    vcc: Option<f64>,

    /// Base resistor (Rb, Rb1, or Rg for the MOSFET) in ohms
    #[arg(long, value_parser = parse_value)]
    rb1: Option<f64>,

    /// Lower divider resistor Rb2 in ohms
    #[arg(long, value_parser = parse_value)]
    rb2: Option<f64>,

    /// Collector / drain resistor in ohms
    #[arg(long, value_parser = parse_value)]
    rc: Option<f64>,

    /// Emitter resistor in ohms
    #[arg(long, value_parser = parse_value)]
    re: Option<f64>,

    /// Transistor current gain
    #[arg(long, value_parser = parse_value)]
    beta: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Skip parameter validation and print whatever the equations produce
    #[arg(long, conflicts_with = "strict")]
    no_validate: bool,

    /// Also reject values outside the UI control ranges
    #[arg(long)]
    strict: bool,

    /// Print the controls for the selected topology and exit
    #[arg(long)]
    list_controls: bool,
}

fn parse_topology(s: &str) -> std::result::Result<Topology, String> {
    s.parse().map_err(|e: BiasError| e.to_string())
}

fn parse_value(s: &str) -> std::result::Result<f64, String> {
    units::parse_value(s).map_err(|e| e.to_string())
}

impl Args {
    /// Values given on the command line, in `ParameterKind::ALL` order.
    fn overrides(&self) -> [Option<f64>; 6] {
        [self.vcc, self.rb1, self.rb2, self.rc, self.re, self.beta]
    }

    fn parameters(&self) -> CircuitParameters {
        let mut params = CircuitParameters::default();
        for (kind, value) in ParameterKind::ALL.into_iter().zip(self.overrides()) {
            let Some(value) = value else { continue };
            if !self.topology.uses(kind) {
                log::warn!(
                    "--{} has no effect on the {} topology",
                    kind.name(),
                    self.topology.key()
                );
            }
            params.set(kind, value);
        }
        params
    }
}

fn render_controls(topology: Topology) -> String {
    let mut out = format!("{} ({})\n", topology.label(), topology.key());
    for c in topology.controls() {
        out.push_str(&format!(
            "  --{:<5} {:<10} {} .. {} step {}\n",
            c.kind.name(),
            c.label,
            c.min,
            c.max,
            c.step
        ));
    }
    out
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let topology = args.topology;

    let output = if args.list_controls {
        render_controls(topology)
    } else {
        let params = args.parameters();
        if !args.no_validate {
            validate_parameters(topology, &params)?;
        }
        if args.strict {
            check_ranges(topology, &params)?;
        }

        let analysis = recompute(&params, topology);
        match args.format {
            Format::Text => report::format_text(&analysis),
            Format::Json => report::to_json(&analysis)? + "\n",
            Format::Csv => report::format_load_line_csv(topology, &analysis.load_line),
        }
    };

    io::stdout()
        .write_all(output.as_bytes())
        .map_err(|e| BiasError::OutputError {
            message: e.to_string(),
        })?;

    Ok(())
}
