use crate::cli::RunArgs;
use crate::config::resolve_parameters;
use crate::export::CsvSink;
use crate::report;
use anyhow::Result;
use growth_core::{exact_population, ModelAnalysis, Regime, Simulation, Termination};
use std::io::Write;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamOutcome {
    pub samples: usize,
    pub displayed: usize,
    pub termination: Option<Termination>,
}

/// Analyze, then simulate, writing the report to `out`.
///
/// Parameters are resolved first so that invalid input produces no output at all.
pub fn execute(args: &RunArgs, out: &mut impl Write) -> Result<()> {
    let params = resolve_parameters(args)?;
    if params.regime() == Regime::Degenerate {
        warn!(
            p0 = params.p0(),
            k = params.k(),
            "initial population is at or above carrying capacity"
        );
    }
    info!(steps = params.steps(), "starting simulation");

    report::write_analysis(out, &ModelAnalysis::of(&params))?;
    report::write_parameters(out, &params)?;
    report::write_table_header(out, args.exact)?;

    let mut sink = if args.no_csv {
        None
    } else {
        match CsvSink::create(&args.csv) {
            Ok(sink) => Some(sink),
            Err(e) => {
                warn!("{e:#}; continuing without CSV output");
                None
            }
        }
    };

    let outcome = stream(
        Simulation::new(params),
        args.every,
        args.exact,
        sink.as_mut(),
        out,
    )?;
    info!(
        samples = outcome.samples,
        displayed = outcome.displayed,
        "simulation finished"
    );
    if let Some(termination) = &outcome.termination {
        report::write_termination(out, termination)?;
    }

    if let Some(sink) = sink {
        let rows = sink.rows();
        sink.finish()?;
        info!(rows, path = %args.csv.display(), "wrote simulation data");
        writeln!(out, "\nSimulation data saved to: {}", args.csv.display())?;
    }

    report::write_interpretation(out)?;
    Ok(())
}

/// Feed every sample to the CSV sink and every `every`th one to the table.
/// With `exact`, table rows carry the distance to the closed-form solution.
pub fn stream<W: Write, C: Write>(
    mut simulation: Simulation,
    every: u64,
    exact: bool,
    mut sink: Option<&mut CsvSink<C>>,
    out: &mut W,
) -> Result<StreamOutcome> {
    let every = every.max(1);
    let mut samples = 0usize;
    let mut displayed = 0usize;
    let params = *simulation.params();

    for (index, sample) in simulation.by_ref().enumerate() {
        if index as u64 % every == 0 {
            let reference = exact.then(|| exact_population(&params, sample.t));
            report::write_row(out, &sample, reference)?;
            displayed += 1;
        }
        if let Some(sink) = sink.as_deref_mut() {
            sink.record(&sample)?;
        }
        samples += 1;
    }

    Ok(StreamOutcome {
        samples,
        displayed,
        termination: simulation.termination(),
    })
}
