//! Console reporting: parameters, analysis, the sampled table and closing notes.

use growth_core::{
    HalfCapacityTime, ModelAnalysis, ModelParameters, Scenario, SimulationSample, Stability,
    Termination,
};
use std::io::{self, Write};

pub fn write_parameters(out: &mut impl Write, params: &ModelParameters) -> io::Result<()> {
    writeln!(out, "\n=== POPULATION GROWTH SIMULATION ===")?;
    writeln!(out, "Model: Logistic Growth (dP/dt = r*P*(1-P/K))")?;
    writeln!(out, "Parameters:")?;
    writeln!(out, "- Growth rate (r): {:.4}", params.r())?;
    writeln!(out, "- Carrying capacity (K): {:.0}", params.k())?;
    writeln!(out, "- Initial population (P0): {:.0}", params.p0())?;
    writeln!(out, "- Maximum time (t_max): {:.2}", params.t_max())?;
    writeln!(out, "- Time step (dt): {:.4}", params.dt())
}

fn stability_label(stability: Stability) -> &'static str {
    match stability {
        Stability::Stable => "stable",
        Stability::Unstable => "unstable",
    }
}

pub fn write_analysis(out: &mut impl Write, analysis: &ModelAnalysis) -> io::Result<()> {
    let [extinction, capacity] = analysis.equilibria;
    writeln!(out, "\n=== MODEL ANALYSIS ===")?;
    writeln!(out, "Equilibrium points:")?;
    writeln!(
        out,
        "- P = {:.0} (extinction, {}, f'(P) = {:.4})",
        extinction.population,
        stability_label(extinction.stability),
        extinction.eigenvalue
    )?;
    writeln!(
        out,
        "- P = K = {:.0} (carrying capacity, {}, f'(P) = {:.4})",
        capacity.population,
        stability_label(capacity.stability),
        capacity.eigenvalue
    )?;

    match analysis.half_capacity_time {
        HalfCapacityTime::Reached(t) => writeln!(
            out,
            "\nTime to reach 50% of carrying capacity: {t:.2} time units"
        )?,
        HalfCapacityTime::AlreadyPast => writeln!(
            out,
            "\nTime to reach 50% of carrying capacity: already at or above K/2 at t = 0"
        )?,
        HalfCapacityTime::NotApplicable => writeln!(
            out,
            "\nTime to reach 50% of carrying capacity: not applicable (P0 >= K)"
        )?,
    }

    let peak = analysis.max_growth_rate;
    writeln!(
        out,
        "Maximum growth rate: {:.4} at P = {:.0}",
        peak.rate, peak.at_population
    )
}

/// `with_error` adds the `|P - P_exact|` column.
pub fn write_table_header(out: &mut impl Write, with_error: bool) -> io::Result<()> {
    writeln!(out)?;
    write!(
        out,
        "{:<10} {:<15} {:<15} {:<15}",
        "Time", "Population", "Growth Rate", "% of K"
    )?;
    if with_error {
        write!(out, "  |P - P_exact|")?;
    }
    writeln!(out)?;
    write!(
        out,
        "{:<10} {:<15} {:<15} {:<15}",
        "----", "----------", "-----------", "------"
    )?;
    if with_error {
        write!(out, "  -------------")?;
    }
    writeln!(out)
}

pub fn write_row(
    out: &mut impl Write,
    sample: &SimulationSample,
    exact: Option<f64>,
) -> io::Result<()> {
    write!(
        out,
        "{:<10.2} {:<15.2} {:<15.4} {:<15.2}%",
        sample.t, sample.population, sample.growth_rate, sample.percent_of_k
    )?;
    if let Some(exact) = exact {
        write!(out, " {:.3e}", (sample.population - exact).abs())?;
    }
    writeln!(out)
}

pub fn write_termination(out: &mut impl Write, termination: &Termination) -> io::Result<()> {
    match termination {
        Termination::CapacityReached { t, .. } => writeln!(
            out,
            "\n>>> Population reached 99.9% of carrying capacity at t = {t:.2}"
        ),
        Termination::StepsExhausted { t } => {
            writeln!(out, "\n>>> Simulation finished at t = {t:.2}")
        }
    }
}

pub fn write_interpretation(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n=== INTERPRETATION ===")?;
    writeln!(out, "- The S-shaped curve is characteristic of logistic growth")?;
    writeln!(out, "- Growth is fast at first and slows down near K")?;
    writeln!(out, "- The carrying capacity is the upper bound of the population")?;
    writeln!(out, "- The growth rate peaks at P = K/2")
}

pub fn write_scenarios(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== EXAMPLE SCENARIOS ===")?;
    for (index, scenario) in Scenario::ALL.iter().enumerate() {
        let params = scenario.params();
        writeln!(out, "{}. {} ({}):", index + 1, scenario.description(), scenario)?;
        writeln!(
            out,
            "   r = {}, K = {}, P0 = {}, t_max = {}, dt = {}",
            params.r(),
            params.k(),
            params.p0(),
            params.t_max(),
            params.dt()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn analysis_reports_closed_forms_for_bacteria() {
        let analysis = ModelAnalysis::of(&Scenario::Bacteria.params());
        let text = render(|out| write_analysis(out, &analysis));
        assert!(text.contains("- P = 0 (extinction, unstable"));
        assert!(text.contains("- P = K = 1000 (carrying capacity, stable"));
        assert!(text.contains("Time to reach 50% of carrying capacity: 9.19 time units"));
        assert!(text.contains("Maximum growth rate: 125.0000 at P = 500"));
    }

    #[test]
    fn analysis_suppresses_half_capacity_time_when_degenerate() {
        let params = ModelParameters::new(0.1, 500.0, 600.0, 10.0, 0.5).expect("params");
        let text = render(|out| write_analysis(out, &ModelAnalysis::of(&params)));
        assert!(text.contains("not applicable (P0 >= K)"));
        assert!(!text.contains("time units"));
    }

    #[test]
    fn rows_use_fixed_width_columns() {
        let sample = SimulationSample {
            t: 1.0,
            population: 16.28,
            growth_rate: 8.01,
            percent_of_k: 1.628,
        };
        let text = render(|out| write_row(out, &sample, None));
        assert_eq!(
            text,
            "1.00       16.28           8.0100          1.63           %\n"
        );
    }

    #[test]
    fn error_column_reports_distance_from_closed_form() {
        let sample = SimulationSample {
            t: 1.0,
            population: 16.28,
            growth_rate: 8.01,
            percent_of_k: 1.628,
        };
        let text = render(|out| write_row(out, &sample, Some(16.2825)));
        assert_eq!(
            text,
            "1.00       16.28           8.0100          1.63           % 2.500e-3\n"
        );

        let header = render(|out| write_table_header(out, true));
        let lines: Vec<_> = header.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("% of K           |P - P_exact|"));
        assert!(lines[2].ends_with("-------------"));

        let plain = render(|out| write_table_header(out, false));
        assert!(!plain.contains("P_exact"));
    }

    #[test]
    fn termination_line_reports_crossing_time() {
        let text = render(|out| {
            write_termination(
                out,
                &Termination::CapacityReached {
                    t: 23.04,
                    population: 999.01,
                },
            )
        });
        assert!(text.contains("99.9% of carrying capacity at t = 23.04"));
    }

    #[test]
    fn scenario_listing_names_every_preset() {
        let text = render(|out| write_scenarios(out));
        for scenario in Scenario::ALL {
            assert!(text.contains(scenario.name()));
        }
        assert!(text.contains("r = 0.03, K = 100000, P0 = 5000, t_max = 200, dt = 0.1"));
    }
}
