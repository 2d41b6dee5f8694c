//! Plain-text rendering of a projection report.

use nestegg_core::allocation::instrument_label;
use nestegg_core::orchestrator::{BENCHMARK_SYMBOL, ProjectionReport, ProjectionRequest};

use crate::format::{format_currency_short, format_percentage};

pub fn print_report(request: &ProjectionRequest, report: &ProjectionReport) {
    match request.age {
        Some(age) => println!(
            "Projection: {} risk, {}/month over {} years (age {age})",
            request.risk,
            format_currency_short(request.monthly_contribution),
            request.years
        ),
        None => println!(
            "Projection: {} risk, {}/month over {} years",
            request.risk,
            format_currency_short(request.monthly_contribution),
            request.years
        ),
    }
    println!();

    println!("Allocation:");
    for (symbol, weight) in report.weights.iter_sorted() {
        let label = instrument_label(symbol).unwrap_or(symbol);
        println!("  {symbol:<10} {label:<18} {:>8}", format_percentage(weight));
    }
    println!();

    println!(
        "Blended monthly return: {}",
        format_percentage(report.blended_monthly_rate)
    );
    if let Some(rate) = report.benchmark_monthly_rate {
        println!(
            "Benchmark monthly return ({BENCHMARK_SYMBOL}): {}",
            format_percentage(rate)
        );
    }
    println!();

    match &report.benchmark_series {
        Some(benchmark) => {
            println!("{:>5} {:>16} {:>16}", "Year", "Portfolio", "Benchmark");
            for snapshot in &report.user_series.snapshots {
                let benchmark_cell = benchmark
                    .value_at(snapshot.year)
                    .map_or_else(|| "-".to_string(), format_currency_short);
                println!(
                    "{:>5} {:>16} {:>16}",
                    snapshot.year,
                    format_currency_short(snapshot.value),
                    benchmark_cell
                );
            }
        }
        None => {
            println!("{:>5} {:>16}", "Year", "Portfolio");
            for snapshot in &report.user_series.snapshots {
                println!(
                    "{:>5} {:>16}",
                    snapshot.year,
                    format_currency_short(snapshot.value)
                );
            }
            println!();
            println!("Benchmark {BENCHMARK_SYMBOL}: no usable history, comparison omitted.");
        }
    }
    println!();

    println!(
        "Projected value after {} years: {}",
        request.years,
        format_currency_short(report.user_series.final_value())
    );
    if let Some(benchmark) = &report.benchmark_series {
        println!(
            "Benchmark ({BENCHMARK_SYMBOL}) after {} years: {}",
            benchmark.years(),
            format_currency_short(benchmark.final_value())
        );
    }
}
