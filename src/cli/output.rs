//! CLI output formatting.
//!
//! The report mirrors the layout of the reference experiment driver: one
//! line per replicate with the estimate's exact bit pattern, the aggregate
//! statistics block, the per-replicate reproducibility verdicts, and the
//! total sequential time.

use crate::engine::orchestrator::RunReport;
use crate::error::{PimcError, PimcResult};

/// Print version information.
pub fn print_version() {
    println!("pimc {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"pimc - replicated Monte Carlo estimation of pi

USAGE:
    pimc <COMMAND> [OPTIONS]

COMMANDS:
    generate [config.yaml]      Generate the persisted RNG statuses
        --seed <N>              Override the generation seed

    run [config.yaml]           Run the replicated estimation and report
        --json                  Emit the report as JSON

    help                        Show this help message
    version                     Show version information

Without a config file, the defaults apply: seed 0xAAAAAAAA, 10 replicates,
1,000,000 points per replicate, statuses under ./status.

EXAMPLES:
    pimc generate
    pimc generate experiment.yaml --seed 12345
    pimc run experiment.yaml
"
    );
}

/// Print the full run report.
pub fn print_report(report: &RunReport) {
    for outcome in &report.outcomes {
        println!(
            "replicate {:02}: {:.8} ({:#018x}) in ({:.2} sec)",
            outcome.id,
            outcome.estimate,
            outcome.estimate.to_bits(),
            outcome.elapsed_secs
        );
    }

    let stats = &report.statistics;
    println!("\nResults for {} replicates:", stats.replicates);
    println!("\t- Mean :                         \t{:.10}", stats.mean);
    println!("\t- Variance :                     \t{:.10}", stats.variance);
    println!(
        "\t- Unbiased variance :            \t{:.10}",
        stats.unbiased_variance
    );
    println!(
        "\t- Standard deviation :           \t{:.10}",
        stats.std_deviation
    );
    println!(
        "\t- Absolute error : 4π/3 - mean : \t{:.10}",
        stats.absolute_error
    );
    println!(
        "\t- Relative error : Err / 4π/3 :  \t{:.10} %",
        stats.relative_error_percent
    );
    println!(
        "\t- Standard error :               \t{:.10}",
        stats.standard_error
    );
    println!(
        "\t- Confidence interval :          \t[ {:.10} ; {:.10} ]",
        stats.confidence_low, stats.confidence_high
    );
    println!(
        "\t- 4π/3 location in interval :    \t{:.10} %",
        stats.location_percent
    );
    println!(
        "\t- Confidence radius :            \t{:.10}\n",
        stats.confidence_radius
    );

    for check in &report.checks {
        if check.confirmed {
            println!("replicate {:02}: reproducibility confirmed", check.id);
        } else {
            println!(
                "replicate {:02}: reproducibility issue {:.8} ({:#018x}) vs {:.8} ({:#018x})",
                check.id,
                check.sequential,
                check.sequential.to_bits(),
                check.parallel,
                check.parallel.to_bits()
            );
        }
    }

    println!("Sequential time: {:.2} sec", report.sequential_total_secs);
}

/// Print the full run report as JSON, for downstream tooling.
///
/// # Errors
///
/// Returns [`PimcError::Serialization`] if the report cannot be encoded.
pub fn print_report_json(report: &RunReport) -> PimcResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| PimcError::serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}
