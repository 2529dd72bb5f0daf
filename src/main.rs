// src/main.rs

use clap::Parser;
use std::error::Error;
use std::fs;
use std::io::Write;

use regerror_boxplot::cli::Args;
use regerror_boxplot::config::{AnalysisConfig, ErrorKind, RenderConfig};
use regerror_boxplot::data_analysis::site_aggregator::{aggregate, aggregate_collecting};
use regerror_boxplot::data_input::block_locator::FixedOffsetLocator;
use regerror_boxplot::data_output::csv_export::{write_results_csv, write_summary_csv};
use regerror_boxplot::plot_functions::plot_error_boxplot::plot_error_boxplot;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let analysis_config = AnalysisConfig::default();
    let locator = FixedOffsetLocator::default();
    let root_name = args.root_name();

    // --- Site Aggregation ---
    println!("--- Reading registration logs from '{}' ---", args.directory.display());
    let results = if args.keep_going {
        let (results, failures) = aggregate_collecting(&args.directory, &analysis_config, &locator)?;
        if !failures.is_empty() {
            println!("  {} log file(s) skipped:", failures.len());
            for failure in &failures {
                println!("    [{}] {}", failure.site, failure.error);
            }
        }
        results
    } else {
        aggregate(&args.directory, &analysis_config, &locator)?
    };
    println!(
        "Finished reading {} log file(s) across {} site(s).",
        results.total_files(),
        results.sites.len()
    );

    if args.csv || !args.no_plot {
        fs::create_dir_all(&args.output_dir)?;
    }

    // --- CSV Export ---
    if args.csv {
        println!("\n--- Writing CSV exports ---");
        let results_path = args.output_dir.join(format!("{root_name}_registration_errors.csv"));
        write_results_csv(&results_path, &results)?;
        println!("  Per-file results saved as '{}'.", results_path.display());

        for kind in [ErrorKind::Translation, ErrorKind::Rotation] {
            let summary_path = args
                .output_dir
                .join(format!("{root_name}_{}_summary.csv", kind.tag()));
            write_summary_csv(&summary_path, &results, kind)?;
            println!("  {} summary saved as '{}'.", kind.tag(), summary_path.display());
        }
    }

    if args.no_plot {
        return Ok(());
    }

    // --- Box Plots ---
    let mut kinds = vec![ErrorKind::Translation];
    if args.rotation {
        kinds.push(ErrorKind::Rotation);
    }
    for kind in kinds {
        println!("\n--- Generating {} error box plot ---", kind.tag());
        let render_config = RenderConfig::for_kind(kind);
        plot_error_boxplot(&results, kind, &render_config, &args.output_dir, &root_name)?;
    }

    Ok(())
}

// src/main.rs
