//! Benchmark CLI comparing reduction variants.
//!
//! Usage:
//!   reduce-bench                 # Run all algorithms
//!   reduce-bench --list          # List available algorithms
//!   reduce-bench dot_product     # Run specific algorithm
//!   reduce-bench --help          # Show help

use par_reduce::registry::{build_registry, AlgorithmRunner};
use par_reduce::utils::runner::{export_csv, run_algorithms};
use par_reduce::utils::cli::{parse_nonzero, parse_sizes};
use par_reduce::utils::{time_seed, tui, TimingConfig};
use std::env;
use std::process;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const DEFAULT_SIZES: [usize; 4] = [64, 1024, 16384, 262144];

/// Read the value following option `args[*i]`, exiting on a missing or bad value.
fn option_value<T: FromStr>(args: &[String], i: &mut usize) -> T {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i).map(|s| s.parse()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("Option {} expects a valid value.", flag);
            process::exit(1);
        }
    }
}

/// Unwrap a validated option value, exiting on error.
fn or_exit<T>(result: par_reduce::Result<T>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{}.", e);
        process::exit(1);
    })
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    let mut show_list = false;
    let mut show_help = false;
    let mut verbose = false;
    let mut sample_sizes: Vec<usize> = DEFAULT_SIZES.to_vec();
    let mut config = TimingConfig::default();
    let mut seed: Option<u64> = None;
    let mut threads: Option<usize> = None;
    let mut csv_path: Option<String> = None;
    let mut algorithm_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--verbose" | "-v" => verbose = true,
            "--sizes" => {
                let raw: String = option_value(&args, &mut i);
                sample_sizes = or_exit(parse_sizes(&raw));
            }
            "--runs" => {
                let raw: String = option_value(&args, &mut i);
                config.runs_per_variant = or_exit(parse_nonzero("--runs", &raw));
            }
            "--warmup" => config.warmup_iterations = option_value(&args, &mut i),
            "--seed" => seed = Some(option_value(&args, &mut i)),
            "--threads" => {
                let raw: String = option_value(&args, &mut i);
                threads = Some(or_exit(parse_nonzero("--threads", &raw)));
            }
            "--csv" => csv_path = Some(option_value(&args, &mut i)),
            arg if !arg.starts_with('-') => {
                algorithm_filter = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {}", e);
    }

    if show_help {
        tui::print_help();
        return;
    }

    if show_list {
        tui::print_available_algorithms(&registry);
        return;
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match algorithm_filter {
        Some(name) => match registry.find(&name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let pool = match threads {
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                eprintln!("Failed to build a {}-thread pool: {}", n, e);
                process::exit(1);
            }
        },
        None => None,
    };

    let run = || {
        tui::print_header();

        for algo in &algorithms {
            if let Err(e) = algo.verify() {
                eprintln!("Algorithm '{}' failed verification: {}", algo.name(), e);
                process::exit(1);
            }
        }

        let seed = seed.unwrap_or_else(time_seed);
        tracing::info!(seed, "starting benchmark");
        run_algorithms(&algorithms, &sample_sizes, &config, seed)
    };

    let grouped = match &pool {
        Some(pool) => pool.install(run),
        None => run(),
    };

    if let Some(path) = csv_path {
        match export_csv(&path, &grouped.raw_data) {
            Ok(()) => println!("  Raw data exported to: {}", path),
            Err(e) => eprintln!("  Warning: Failed to export CSV: {}", e),
        }
        println!();
    }

    for (algo_idx, algo) in algorithms.iter().enumerate() {
        tui::print_algo_info_box(*algo);

        for (size_idx, &size) in sample_sizes.iter().enumerate() {
            let mut results = grouped.results[algo_idx][size_idx].clone();
            tui::sort_variants(&mut results);
            tui::print_results_table(&results, size, config.runs_per_variant);
        }
    }

    println!("Note: Speedup is relative to the sequential 'original' variant.");
}
