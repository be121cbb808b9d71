//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the benchmark CLI.

use terminal_size::{terminal_size, Width};

use super::bench::format_measurement;
use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult, REFERENCE_VARIANT};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority: reference (0), Rust (1), C (2)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == REFERENCE_VARIANT {
        (0, String::new())
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: reference first, then Rust variants, then C
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let variants_str = algo.available_variants().join(", ");
    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", variants_str);

    let content_width = [name_line.len(), cat_line.len(), desc_line.len(), var_line.len()]
        .iter()
        .cloned()
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("├{}┤", border);
    println!(
        "│ {:<width$} │",
        truncate(&var_line, content_width),
        width = content_width
    );
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Relative difference of `value` from `baseline`, absolute when the baseline is ~0
fn relative_error(value: f64, baseline: f64) -> f64 {
    let diff = (value - baseline).abs();
    if baseline.abs() > 1e-9 {
        diff / baseline.abs()
    } else {
        diff
    }
}

/// Print results table for a single size. Speedup and error are relative to
/// the first row.
pub fn print_results_table(results: &[BenchmarkResult], size: usize, runs: usize) {
    if results.is_empty() {
        return;
    }

    let term_width = get_term_width();
    // 12+12+12+9+9+10 = 64 chars + 6 spaces + 2 indent
    let fixed_width = 72;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_nanos_f64)
        .unwrap_or(1.0);
    let baseline_result = results.first().and_then(|r| r.result_sample);

    println!("  Size: {} ({} runs)", size, runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_nanos_f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };

        let cv = if avg_ns > 0.0 {
            result.std_dev.as_nanos() as f64 / avg_ns
        } else {
            0.0
        };

        let rel_error = match (result.result_sample, baseline_result) {
            (Some(res), Some(base)) => relative_error(res, base),
            _ => 0.0,
        };

        let display_name = if result.name.starts_with("c-") {
            match crate::utils::C_COMPILER_NAME {
                Some(c) => format!("{} ({})", result.name, c),
                None => result.name.clone(),
            }
        } else {
            result.name.clone()
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            rel_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Parallel Reduction Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!(
        "  rayon threads: {}, C variant: {}",
        rayon::current_num_threads(),
        if crate::utils::C_IMPL_AVAILABLE {
            crate::utils::c_variant_name()
        } else {
            "unavailable"
        }
    );
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: reduce-bench [OPTIONS] [ALGORITHM]");
    println!();
    println!("Options:");
    println!("  --list, -l       List all available algorithms");
    println!("  --help, -h       Show this help message");
    println!("  --sizes SIZES    Comma-separated vector sizes (default: 64,1024,16384,262144)");
    println!("  --runs N         Measured runs per variant (default: 30)");
    println!("  --warmup N       Warmup runs per variant (default: 10)");
    println!("  --seed N         Random seed for reproducible runs (default: time-based)");
    println!("  --threads N      Size of the rayon worker pool (default: logical cores)");
    println!("  --csv PATH       Export raw timings to CSV");
    println!("  --verbose, -v    Debug logging on stderr");
    println!();
    println!("Arguments:");
    println!("  ALGORITHM        Name of specific algorithm to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  reduce-bench                      # Run all algorithms");
    println!("  reduce-bench dot_product          # Run only dot_product");
    println!("  reduce-bench --threads 4 sum      # Sum on a 4-worker pool");
    println!("  reduce-bench --seed 12345         # Reproducible run");
    println!("  reduce-bench --csv data.csv       # Export raw timings to CSV");
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(name: &str) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            description: String::new(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            runs: 0,
            result_sample: None,
        }
    }

    #[test]
    fn test_sort_variants() {
        let mut results = vec![
            result("c-openmp"),
            result("rayon-chunked"),
            result("original"),
            result("rayon"),
        ];
        sort_variants(&mut results);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["original", "rayon", "rayon-chunked", "c-openmp"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("rayon-chunked", 8), "rayon...");
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(11.0, 10.0), 0.1);
        assert_eq!(relative_error(1e-3, 0.0), 1e-3);
    }
}
