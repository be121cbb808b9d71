//! Benchmark orchestration and CSV export.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use super::bench::{shuffle_with_rng, to_nanos, SeededRng};
use super::timer::{measure_variants, TimingConfig};
use crate::registry::{AlgorithmRunner, BenchmarkResult};

/// Raw timing data for a single variant (used for CSV export)
#[derive(Clone, Debug, PartialEq)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results indexed as `results[algo_idx][size_idx]`, plus flat rows for CSV
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Measure every algorithm at every size.
///
/// (algorithm, size) pairs run in a shuffled order derived from `seed`, and
/// each pair gets its own input data seed.
pub fn run_algorithms(
    algorithms: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> GroupedResults {
    let mut rng = SeededRng::new(seed);

    let mut tasks: Vec<(usize, usize)> = (0..algorithms.len())
        .flat_map(|a| (0..sizes.len()).map(move |s| (a, s)))
        .collect();
    shuffle_with_rng(&mut tasks, &mut rng);

    let mut results: Vec<Vec<Vec<BenchmarkResult>>> =
        vec![vec![Vec::new(); sizes.len()]; algorithms.len()];
    let mut raw_data = Vec::new();

    for (algo_idx, size_idx) in tasks {
        let algo = algorithms[algo_idx];
        let size = sizes[size_idx];
        info!(algorithm = algo.name(), size, "measuring");

        let closures = algo.get_variant_closures(size, rng.next_u64());
        let measured = measure_variants(closures, config, rng.next_u64());

        for result in &measured {
            debug!(
                algorithm = algo.name(),
                variant = result.name.as_str(),
                size,
                avg_ns = result.avg_nanos_f64,
                "measured"
            );
            raw_data.push(RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: result.name.clone(),
                input_size: size,
                avg_nanos: to_nanos(result.avg_time),
                result_sample: result.result_sample,
            });
        }

        results[algo_idx][size_idx] = measured;
    }

    GroupedResults { results, raw_data }
}

/// Write CSV rows to any writer
pub fn write_csv<W: Write>(mut out: W, data: &[RawTimingData]) -> io::Result<()> {
    writeln!(out, "algorithm,variant,compiler,input_size,avg_time_ns,result")?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}

/// Export timing data to CSV file
pub fn export_csv(path: impl AsRef<Path>, data: &[RawTimingData]) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = io::BufWriter::new(file);
    write_csv(&mut out, data)?;
    // Drop would swallow a failed final flush
    out.flush()
}
