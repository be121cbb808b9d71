//! Build smoke test for the parallel reductions.
//!
//! Takes no arguments. Prints each check, aborts on the first one outside
//! tolerance, and prints a success line when both pass.

use par_reduce::driver::CHECKS;
use par_reduce::utils::TOLERANCE;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install logger: {}", e);
    }

    for run in CHECKS {
        let check = run();
        println!("{}", check);
        assert!(
            check.passed(),
            "{} outside tolerance {:e}: |{} - {}| = {}",
            check.label,
            TOLERANCE,
            check.computed,
            check.expected,
            (check.computed - check.expected).abs()
        );
    }

    println!("All tests passed!");
}
