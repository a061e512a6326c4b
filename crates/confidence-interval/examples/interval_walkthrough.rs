//! Walks through the three input paths: summary statistics, raw values,
//! and sample-size planning. Run with `RUST_LOG=debug` to see engine events.

use confidence_core::DescriptiveStats;
use confidence_interval::{
    ConfidenceLevel, IntervalEngine, SampleSummary, TwoPopulationSummary,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = IntervalEngine::new();

    println!("=== Summary statistics ===");
    let summary = SampleSummary::new(780.0, 40.0, 30);
    for level in ConfidenceLevel::ALL {
        match engine.compute_interval(&summary, level) {
            Ok(ci) => println!("{ci}"),
            Err(e) => println!("{level}: {e}"),
        }
    }

    println!("\n=== Raw values ===");
    match DescriptiveStats::from_text("12.5, 14.3, 11.9, 13.2, 12.8, 13.9") {
        Ok(stats) => {
            println!(
                "n = {}, mean = {:.4}, s = {:.4}, range = [{}, {}]",
                stats.sample_size, stats.mean, stats.std_dev, stats.min, stats.max
            );
            match engine.compute_interval(&SampleSummary::from(stats), 90.0) {
                Ok(ci) => println!("{ci}"),
                Err(e) => println!("error: {e}"),
            }
        }
        Err(e) => println!("error: {e}"),
    }

    println!("\n=== Two populations ===");
    let comparison = TwoPopulationSummary::new(
        SampleSummary::new(50.2838, 9.8309, 30),
        SampleSummary::new(48.5, 10.0, 25),
        ConfidenceLevel::NinetyFive,
    );
    match engine.compute_two_population_interval(&comparison) {
        Ok(diff) => {
            println!("{diff}");
            if diff.contains_zero() {
                println!("No significant difference at {}", diff.confidence_level);
            }
        }
        Err(e) => println!("error: {e}"),
    }

    println!("\n=== Sample size ===");
    for margin in [10.0, 5.0, 1.0] {
        match engine.determine_sample_size(margin, 40.0, 95.0) {
            Ok(plan) => println!(
                "margin {margin}: n = {} (realized margin {:.3})",
                plan.sample_size,
                plan.realized_margin()
            ),
            Err(e) => println!("margin {margin}: {e}"),
        }
    }

    println!("\n=== Rejected input ===");
    if let Err(e) = engine.compute_interval(&summary, 80.0) {
        println!("{e}");
    }
}
