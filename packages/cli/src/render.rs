//! Text rendering for reports and extract statistics.

use std::path::Path;

use addr_lint_models::{ElementCounts, MapBounds, ProblemReport};

/// Prints a problem report grouped by category and key.
pub fn print_report(report: &ProblemReport) {
    if report.is_empty() {
        println!("No problems found.");
        return;
    }
    for (category, keys) in report.iter() {
        println!("{}:", category.heading());
        for (key, values) in keys {
            println!("  {key:?}:");
            for value in values {
                println!("    - {value}");
            }
        }
    }
    println!();
    println!("{} distinct problem values", report.total_values());
}

/// Prints extract statistics.
pub fn print_stats(
    file: &Path,
    counts: &ElementCounts,
    size_kb: f64,
    bounds: Option<&MapBounds>,
) {
    println!("Extract: {}", file.display());
    println!("  Size: {size_kb} KB");
    println!("  Nodes: {}", counts.nodes);
    println!("  Ways: {}", counts.ways);
    println!("  Relations: {}", counts.relations);
    println!("  Total elements: {}", counts.total());
    if let Some(bounds) = bounds {
        println!(
            "  Bounds: lat [{}, {}], lon [{}, {}]",
            bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
        );
    } else {
        println!("  Bounds: unavailable (no node coordinates)");
    }
}
