//! Output formatting for CLI

use crate::export::TrainReport;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, String)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

/// Render a train as one `from -> to` line per edge, the first one leaving
/// the engine.
pub fn format_edges(report: &TrainReport) -> Vec<String> {
    report
        .edges
        .iter()
        .enumerate()
        .map(|(i, edge)| match i {
            0 => format!("engine {} -> {}", edge.from, edge.to),
            _ => format!("{} -> {}", edge.from, edge.to),
        })
        .collect()
}

/// Print the full summary of one search.
pub fn print_report(report: &TrainReport) {
    print_section(&format!(
        "Best train from seed {} ({})",
        report.seed, report.objective
    ));

    if report.edges.is_empty() {
        println!("  (no domino matches the seed)");
    }
    for line in format_edges(report) {
        println!("  {line}");
    }

    print_subsection("Train");
    print_stats_table(&[
        ("Dominoes placed", report.train_size.to_string()),
        ("Pips placed", report.train_value.to_string()),
        ("Dominoes left", report.remaining_size.to_string()),
        ("Pips left", report.remaining_value.to_string()),
        ("Value", report.value.to_string()),
        ("Fitness", report.fitness.to_string()),
    ]);

    print_subsection("Search");
    print_stats_table(&[
        ("Completion", format!("{:?}", report.completion)),
        ("Expanded", format_number(report.stats.expanded)),
        ("Generated", format_number(report.stats.generated)),
        ("Peak frontier", format_number(report.stats.peak_frontier as u64)),
        ("Elapsed", format!("{:.2} ms", report.stats.elapsed_ms)),
    ]);
}
