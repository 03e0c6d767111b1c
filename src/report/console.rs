//! Console output of the report summaries

use crate::algorithm::comparison::GroupComparison;
use crate::algorithm::trends::CodeTrendTable;
use crate::config::AnalysisConfig;
use crate::report::AnalysisReport;

/// Distinctive categories listed per topic
const TOPIC_HIGHLIGHTS: usize = 3;

fn print_section(number: usize, title: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("ANALYSIS {number}: {title}");
    println!("{}", "=".repeat(60));
}

/// Print every analysis summary in run order
pub fn print_report(report: &AnalysisReport, config: &AnalysisConfig) {
    let characteristics = &report.characteristics;
    match characteristics.year_span() {
        Some((first, last)) => println!(
            "Dataset: {} studies from {first} to {last}",
            report.total_studies
        ),
        None => println!("Dataset: {} studies", report.total_studies),
    }

    println!("\nSTUDY DESIGNS:");
    for design in &characteristics.designs {
        println!("  {}: {} ({:.1}%)", design.value, design.count, design.percentage);
    }
    println!("\nGEOGRAPHIC DISTRIBUTION:");
    for region in &characteristics.regions {
        println!("  {}: {} ({:.1}%)", region.value, region.count, region.percentage);
    }
    println!("\nPUBLICATION YEARS:");
    for year in &characteristics.years {
        println!("  {}: {} studies", year.year, year.count);
    }

    print_section(1, "BROAD LIMITATION CATEGORIES");
    for category in &report.categories {
        println!(
            "  {:<30} {:>4} ({:.1}%)",
            category.label, category.count, category.percentage
        );
    }

    print_section(2, "SPECIFIC LIMITATION CODES");
    println!("Top {} specific limitations:", config.code_preview);
    for entry in report.codes.entries().iter().take(config.code_preview) {
        println!("  {:<35} {:>4} ({:.1}%)", entry.code, entry.count, entry.percentage);
    }

    print_section(3, "FACILITY vs COMMUNITY STUDIES");
    print_comparison(&report.setting);

    print_section(4, "REGIONAL COMPARISON");
    print_comparison(&report.region);

    print_section(5, "TRENDS OVER TIME");
    println!("  Year  Studies  Analysis&Gen%  Contextual%");
    for row in &report.trends {
        println!(
            "  {}  {:>7}  {:>13.1}  {:>11.1}",
            row.year,
            row.total_studies,
            row.analysis_generalizability_percentage,
            row.context_logistics_percentage
        );
    }

    print_section(6, "CONTEXTUAL LIMITATIONS TRENDS");
    print_code_trends(&report.contextual_trends);

    print_section(7, "TOPIC AREAS");
    println!("(Positive values = more common in this topic, Negative = less common)");
    for topic in &report.topics {
        println!("\n{} (N={}):", topic.topic, topic.n);
        let mut highlights = topic.distinctive().take(TOPIC_HIGHLIGHTS).peekable();
        if highlights.peek().is_none() {
            println!("  No strongly distinctive limitations");
        }
        for difference in highlights {
            println!("  • {}: {:+.1}%", difference.category, difference.difference);
        }
    }

    print_section(8, "FUNDING IMPACT");
    print_comparison(&report.funding);

    print_section(9, "URBAN-RURAL SETTINGS");
    print_comparison(&report.urban_rural);

    print_section(10, "MULTI-SITE vs SINGLE-SITE");
    print_comparison(&report.multi_site);

    print_section(11, "JOURNAL TYPES");
    print_comparison(&report.journal_type);

    print_section(12, "TOP LIMITATIONS TEMPORAL TRENDS");
    print_code_trends(&report.code_trends);

    print_section(13, "LIMITATION CO-OCCURRENCE");
    println!(
        "Top {} limitations for co-occurrence analysis: {:?}",
        report.cooccurrence.size(),
        report.cooccurrence.codes()
    );
    println!("\nTop Co-occurring Limitation Pairs:");
    for (rank, pair) in report
        .cooccurrence
        .ranked_pairs()
        .iter()
        .take(config.code_preview)
        .enumerate()
    {
        println!(
            "{}. {} + {}: {:.1}% of studies",
            rank + 1,
            pair.first,
            pair.second,
            pair.percentage
        );
    }
}

/// Print a group comparison table
pub fn print_comparison(comparison: &GroupComparison) {
    println!("{}", comparison.title);
    println!("Distribution:");
    for value in &comparison.distribution {
        println!("  {}: {}", value.value, value.count);
    }
    println!(
        "\n  {:<16} {:>5} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Group", "N", "Method%", "Context%", "Any%", "Gen%", "Logist%"
    );
    for group in &comparison.groups {
        println!(
            "  {:<16} {:>5} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
            group.group,
            group.n,
            group.methodological.percentage,
            group.contextual.percentage,
            group.any_limitation.percentage,
            group.generalizability.percentage,
            group.logistics.percentage
        );
    }
}

/// Print yearly code reporting followed by overall totals
pub fn print_code_trends(table: &CodeTrendTable) {
    for row in &table.rows {
        let cells: Vec<String> = row
            .codes
            .iter()
            .map(|c| format!("{} {:.1}%", c.code, c.share.percentage))
            .collect();
        println!("  {} (n={}): {}", row.year, row.total_studies, cells.join(", "));
    }
    println!("\nSummary:");
    for total in &table.totals {
        println!(
            "  {}: {} studies ({:.1}%)",
            total.code, total.share.count, total.share.percentage
        );
    }
}
