//! Terminal presentation of batch and coverage results.

use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fleet_associate::AssociationStats;
use fleet_match::{
    DEFAULT_MINIMUM_CONFIDENCE, calculate_similarity, extract_names, generate_name_variations,
    normalize_name,
};
use fleet_model::BatchSummary;

use crate::types::AssociateOutcome;

pub fn print_associate_summary(outcome: &AssociateOutcome) {
    println!(
        "Events: {} rows read, {} loaded, {} skipped",
        outcome.ingest.rows_read,
        outcome.ingest.events_loaded,
        outcome.ingest.skipped.len()
    );
    for skipped in &outcome.ingest.skipped {
        println!("  row {}: {}", skipped.row, skipped.reason);
    }
    println!("{}", summary_table(&outcome.report.summary));
    if outcome.incidents_created > 0 {
        println!("Incidents created: {}", outcome.incidents_created);
    }
    if let Some(path) = &outcome.output_path {
        println!("Report: {}", path.display());
    }
    let failures: Vec<_> = outcome
        .report
        .results
        .iter()
        .filter_map(|result| result.error.as_ref().map(|error| (&result.event_id, error)))
        .collect();
    if !failures.is_empty() {
        eprintln!("Failures:");
        for (event_id, error) in failures {
            eprintln!("- {event_id}: {error}");
        }
    }
}

/// Aggregate counters for one batch run as a two-column table.
pub fn summary_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Outcome"), header_cell("Events")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total"), Cell::new(summary.total)]);
    table.add_row(vec![
        Cell::new("Matched").fg(Color::Green),
        count_cell(summary.matched, Color::Green),
    ]);
    table.add_row(vec![
        dim_cell("  high confidence (>= 0.9)"),
        count_cell(summary.high_confidence, Color::Green),
    ]);
    table.add_row(vec![
        dim_cell("  medium confidence (0.7 to 0.9)"),
        count_cell(summary.medium_confidence, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("  low confidence (< 0.7)"),
        count_cell(summary.low_confidence, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unmatched"),
        count_cell(summary.unmatched, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Failed"),
        count_cell(summary.failed, Color::Red),
    ]);
    table
}

/// Association coverage over an event export.
pub fn stats_table(stats: &AssociationStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Total events"), Cell::new(stats.total_events)]);
    table.add_row(vec![
        Cell::new("Associated"),
        count_cell(stats.associated, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Unassociated"),
        count_cell(stats.unassociated, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Association rate"),
        Cell::new(format!("{:.1}%", stats.association_rate * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Associated in last 24h"),
        Cell::new(stats.associated_last_24h),
    ]);
    table
}

/// Similarity breakdown for two names, one line per signal.
pub fn score_report(name_a: &str, name_b: &str, show_variations: bool) -> String {
    let score = calculate_similarity(name_a, name_b);
    let mut out = String::new();
    let _ = writeln!(out, "Normalized: {:?} vs {:?}", normalize_name(name_a), normalize_name(name_b));
    let _ = writeln!(out, "Similarity: {score:.3}");
    let verdict = if score >= DEFAULT_MINIMUM_CONFIDENCE {
        "match"
    } else {
        "no match"
    };
    let _ = writeln!(
        out,
        "At the default threshold ({DEFAULT_MINIMUM_CONFIDENCE:.2}): {verdict}"
    );
    if show_variations {
        for name in [name_a, name_b] {
            let parts = extract_names(name);
            let _ = writeln!(out, "Variations of {name:?}:");
            for variation in generate_name_variations(&parts.first, &parts.last) {
                let _ = writeln!(out, "  {variation}");
            }
        }
    }
    out
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
