//! Presentation tests for the summary module.

use fleet_associate::AssociationStats;
use fleet_cli::summary::{score_report, stats_table, summary_table};
use fleet_model::BatchSummary;

#[test]
fn identical_names_score_as_a_full_match() {
    insta::assert_snapshot!(score_report("John Smith", "john smith", false), @r###"
    Normalized: "John Smith" vs "John Smith"
    Similarity: 1.000
    At the default threshold (0.70): match
    "###);
}

#[test]
fn unrelated_names_report_no_match() {
    let report = score_report("John Smith", "Jane Doe", false);
    assert!(report.contains("no match"), "unexpected report: {report}");
}

#[test]
fn variations_listing_includes_nickname_forms() {
    let report = score_report("Mike Jones", "Michael Jones", true);
    assert!(report.contains("michael jones"), "unexpected report: {report}");
    assert!(report.contains("mike jones"), "unexpected report: {report}");
}

#[test]
fn summary_table_carries_every_counter() {
    let summary = BatchSummary {
        total: 5,
        matched: 3,
        failed: 1,
        unmatched: 1,
        high_confidence: 2,
        medium_confidence: 1,
        low_confidence: 0,
    };
    let rendered = summary_table(&summary).to_string();
    for label in ["Total", "Matched", "Unmatched", "Failed", "high confidence"] {
        assert!(rendered.contains(label), "missing {label} in:\n{rendered}");
    }
}

#[test]
fn batch_summary_serializes_for_the_json_report() {
    let summary = BatchSummary {
        total: 2,
        matched: 1,
        failed: 0,
        unmatched: 1,
        high_confidence: 1,
        medium_confidence: 0,
        low_confidence: 0,
    };
    insta::assert_json_snapshot!(summary, @r###"
    {
      "total": 2,
      "matched": 1,
      "failed": 0,
      "unmatched": 1,
      "high_confidence": 1,
      "medium_confidence": 0,
      "low_confidence": 0
    }
    "###);
}

#[test]
fn stats_table_formats_the_rate_as_a_percentage() {
    let stats = AssociationStats {
        total_events: 4,
        associated: 3,
        unassociated: 1,
        association_rate: 0.75,
        associated_last_24h: 2,
    };
    let rendered = stats_table(&stats).to_string();
    assert!(rendered.contains("75.0%"), "missing rate in:\n{rendered}");
}
