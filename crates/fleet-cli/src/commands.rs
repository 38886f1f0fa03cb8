//! Subcommand implementations.

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use fleet_associate::{
    AssociationEngine, AssociationStats, InMemoryFleetStore, SystemClock, association_stats,
};
use fleet_ingest::{read_events_csv, read_roster_csv};
use fleet_model::AssociationOptions;

use fleet_cli::types::AssociateOutcome;

use crate::cli::{AssociateArgs, StatsArgs};

pub fn run_associate(args: &AssociateArgs) -> Result<AssociateOutcome> {
    let roster = read_roster_csv(&args.roster).context("read roster")?;
    let ingest = read_events_csv(&args.events).context("read events")?;
    info!(
        drivers = roster.len(),
        events = ingest.events.len(),
        skipped = ingest.report.skipped.len(),
        "inputs loaded"
    );

    let store = Arc::new(InMemoryFleetStore::new());
    for record in roster {
        store.insert_driver(record);
    }
    for event in &ingest.events {
        store.insert_event(event.clone());
    }

    let engine = AssociationEngine::new(store.clone(), store.clone(), store.clone());
    let options = AssociationOptions {
        minimum_confidence: args.min_confidence,
        require_exact_match: args.exact,
        update_existing: args.update_existing,
        create_incidents: args.create_incidents,
        batch_size: args.batch_size,
    };
    let report = engine.associate_batch(&ingest.events, &options);

    if let Some(path) = &args.out {
        let json = serde_json::to_string_pretty(&report).context("serialize batch report")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(AssociateOutcome {
        ingest: ingest.report,
        report,
        incidents_created: store.incidents().len(),
        output_path: args.out.clone(),
    })
}

pub fn run_stats(args: &StatsArgs) -> Result<AssociationStats> {
    let ingest = read_events_csv(&args.events).context("read events")?;
    let store = InMemoryFleetStore::new();
    for event in ingest.events {
        store.insert_event(event);
    }
    Ok(association_stats(&store, &SystemClock)?)
}
