//! Result types shared between the subcommands and the summary printers.

use std::path::PathBuf;

use fleet_associate::BatchReport;
use fleet_ingest::IngestReport;

/// Everything `associate` produced, ready for presentation.
pub struct AssociateOutcome {
    /// Per-file counters from the event CSV.
    pub ingest: IngestReport,
    /// Per-event results plus aggregate counters.
    pub report: BatchReport,
    /// Incidents written during the run.
    pub incidents_created: usize,
    /// Where the JSON report was written, if requested.
    pub output_path: Option<PathBuf>,
}

impl AssociateOutcome {
    /// True when any event failed outright (distinct from unmatched).
    pub fn has_failures(&self) -> bool {
        self.report.summary.failed > 0
    }
}
