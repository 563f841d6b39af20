// src/batch.rs

use crate::document::{DocumentError, load_document};
use crate::processor::{ClaimReport, process_claim};
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::info;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Worker task failed: {0}")]
    Join(#[from] JoinError),
}

/// Result of loading and processing one claim document.
#[derive(Debug)]
pub struct BatchOutcome {
    pub path: PathBuf,
    pub result: Result<ClaimReport, DocumentError>,
}

/// Load and process every document on its own blocking task.
///
/// Outcomes come back in `paths` order whatever order the tasks finish in.
/// A document that fails to load does not affect the others.
pub async fn run_batch(
    paths: Vec<PathBuf>,
    min_text_chars: usize,
) -> Result<Vec<BatchOutcome>, BatchError> {
    if paths.is_empty() {
        return Err(DocumentError::NoInput.into());
    }
    info!(documents = paths.len(), "Processing claim documents");

    let mut tasks = JoinSet::new();
    for (idx, path) in paths.into_iter().enumerate() {
        tasks.spawn_blocking(move || {
            let span = tracing::info_span!("claim", path = %path.display());
            let _guard = span.enter();
            let result = load_document(&path, min_text_chars).map(|text| process_claim(&text));
            (idx, BatchOutcome { path, result })
        });
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        outcomes.push(joined?);
    }
    outcomes.sort_by_key(|(idx, _)| *idx);
    Ok(outcomes.into_iter().map(|(_, outcome)| outcome).collect())
}

/// Serialize one report, pretty-printed or on a single line.
pub fn render_report(report: &ClaimReport, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}
