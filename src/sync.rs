//! The sync pipeline: parse, classify, serialize, publish

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::Result;
use crate::gist::GistClient;
use crate::review::{classify, parse_review_file, Classification, ReferenceDates};

/// Result of a successful publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub gist_id: String,
    pub today: usize,
    pub tomorrow: usize,
    pub others: usize,
}

/// Read and classify the configured review file.
pub fn build_classification(
    settings: &Settings,
    reference: ReferenceDates,
) -> Result<Classification> {
    let tasks = parse_review_file(&settings.review_file())?;
    for task in tasks.iter().filter(|t| t.due().is_none()) {
        debug!("Due date {} is not a calendar date: {}", task.due_date, task.line);
    }
    let classification = classify(tasks, reference);

    info!(
        "Review tasks for {}: {} today, {} tomorrow, {} other",
        classification.reference.today,
        classification.today.len(),
        classification.tomorrow.len(),
        classification.others.len()
    );

    Ok(classification)
}

/// Run the whole pipeline and publish the snapshot to the configured gist.
///
/// Nothing is sent unless parsing and classification both succeed.
pub async fn sync(settings: &Settings, reference: ReferenceDates) -> Result<SyncOutcome> {
    let classification = build_classification(settings, reference)?;
    let (today, tomorrow, others) = (
        classification.today.len(),
        classification.tomorrow.len(),
        classification.others.len(),
    );

    let content = classification.into_snapshot().to_json()?;

    let client = GistClient::new(&settings.api_base_url, &settings.token)?;
    let gist_id = client
        .upsert(settings.gist_id.as_deref(), &content)
        .await?;

    Ok(SyncOutcome {
        gist_id,
        today,
        tomorrow,
        others,
    })
}
