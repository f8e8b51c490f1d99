//! The dashboard-copy command: wires the CLI arguments to the client
//! crate's copy orchestrator and prints per-object progress.

use anyhow::Result;

use kibana_client::copy::{CopyOptions, copy_dashboard};
use kibana_client::{ClusterEndpoint, StoreClient};

/// Run the copy, printing `Writing <type> <id> <updated|created>` per
/// object when verbose and every failure to stderr.
///
/// Per-object failures do not turn into an `Err`; only the fatal classes
/// (unavailable root dashboard, malformed panel JSON, same-cluster guard)
/// propagate.
pub async fn run(
    source: ClusterEndpoint,
    dest: ClusterEndpoint,
    dashboard_id: &str,
    saved_search_index: Option<String>,
    verbose: bool,
) -> Result<()> {
    let source = StoreClient::new(source);
    let dest = StoreClient::new(dest);
    let options = CopyOptions { saved_search_index };

    let report = copy_dashboard(&source, &dest, dashboard_id, &options, |outcome| {
        match &outcome.result {
            Ok(written) => {
                if verbose {
                    println!("Writing {} {} {}", outcome.object_type, outcome.id, written);
                }
            }
            Err(e) => {
                eprintln!("Failed {} {}: {}", outcome.object_type, outcome.id, e);
            }
        }
    })
    .await?;

    tracing::debug!(
        written = report.written(),
        failed = report.failed(),
        "copy finished"
    );
    Ok(())
}
