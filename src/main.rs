//! Writes the Ledgerly API Postman collection to
//! `postman/ledgerly-api.postman_collection.json` under the working directory.

use std::io;
use std::path::Path;

use ledgerly_postman::{build_collection, check, write_default};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; a clean run prints nothing
    let (non_blocking, _guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let collection = build_collection();
    for violation in check(&collection) {
        tracing::warn!(%violation, "Collection invariant violated");
    }

    let path = write_default(Path::new("."), &collection)?;
    tracing::info!(path = %path.display(), "Collection generated");

    Ok(())
}
