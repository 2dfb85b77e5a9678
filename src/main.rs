//! Rolodex bulk import - command line entry point
//!
//! Imports a `.tsv` contact file for a user and prints the aggregated
//! row errors as JSON.

use anyhow::{bail, Result};
use rolodex::{Config, ContactStore, Importer, MemoryContactStore, UserId};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (user, path) = match (args.next(), args.next()) {
        (Some(user), Some(path)) => (user, path),
        _ => bail!("Usage: rolodex <user-id> <contacts.tsv>"),
    };

    let user = UserId::new(user)?;
    info!(user = %user, file = %path, default_region = %config.default_region, "starting import");

    let store = Arc::new(MemoryContactStore::new()) as Arc<dyn ContactStore>;
    let importer = Importer::new(store.clone(), config.default_region);

    let report = importer.import_path(&user, &path).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.is_success() {
        info!(imported = report.imported, "import fully successful");
    } else {
        info!(
            imported = report.imported,
            failed = report.row_errors.len(),
            "import finished with row errors"
        );
    }

    Ok(())
}
