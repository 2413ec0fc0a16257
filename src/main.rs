// =============================================================================
// CATALOGUE-AXES — Point d'entrée
// =============================================================================
//
// Aucun argument, aucun flag. Écrit les douze axes sur stdout, dans l'ordre,
// puis sort avec un statut de succès.
//
// Seul réglage : RUST_LOG (filtre tracing, "warn" par défaut). Les logs vont
// sur stderr et ne modifient jamais la sortie standard.
//
// =============================================================================

use std::process::ExitCode;

use catalogue_axes::{Catalog, CatalogResult, StdoutSink};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run() {
        Ok(count) => {
            info!(count, "catalogue terminé");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("catalogue interrompu : {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> CatalogResult<usize> {
    let catalog = Catalog::standard();
    let mut out = StdoutSink::new();
    let count = catalog.run_all(&mut out)?;
    out.flush()?;
    Ok(count)
}
