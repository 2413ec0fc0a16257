// =============================================================================
// CATALOGUE-AXES — Douze axes de langage, illustrés en Rust
// =============================================================================
//
// Une suite de petites démonstrations INDÉPENDANTES, exécutées dans un ordre
// fixe par un unique runner qui écrit des lignes étiquetées.
//
// Architecture :
//   axes/     → les douze démonstrations (une par module)
//   catalog   → le runner : enregistre et exécute les axes dans l'ordre
//   sink      → où vont les lignes (stdout, mémoire)
//   error     → les erreurs du runtime (écriture, axe inconnu)
//
// Les "échecs" illustrés par les axes sont des rejets de COMPILATION ; ils
// sont vérifiés par les doctests `compile_fail`.
//
// =============================================================================

pub mod axes;
pub mod catalog;
pub mod error;
pub mod sink;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use sink::{MemorySink, Sink, StdoutSink};
