// =============================================================================
// AXES — Les douze démonstrations du catalogue
// =============================================================================
//
// Chaque axe est une unité INDÉPENDANTE : aucun axe n'utilise l'état d'un
// autre. Le seul point de composition est le catalogue (catalog.rs) qui les
// exécute dans l'ordre 1 → 12.
//
//   1  hybrid         → fonctionnel + objet sur une valeur immuable (Point)
//   2  inference      → types résolus sans annotation
//   3  nullsafety     → Option<&dyn Animal>, upcast, downcast faillible
//   4  mixins         → traits avec méthodes par défaut
//   5  computed       → propriété recalculée à chaque lecture
//   6  overload       → "surcharge" résolue à la compilation
//   7  inheritance    → comportement de base + un override
//   8  sealed         → enum fermé + évaluateur exhaustif
//   9  variance       → producteur covariant, consommateur contravariant
//   10 diamond        → deux défauts homonymes, résolution explicite
//   11 superdelegate  → délégation explicite vers la "base"
//   12 reflection     → descripteurs de types, génériques réifiés
//
// =============================================================================

pub mod hybrid;
pub mod inference;
pub mod nullsafety;
pub mod mixins;
pub mod computed;
pub mod overload;
pub mod inheritance;
pub mod sealed;
pub mod variance;
pub mod diamond;
pub mod superdelegate;
pub mod reflection;

use crate::error::CatalogResult;
use crate::sink::Sink;

/// Une unité de démonstration du catalogue.
///
/// Le catalogue écrit lui-même l'en-tête de l'axe ; `run` n'écrit que le
/// corps, ligne par ligne, dans le sink.
pub trait Axis {
    /// Position dans le catalogue (1..=12).
    fn number(&self) -> u8;

    /// Libellé affiché dans l'en-tête.
    fn title(&self) -> &'static str;

    /// Exécute la démonstration jusqu'au bout.
    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()>;
}
