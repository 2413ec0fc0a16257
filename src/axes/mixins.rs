// =============================================================================
// MIXINS — Axe 4 : des capacités composables avec corps par défaut
// =============================================================================
//
// Deux traits indépendants, chacun avec une méthode PAR DÉFAUT :
//   Logger        → log()     : préfixe fixe + message
//   Identifiable  → show_id() : affiche l'identifiant stocké
//
// Identifiable exige id() : le type qui l'adopte doit fournir le champ
// dont dépend le comportement par défaut.
//
// Les deux traits touchent un état disjoint : l'ordre des `impl` ne change
// rien à la sortie.
//
// =============================================================================

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Préfixe ajouté par `Logger::log`.
pub const LOG_PREFIX: &str = "[LOG] ";

pub trait Logger {
    fn log(&self, message: &str, out: &mut dyn Sink) -> CatalogResult<()> {
        out.line(&format!("{}{}", LOG_PREFIX, message))
    }
}

pub trait Identifiable {
    fn id(&self) -> &str;

    fn show_id(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        out.line(&format!("ID : {}", self.id()))
    }
}

/// Adopte les deux mixins.
pub struct Service {
    id: String,
}

impl Service {
    pub fn new(id: &str) -> Self {
        Service { id: id.to_string() }
    }
}

impl Logger for Service {}

impl Identifiable for Service {
    fn id(&self) -> &str {
        &self.id
    }
}

/// N'adopte qu'Identifiable.
pub struct Probe {
    id: String,
}

impl Probe {
    pub fn new(id: &str) -> Self {
        Probe { id: id.to_string() }
    }
}

impl Identifiable for Probe {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct MixinsAxis;

impl Axis for MixinsAxis {
    fn number(&self) -> u8 {
        4
    }

    fn title(&self) -> &'static str {
        "Mixins d'interfaces"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let service = Service::new("svc-42");
        service.log("démarrage du service", out)?;
        service.show_id(out)?;

        let probe = Probe::new("probe-7");
        probe.show_id(out)
    }
}
