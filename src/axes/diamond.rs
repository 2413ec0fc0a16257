// =============================================================================
// DIAMOND — Axe 10 : deux défauts homonymes, résolution explicite
// =============================================================================
//
// Greeter et Welcomer définissent chacun un hello() PAR DÉFAUT, avec un
// marqueur différent. Host adopte les deux.
//
// Rust ne choisit JAMAIS silencieusement : sans résolution, `host.hello(..)`
// est ambigu (E0034) et ne compile pas. Host fournit donc sa propre méthode
// inhérente hello(), prioritaire sur les méthodes de traits, qui appelle
// chaque parent par son nom qualifié, dans un ordre fixe :
//
//   Greeter::hello(self)  → "Bonjour de Greeter"
//   Welcomer::hello(self) → "Bonjour de Welcomer"
//   puis son propre marqueur → "Bonjour de Host"
//
// =============================================================================

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

pub const GREETER_MARKER: &str = "Bonjour de Greeter";
pub const WELCOMER_MARKER: &str = "Bonjour de Welcomer";
pub const HOST_MARKER: &str = "Bonjour de Host";

pub trait Greeter {
    fn hello(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        out.line(GREETER_MARKER)
    }
}

pub trait Welcomer {
    fn hello(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        out.line(WELCOMER_MARKER)
    }
}

/// Adopte les deux capacités et résout le conflit.
///
/// Sans la méthode inhérente, l'appel est rejeté :
///
/// ```compile_fail
/// use catalogue_axes::axes::diamond::{Greeter, Welcomer};
/// use catalogue_axes::sink::MemorySink;
///
/// struct Lobby;
/// impl Greeter for Lobby {}
/// impl Welcomer for Lobby {}
///
/// let mut out = MemorySink::new();
/// Lobby.hello(&mut out).unwrap();
/// ```
pub struct Host;

impl Greeter for Host {}

impl Welcomer for Host {}

impl Host {
    pub fn hello(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        Greeter::hello(self, out)?;
        Welcomer::hello(self, out)?;
        out.line(HOST_MARKER)
    }
}

pub struct DiamondAxis;

impl Axis for DiamondAxis {
    fn number(&self) -> u8 {
        10
    }

    fn title(&self) -> &'static str {
        "Conflit en diamant"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        Host.hello(out)
    }
}
