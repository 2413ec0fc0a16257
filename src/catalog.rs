// =============================================================================
// CATALOG — Le runner : exécute les axes dans l'ordre 1 → 12
// =============================================================================
//
// Le catalogue est le SEUL point de composition. Pour chaque axe :
//   1. écrire l'en-tête  "═══ AXE n : titre ═══"
//   2. exécuter l'axe jusqu'au bout (aucun axe ne partage d'état)
//   3. écrire une ligne vide
//
// Un seul fil d'exécution, synchrone. Les logs (tracing) partent sur
// stderr ; la sortie du catalogue, elle, ne passe que par le Sink.
//
// =============================================================================

use tracing::{debug, info, info_span};

use crate::axes::computed::ComputedAxis;
use crate::axes::diamond::DiamondAxis;
use crate::axes::hybrid::HybridAxis;
use crate::axes::inference::InferenceAxis;
use crate::axes::inheritance::InheritanceAxis;
use crate::axes::mixins::MixinsAxis;
use crate::axes::nullsafety::NullSafetyAxis;
use crate::axes::overload::OverloadAxis;
use crate::axes::reflection::ReflectionAxis;
use crate::axes::sealed::SealedAxis;
use crate::axes::superdelegate::SuperDelegateAxis;
use crate::axes::variance::VarianceAxis;
use crate::axes::Axis;
use crate::error::{CatalogError, CatalogResult};
use crate::sink::Sink;

/// En-tête d'un axe, tel qu'écrit dans le sink.
pub fn header(axis: &dyn Axis) -> String {
    format!("═══ AXE {} : {} ═══", axis.number(), axis.title())
}

/// Registre ordonné des axes.
pub struct Catalog {
    axes: Vec<Box<dyn Axis>>,
}

impl Catalog {
    /// Les douze axes, dans l'ordre.
    pub fn standard() -> Self {
        Catalog {
            axes: vec![
                Box::new(HybridAxis),
                Box::new(InferenceAxis),
                Box::new(NullSafetyAxis),
                Box::new(MixinsAxis),
                Box::new(ComputedAxis),
                Box::new(OverloadAxis),
                Box::new(InheritanceAxis),
                Box::new(SealedAxis),
                Box::new(VarianceAxis),
                Box::new(DiamondAxis),
                Box::new(SuperDelegateAxis),
                Box::new(ReflectionAxis),
            ],
        }
    }

    pub fn axes(&self) -> &[Box<dyn Axis>] {
        &self.axes
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Cherche un axe par son numéro.
    pub fn get(&self, number: u8) -> Option<&dyn Axis> {
        self.axes
            .iter()
            .find(|axis| axis.number() == number)
            .map(|axis| axis.as_ref())
    }

    /// Exécute tout le catalogue. Retourne le nombre d'axes exécutés.
    pub fn run_all(&self, out: &mut dyn Sink) -> CatalogResult<usize> {
        info!(axes = self.len(), "exécution du catalogue");

        out.line("╔══════════════════════════════════════════════════╗")?;
        out.line("║      CATALOGUE — Douze axes de langage           ║")?;
        out.line("╚══════════════════════════════════════════════════╝")?;
        out.blank()?;

        for axis in &self.axes {
            run_axis(axis.as_ref(), out)?;
            out.blank()?;
        }

        out.line("═══════════════════════════════════════════════════")?;
        out.line(&format!("Catalogue complet : {} axes exécutés", self.len()))?;
        out.line("═══════════════════════════════════════════════════")?;
        Ok(self.len())
    }

    /// Exécute un seul axe (en-tête compris).
    pub fn run_one(&self, number: u8, out: &mut dyn Sink) -> CatalogResult<()> {
        let axis = self.get(number).ok_or(CatalogError::UnknownAxis(number))?;
        run_axis(axis, out)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn run_axis(axis: &dyn Axis, out: &mut dyn Sink) -> CatalogResult<()> {
    let span = info_span!("axe", n = axis.number(), title = axis.title());
    let _guard = span.enter();

    debug!("début");
    out.line(&header(axis))?;
    axis.run(out)?;
    debug!("fin");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn test_numbers_are_one_to_twelve_in_order() {
        let catalog = Catalog::standard();
        let numbers: Vec<u8> = catalog.axes().iter().map(|a| a.number()).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
        assert_eq!(catalog.len(), 12);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_get_by_number() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get(8).map(|a| a.title()), Some("Hiérarchies scellées"));
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(13).is_none());
    }

    #[test]
    fn test_run_one() {
        let catalog = Catalog::standard();
        let mut sink = MemorySink::new();
        catalog.run_one(10, &mut sink).unwrap();
        assert_eq!(sink.lines()[0], "═══ AXE 10 : Conflit en diamant ═══");
        assert_eq!(sink.lines().len(), 4);
    }

    #[test]
    fn test_run_one_unknown() {
        let catalog = Catalog::standard();
        let mut sink = MemorySink::new();
        let err = catalog.run_one(42, &mut sink).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAxis(42)));
        assert!(sink.lines().is_empty());
    }
}
