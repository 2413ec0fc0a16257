// =============================================================================
// NULLSAFETY — Axe 3 : absence explicite et sous-typage
// =============================================================================
//
// DEUX unités séparées :
//
//   describe_animal(Option<&dyn Animal>)
//     Le type du paramètre dit "un animal OU rien". Impossible d'appeler
//     une méthode d'Animal sans avoir d'abord déballé l'Option : le
//     compilateur refuse `animal.name()` sur un Option.
//
//   upcast_then_downcast()
//     Un Dog se range dans une Box<dyn Animal> (upcast implicite).
//     Le retour vers Dog n'est JAMAIS implicite : il passe par Any et
//     downcast_ref, qui renvoie une Option (peut échouer).
//
// =============================================================================

use std::any::Any;

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Message écrit quand aucun animal n'est fourni.
pub const ABSENT: &str = "animal absent";

/// Le type de base.
pub trait Animal: Any {
    fn name(&self) -> &str;
    fn sound(&self) -> &str;

    /// Porte d'entrée du downcast.
    fn as_any(&self) -> &dyn Any;
}

/// Le sous-type.
#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: &str) -> Self {
        Dog { name: name.to_string() }
    }

    /// Comportement propre à Dog, invisible à travers `dyn Animal`.
    pub fn fetch(&self) -> String {
        format!("{} rapporte la balle", self.name)
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> &str {
        "wouf"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Décrit un animal, ou signale son absence et s'arrête là.
///
/// Sans test de présence, le compilateur refuse :
///
/// ```compile_fail
/// use catalogue_axes::axes::nullsafety::Animal;
/// fn speak(animal: Option<&dyn Animal>) -> String {
///     animal.name().to_string()
/// }
/// ```
pub fn describe_animal(animal: Option<&dyn Animal>, out: &mut dyn Sink) -> CatalogResult<()> {
    let Some(animal) = animal else {
        return out.line(ABSENT);
    };
    out.line(&format!("{} fait « {} »", animal.name(), animal.sound()))
}

/// Downcast faillible : `Some` seulement si l'animal est vraiment un Dog.
///
/// ```compile_fail
/// use catalogue_axes::axes::nullsafety::{Animal, Dog};
/// let animal: Box<dyn Animal> = Box::new(Dog::new("Rex"));
/// let dog: Box<Dog> = animal;
/// ```
pub fn downcast_dog(animal: &dyn Animal) -> Option<&Dog> {
    animal.as_any().downcast_ref::<Dog>()
}

/// Range un Dog derrière `dyn Animal`, puis tente de le retrouver.
pub fn upcast_then_downcast(out: &mut dyn Sink) -> CatalogResult<()> {
    let animal: Box<dyn Animal> = Box::new(Dog::new("Rex"));
    out.line(&format!("upcast : Dog rangé comme dyn Animal ({})", animal.name()))?;

    match downcast_dog(&*animal) {
        Some(dog) => out.line(&format!("downcast vers Dog réussi : {}", dog.fetch())),
        None => out.line("downcast vers Dog refusé"),
    }
}

pub struct NullSafetyAxis;

impl Axis for NullSafetyAxis {
    fn number(&self) -> u8 {
        3
    }

    fn title(&self) -> &'static str {
        "Null-safety et sous-typage"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let rex = Dog::new("Rex");
        describe_animal(Some(&rex), out)?;
        describe_animal(None, out)?;
        upcast_then_downcast(out)
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    struct Cat;

    impl Animal for Cat {
        fn name(&self) -> &str {
            "Felix"
        }

        fn sound(&self) -> &str {
            "miaou"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_absent_prints_once_and_stops() {
        let mut sink = MemorySink::new();
        describe_animal(None, &mut sink).unwrap();
        assert_eq!(sink.lines(), &[ABSENT.to_string()]);
    }

    #[test]
    fn test_present_animal() {
        let mut sink = MemorySink::new();
        let rex = Dog::new("Rex");
        describe_animal(Some(&rex), &mut sink).unwrap();
        assert_eq!(sink.lines(), &["Rex fait « wouf »".to_string()]);
        assert_eq!(sink.count(ABSENT), 0);
    }

    #[test]
    fn test_downcast_is_fallible() {
        let dog: Box<dyn Animal> = Box::new(Dog::new("Rex"));
        let cat: Box<dyn Animal> = Box::new(Cat);
        assert_eq!(downcast_dog(&*dog), Some(&Dog::new("Rex")));
        assert!(downcast_dog(&*cat).is_none());
    }

    #[test]
    fn test_upcast_then_downcast_output() {
        let mut sink = MemorySink::new();
        upcast_then_downcast(&mut sink).unwrap();
        assert!(sink.contains("downcast vers Dog réussi : Rex rapporte la balle"));
    }
}
