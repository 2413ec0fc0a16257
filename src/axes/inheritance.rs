// =============================================================================
// INHERITANCE — Axe 7 : un comportement de base, un seul override
// =============================================================================
//
// Le trait Vehicle joue le rôle de classe de base OUVERTE : wheels() et
// describe() ont un corps par défaut.
//   Car       → garde tout par défaut
//   Motorbike → redéfinit wheels(), et SEULEMENT wheels()
//
// describe() appelle self.wheels() : à travers `dyn Vehicle`, c'est la
// version redéfinie qui est appelée (liaison tardive).
//
// =============================================================================

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

pub trait Vehicle {
    fn name(&self) -> &str;

    fn wheels(&self) -> u32 {
        4
    }

    fn describe(&self) -> String {
        format!("{} roule sur {} roues", self.name(), self.wheels())
    }
}

pub struct Car;

impl Vehicle for Car {
    fn name(&self) -> &str {
        "Car"
    }
}

pub struct Motorbike;

impl Vehicle for Motorbike {
    fn name(&self) -> &str {
        "Motorbike"
    }

    fn wheels(&self) -> u32 {
        2
    }
}

pub struct InheritanceAxis;

impl Axis for InheritanceAxis {
    fn number(&self) -> u8 {
        7
    }

    fn title(&self) -> &'static str {
        "Héritage"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let garage: Vec<Box<dyn Vehicle>> = vec![Box::new(Car), Box::new(Motorbike)];
        for vehicle in &garage {
            out.line(&vehicle.describe())?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_override() {
        assert_eq!(Car.wheels(), 4);
        assert_eq!(Motorbike.wheels(), 2);
    }

    #[test]
    fn test_default_describe_uses_override() {
        let bike: &dyn Vehicle = &Motorbike;
        assert_eq!(bike.describe(), "Motorbike roule sur 2 roues");
        assert_eq!(Car.describe(), "Car roule sur 4 roues");
    }
}
