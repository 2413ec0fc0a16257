// =============================================================================
// SUPERDELEGATE — Axe 11 : appel explicite à l'implémentation de base
// =============================================================================
//
// Pas d'héritage de struct en Rust : Manager CONTIENT son Employee de base.
//   - Manager::new(name, reports) construit la base via Employee::new(name),
//     en lui passant explicitement le champ requis.
//   - Manager::introduce() appelle d'abord self.base.introduce(), puis
//     ajoute sa propre ligne. Rien n'est implicite.
//
// =============================================================================

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

pub trait Introduce {
    fn introduce(&self, out: &mut dyn Sink) -> CatalogResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    name: String,
}

impl Employee {
    pub fn new(name: &str) -> Self {
        Employee { name: name.to_string() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Introduce for Employee {
    fn introduce(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        out.line(&format!("Je suis {}", self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    base: Employee,
    reports: usize,
}

impl Manager {
    pub fn new(name: &str, reports: usize) -> Self {
        Manager {
            base: Employee::new(name),
            reports,
        }
    }

    pub fn base(&self) -> &Employee {
        &self.base
    }

    pub fn reports(&self) -> usize {
        self.reports
    }
}

impl Introduce for Manager {
    fn introduce(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        self.base.introduce(out)?;
        out.line(&format!("et je manage {} personnes", self.reports))
    }
}

pub struct SuperDelegateAxis;

impl Axis for SuperDelegateAxis {
    fn number(&self) -> u8 {
        11
    }

    fn title(&self) -> &'static str {
        "Appels super explicites"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        Employee::new("Bob").introduce(out)?;
        Manager::new("Alice", 3).introduce(out)
    }
}
