// =============================================================================
// INFERENCE — Axe 2 : des types résolus sans une seule annotation
// =============================================================================
//
// Les liaisons du run() n'ont AUCUNE annotation de type. Le compilateur les
// résout quand même, et on les relit par introspection :
//   let count = 42;              → i32 (entier par défaut)
//   let greeting = "bonjour";    → &str
//   let primes = vec![2, 3, 5];  → Vec<i32>
//   let double = |n| n * 2;      → fn(i32) -> i32, déduit de son usage
//
// =============================================================================

use std::any::type_name;

use super::reflection::simple_name;
use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Nom complet du type statique d'une valeur.
pub fn type_name_of<T: ?Sized>(_value: &T) -> &'static str {
    type_name::<T>()
}

/// Signature résolue d'une fonction à un paramètre.
///
/// Les types d'entrée et de sortie sont déduits de la closure elle-même.
pub fn signature_of<A, R, F: Fn(A) -> R>(_f: &F) -> String {
    format!(
        "fn({}) -> {}",
        simple_name(type_name::<A>()),
        simple_name(type_name::<R>())
    )
}

pub struct InferenceAxis;

impl Axis for InferenceAxis {
    fn number(&self) -> u8 {
        2
    }

    fn title(&self) -> &'static str {
        "Inférence de types"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let count = 42;
        let greeting = "bonjour";
        let primes = vec![2, 3, 5, 7];
        let double = |n| n * 2;
        let doubled = double(count);

        out.line(&format!("count = {} : {}", count, simple_name(type_name_of(&count))))?;
        out.line(&format!(
            "greeting = {:?} : {}",
            greeting,
            simple_name(type_name_of(&greeting))
        ))?;
        out.line(&format!("primes = {:?} : {}", primes, simple_name(type_name_of(&primes))))?;
        out.line(&format!("double : {} (double(count) = {})", signature_of(&double), doubled))
    }
}
