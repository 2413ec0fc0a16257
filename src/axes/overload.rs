// =============================================================================
// OVERLOAD — Axe 6 : une "surcharge" résolue à la compilation
// =============================================================================
//
// Rust n'a pas de surcharge par signature. L'équivalent : UN nom générique
// `add`, et un trait Addable implémenté pour chaque type numérique.
// Le choix de l'implémentation se fait à la compilation, d'après le type
// statique des arguments (monomorphisation). Aucun dispatch au runtime.
//
// Les deux paramètres partagent le même T : mélanger un entier et un
// flottant est un rejet de compilation, pas une conversion.
//
// Côté entier, l'addition est MODULAIRE (wrapping_add) : add(i32::MAX, 1)
// vaut i32::MIN, jamais de panique.
//
// =============================================================================

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Types numériques acceptés par `add`.
pub trait Addable: Copy {
    /// Famille résolue, pour l'affichage ("entier" / "flottant").
    const KIND: &'static str;

    fn plus(self, other: Self) -> Self;
}

macro_rules! impl_addable {
    (entier => $($t:ty),+) => {
        $(
            impl Addable for $t {
                const KIND: &'static str = "entier";

                fn plus(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )+
    };
    (flottant => $($t:ty),+) => {
        $(
            impl Addable for $t {
                const KIND: &'static str = "flottant";

                fn plus(self, other: Self) -> Self {
                    self + other
                }
            }
        )+
    };
}

impl_addable!(entier => i32, i64);
impl_addable!(flottant => f32, f64);

/// Additionne deux valeurs du MÊME type numérique.
///
/// Les entiers débordent en boucle (`wrapping_add`) au lieu de paniquer.
///
/// ```
/// use catalogue_axes::axes::overload::add;
/// assert_eq!(add(1, 2), 3);
/// assert_eq!(add(1.5, 2.5), 4.0);
/// ```
///
/// Un appel mixte ne compile pas :
///
/// ```compile_fail
/// use catalogue_axes::axes::overload::add;
/// let _ = add(1, 2.5);
/// ```
pub fn add<T: Addable>(a: T, b: T) -> T {
    a.plus(b)
}

/// Famille choisie par le compilateur pour ce type d'argument.
pub fn resolved_kind<T: Addable>(_value: T) -> &'static str {
    T::KIND
}

pub struct OverloadAxis;

impl Axis for OverloadAxis {
    fn number(&self) -> u8 {
        6
    }

    fn title(&self) -> &'static str {
        "Surcharge statique"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let ints = add(1, 2);
        let floats = add(1.5, 2.5);
        out.line(&format!("add(1, 2) = {} [{}]", ints, resolved_kind(ints)))?;
        out.line(&format!("add(1.5, 2.5) = {:.1} [{}]", floats, resolved_kind(floats)))?;
        out.line("add(1, 2.5) → rejeté à la compilation")
    }
}
