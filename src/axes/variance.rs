// =============================================================================
// VARIANCE — Axe 9 : producteur covariant, consommateur contravariant
// =============================================================================
//
// En Rust, le sous-typage porte sur les LIFETIMES : `&'static str` est un
// sous-type de `&'a str` (il vit au moins aussi longtemps). La variance des
// types génériques est déduite de la position de T dans leurs champs :
//
//   Producer<T> { item: T }        → T en sortie seulement → COVARIANT
//     Producer<&'static str>  peut servir de  Producer<&'a str>
//
//   Consumer<T> { sink: fn(T) }    → T en entrée seulement → CONTRAVARIANT
//     Consumer<&'a str>       peut servir de  Consumer<&'static str>
//
// widen_producer / narrow_consumer ne font RIEN à l'exécution : leur seul
// rôle est de faire vérifier ces conversions par le compilateur.
// Le sens inverse est refusé (voir les doctests compile_fail).
//
// =============================================================================

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Source en lecture seule : ne fait que rendre des valeurs.
#[derive(Debug, Clone)]
pub struct Producer<T> {
    item: T,
}

impl<T: Clone> Producer<T> {
    pub fn new(item: T) -> Self {
        Producer { item }
    }

    pub fn produce(&self) -> T {
        self.item.clone()
    }
}

/// Puits en écriture seule : ne fait qu'accepter des valeurs.
pub struct Consumer<T> {
    sink: fn(T) -> String,
}

impl<T> Consumer<T> {
    pub fn new(sink: fn(T) -> String) -> Self {
        Consumer { sink }
    }

    pub fn accept(&self, item: T) -> String {
        (self.sink)(item)
    }
}

/// Un producteur du type précis sert là où l'on attend le type plus large.
///
/// ```compile_fail
/// use catalogue_axes::axes::variance::Producer;
/// fn narrow<'a>(p: Producer<&'a str>) -> Producer<&'static str> {
///     p
/// }
/// ```
pub fn widen_producer<'a>(specific: Producer<&'static str>) -> Producer<&'a str> {
    specific
}

/// Un consommateur du type général sert là où l'on attend le type précis.
///
/// ```compile_fail
/// use catalogue_axes::axes::variance::Consumer;
/// fn widen<'a>(c: Consumer<&'static str>) -> Consumer<&'a str> {
///     c
/// }
/// ```
pub fn narrow_consumer<'a>(general: Consumer<&'a str>) -> Consumer<&'static str> {
    general
}

/// Types numériques convertibles en f64.
///
/// `Into<f64>` ne couvre pas i64, u64, isize ni usize (conversion avec
/// perte) : la conversion passe donc par `as`, pour TOUS les primitifs.
pub trait Numeric: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),+) => {
        $(
            impl Numeric for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Somme bornée : convertit chaque élément en f64, en partant de 0.0.
pub fn sum_as_f64<T: Numeric>(items: &[T]) -> f64 {
    items.iter().fold(0.0, |acc, &item| acc + item.to_f64())
}

fn announce(name: &str) -> String {
    format!("reçu : {}", name)
}

pub struct VarianceAxis;

impl Axis for VarianceAxis {
    fn number(&self) -> u8 {
        9
    }

    fn title(&self) -> &'static str {
        "Variance générique"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let specific = Producer::new("Rex");
        let widened = widen_producer(specific);
        out.line(&format!("Producer<&'static str> → Producer<&'a str> : {}", widened.produce()))?;

        let general: Consumer<&str> = Consumer::new(announce);
        let narrowed = narrow_consumer(general);
        out.line(&format!(
            "Consumer<&'a str> → Consumer<&'static str> : {}",
            narrowed.accept("Médor")
        ))?;

        out.line(&format!("sum_as_f64([1, 2, 3]) = {:.1}", sum_as_f64(&[1, 2, 3])))?;
        out.line(&format!("sum_as_f64([0.5, 0.25]) = {}", sum_as_f64(&[0.5f32, 0.25])))
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_widened_producer_yields_same_value() {
        let p = Producer::new("Rex");
        let widened = widen_producer(p);
        assert_eq!(widened.produce(), "Rex");
    }

    #[test]
    fn test_producer_at_local_lifetime() {
        let owned = String::from("local");
        let borrowed: Producer<&str> = Producer::new(owned.as_str());
        assert_eq!(borrowed.produce(), "local");
    }

    #[test]
    fn test_narrowed_consumer_accepts_static_value() {
        let general: Consumer<&str> = Consumer::new(announce);
        let narrowed = narrow_consumer(general);
        assert_eq!(narrowed.accept("Médor"), "reçu : Médor");
    }

    #[test]
    fn test_sum_as_f64() {
        assert_eq!(sum_as_f64(&[1, 2, 3]), 6.0);
        assert_eq!(sum_as_f64::<i32>(&[]), 0.0);
        assert_eq!(sum_as_f64(&[1u8, 255]), 256.0);
    }

    #[test]
    fn test_sum_as_f64_wide_integers() {
        assert_eq!(sum_as_f64(&[1i64, 2, 3]), 6.0);
        assert_eq!(sum_as_f64(&[4u64, 5]), 9.0);
        assert_eq!(sum_as_f64(&[7usize, 8]), 15.0);
        assert_eq!(sum_as_f64(&[-2isize, 2]), 0.0);
    }

    proptest! {
        #[test]
        fn sum_as_f64_matches_integer_sum(items in prop::collection::vec(-10_000i32..10_000, 0..50)) {
            let expected: i64 = items.iter().map(|&i| i as i64).sum();
            prop_assert_eq!(sum_as_f64(&items), expected as f64);
        }
    }
}
