// =============================================================================
// SEALED — Axe 8 : une hiérarchie fermée et son évaluateur
// =============================================================================
//
// Expr est un enum : l'ensemble des variantes est FERMÉ et connu du
// compilateur. eval() fait un match sans branche `_` : ajouter une
// troisième variante sans mettre à jour eval() est une erreur de
// compilation (E0004, motif non couvert).
//
//   Const(n)     → n
//   Sum(a, b)    → eval(a) + eval(b), en arithmétique modulaire (i64)
//
// =============================================================================

use std::fmt;

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Expression arithmétique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Feuille : un entier.
    Const(i64),
    /// Nœud binaire : la somme de deux sous-expressions.
    Sum(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn constant(value: i64) -> Self {
        Expr::Const(value)
    }

    pub fn sum(left: Expr, right: Expr) -> Self {
        Expr::Sum(Box::new(left), Box::new(right))
    }

    /// Profondeur de l'arbre (une feuille vaut 1).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Const(_) => 1,
            Expr::Sum(left, right) => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(n) => write!(f, "{}", n),
            Expr::Sum(left, right) => write!(f, "({} + {})", left, right),
        }
    }
}

/// Réduit récursivement une expression à sa valeur.
///
/// Les sommes débordent en boucle (`wrapping_add`) : aucune panique, même
/// avec `i64::MAX` dans les feuilles.
pub fn eval(expr: &Expr) -> i64 {
    match expr {
        Expr::Const(n) => *n,
        Expr::Sum(left, right) => eval(left).wrapping_add(eval(right)),
    }
}

pub struct SealedAxis;

impl Axis for SealedAxis {
    fn number(&self) -> u8 {
        8
    }

    fn title(&self) -> &'static str {
        "Hiérarchies scellées"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let leaf = Expr::constant(5);
        out.line(&format!("eval({}) = {}", leaf, eval(&leaf)))?;

        let tree = Expr::sum(
            Expr::constant(1),
            Expr::sum(Expr::constant(2), Expr::constant(3)),
        );
        out.line(&format!("eval({}) = {}", tree, eval(&tree)))?;
        out.line(&format!("profondeur : {}", tree.depth()))
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
    fn test_eval_leaf() {
        assert_eq!(eval(&Expr::Const(5)), 5);
    }

    #[test]
    fn test_eval_nested_sum() {
        let tree = Expr::sum(
            Expr::constant(1),
            Expr::sum(Expr::constant(2), Expr::constant(3)),
        );
        assert_eq!(eval(&tree), 6);
        assert_eq!(tree.to_string(), "(1 + (2 + 3))");
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_eval_overflow_wraps() {
        let tree = Expr::sum(Expr::constant(i64::MAX), Expr::constant(1));
        assert_eq!(eval(&tree), i64::MIN);
    }

    fn expr_strategy() -> impl Strategy<Value = Expr> {
        let leaf = any::<i64>().prop_map(Expr::Const);
        leaf.prop_recursive(6, 64, 2, |inner| {
            (inner.clone(), inner).prop_map(|(l, r)| Expr::sum(l, r))
        })
    }

    fn leaves(expr: &Expr) -> Vec<i64> {
        match expr {
            Expr::Const(n) => vec![*n],
            Expr::Sum(left, right) => {
                let mut all = leaves(left);
                all.extend(leaves(right));
                all
            }
        }
    }

    proptest! {
        #[test]
        fn eval_is_sum_of_leaves(expr in expr_strategy()) {
            let expected = leaves(&expr).iter().fold(0i64, |acc, &n| acc.wrapping_add(n));
            prop_assert_eq!(eval(&expr), expected);
        }
    }
}
