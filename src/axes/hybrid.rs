// =============================================================================
// HYBRID — Axe 1 : fonctionnel et objet sur la même valeur
// =============================================================================
//
// Un Point est une VALEUR : immuable, copiable, comparée par contenu.
// Côté objet, il a des méthodes (translate, manhattan).
// Côté fonctionnel, on le passe dans des pipelines map / filter / fold
// avec des closures.
//
// translate ne modifie rien : elle RETOURNE un nouveau Point.
// Toute l'arithmétique est modulaire (wrapping_*) : pas de panique aux
// bornes de i64.
//
// =============================================================================

use std::fmt;

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Un point immuable à coordonnées entières.
///
/// Les champs sont privés : une fois construit, un Point ne change plus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// Nouveau point décalé de (dx, dy), coordonnées modulo 2^64.
    pub fn translate(self, dx: i64, dy: i64) -> Point {
        Point::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Distance de Manhattan à l'origine (`wrapping_abs` : `i64::MIN` reste
    /// `i64::MIN`).
    pub fn manhattan(self) -> i64 {
        self.x.wrapping_abs().wrapping_add(self.y.wrapping_abs())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}

/// map : décale tous les points.
pub fn shift_all(points: &[Point], dx: i64, dy: i64) -> Vec<Point> {
    points.iter().map(|p| p.translate(dx, dy)).collect()
}

/// filter : garde les points strictement dans le premier quadrant.
pub fn in_first_quadrant(points: &[Point]) -> Vec<Point> {
    points.iter().copied().filter(|p| p.x > 0 && p.y > 0).collect()
}

/// fold : somme des distances de Manhattan, en partant de 0.
pub fn total_manhattan(points: &[Point]) -> i64 {
    points.iter().fold(0i64, |acc, p| acc.wrapping_add(p.manhattan()))
}

fn join(points: &[Point]) -> String {
    points.iter().map(Point::to_string).collect::<Vec<_>>().join(", ")
}

pub struct HybridAxis;

impl Axis for HybridAxis {
    fn number(&self) -> u8 {
        1
    }

    fn title(&self) -> &'static str {
        "Hybride fonctionnel / objet"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let p = Point::new(1, 2);
        let moved = p.translate(3, -1);
        out.line(&format!("{} translaté de (3, -1) → {}", p, moved))?;
        out.line(&format!("original inchangé : {}", p))?;

        let points = [Point::new(1, 2), Point::new(-3, 4), Point::new(5, -6)];
        out.line(&format!("points : [{}]", join(&points)))?;

        let shifted = shift_all(&points, 4, 0);
        out.line(&format!("map  (+4, 0) : [{}]", join(&shifted)))?;

        let kept = in_first_quadrant(&shifted);
        out.line(&format!("filter (x > 0 && y > 0) : [{}]", join(&kept)))?;

        out.line(&format!("fold (Σ manhattan) : {}", total_manhattan(&points)))
    }
}
