// =============================================================================
// REFLECTION — Axe 12 : introspection des types
// =============================================================================
//
// Rust n'a pas de réflexion dynamique complète. Ce qu'il offre :
//   - std::any::type_name::<T>() → le nom complet du type (chaîne)
//   - std::any::TypeId::of::<T>() → un identifiant unique et comparable
//
// Ce qu'il n'offre PAS : savoir si un type est "abstrait". On porte donc
// cette information EXPLICITEMENT, via une constante associée du trait
// Reflect. Un `dyn Trait` est abstrait, une struct concrète ne l'est pas.
//
// GÉNÉRIQUES RÉIFIÉS : grâce à la monomorphisation, une fonction générique
// connaît son argument de type à chaque site d'appel. type_argument::<T>()
// le rapporte tel quel, rien n'est effacé.
//
// =============================================================================

use std::any::{type_name, TypeId};
use std::fmt;

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

/// Descripteur d'un type, tel que rapporté par l'introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Nom complet (`alloc::vec::Vec<i32>`).
    pub full_name: &'static str,
    /// Nom sans les chemins de modules (`Vec<i32>`).
    pub simple_name: String,
    pub is_abstract: bool,
    pub id: TypeId,
}

impl TypeDescriptor {
    pub fn new<T: ?Sized + 'static>(is_abstract: bool) -> Self {
        let full_name = type_name::<T>();
        TypeDescriptor {
            full_name,
            simple_name: simple_name(full_name),
            is_abstract,
            id: TypeId::of::<T>(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (abstrait : {})", self.simple_name, self.is_abstract)
    }
}

/// Types capables de fournir leur descripteur.
///
/// `ABSTRACT` est l'étiquette explicite : le compilateur ne peut pas la
/// déduire, c'est l'implémenteur qui la pose.
pub trait Reflect: 'static {
    const ABSTRACT: bool = false;

    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new::<Self>(Self::ABSTRACT)
    }
}

/// Raccourcit un nom de type en retirant tous les chemins de modules,
/// y compris à l'intérieur des paramètres génériques.
///
/// `alloc::vec::Vec<alloc::string::String>` → `Vec<String>`
pub fn simple_name(full: &str) -> String {
    let mut result = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            result.push_str(last_path_segment(&segment));
            segment.clear();
            result.push(c);
        }
    }
    result.push_str(last_path_segment(&segment));
    result
}

fn last_path_segment(path: &str) -> &str {
    match path.rfind("::") {
        Some(pos) => &path[pos + 2..],
        None => path,
    }
}

/// Descripteur d'un type qui porte son étiquette Reflect.
pub fn describe<T: Reflect + ?Sized>() -> TypeDescriptor {
    T::descriptor()
}

/// Rapporte l'argument de type avec lequel la fonction a été instanciée.
pub fn type_argument<T: ?Sized>() -> String {
    simple_name(type_name::<T>())
}

/// Vrai si `T` et `U` sont le même type.
pub fn same_type<T: ?Sized + 'static, U: ?Sized + 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

// --- Types d'illustration ----------------------------------------------------

pub trait Shape {
    fn area(&self) -> f64;
}

pub struct Circle {
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Reflect for Circle {}

impl Reflect for dyn Shape {
    const ABSTRACT: bool = true;
}

pub struct ReflectionAxis;

impl Axis for ReflectionAxis {
    fn number(&self) -> u8 {
        12
    }

    fn title(&self) -> &'static str {
        "Réflexion"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let circle = describe::<Circle>();
        let shape = describe::<dyn Shape>();
        out.line(&format!("{} → abstrait : {}", circle.simple_name, circle.is_abstract))?;
        out.line(&format!("{} → abstrait : {}", shape.simple_name, shape.is_abstract))?;

        out.line(&format!("type_argument::<i32>() → {}", type_argument::<i32>()))?;
        out.line(&format!(
            "type_argument::<Vec<String>>() → {}",
            type_argument::<Vec<String>>()
        ))?;
        out.line(&format!("type_argument::<Circle>() → {}", type_argument::<Circle>()))?;
        out.line(&format!("Circle == dyn Shape ? {}", same_type::<Circle, dyn Shape>()))
    }
}
