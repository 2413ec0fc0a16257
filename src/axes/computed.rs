// =============================================================================
// COMPUTED — Axe 5 : une propriété recalculée à chaque lecture
// =============================================================================
//
// full_name() n'est stockée nulle part : elle relit first et last à CHAQUE
// appel. Modifier un champ après construction se voit donc immédiatement
// à la lecture suivante. Aucun cache.
//
// =============================================================================

use super::Axis;
use crate::error::CatalogResult;
use crate::sink::Sink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first: String,
    last: String,
}

impl Person {
    pub fn new(first: &str, last: &str) -> Self {
        Person {
            first: first.to_string(),
            last: last.to_string(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn set_first(&mut self, first: &str) {
        self.first = first.to_string();
    }

    pub fn set_last(&mut self, last: &str) {
        self.last = last.to_string();
    }

    /// `first + " " + last`, recalculé à chaque appel.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

pub struct ComputedAxis;

impl Axis for ComputedAxis {
    fn number(&self) -> u8 {
        5
    }

    fn title(&self) -> &'static str {
        "Propriétés calculées"
    }

    fn run(&self, out: &mut dyn Sink) -> CatalogResult<()> {
        let mut person = Person::new("Ada", "Lovelace");
        out.line(&format!("full_name = {}", person.full_name()))?;

        person.set_first("Augusta");
        out.line(&format!("après set_first(\"Augusta\") : {}", person.full_name()))?;

        person.set_last("King");
        out.line(&format!("après set_last(\"King\") : {}", person.full_name()))
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
    fn test_full_name() {
        let p = Person::new("Ada", "Lovelace");
        assert_eq!(p.full_name(), "Ada Lovelace");
        assert_eq!(p.first(), "Ada");
        assert_eq!(p.last(), "Lovelace");
    }

    #[test]
    fn test_mutation_is_visible_on_next_read() {
        let mut p = Person::new("Ada", "Lovelace");
        let before = p.full_name();
        p.set_last("King");
        assert_eq!(before, "Ada Lovelace");
        assert_eq!(p.full_name(), "Ada King");
    }

    #[test]
    fn test_empty_fields_keep_separator() {
        assert_eq!(Person::new("", "").full_name(), " ");
    }

    proptest! {
        #[test]
        fn full_name_is_first_space_last(
            first in "[A-Za-z ]{0,20}",
            last in "[A-Za-z ]{0,20}",
            new_first in "[A-Za-z]{0,20}",
            new_last in "[A-Za-z]{0,20}",
        ) {
            let mut p = Person::new(&first, &last);
            prop_assert_eq!(p.full_name(), format!("{} {}", first, last));

            p.set_first(&new_first);
            prop_assert_eq!(p.full_name(), format!("{} {}", new_first, last));

            p.set_last(&new_last);
            prop_assert_eq!(p.full_name(), format!("{} {}", new_first, new_last));
        }
    }
}
