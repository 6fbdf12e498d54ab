//! Ordered name-pattern tables used by the classifier.
//!
//! Patterns are matched as lower-case substrings of the item name. Within a
//! table the first matching entry wins, so order is priority.

use crate::category::{BaseCategory, Category};

/// Special names that select the base quality rule.
const BASE_PATTERNS: &[(&str, BaseCategory)] = &[
    ("aged brie", BaseCategory::Appreciating),
    ("backstage passes", BaseCategory::EventPass),
];

/// Markers that change how the base rule is applied. Exact special names
/// ("sulfuras") come before generic type markers.
const MODIFIER_PATTERNS: &[(&str, Modifier)] = &[
    ("sulfuras", Modifier::Legendary),
    ("legendary", Modifier::Legendary),
    ("conjured", Modifier::Doubled),
];

/// How a matched marker transforms the base category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Replace the base rule with the frozen legendary rule.
    Legendary,
    /// Run the base rule twice per day.
    Doubled,
}

/// Immutable pattern tables, owned by a [`crate::Classifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    base: Vec<(String, BaseCategory)>,
    modifiers: Vec<(String, Modifier)>,
}

impl Catalog {
    /// A catalog with no patterns: every item is generic.
    pub fn empty() -> Self {
        Self {
            base: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// Append a base pattern at the lowest priority.
    pub fn with_base(mut self, pattern: &str, base: BaseCategory) -> Self {
        self.base.push((pattern.to_lowercase(), base));
        self
    }

    /// Append a modifier pattern at the lowest priority.
    pub fn with_modifier(mut self, pattern: &str, modifier: Modifier) -> Self {
        self.modifiers.push((pattern.to_lowercase(), modifier));
        self
    }

    pub fn base_patterns(&self) -> impl Iterator<Item = (&str, BaseCategory)> {
        self.base.iter().map(|(p, b)| (p.as_str(), *b))
    }

    pub fn modifier_patterns(&self) -> impl Iterator<Item = (&str, Modifier)> {
        self.modifiers.iter().map(|(p, m)| (p.as_str(), *m))
    }

    /// Resolve the category for an item name.
    pub fn resolve(&self, name: &str) -> Category {
        let lowered = name.to_lowercase();

        let base = first_match(&self.base, &lowered).unwrap_or(BaseCategory::Generic);

        match first_match(&self.modifiers, &lowered) {
            Some(Modifier::Legendary) => Category::Legendary,
            Some(Modifier::Doubled) => Category::Doubled(base),
            None => base.into(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let catalog = BASE_PATTERNS
            .iter()
            .fold(Catalog::empty(), |c, (p, b)| c.with_base(p, *b));
        MODIFIER_PATTERNS
            .iter()
            .fold(catalog, |c, (p, m)| c.with_modifier(p, *m))
    }
}

fn first_match<T: Copy>(table: &[(String, T)], lowered: &str) -> Option<T> {
    table
        .iter()
        .find(|(pattern, _)| lowered.contains(pattern.as_str()))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_keeps_table_order() {
        let catalog = Catalog::default();
        let modifiers: Vec<_> = catalog.modifier_patterns().map(|(p, _)| p).collect();
        assert_eq!(modifiers, vec!["sulfuras", "legendary", "conjured"]);
        let bases: Vec<_> = catalog.base_patterns().map(|(p, _)| p).collect();
        assert_eq!(bases, vec!["aged brie", "backstage passes"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve("AGED BRIE"), Category::Appreciating);
        assert_eq!(
            catalog.resolve("Backstage passes to a TAFKAL80ETC concert"),
            Category::EventPass
        );
    }

    #[test]
    fn unknown_names_are_generic() {
        assert_eq!(Catalog::default().resolve("+5 Dexterity Vest"), Category::Generic);
        assert_eq!(Catalog::empty().resolve("Aged Brie"), Category::Generic);
    }

    #[test]
    fn conjured_wraps_the_base_category() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.resolve("Conjured Mana Cake"),
            Category::Doubled(BaseCategory::Generic)
        );
        assert_eq!(
            catalog.resolve("Conjured Aged Brie"),
            Category::Doubled(BaseCategory::Appreciating)
        );
        assert_eq!(
            catalog.resolve("Conjured backstage passes"),
            Category::Doubled(BaseCategory::EventPass)
        );
    }

    #[test]
    fn sulfuras_beats_conjured() {
        assert_eq!(
            Catalog::default().resolve("Conjured Sulfuras"),
            Category::Legendary
        );
    }

    #[test]
    fn legendary_marker_freezes_any_item() {
        assert_eq!(
            Catalog::default().resolve("Legendary Aged Brie"),
            Category::Legendary
        );
    }

    #[test]
    fn custom_patterns_are_lower_cased_and_appended() {
        let catalog = Catalog::default()
            .with_base("Fine Wine", BaseCategory::Appreciating)
            .with_base("Brie", BaseCategory::EventPass);
        assert_eq!(catalog.resolve("fine wine, 1987"), Category::Appreciating);
        assert_eq!(catalog.resolve("Aged Brie"), Category::Appreciating);
        assert_eq!(catalog.resolve("Brie de Meaux"), Category::EventPass);
    }
}
