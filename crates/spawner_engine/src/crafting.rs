//! Which spawned items carry a crafter signature

use std::collections::HashSet;

use spawner_core::{Definition, ItemTemplate, Recipe};

/// Recipes that never cause crafter tags
pub const DEFAULT_EXEMPT_RECIPES: &[&str] = &["Recipe_PotionHealthMinor", "Recipe_PotionStaminaMinor"];

/// Items that never carry crafter tags
pub const DEFAULT_EXEMPT_ITEMS: &[&str] = &["$item_fishingbait"];

/// Crafter tag rules
///
/// An item is stamped with the requesting player's identity when it is
/// equipable or produced by a non-exempt recipe, unless the item itself is
/// exempt. Exempt items match by definition name or shared item name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftingPolicy {
    exempt_recipes: HashSet<String>,
    exempt_items: HashSet<String>,
}

impl CraftingPolicy {
    pub fn new<R, I>(exempt_recipes: R, exempt_items: I) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            exempt_recipes: exempt_recipes.into_iter().map(Into::into).collect(),
            exempt_items: exempt_items.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy without exemptions
    pub fn permissive() -> Self {
        Self::new(Vec::<String>::new(), Vec::<String>::new())
    }

    pub fn is_exempt_recipe(&self, recipe: &str) -> bool {
        self.exempt_recipes.contains(recipe)
    }

    pub fn is_exempt_item(&self, definition: &Definition, template: &ItemTemplate) -> bool {
        self.exempt_items.contains(&definition.name)
            || self.exempt_items.contains(&template.shared_name)
    }

    /// Whether a non-exempt recipe produces this definition
    pub fn is_crafted(&self, definition: &Definition, recipes: &[Recipe]) -> bool {
        recipes.iter().any(|recipe| {
            !self.is_exempt_recipe(&recipe.name)
                && recipe.item.as_deref() == Some(definition.name.as_str())
        })
    }

    /// Whether spawned instances get crafter tags
    pub fn should_tag(&self, definition: &Definition, template: &ItemTemplate, recipes: &[Recipe]) -> bool {
        (template.equipable || self.is_crafted(definition, recipes))
            && !self.is_exempt_item(definition, template)
    }
}

impl Default for CraftingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXEMPT_RECIPES.iter().copied(), DEFAULT_EXEMPT_ITEMS.iter().copied())
    }
}
