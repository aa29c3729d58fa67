//! Spawnable definitions and per-instance item data

use serde::{Deserialize, Serialize};

use crate::handle::PlayerId;

/// Item capability of a definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Shared item token (e.g. `$item_fishingbait`)
    pub shared_name: String,
    /// Maximum stack size as reported by the host. Some data reports 0.
    pub max_stack: i32,
    /// Whether the item can be equipped (weapons, armor, tools)
    pub equipable: bool,
    /// Durability at quality 1
    pub max_durability: f32,
    /// Extra durability per quality level above 1
    pub durability_per_level: f32,
    /// Visual variant
    pub variant: u32,
}

impl ItemTemplate {
    /// Create a new stackable-by-one item template
    pub fn new(shared_name: impl Into<String>) -> Self {
        Self {
            shared_name: shared_name.into(),
            max_stack: 1,
            equipable: false,
            max_durability: 100.0,
            durability_per_level: 0.0,
            variant: 0,
        }
    }

    /// Set max stack size (kept as reported, including bad values)
    pub fn with_max_stack(mut self, max: i32) -> Self {
        self.max_stack = max;
        self
    }

    /// Mark as equipable
    pub fn equipable(mut self) -> Self {
        self.equipable = true;
        self
    }

    /// Set durability
    pub fn with_durability(mut self, max: f32, per_level: f32) -> Self {
        self.max_durability = max;
        self.durability_per_level = per_level;
        self
    }

    /// Set variant
    pub fn with_variant(mut self, variant: u32) -> Self {
        self.variant = variant;
        self
    }

    /// Max stack clamped to at least one
    pub fn effective_max_stack(&self) -> u32 {
        if self.max_stack < 1 {
            1
        } else {
            self.max_stack as u32
        }
    }

    /// Maximum durability at the given quality
    pub fn max_durability_at(&self, quality: u32) -> f32 {
        self.max_durability + quality.saturating_sub(1) as f32 * self.durability_per_level
    }
}

/// A catalog entry describing a spawnable kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Unique identifier
    pub name: String,
    /// Display name (may be empty)
    pub localized_name: String,
    /// Has combat/AI capability
    pub character: bool,
    /// Item capability
    pub item: Option<ItemTemplate>,
}

/// What a definition can do, in resolution order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Capability<'a> {
    Actor,
    Item(&'a ItemTemplate),
    Generic,
}

impl Definition {
    /// Create a generic definition
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            localized_name: String::new(),
            character: false,
            item: None,
        }
    }

    /// Set the display name
    pub fn with_localized_name(mut self, name: impl Into<String>) -> Self {
        self.localized_name = name.into();
        self
    }

    /// Give the definition combat/AI capability
    pub fn character(mut self) -> Self {
        self.character = true;
        self
    }

    /// Give the definition item capability
    pub fn with_item(mut self, template: ItemTemplate) -> Self {
        self.item = Some(template);
        self
    }

    /// Resolve the capability used for spawning. Actor wins over item.
    pub fn capability(&self) -> Capability<'_> {
        if self.character {
            Capability::Actor
        } else if let Some(item) = &self.item {
            Capability::Item(item)
        } else {
            Capability::Generic
        }
    }
}

/// Player identity as stamped on crafted items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub id: PlayerId,
    pub name: String,
}

/// Per-instance item data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub stack: u32,
    pub quality: u32,
    pub variant: u32,
    pub durability: f32,
    pub crafter: Option<PlayerIdentity>,
}

impl ItemData {
    /// Fresh instance data for a template: one item at quality 1
    pub fn from_template(template: &ItemTemplate) -> Self {
        Self {
            stack: 1,
            quality: 1,
            variant: template.variant,
            durability: template.max_durability_at(1),
            crafter: None,
        }
    }

    pub fn with_stack(mut self, stack: u32) -> Self {
        self.stack = stack;
        self
    }
}

/// What the host is asked to create
#[derive(Debug, Clone, PartialEq)]
pub enum Instance {
    /// An actor, with its level (1 = default)
    Actor { level: u32 },
    /// A dropped item carrying instance data
    Item(ItemData),
    /// A plain object
    Generic,
}

/// World placement of a new object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: [f32; 3],
    /// Quaternion (x, y, z, w)
    pub rotation: [f32; 4],
}

impl Placement {
    pub const IDENTITY_ROTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    pub fn at(position: [f32; 3]) -> Self {
        Self {
            position,
            rotation: Self::IDENTITY_ROTATION,
        }
    }
}

/// A crafting recipe of the active recipe set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    /// Definition name of the produced item; `None` for broken recipes
    pub item: Option<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item: Some(item.into()),
        }
    }
}
