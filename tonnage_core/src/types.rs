//! Combatant types handed over by the host simulation

use serde::{Deserialize, Serialize};

/// Turret weight-class tags, checked in this order
pub const TAG_UNIT_LIGHT: &str = "unit_light";
pub const TAG_UNIT_MEDIUM: &str = "unit_medium";
pub const TAG_UNIT_HEAVY: &str = "unit_heavy";

/// Ordered collection of unit tags
///
/// Iteration order is exactly the order the host supplied, which matters for
/// first-match lookups such as tonnage ratios.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        TagSet(Vec::new())
    }

    /// Add a tag; duplicates are ignored
    pub fn add(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.contains(&tag) {
            self.0.push(tag);
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = TagSet::new();
        for tag in iter {
            tags.add(tag);
        }
        tags
    }
}

/// Squad data attached to a mech-like unit (battle armor and the like)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadInfo {
    pub troopers: u32,
}

/// What kind of unit a combatant is, with its kind-specific mass data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatantKind {
    /// Static structure; always uses the configured virtual tonnage
    Building,
    /// Emplacement; virtual tonnage picked from its weight-class tag
    Turret,
    /// Powered unit, possibly a squad sharing one chassis
    Mech {
        tonnage: f64,
        #[serde(default)]
        squad: Option<SquadInfo>,
    },
    Vehicle { tonnage: f64 },
    /// Anything the host can target that has no known mass
    Other,
}

/// A unit taking part in an attack, as attacker or target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    /// Stable identifier, unique within an encounter
    pub id: String,
    #[serde(default)]
    pub tags: TagSet,
    #[serde(flatten)]
    pub kind: CombatantKind,
}

impl Combatant {
    pub fn new(id: impl Into<String>, kind: CombatantKind) -> Self {
        Combatant {
            id: id.into(),
            tags: TagSet::new(),
            kind,
        }
    }

    pub fn building(id: impl Into<String>) -> Self {
        Combatant::new(id, CombatantKind::Building)
    }

    pub fn turret(id: impl Into<String>) -> Self {
        Combatant::new(id, CombatantKind::Turret)
    }

    pub fn mech(id: impl Into<String>, tonnage: f64) -> Self {
        Combatant::new(id, CombatantKind::Mech { tonnage, squad: None })
    }

    pub fn squad(id: impl Into<String>, tonnage: f64, troopers: u32) -> Self {
        Combatant::new(
            id,
            CombatantKind::Mech {
                tonnage,
                squad: Some(SquadInfo { troopers }),
            },
        )
    }

    pub fn vehicle(id: impl Into<String>, tonnage: f64) -> Self {
        Combatant::new(id, CombatantKind::Vehicle { tonnage })
    }

    /// Builder-style tag assignment, replacing any existing tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().collect();
        self
    }
}
