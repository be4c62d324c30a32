//! Tag catalog for conference events.
//!
//! Every event carries a list of integer tag ids. The ids are resolved once,
//! at decode time, against a [`TagCatalog`]: a closed table of known tags
//! built at startup and never mutated afterwards. Ids that are not in the
//! catalog are treated as absent.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// The catalog shipped with the crate (DEF CON 33).
const BUILTIN_CATALOG: &str = include_str!("../data/defcon33_tags.json");

/// The category a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCategory {
    EventCategory,
    ContentPersonRole,
    SkillLevel,
    Track,
    EventIncludes,
    OrganizationType,
    OrgPersonRelationship,
    Venue,
    Organizer,
    SubjectMatter,
    ExhibitorTier,
    Modality,
}

impl TagCategory {
    /// Categories eligible for the compact secondary tag of an event, in
    /// priority order.
    pub const DETAIL_TYPES: [TagCategory; 4] = [
        Self::Organizer,
        Self::OrganizationType,
        Self::SubjectMatter,
        Self::EventIncludes,
    ];

    /// Returns a human-readable name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EventCategory => "Event Category",
            Self::ContentPersonRole => "Content-Person Role",
            Self::SkillLevel => "Skill Level",
            Self::Track => "Track",
            Self::EventIncludes => "Event-Includes",
            Self::OrganizationType => "Organization Type",
            Self::OrgPersonRelationship => "Org-Person Relationship",
            Self::Venue => "Venue",
            Self::Organizer => "Organizer",
            Self::SubjectMatter => "Subject Matter",
            Self::ExhibitorTier => "Exhibitor Tier",
            Self::Modality => "Modality",
        }
    }

    /// Returns the symbol name used to decorate tags of this category.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::EventCategory => "folder",
            Self::ContentPersonRole => "person",
            Self::SkillLevel => "book.pages",
            Self::Track => "point.topleft.down.to.point.bottomright.curvepath",
            Self::EventIncludes => "plus.circle",
            Self::OrganizationType => "building.2",
            Self::OrgPersonRelationship => "person.text.rectangle",
            Self::Venue => "building.columns",
            Self::Organizer => "building.2.crop.circle",
            Self::SubjectMatter => "info.circle.text.page",
            Self::ExhibitorTier => "medal",
            Self::Modality => "network",
        }
    }

    /// Returns true if this category is one of [`Self::DETAIL_TYPES`].
    pub fn is_detail_type(&self) -> bool {
        Self::DETAIL_TYPES.contains(self)
    }
}

/// A single tag from the catalog.
///
/// Tags are identified by `id` alone: equality, hashing and ordering only
/// look at the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag identifier.
    pub id: u32,
    /// The category this tag belongs to.
    pub category: TagCategory,
    /// Display label.
    pub label: String,
    /// Background color as `#RRGGBB`.
    pub background_color: String,
    /// Foreground color as `#RRGGBB`.
    pub foreground_color: String,
    /// Optional symbol name specific to this tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

impl Tag {
    /// Creates a new tag without an icon.
    pub fn new(
        id: u32,
        category: TagCategory,
        label: impl Into<String>,
        background_color: impl Into<String>,
        foreground_color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            label: label.into(),
            background_color: background_color.into(),
            foreground_color: foreground_color.into(),
            icon_name: None,
        }
    }

    /// Builder method to set the icon name.
    pub fn with_icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }

    /// Returns the tag's own icon, falling back to its category icon.
    pub fn icon(&self) -> &str {
        self.icon_name
            .as_deref()
            .unwrap_or_else(|| self.category.icon_name())
    }

    /// Parsed background color.
    pub fn background_rgb(&self) -> Option<Rgb> {
        parse_hex_color(&self.background_color)
    }

    /// Parsed foreground color.
    pub fn foreground_rgb(&self) -> Option<Rgb> {
        parse_hex_color(&self.foreground_color)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parses a `#RRGGBB` (or `RRGGBB`) hex color.
///
/// Surrounding whitespace is ignored; anything else that is not exactly six
/// hex digits yields `None`.
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    })
}

/// A named group of tags as declared in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagGroup {
    /// Group name (e.g. "Event Category").
    pub name: String,
    /// Tags declared in this group.
    pub tags: Vec<Tag>,
}

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read tag catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid JSON or has the wrong shape.
    #[error("failed to parse tag catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable lookup table from tag id to [`Tag`].
#[derive(Debug, Clone, Default)]
pub struct TagCatalog {
    groups: Vec<TagGroup>,
    by_id: HashMap<u32, Tag>,
}

impl TagCatalog {
    /// Builds a catalog from named groups.
    ///
    /// When the same id is declared twice the later definition wins.
    pub fn new(groups: Vec<TagGroup>) -> Self {
        let mut by_id = HashMap::new();
        for tag in groups.iter().flat_map(|g| g.tags.iter()) {
            if let Some(previous) = by_id.insert(tag.id, tag.clone()) {
                warn!(
                    id = tag.id,
                    previous = %previous.label,
                    label = %tag.label,
                    "duplicate tag id in catalog"
                );
            }
        }
        Self { groups, by_id }
    }

    /// Parses a catalog from its JSON representation: an array of
    /// `{ "name": ..., "tags": [...] }` groups.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let groups: Vec<TagGroup> = serde_json::from_str(json)?;
        Ok(Self::new(groups))
    }

    /// Reads and parses a catalog file.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Returns the catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Looks up a tag by id.
    pub fn get(&self, id: u32) -> Option<&Tag> {
        self.by_id.get(&id)
    }

    /// Resolves a list of ids into tags, preserving order and silently
    /// dropping ids the catalog does not know.
    pub fn resolve<I>(&self, ids: I) -> Vec<Tag>
    where
        I: IntoIterator<Item = u32>,
    {
        ids.into_iter()
            .filter_map(|id| self.get(id).cloned())
            .collect()
    }

    /// Returns all tags sorted by id.
    pub fn tags_sorted(&self) -> Vec<&Tag> {
        let mut tags: Vec<&Tag> = self.by_id.values().collect();
        tags.sort();
        tags
    }

    /// Returns the groups in declaration order.
    pub fn groups(&self) -> &[TagGroup] {
        &self.groups
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the catalog holds no tags.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
