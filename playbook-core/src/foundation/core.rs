use std::fmt;

pub use kurbo::{Point, Vec2};

/// Role of an entity on the field.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Player on the team holding the disc.
    Offense,
    /// Player marking the offense.
    Defense,
    /// The disc itself.
    Disc,
}

impl EntityKind {
    /// Wire name used in documents and in slot ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offense => "offense",
            Self::Defense => "defense",
            Self::Disc => "disc",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player or the disc placed on the field, in logical field units.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    /// Identifier, unique within a frame (`offense-3`, `defense-1`, `disc`).
    pub id: String,
    /// Entity role.
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Position along the field length.
    pub x: f64,
    /// Position across the field width.
    pub y: f64,
    /// Optional short label drawn on the marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Entity {
    /// Build an entity at `(x, y)`.
    pub fn new(id: impl Into<String>, kind: EntityKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            x,
            y,
            label: None,
        }
    }

    /// Builder-style label setter.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Current position.
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the entity to `p`.
    pub fn set_pos(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }
}

/// Id of the `slot`-th player of `kind`, e.g. `offense-4`.
pub fn slot_id(kind: EntityKind, slot: u8) -> String {
    format!("{}-{slot}", kind.as_str())
}

/// Inverse of [`slot_id`]; `None` for ids that do not name a player slot.
pub fn parse_slot(id: &str) -> Option<(EntityKind, u8)> {
    let (prefix, n) = id.split_once('-')?;
    let kind = match prefix {
        "offense" => EntityKind::Offense,
        "defense" => EntityKind::Defense,
        _ => return None,
    };
    let slot: u8 = n.parse().ok()?;
    (slot > 0).then_some((kind, slot))
}

/// One tactical snapshot: the entities placed on the field at a point of the play.
///
/// Serialized as a bare JSON array of entities.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Frame {
    entities: Vec<Entity>,
}

impl Frame {
    /// Wrap an entity list.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Entities in stored order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterate over entities in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// `true` when the frame holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity by id.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// `true` when an entity with `id` is present.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Position of the entity with `id`, if present.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.get(id).map(Entity::pos)
    }

    /// Move entity `id` to `p`. Returns `false` when the id is absent.
    pub fn set_position(&mut self, id: &str, p: Point) -> bool {
        match self.get_mut(id) {
            Some(e) => {
                e.set_pos(p);
                true
            }
            None => false,
        }
    }

    /// First entity of the given kind.
    pub fn first_of(&self, kind: EntityKind) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind == kind)
    }

    /// Number of entities of the given kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    /// Consume the frame, returning the entity list.
    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}

impl From<Vec<Entity>> for Frame {
    fn from(entities: Vec<Entity>) -> Self {
        Self::new(entities)
    }
}

impl FromIterator<Entity> for Frame {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
