//! Chart participants.

use std::fmt;

use crate::attribute::{AttribType, AttributeList};

/// A named participant of the chart.
///
/// The label is the entity's identity. Duplicate labels are legal here and
/// produce separate entities; collapsing them is left to later stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    label: String,
    attributes: AttributeList,
}

impl Entity {
    /// Create an entity with no attributes, taking ownership of its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            attributes: AttributeList::new(),
        }
    }

    /// Borrow the entity label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the attributes attached to this entity.
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// Attach a batch of attributes in front of the existing ones.
    pub fn link_attributes(&mut self, batch: impl Into<AttributeList>) {
        self.attributes.link(batch);
    }

    /// Look up an attribute by kind.
    ///
    /// When no [`AttribType::Label`] attribute is attached, the entity's own
    /// label is returned for it. Every other kind returns `None` when absent.
    pub fn attribute(&self, kind: AttribType) -> Option<&str> {
        match self.attributes.find(kind) {
            None if kind == AttribType::Label => Some(self.label.as_str()),
            found => found,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        write!(f, "{}", self.attributes)
    }
}

/// An ordered sequence of [`Entity`]s in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityList {
    entities: Vec<Entity>,
}

impl EntityList {
    /// Create an empty entity list. No storage is allocated until the first push.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity at the back of the list.
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Number of entities in the list.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the list holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Borrow the entity at `index`.
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    /// Zero-based position of the first entity labelled exactly `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.entities.iter().position(|e| e.label == label)
    }

    /// Iterate over the entities in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub(crate) fn as_slice(&self) -> &[Entity] {
        &self.entities
    }
}

impl FromIterator<Entity> for EntityList {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for EntityList {
    type Item = Entity;
    type IntoIter = std::vec::IntoIter<Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}
