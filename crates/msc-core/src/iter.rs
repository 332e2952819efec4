//! Forward-only cursors over a [`Document`](crate::document::Document).
//!
//! Cursors borrow the document they walk, so they cannot outlive it: once a
//! document is consumed by [`Document::destroy`](crate::document::Document::destroy)
//! no cursor over it can still be in use.
//!
//! ```
//! use msc_core::{
//!     arc::ArcList,
//!     attribute::AttribType,
//!     document::Document,
//!     entity::{Entity, EntityList},
//!     option::OptionList,
//! };
//!
//! let entities: EntityList = ["a", "b"].into_iter().map(Entity::new).collect();
//! let document = Document::new(OptionList::new(), entities, ArcList::new());
//!
//! let mut labels = Vec::new();
//! let mut cursor = document.entities();
//! while !cursor.at_end() {
//!     labels.extend(cursor.attribute(AttribType::Label));
//!     cursor.advance();
//! }
//! assert_eq!(labels, ["a", "b"]);
//! ```

use crate::{
    arc::{Arc, ArcType},
    attribute::AttribType,
    entity::Entity,
};

/// Read-only cursor over the entities of a document.
#[derive(Debug, Clone, Copy)]
pub struct EntityCursor<'a> {
    entities: &'a [Entity],
    pos: usize,
}

impl<'a> EntityCursor<'a> {
    pub(crate) fn new(entities: &'a [Entity]) -> Self {
        Self { entities, pos: 0 }
    }

    /// Returns `true` once the cursor has moved past the last entity.
    pub fn at_end(&self) -> bool {
        self.pos >= self.entities.len()
    }

    /// Move to the next entity.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end; check [`at_end`](Self::at_end) first.
    pub fn advance(&mut self) {
        assert!(!self.at_end(), "entity cursor advanced past the end");
        self.pos += 1;
    }

    /// Zero-based position of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Borrow the entity under the cursor, or `None` at the end.
    pub fn current(&self) -> Option<&'a Entity> {
        self.entities.get(self.pos)
    }

    /// Label of the entity under the cursor.
    pub fn label(&self) -> Option<&'a str> {
        self.current().map(Entity::label)
    }

    /// Attribute of the entity under the cursor.
    ///
    /// An absent [`AttribType::Label`] falls back to the entity's label.
    pub fn attribute(&self, kind: AttribType) -> Option<&'a str> {
        self.current()?.attribute(kind)
    }
}

/// Read-only cursor over the arcs of a document.
#[derive(Debug, Clone, Copy)]
pub struct ArcCursor<'a> {
    arcs: &'a [Arc],
    pos: usize,
}

impl<'a> ArcCursor<'a> {
    pub(crate) fn new(arcs: &'a [Arc]) -> Self {
        Self { arcs, pos: 0 }
    }

    /// Returns `true` once the cursor has moved past the last arc.
    pub fn at_end(&self) -> bool {
        self.pos >= self.arcs.len()
    }

    /// Move to the next arc.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end; check [`at_end`](Self::at_end) first.
    pub fn advance(&mut self) {
        assert!(!self.at_end(), "arc cursor advanced past the end");
        self.pos += 1;
    }

    /// Zero-based position of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Borrow the arc under the cursor, or `None` at the end.
    pub fn current(&self) -> Option<&'a Arc> {
        self.arcs.get(self.pos)
    }

    /// Source label of the arc under the cursor.
    pub fn source(&self) -> Option<&'a str> {
        self.current()?.source()
    }

    /// Destination label of the arc under the cursor.
    pub fn dest(&self) -> Option<&'a str> {
        self.current()?.dest()
    }

    /// Kind of the arc under the cursor.
    pub fn kind(&self) -> Option<ArcType> {
        self.current().map(Arc::kind)
    }

    /// Input line the arc under the cursor was read from.
    pub fn input_line(&self) -> Option<u32> {
        self.current().map(Arc::input_line)
    }

    /// Attribute of the arc under the cursor. There is no label fallback for arcs.
    pub fn attribute(&self, kind: AttribType) -> Option<&'a str> {
        self.current()?.attribute(kind)
    }
}
