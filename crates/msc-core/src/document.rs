//! The assembled chart.
//!
//! A [`Document`] owns one [`OptionList`], one [`EntityList`] and one
//! [`ArcList`]. It is built once from lists a parser has filled, read through
//! cursors and lookups, and finally consumed by [`Document::destroy`] (or
//! simply dropped). There is no way to modify a document after assembly.

use std::{fmt, io};

use log::{debug, trace, warn};

use crate::{
    arc::{Arc, ArcList},
    attribute::AttribType,
    entity::{Entity, EntityList},
    error::OptionError,
    iter::{ArcCursor, EntityCursor},
    option::{MscOption, OptType, OptionList},
};

/// A fully assembled message sequence chart.
///
/// Fields drop in declaration order, so options are released before
/// entities, and entities before arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    options: OptionList,
    entities: EntityList,
    arcs: ArcList,
}

impl Document {
    /// Assemble a document, taking ownership of the three lists.
    pub fn new(options: OptionList, entities: EntityList, arcs: ArcList) -> Self {
        debug!(
            options = options.len(),
            entities = entities.len(),
            arcs = arcs.len(),
            parallel = arcs.parallel_count();
            "Document assembled"
        );

        Self {
            options,
            entities,
            arcs,
        }
    }

    /// Number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of arcs, parallel placeholders included.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Derived parallel-arc count: two per parallel placeholder.
    pub fn parallel_arc_count(&self) -> usize {
        self.arcs.parallel_count()
    }

    /// Number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Zero-based position of the first entity labelled exactly `label`.
    pub fn entity_index(&self, label: &str) -> Option<usize> {
        self.entities.index_of(label)
    }

    /// Attribute of the entity at `index`, with the label fallback of
    /// [`Entity::attribute`]. Returns `None` if `index` is out of range.
    pub fn entity_attribute_at(&self, index: usize, kind: AttribType) -> Option<&str> {
        self.entities.get(index)?.attribute(kind)
    }

    /// Cursor positioned on the first entity.
    pub fn entities(&self) -> EntityCursor<'_> {
        EntityCursor::new(self.entities.as_slice())
    }

    /// Cursor positioned on the first arc.
    pub fn arcs(&self) -> ArcCursor<'_> {
        ArcCursor::new(self.arcs.as_slice())
    }

    /// Iterate over the entities in declaration order.
    pub fn entity_iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over the arcs in input order.
    pub fn arc_iter(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.iter()
    }

    /// Find the first option of the given kind.
    pub fn find_option(&self, kind: OptType) -> Option<&MscOption> {
        self.options.find(kind)
    }

    /// Option value parsed as a float.
    ///
    /// Returns `None` when the option is absent and also when it parses to
    /// exactly zero, which includes values with no numeric prefix. Layout
    /// treats a zero scale, width or gradient as "not set".
    pub fn option_as_float(&self, kind: OptType) -> Option<f32> {
        let value = self.find_option(kind)?.as_float();
        (value != 0.0).then_some(value)
    }

    /// Option value parsed as a boolean.
    ///
    /// Returns `Ok(None)` when the option is absent.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnrecognisedBoolean`] when the option is present
    /// but its value is not a recognised boolean keyword. The condition is
    /// also logged as a warning.
    pub fn option_as_bool(&self, kind: OptType) -> Result<Option<bool>, OptionError> {
        let Some(option) = self.find_option(kind) else {
            return Ok(None);
        };

        option
            .as_bool()
            .map(Some)
            .inspect_err(|err| warn!(option = kind.name(); "{err}"))
    }

    /// Write the human-readable dump of options, entities and arcs.
    ///
    /// The format is a debugging aid and not stable.
    pub fn write_dump<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }

    /// Consume the document, releasing options, then entities, then arcs.
    ///
    /// Returns how many owned strings were released in each category.
    pub fn destroy(self) -> Teardown {
        let Self {
            options,
            entities,
            arcs,
        } = self;
        let mut teardown = Teardown::default();

        teardown.option_values = options.len();
        drop(options);

        for entity in entities {
            teardown.labels += 1;
            teardown.attribute_values += entity.attributes().len();
        }

        for arc in arcs {
            teardown.attribute_values += arc.attributes().len();
            teardown.endpoints += arc.endpoints().owned_strings();
        }

        debug!(
            option_values = teardown.option_values,
            attribute_values = teardown.attribute_values,
            labels = teardown.labels,
            endpoints = teardown.endpoints;
            "Document destroyed"
        );
        teardown
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Option list ({} options)", self.option_count())?;
        write!(f, "{}", self.options)?;

        writeln!(
            f,
            "Entity list ({} entities, {} parallel)",
            self.entity_count(),
            self.parallel_arc_count()
        )?;
        for entity in &self.entities {
            write!(f, "{entity}")?;
        }

        writeln!(f)?;
        writeln!(f, "Arc list ({} arcs)", self.arc_count())?;
        for arc in &self.arcs {
            trace!(line = arc.input_line(); "Dumping arc");
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}

/// Owned strings released by [`Document::destroy`], per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Teardown {
    option_values: usize,
    attribute_values: usize,
    labels: usize,
    endpoints: usize,
}

impl Teardown {
    /// Option values released.
    pub fn option_values(&self) -> usize {
        self.option_values
    }

    /// Attribute values released, across entities and arcs.
    pub fn attribute_values(&self) -> usize {
        self.attribute_values
    }

    /// Entity labels released.
    pub fn labels(&self) -> usize {
        self.labels
    }

    /// Arc endpoint strings released; a self-referencing arc counts once.
    pub fn endpoints(&self) -> usize {
        self.endpoints
    }

    /// Total owned strings released.
    pub fn total(&self) -> usize {
        self.option_values + self.attribute_values + self.labels + self.endpoints
    }
}
