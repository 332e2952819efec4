//! Builder for assembling documents.

use log::trace;

use msc_core::{
    arc::{Arc, ArcEndpoints, ArcList, ArcType},
    attribute::AttributeList,
    document::Document,
    entity::{Entity, EntityList},
    option::{MscOption, OptType, OptionList},
};

/// Builder for assembling a [`Document`] node by node.
///
/// Entities and arcs are appended in call order. Options and attribute
/// batches are linked in front of earlier ones, as with the list types, so
/// the most recently added option of a kind is the one lookups find.
///
/// # Examples
///
/// ```
/// use msc::{
///     DocumentBuilder,
///     arc::{ArcEndpoints, ArcType},
///     option::OptType,
/// };
///
/// let document = DocumentBuilder::new()
///     .option(OptType::Width, "400")
///     .option(OptType::Width, "800")
///     .entity("a")
///     .entity("b")
///     .arc(ArcType::Message, ArcEndpoints::between("a", "b"), 3)
///     .parallel(3)
///     .arc(ArcType::Return, ArcEndpoints::between("b", "a"), 3)
///     .build();
///
/// assert_eq!(document.arc_count(), 3);
/// assert_eq!(document.parallel_arc_count(), 2);
/// assert_eq!(document.option_as_float(OptType::Width), Some(800.0));
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    options: OptionList,
    entities: EntityList,
    arcs: ArcList,
}

impl DocumentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Link an option in front of the options added so far.
    pub fn option(mut self, kind: OptType, value: impl Into<String>) -> Self {
        self.options.link(MscOption::new(kind, value));
        self
    }

    /// Link a batch of options, keeping the batch order.
    pub fn options(mut self, batch: impl Into<OptionList>) -> Self {
        self.options.link(batch);
        self
    }

    /// Append an entity with no attributes.
    pub fn entity(self, label: impl Into<String>) -> Self {
        self.entity_with_attributes(label, AttributeList::new())
    }

    /// Append an entity carrying `attributes`.
    pub fn entity_with_attributes(
        mut self,
        label: impl Into<String>,
        attributes: impl Into<AttributeList>,
    ) -> Self {
        let mut entity = Entity::new(label);
        entity.link_attributes(attributes);
        trace!(label = entity.label(); "Appending entity");
        self.entities.push(entity);
        self
    }

    /// Append an arc with no attributes.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Arc::new`].
    pub fn arc(self, kind: ArcType, endpoints: ArcEndpoints, input_line: u32) -> Self {
        self.arc_with_attributes(kind, endpoints, input_line, AttributeList::new())
    }

    /// Append an arc carrying `attributes`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Arc::new`].
    pub fn arc_with_attributes(
        mut self,
        kind: ArcType,
        endpoints: ArcEndpoints,
        input_line: u32,
        attributes: impl Into<AttributeList>,
    ) -> Self {
        let mut arc = Arc::new(kind, endpoints, input_line);
        arc.link_attributes(attributes);
        trace!(kind = kind.to_string(), line = input_line; "Appending arc");
        self.arcs.push(arc);
        self
    }

    /// Append a parallel placeholder, marking the next arc as concurrent with
    /// the previous one.
    pub fn parallel(self, input_line: u32) -> Self {
        self.arc(ArcType::Parallel, ArcEndpoints::None, input_line)
    }

    /// Assemble the document.
    pub fn build(self) -> Document {
        Document::new(self.options, self.entities, self.arcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msc_core::attribute::{AttribType, Attribute};

    #[test]
    fn test_empty_builder() {
        let document = DocumentBuilder::new().build();

        assert_eq!(document.entity_count(), 0);
        assert_eq!(document.arc_count(), 0);
        assert_eq!(document.option_count(), 0);
        assert!(document.entities().at_end());
        assert!(document.arcs().at_end());
    }

    #[test]
    fn test_options_batch_order() {
        let document = DocumentBuilder::new()
            .option(OptType::HScale, "1")
            .options(vec![
                MscOption::new(OptType::Width, "100"),
                MscOption::new(OptType::ArcGradient, "5"),
            ])
            .build();

        let dump = document.to_string();
        assert!(dump.starts_with("Option list (3 options)\nwidth=100\narcgradient=5\nhscale=1\n"));
    }

    #[test]
    fn test_attributes_attach_to_nodes() {
        let document = DocumentBuilder::new()
            .entity_with_attributes(
                "db",
                vec![
                    Attribute::new(AttribType::Label, "Database"),
                    Attribute::new(AttribType::Url, "http://db"),
                ],
            )
            .arc_with_attributes(
                ArcType::Note,
                ArcEndpoints::looped("db"),
                9,
                Attribute::new(AttribType::TextBgColour, "yellow"),
            )
            .build();

        assert_eq!(document.entity_attribute_at(0, AttribType::Label), Some("Database"));
        assert_eq!(document.entity_attribute_at(0, AttribType::Url), Some("http://db"));
        assert_eq!(document.arcs().attribute(AttribType::TextBgColour), Some("yellow"));
    }

    #[test]
    #[should_panic(expected = "must not have endpoints")]
    fn test_discontinuity_with_endpoints_panics() {
        let _ = DocumentBuilder::new().arc(
            ArcType::Discontinuity,
            ArcEndpoints::between("a", "b"),
            1,
        );
    }
}
