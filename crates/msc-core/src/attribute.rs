//! Typed annotations attached to entities and arcs.
//!
//! An [`AttributeList`] is owned by exactly one [`Entity`](crate::entity::Entity)
//! or [`Arc`](crate::arc::Arc). Several attributes of the same kind may coexist;
//! lookups return the one nearest the front of the list.
//!
//! # Ordering
//!
//! A parser attaches attributes in batches, one batch per bracketed attribute
//! block in the source. [`AttributeList::link`] puts each new batch in front of
//! the attributes already attached while keeping the batch's own order, so the
//! final order is: last batch first, each batch in source order.
//!
//! ```
//! use msc_core::attribute::{AttribType, Attribute, AttributeList};
//!
//! let mut attrs = AttributeList::new();
//! attrs.link(vec![Attribute::new(AttribType::Label, "first")]);
//! attrs.link(vec![
//!     Attribute::new(AttribType::Label, "second"),
//!     Attribute::new(AttribType::Url, "http://example.com"),
//! ]);
//!
//! assert_eq!(attrs.find(AttribType::Label), Some("second"));
//! ```

use std::{fmt, str::FromStr};

/// The kind of an [`Attribute`].
///
/// The names match the attribute keywords of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttribType {
    Label,
    Url,
    Id,
    IdUrl,
    LineColour,
    TextColour,
    TextBgColour,
    ArcLineColour,
    ArcTextColour,
    ArcTextBgColour,
    NoArrows,
    BiArrows,
    ArcSkip,
}

impl AttribType {
    /// Every attribute kind, in declaration order.
    pub const ALL: [AttribType; 13] = [
        Self::Label,
        Self::Url,
        Self::Id,
        Self::IdUrl,
        Self::LineColour,
        Self::TextColour,
        Self::TextBgColour,
        Self::ArcLineColour,
        Self::ArcTextColour,
        Self::ArcTextBgColour,
        Self::NoArrows,
        Self::BiArrows,
        Self::ArcSkip,
    ];

    /// Returns the keyword for this attribute kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Url => "url",
            Self::Id => "id",
            Self::IdUrl => "idurl",
            Self::LineColour => "linecolour",
            Self::TextColour => "textcolour",
            Self::TextBgColour => "textbgcolour",
            Self::ArcLineColour => "arclinecolour",
            Self::ArcTextColour => "arctextcolour",
            Self::ArcTextBgColour => "arctextbgcolour",
            Self::NoArrows => "noarrows",
            Self::BiArrows => "biarrows",
            Self::ArcSkip => "arcskip",
        }
    }

    /// Returns `true` for the kinds whose value is a colour string.
    pub fn is_colour(self) -> bool {
        matches!(
            self,
            Self::LineColour
                | Self::TextColour
                | Self::TextBgColour
                | Self::ArcLineColour
                | Self::ArcTextColour
                | Self::ArcTextBgColour
        )
    }
}

impl fmt::Display for AttribType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AttribType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        // Accept the American spellings alongside the keywords
        let normalized = lower.replace("color", "colour");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or("Unknown attribute type")
    }
}

/// A single typed key/value annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    kind: AttribType,
    value: String,
}

impl Attribute {
    /// Create an attribute, taking ownership of its value.
    pub fn new(kind: AttribType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Get the attribute kind.
    pub fn kind(&self) -> AttribType {
        self.kind
    }

    /// Borrow the attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.kind, self.value)
    }
}

/// An ordered sequence of [`Attribute`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    attributes: Vec<Attribute>,
}

impl AttributeList {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single attribute at the back of the list.
    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Link a batch of attributes in front of the existing ones.
    ///
    /// The batch keeps its internal order. Linking an empty batch is a no-op.
    pub fn link(&mut self, batch: impl Into<AttributeList>) {
        let batch = batch.into();
        self.attributes.splice(0..0, batch.attributes);
    }

    /// Find the first attribute of the given kind.
    ///
    /// Returns `None` when no attribute of that kind is attached; callers
    /// decide whether absence matters.
    pub fn find(&self, kind: AttribType) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.kind == kind)
            .map(Attribute::value)
    }

    /// Iterate over the attributes in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Number of attributes in the list.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if no attribute is attached.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<Vec<Attribute>> for AttributeList {
    fn from(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }
}

impl From<Attribute> for AttributeList {
    fn from(attribute: Attribute) -> Self {
        Self {
            attributes: vec![attribute],
        }
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attr in &self.attributes {
            writeln!(f, "  {attr}")?;
        }
        Ok(())
    }
}
