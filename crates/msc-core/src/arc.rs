//! Messages, boxes and markers between entities.
//!
//! An [`Arc`] relates a source and a destination entity, or stands alone as a
//! marker (discontinuity, divider, vertical space, parallel placeholder).
//! Endpoints are modelled by [`ArcEndpoints`] so that a self-referencing arc
//! owns a single string for both ends.
//!
//! [`ArcList`] keeps arcs in input order and maintains the derived parallel
//! count consumed by layout.

use std::fmt;

use crate::attribute::{AttribType, AttributeList};

/// The kind of an [`Arc`].
///
/// [`Display`](fmt::Display) yields the source-language token for the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcType {
    /// Plain message `->`
    Message,
    /// Method call `=>`
    Method,
    /// Method return `>>`
    Return,
    /// Callback `=>>`
    Callback,
    /// Double line `:>`
    Double,
    /// Discontinuity in the timeline `...`; never has endpoints
    Discontinuity,
    /// Horizontal divider `---`
    Divider,
    /// Extra vertical space `|||`
    Space,
    /// Placeholder marking the following arc as concurrent with the previous one
    Parallel,
    /// Rectangular box `box`
    Box,
    /// Angular box `abox`
    AngularBox,
    /// Rounded box `rbox`
    RoundedBox,
    /// Note box `note`
    Note,
    /// Lost message `-x`
    Loss,
    /// Broadcast message `->*`
    Broadcast,
}

impl ArcType {
    /// Returns `true` for the kinds drawn as a box spanning entities.
    pub fn is_box(self) -> bool {
        matches!(
            self,
            Self::Box | Self::AngularBox | Self::RoundedBox | Self::Note
        )
    }

    /// Returns `true` for the kinds that are markers rather than messages.
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            Self::Discontinuity | Self::Divider | Self::Space | Self::Parallel
        )
    }
}

impl fmt::Display for ArcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Message => "->",
            Self::Method => "=>",
            Self::Return => ">>",
            Self::Callback => "=>>",
            Self::Double => ":>",
            Self::Discontinuity => "...",
            Self::Divider => "---",
            Self::Space => "|||",
            Self::Parallel => ",",
            Self::Box => "box",
            Self::AngularBox => "abox",
            Self::RoundedBox => "rbox",
            Self::Note => "note",
            Self::Loss => "-x",
            Self::Broadcast => "->*",
        };
        write!(f, "{token}")
    }
}

/// The entities an [`Arc`] connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArcEndpoints {
    /// A standalone marker with neither source nor destination.
    None,
    /// Source and destination are different entities.
    Distinct { src: String, dst: String },
    /// Source and destination are the same entity, held once.
    SelfReferencing(String),
}

impl ArcEndpoints {
    /// Endpoints from `src` to `dst`.
    ///
    /// Equal labels produce [`ArcEndpoints::SelfReferencing`].
    pub fn between(src: impl Into<String>, dst: impl Into<String>) -> Self {
        let src = src.into();
        let dst = dst.into();
        if src == dst {
            Self::SelfReferencing(src)
        } else {
            Self::Distinct { src, dst }
        }
    }

    /// Endpoints of an arc from `entity` back to itself.
    pub fn looped(entity: impl Into<String>) -> Self {
        Self::SelfReferencing(entity.into())
    }

    /// Endpoints from optional source and destination labels, as a parser
    /// produces them.
    ///
    /// # Panics
    ///
    /// Panics if exactly one of `src` and `dst` is present.
    pub fn from_parts(src: Option<String>, dst: Option<String>) -> Self {
        match (src, dst) {
            (None, None) => Self::None,
            (Some(src), Some(dst)) => Self::between(src, dst),
            (src, dst) => panic!(
                "arc endpoints must both be present or both be absent (src: {src:?}, dst: {dst:?})"
            ),
        }
    }

    /// Borrow the source label, if any.
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Distinct { src, .. } => Some(src),
            Self::SelfReferencing(entity) => Some(entity),
        }
    }

    /// Borrow the destination label, if any.
    pub fn dest(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Distinct { dst, .. } => Some(dst),
            Self::SelfReferencing(entity) => Some(entity),
        }
    }

    /// Number of distinct strings these endpoints own.
    pub fn owned_strings(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Distinct { .. } => 2,
            Self::SelfReferencing(_) => 1,
        }
    }
}

/// A relation between two entities, or a standalone marker, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc {
    kind: ArcType,
    endpoints: ArcEndpoints,
    input_line: u32,
    attributes: AttributeList,
}

impl Arc {
    /// Create an arc with no attributes.
    ///
    /// `input_line` is the source line the arc was parsed from, kept for
    /// diagnostics.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is [`ArcType::Discontinuity`] and `endpoints` is not
    /// [`ArcEndpoints::None`].
    pub fn new(kind: ArcType, endpoints: ArcEndpoints, input_line: u32) -> Self {
        assert!(
            kind != ArcType::Discontinuity || endpoints == ArcEndpoints::None,
            "discontinuity arc on line {input_line} must not have endpoints, got {endpoints:?}"
        );

        Self {
            kind,
            endpoints,
            input_line,
            attributes: AttributeList::new(),
        }
    }

    /// Get the arc kind.
    pub fn kind(&self) -> ArcType {
        self.kind
    }

    /// Borrow the arc endpoints.
    pub fn endpoints(&self) -> &ArcEndpoints {
        &self.endpoints
    }

    /// Borrow the source entity label, if any.
    pub fn source(&self) -> Option<&str> {
        self.endpoints.source()
    }

    /// Borrow the destination entity label, if any.
    pub fn dest(&self) -> Option<&str> {
        self.endpoints.dest()
    }

    /// Get the source line this arc was parsed from.
    pub fn input_line(&self) -> u32 {
        self.input_line
    }

    /// Borrow the attributes attached to this arc.
    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// Attach a batch of attributes in front of the existing ones.
    pub fn link_attributes(&mut self, batch: impl Into<AttributeList>) {
        self.attributes.link(batch);
    }

    /// Look up an attribute by kind. Absent attributes return `None`.
    pub fn attribute(&self, kind: AttribType) -> Option<&str> {
        self.attributes.find(kind)
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let src = self.source().unwrap_or("(none)");
        let dst = self.dest().unwrap_or("(none)");
        writeln!(f, "'{src}' {} '{dst}'", self.kind)?;
        write!(f, "{}", self.attributes)
    }
}

/// An ordered sequence of [`Arc`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcList {
    arcs: Vec<Arc>,
    parallel: usize,
}

impl ArcList {
    /// Create an empty arc list. No storage is allocated until the first push.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arc at the back of the list.
    ///
    /// A [`ArcType::Parallel`] placeholder adds two to
    /// [`parallel_count`](Self::parallel_count): one for itself and one for
    /// the arc it marks as concurrent.
    pub fn push(&mut self, arc: Arc) {
        if arc.kind == ArcType::Parallel {
            self.parallel += 2;
        }
        self.arcs.push(arc);
    }

    /// Number of arcs in the list, placeholders included.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns `true` if the list holds no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Derived parallel-arc count used by layout.
    pub fn parallel_count(&self) -> usize {
        self.parallel
    }

    /// Borrow the arc at `index`.
    pub fn get(&self, index: usize) -> Option<&Arc> {
        self.arcs.get(index)
    }

    /// Iterate over the arcs in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc> {
        self.arcs.iter()
    }

    pub(crate) fn as_slice(&self) -> &[Arc] {
        &self.arcs
    }
}

impl FromIterator<Arc> for ArcList {
    fn from_iter<I: IntoIterator<Item = Arc>>(iter: I) -> Self {
        let mut list = Self::new();
        for arc in iter {
            list.push(arc);
        }
        list
    }
}

impl<'a> IntoIterator for &'a ArcList {
    type Item = &'a Arc;
    type IntoIter = std::slice::Iter<'a, Arc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ArcList {
    type Item = Arc;
    type IntoIter = std::vec::IntoIter<Arc>;

    fn into_iter(self) -> Self::IntoIter {
        self.arcs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;

    fn message(src: &str, dst: &str) -> Arc {
        Arc::new(ArcType::Message, ArcEndpoints::between(src, dst), 1)
    }

    fn marker(kind: ArcType) -> Arc {
        Arc::new(kind, ArcEndpoints::None, 1)
    }

    #[test]
    fn test_between_distinct_and_self() {
        let distinct = ArcEndpoints::between("a", "b");
        assert_eq!(distinct.source(), Some("a"));
        assert_eq!(distinct.dest(), Some("b"));
        assert_eq!(distinct.owned_strings(), 2);

        let looped = ArcEndpoints::between("a", "a");
        assert_eq!(looped, ArcEndpoints::looped("a"));
        assert_eq!(looped.source(), Some("a"));
        assert_eq!(looped.dest(), Some("a"));
        assert_eq!(looped.owned_strings(), 1);
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(ArcEndpoints::from_parts(None, None), ArcEndpoints::None);
        assert_eq!(
            ArcEndpoints::from_parts(Some("x".into()), Some("y".into())),
            ArcEndpoints::between("x", "y")
        );
    }

    #[test]
    #[should_panic(expected = "both be present or both be absent")]
    fn test_from_parts_one_sided_panics() {
        ArcEndpoints::from_parts(Some("x".into()), None);
    }

    #[test]
    #[should_panic(expected = "discontinuity arc on line 7 must not have endpoints")]
    fn test_discontinuity_with_endpoints_panics() {
        Arc::new(ArcType::Discontinuity, ArcEndpoints::between("a", "b"), 7);
    }

    #[test]
    fn test_discontinuity_without_endpoints() {
        let arc = marker(ArcType::Discontinuity);
        assert_eq!(arc.source(), None);
        assert_eq!(arc.dest(), None);
    }

    #[test]
    fn test_arc_accessors() {
        let mut arc = Arc::new(ArcType::Method, ArcEndpoints::between("a", "b"), 12);
        arc.link_attributes(Attribute::new(AttribType::Label, "call()"));

        assert_eq!(arc.kind(), ArcType::Method);
        assert_eq!(arc.input_line(), 12);
        assert_eq!(arc.attribute(AttribType::Label), Some("call()"));
        assert_eq!(arc.attribute(AttribType::Url), None);
    }

    #[test]
    fn test_arc_label_has_no_fallback() {
        let arc = message("a", "b");
        assert_eq!(arc.attribute(AttribType::Label), None);
    }

    #[test]
    fn test_parallel_count() {
        let mut list = ArcList::new();
        list.push(message("a", "b"));
        list.push(marker(ArcType::Parallel));
        list.push(message("b", "a"));
        list.push(marker(ArcType::Parallel));
        list.push(message("a", "a"));

        assert_eq!(list.len(), 5);
        assert_eq!(list.parallel_count(), 4);
    }

    #[test]
    fn test_from_iter_counts_parallel() {
        let list: ArcList = [marker(ArcType::Parallel), message("a", "b")]
            .into_iter()
            .collect();
        assert_eq!(list.parallel_count(), 2);
        assert_eq!(list.iter().count(), 2);
    }

    #[test]
    fn test_arc_type_classification() {
        assert!(ArcType::RoundedBox.is_box());
        assert!(!ArcType::Message.is_box());
        assert!(ArcType::Parallel.is_marker());
        assert!(!ArcType::Broadcast.is_marker());
    }

    #[test]
    fn test_display() {
        let mut arc = message("a", "b");
        arc.link_attributes(Attribute::new(AttribType::Label, "hi"));
        assert_eq!(arc.to_string(), "'a' -> 'b'\n  label = hi\n");

        assert_eq!(marker(ArcType::Divider).to_string(), "'(none)' --- '(none)'\n");

        let boxed = Arc::new(ArcType::RoundedBox, ArcEndpoints::between("a", "c"), 4);
        assert_eq!(boxed.to_string(), "'a' rbox 'c'\n");
    }
}
