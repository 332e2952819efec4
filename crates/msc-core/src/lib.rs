//! MSC Core Types and Definitions
//!
//! This crate provides the in-memory intermediate representation of a message
//! sequence chart. A parser builds it by allocating nodes and linking them into
//! lists; a layout stage reads the finished [`document::Document`] through the
//! cursor and lookup API. It includes:
//!
//! - **Attributes**: Typed annotations on entities and arcs ([`attribute`] module)
//! - **Options**: Document-level rendering settings ([`option`] module)
//! - **Entities**: Named participants of the chart ([`entity`] module)
//! - **Arcs**: Messages and markers between entities ([`arc`] module)
//! - **Document**: The assembled, read-only aggregate ([`document`] module)
//! - **Cursors**: Forward-only read views over a document ([`iter`] module)
//! - **Colors** and **Draw**: The drawing-backend capability a layout stage
//!   paints through ([`color`] and [`draw`] modules)
//!
//! # Example
//!
//! ```
//! use msc_core::{
//!     arc::{Arc, ArcEndpoints, ArcList, ArcType},
//!     attribute::{AttribType, Attribute},
//!     document::Document,
//!     entity::{Entity, EntityList},
//!     option::OptionList,
//! };
//!
//! let mut entities = EntityList::new();
//! entities.push(Entity::new("A"));
//! entities.push(Entity::new("B"));
//!
//! let mut arc = Arc::new(
//!     ArcType::Message,
//!     ArcEndpoints::between("A", "B"),
//!     1,
//! );
//! arc.link_attributes(vec![Attribute::new(AttribType::Label, "hello")]);
//!
//! let mut arcs = ArcList::new();
//! arcs.push(arc);
//!
//! let document = Document::new(OptionList::new(), entities, arcs);
//! assert_eq!(document.entity_count(), 2);
//! assert_eq!(document.arcs().attribute(AttribType::Label), Some("hello"));
//! ```

pub mod arc;
pub mod attribute;
pub mod color;
pub mod document;
pub mod draw;
pub mod entity;
pub mod error;
pub mod iter;
pub mod option;
