//! MSC - the message sequence chart document model.
//!
//! This crate is the entry point for the two sides of the document model:
//! a parser assembling a [`Document`] through [`DocumentBuilder`] (or the raw
//! list types re-exported from `msc_core`), and a layout stage reading it
//! through cursors, lookups and [`resolve::RenderOptions`].
//!
//! # Examples
//!
//! ```
//! use msc::{
//!     DocumentBuilder,
//!     arc::{ArcEndpoints, ArcType},
//!     attribute::{AttribType, Attribute},
//!     config::AppConfig,
//!     option::OptType,
//!     resolve::RenderOptions,
//! };
//!
//! let document = DocumentBuilder::new()
//!     .option(OptType::HScale, "2")
//!     .entity("A")
//!     .entity("B")
//!     .arc_with_attributes(
//!         ArcType::Message,
//!         ArcEndpoints::between("A", "B"),
//!         1,
//!         Attribute::new(AttribType::Label, "hello"),
//!     )
//!     .build();
//!
//! let config = AppConfig::default();
//! let options = RenderOptions::resolve(&document, config.defaults()).unwrap();
//! assert_eq!(options.hscale(), 2.0);
//! assert_eq!(document.arcs().attribute(AttribType::Label), Some("hello"));
//! ```

pub mod config;
pub mod resolve;

mod builder;
mod error;

pub use msc_core::{arc, attribute, color, document, draw, entity, iter, option};

pub use builder::DocumentBuilder;
pub use document::{Document, Teardown};
pub use error::MscError;
