//! Typed rendering settings resolved from a document and configured defaults.

use log::debug;

use msc_core::{document::Document, option::OptType};

use crate::{MscError, config::OptionDefaults};

/// The document options a layout stage consumes, each resolved to a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    hscale: f32,
    width: Option<f32>,
    arc_gradient: f32,
    word_wrap_arcs: bool,
}

impl RenderOptions {
    /// Resolve every option of `document`, falling back to `defaults` for
    /// options the document does not set.
    ///
    /// Float options that parse to zero count as unset, as
    /// [`Document::option_as_float`] reports them absent.
    ///
    /// # Errors
    ///
    /// Returns [`MscError::InvalidOption`] when `wordwraparcs` is set to an
    /// unrecognised value. The default is not substituted in that case.
    pub fn resolve(document: &Document, defaults: &OptionDefaults) -> Result<Self, MscError> {
        let options = Self {
            hscale: document
                .option_as_float(OptType::HScale)
                .unwrap_or(defaults.hscale()),
            width: document.option_as_float(OptType::Width).or(defaults.width()),
            arc_gradient: document
                .option_as_float(OptType::ArcGradient)
                .unwrap_or(defaults.arc_gradient()),
            word_wrap_arcs: document
                .option_as_bool(OptType::WordWrapArcs)?
                .unwrap_or(defaults.word_wrap_arcs()),
        };

        debug!(options:?; "Render options resolved");
        Ok(options)
    }

    pub fn hscale(&self) -> f32 {
        self.hscale
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn arc_gradient(&self) -> f32 {
        self.arc_gradient
    }

    pub fn word_wrap_arcs(&self) -> bool {
        self.word_wrap_arcs
    }
}
