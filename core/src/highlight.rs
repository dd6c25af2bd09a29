//! Transient visual emphasis for a single element.

use crate::config::HighlightConfig;
use crate::dom::Document;
use crate::error::HighlightError;
use crate::scheduler::Scheduler;

pub const BORDER_PROPERTY: &str = "border";
pub const BACKGROUND_PROPERTY: &str = "background-color";

pub struct Highlighter<D, S> {
    document: D,
    scheduler: S,
    config: HighlightConfig,
}

impl<D: Document, S: Scheduler> Highlighter<D, S> {
    pub fn new(document: D, scheduler: S) -> Self {
        Self::with_config(document, scheduler, HighlightConfig::default())
    }

    pub fn with_config(document: D, scheduler: S, config: HighlightConfig) -> Self {
        Self {
            document,
            scheduler,
            config,
        }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Style the element with `id`, then clear both properties once the
    /// configured delay has elapsed.
    ///
    /// The reversal always fires and always clears, whatever else touched the
    /// element in between. Overlapping calls each schedule their own reversal.
    pub fn highlight(&self, id: &str) -> Result<(), HighlightError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| HighlightError::ElementNotFound { id: id.to_string() })?;

        element.set_style(BORDER_PROPERTY, &self.config.border);
        element.set_style(BACKGROUND_PROPERTY, &self.config.background);

        let delay = self.config.delay();
        log::trace!("highlighted '{id}', reverting in {delay:?}");
        self.scheduler.schedule(
            delay,
            Box::new(move || {
                element.set_style(BORDER_PROPERTY, "");
                element.set_style(BACKGROUND_PROPERTY, "");
            }),
        );
        Ok(())
    }
}
