//! Content emitter: captured span content to markup fragment.
//!
//! Thin adapter between the scanners and the typesetting engine. The
//! engine is always invoked permissively; a failure here is reported to
//! the log and handed back to the caller, which decides how much of the
//! match to unwind (the block scanner aborts entirely, the inline
//! scanner keeps the delimiters consumed).

use crate::engine::{OutputFormat, RenderError, RenderOptions, Typesetter};

/// Converts raw span content into a markup fragment via the engine.
pub struct Emitter<'e> {
    engine: &'e dyn Typesetter,
    format: OutputFormat,
}

impl<'e> Emitter<'e> {
    /// Create an emitter producing HTML fragments.
    pub fn new(engine: &'e dyn Typesetter) -> Self {
        Self {
            engine,
            format: OutputFormat::Html,
        }
    }

    /// Create an emitter producing fragments in the given format.
    pub fn with_format(engine: &'e dyn Typesetter, format: OutputFormat) -> Self {
        Self { engine, format }
    }

    /// Render raw content in the given mode.
    ///
    /// Callers must not have mutated parser state before this call
    /// returns `Ok`; emission is the last step of a match.
    pub fn render(&self, raw: &str, display_mode: bool) -> Result<String, RenderError> {
        let options = RenderOptions {
            display_mode,
            permissive: true,
            format: self.format,
        };
        self.engine.render_to_string(raw, &options).inspect_err(|err| {
            log::warn!(
                "math render failed for {} span: {err}",
                if display_mode { "display" } else { "inline" }
            );
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FencedMarkup;

    struct FailingEngine;

    impl Typesetter for FailingEngine {
        fn render_to_string(
            &self,
            _source: &str,
            _options: &RenderOptions,
        ) -> Result<String, RenderError> {
            Err(RenderError::new("out of memory"))
        }
    }

    #[test]
    fn test_render_success() {
        let emitter = Emitter::new(&FencedMarkup);
        let markup = emitter.render("x", false).unwrap();
        assert!(markup.contains("math-inline"), "Got: {markup}");
    }

    #[test]
    fn test_render_failure_is_returned() {
        let emitter = Emitter::new(&FailingEngine);
        let err = emitter.render("x", true).unwrap_err();
        assert_eq!(err.message(), "out of memory");
    }

    #[test]
    fn test_format_is_forwarded() {
        let emitter = Emitter::with_format(&FencedMarkup, OutputFormat::MathMl);
        let markup = emitter.render("x", false).unwrap();
        assert!(markup.starts_with("<math"), "Got: {markup}");
    }
}
