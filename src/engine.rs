//! Typesetting engine interface.
//!
//! The pipeline never interprets math notation itself; captured span
//! content goes to a [`Typesetter`] and the returned markup is carried
//! through the token stream opaquely. The trait is the error-conversion
//! boundary: engine-internal failures surface as [`RenderError`], never
//! as panics or engine-specific types.

use thiserror::Error;

/// Engine-internal fault while rendering a span.
///
/// Rendering is always requested in permissive mode, so this indicates
/// a fault in the engine itself (resource exhaustion, internal bug),
/// not malformed notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("typesetting engine fault: {message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    /// Create an error carrying the engine's fault description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The engine's fault description.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Output markup format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML fragment.
    Html,
    /// MathML fragment.
    MathMl,
}

/// Options for one render call.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Render as a standalone display block rather than in-line.
    pub display_mode: bool,
    /// Prefer degraded-but-present output over failing.
    pub permissive: bool,
    /// Markup format to produce.
    pub format: OutputFormat,
}

impl RenderOptions {
    /// Permissive HTML options for the given mode.
    pub fn permissive(display_mode: bool) -> Self {
        Self {
            display_mode,
            permissive: true,
            format: OutputFormat::Html,
        }
    }
}

/// External typesetting engine: raw notation in, markup fragment out.
///
/// Implementations are synchronous and side-effect-free beyond the
/// returned value. They may fail even with `permissive` set, but only
/// for engine-internal faults.
pub trait Typesetter {
    /// Convert raw notation text to a markup string.
    fn render_to_string(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError>;
}

/// Built-in engine producing fenced-code style markup.
///
/// Emits `<code class="language-math math-inline">…</code>` (or
/// `math-display`) with the source HTML-escaped, so documents render
/// usefully without an external TeX engine and downstream highlighters
/// can pick the span up by class. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct FencedMarkup;

impl Typesetter for FencedMarkup {
    fn render_to_string(&self, source: &str, options: &RenderOptions) -> Result<String, RenderError> {
        // Newlines inside a span collapse to spaces in the output.
        let source = source.replace('\n', " ");
        let escaped = html_escape::encode_text(&source);
        Ok(match options.format {
            OutputFormat::Html => {
                let class = if options.display_mode {
                    "language-math math-display"
                } else {
                    "language-math math-inline"
                };
                format!("<code class=\"{class}\">{escaped}</code>")
            }
            OutputFormat::MathMl => {
                let display = if options.display_mode { "block" } else { "inline" };
                format!(
                    "<math display=\"{display}\"><semantics><annotation encoding=\"application/x-tex\">{escaped}</annotation></semantics></math>"
                )
            }
        })
    }
}
