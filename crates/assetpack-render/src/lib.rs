//! Human-readable renderings of export outcomes (console text, Markdown).
//!
//! Nothing here is a machine contract; the JSON receipt is.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableEntry, RenderableOutcome};
pub use text::format_outcome;
