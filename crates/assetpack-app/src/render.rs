//! Render use cases over in-memory outcomes.

use assetpack_export::ExportOutcome;

use crate::report::to_renderable;

/// Console text for every outcome, in order.
pub fn render_text(outcomes: &[ExportOutcome]) -> String {
    outcomes
        .iter()
        .map(|o| assetpack_render::format_outcome(&to_renderable(o)))
        .collect()
}

pub fn render_markdown(outcomes: &[ExportOutcome]) -> String {
    let renderable: Vec<_> = outcomes.iter().map(to_renderable).collect();
    assetpack_render::render_markdown(&renderable)
}
