use super::check::log_issues;
use super::write_output;
use crate::cli::RenderArgs;
use crate::config::PartialDrawingConfig;
use crate::error::Result;
use molsketch::workflows::{layout, svg::render_svg};
use tracing::info;

pub fn run(args: RenderArgs) -> Result<()> {
    let partial_config = PartialDrawingConfig::load(args.drawing.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args.drawing)?;

    let (structure, layout) = layout::run(
        &args.input.input,
        args.input.structure_id.as_deref(),
        &config.visibility,
        &config.layout,
    )?;
    log_issues(&structure);

    let svg = render_svg(&layout, &config.style);
    info!(
        "Rendered '{}' ({} atoms, {} bonds, viewBox {}).",
        layout.structure_id,
        layout.atoms.len(),
        layout.bonds.len(),
        layout.viewport.view_box()
    );
    write_output(args.output.as_deref(), &svg)
}
