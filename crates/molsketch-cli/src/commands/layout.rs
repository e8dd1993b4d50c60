use super::check::log_issues;
use super::write_output;
use crate::cli::LayoutArgs;
use crate::config::PartialDrawingConfig;
use crate::error::{CliError, Result};
use molsketch::workflows::layout;
use tracing::info;

pub fn run(args: LayoutArgs) -> Result<()> {
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

    let json = if args.compact {
        serde_json::to_string(&layout)
    } else {
        serde_json::to_string_pretty(&layout)
    }
    .map_err(|e| CliError::Other(e.into()))?;

    write_output(args.output.as_deref(), &json)
}
